//! # Expense Screen
//!
//! Expense categories and recorded expenses; the total and per-category
//! sums are re-derived client-side on every render.

use chrono::NaiveDate;
use tracing::{debug, info};

use sauda_client::{ApiClient, CategoryCreate, ExpenseCreate};
use sauda_core::report::{filter_by_day, ExpenseBreakdown};
use sauda_core::types::{Expense, ExpenseCategory};
use sauda_core::validation::{validate_amount, validate_name};

use crate::error::{AppError, AppResult};

/// Snapshot of the expense page.
#[derive(Debug)]
pub struct ExpenseScreen {
    pub categories: Vec<ExpenseCategory>,
    pub expenses: Vec<Expense>,
}

impl ExpenseScreen {
    /// Loads categories and expenses concurrently.
    pub async fn load(client: &ApiClient) -> AppResult<Self> {
        debug!("loading expense screen");
        let categories_api = client.expense_categories();
        let expenses_api = client.expenses();
        let (categories, expenses) = tokio::join!(
            categories_api.list(),
            expenses_api.list()
        );

        Ok(ExpenseScreen {
            categories: categories?,
            expenses: expenses?,
        })
    }

    /// Total and by-category sums over the loaded expenses.
    pub fn breakdown(&self) -> ExpenseBreakdown {
        ExpenseBreakdown::from_expenses(&self.expenses)
    }

    /// Expenses on one local calendar day (all when no day selected).
    pub fn on_day(&self, day: Option<NaiveDate>) -> Vec<&Expense> {
        filter_by_day(&self.expenses, |e| e.date, day, &chrono::Local)
    }

    /// Creates a category and reloads.
    pub async fn add_category(self, client: &ApiClient, name: &str) -> AppResult<Self> {
        validate_name("category name", name).map_err(sauda_core::CoreError::from)?;

        client
            .expense_categories()
            .create(&CategoryCreate {
                name: name.trim().to_string(),
            })
            .await?;
        info!(name = %name.trim(), "expense category created");

        Self::load(client).await
    }

    /// Records an expense and reloads.
    pub async fn add_expense(self, client: &ApiClient, request: ExpenseCreate) -> AppResult<Self> {
        if request.category_id.trim().is_empty() {
            return Err(AppError::validation("Category and amount are required"));
        }
        validate_amount("amount", request.amount).map_err(sauda_core::CoreError::from)?;

        let expense = client.expenses().create(&request).await?;
        info!(id = %expense.id, amount = %expense.amount, "expense recorded");

        Self::load(client).await
    }

    pub async fn remove_category(self, client: &ApiClient, id: &str) -> AppResult<Self> {
        client.expense_categories().delete(id).await?;
        Self::load(client).await
    }

    pub async fn remove_expense(self, client: &ApiClient, id: &str) -> AppResult<Self> {
        client.expenses().delete(id).await?;
        Self::load(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sauda_core::types::PaymentMethod;
    use sauda_core::Money;

    fn expense(category: &str, paise: i64) -> Expense {
        Expense {
            id: format!("e-{}", paise),
            category_id: "c".to_string(),
            category_name: category.to_string(),
            amount: Money::from_paise(paise),
            payment_source: PaymentMethod::Cash,
            description: None,
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_breakdown_groups_by_category() {
        let screen = ExpenseScreen {
            categories: Vec::new(),
            expenses: vec![
                expense("Rent", 10000),
                expense("Tea", 500),
                expense("Rent", 2500),
            ],
        };

        let breakdown = screen.breakdown();
        assert_eq!(breakdown.total.paise(), 13000);
        assert_eq!(breakdown.by_category["Rent"].paise(), 12500);
    }
}
