//! # Expense Endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sauda_core::money::Money;
use sauda_core::types::{Expense, PaymentMethod};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// The `POST /api/expenses` body.
///
/// The backend denormalizes the category name and defaults a missing
/// date to "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub category_id: String,
    pub amount: Money,
    /// Which balance the expense is paid from.
    pub payment_source: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Operations on `/api/expenses`.
#[derive(Debug, Clone, Copy)]
pub struct ExpensesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ExpensesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ExpensesApi { client }
    }

    pub async fn list(&self) -> ClientResult<Vec<Expense>> {
        self.client.get("/expenses").await
    }

    pub async fn create(&self, request: &ExpenseCreate) -> ClientResult<Expense> {
        self.client.post("/expenses", request).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("/expenses/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_create_wire_shape() {
        let request = ExpenseCreate {
            category_id: "cat-1".to_string(),
            amount: Money::from_paise(12550),
            payment_source: PaymentMethod::Gpay,
            description: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 5),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], 125.5);
        assert_eq!(value["payment_source"], "gpay");
        assert_eq!(value["date"], "2024-03-05");
        assert!(value.get("description").is_none());
    }
}
