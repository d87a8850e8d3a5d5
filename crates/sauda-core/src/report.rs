//! # Report Aggregator
//!
//! Grouping and totalling of sales and expenses for the daily/monthly
//! reports, plus the calendar-day filtering shared by every history view.
//!
//! `profit = sales.total − cost − expenses.total`, where cost is the
//! cost-price value of the product-backed lines sold. The backend's
//! report endpoints return the same shape; the expense screen and the
//! drawer screen re-derive their slices client-side with the functions
//! here on every render.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::{Expense, Product, Sale, SaleChannel};

// =============================================================================
// Aggregates
// =============================================================================

/// Sales totals split by channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesBreakdown {
    pub total: Money,
    pub count: usize,
    pub retail: Money,
    pub wholesale: Money,
}

impl SalesBreakdown {
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut breakdown = SalesBreakdown {
            count: sales.len(),
            ..SalesBreakdown::default()
        };
        for sale in sales {
            breakdown.total += sale.total;
            match sale.sale_type {
                SaleChannel::Retail => breakdown.retail += sale.total,
                SaleChannel::Wholesale => breakdown.wholesale += sale.total,
            }
        }
        breakdown
    }
}

/// Expense total plus per-category sums.
///
/// `by_category` holds one entry per distinct category name encountered;
/// insertion order is irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub total: Money,
    pub by_category: BTreeMap<String, Money>,
}

impl ExpenseBreakdown {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut breakdown = ExpenseBreakdown::default();
        for expense in expenses {
            breakdown.total += expense.amount;
            *breakdown
                .by_category
                .entry(expense.category_name.clone())
                .or_insert_with(Money::zero) += expense.amount;
        }
        breakdown
    }
}

/// The report body shared by the daily and monthly endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub sales: SalesBreakdown,
    pub expenses: ExpenseBreakdown,
    /// Cost-price value of the product lines sold in the period.
    pub cost: Money,
    /// `sales.total − cost − expenses.total`; negative means a loss.
    pub profit: Money,
}

impl ReportSummary {
    /// Builds a summary from period-filtered lists and a known cost.
    pub fn build(sales: &[Sale], expenses: &[Expense], cost: Money) -> Self {
        let sales = SalesBreakdown::from_sales(sales);
        let expenses = ExpenseBreakdown::from_expenses(expenses);
        let profit = sales.total - cost - expenses.total;
        ReportSummary {
            sales,
            expenses,
            cost,
            profit,
        }
    }

    /// Whether the headline reads Profit rather than Loss.
    pub fn is_profit(&self) -> bool {
        !self.profit.is_negative()
    }
}

/// Cost-price value of the product-backed lines across the given sales.
///
/// Set lines carry no product id and contribute nothing, matching the
/// backend's costing.
pub fn cost_of_sales(sales: &[Sale], products: &[Product]) -> Money {
    let mut cost = Money::zero();
    for sale in sales {
        for line in &sale.items {
            if !line.kind.is_product() {
                continue;
            }
            if let Some(product) = products.iter().find(|p| p.id == line.kind.id()) {
                cost += product.cost_price.multiply_quantity(line.quantity);
            }
        }
    }
    cost
}

// =============================================================================
// Report Endpoint DTOs
// =============================================================================

/// Response of `GET /api/reports/daily?date=YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub summary: ReportSummary,
    /// The sales that matched the day.
    pub sales_list: Vec<Sale>,
    /// The expenses that matched the day.
    pub expenses_list: Vec<Expense>,
}

/// Response of `GET /api/reports/monthly?year=&month=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    #[serde(flatten)]
    pub summary: ReportSummary,
}

// =============================================================================
// Calendar-Day Filtering
// =============================================================================

/// Whether a timestamp falls on the given calendar day in `tz`.
///
/// Date-filtered lists match on the calendar date only, ignoring the
/// time-of-day component. The timezone is explicit: the dashboard passes
/// the local zone, so an expense stamped `2024-03-05T18:00:00Z` matches
/// a selected date of `2024-03-05` wherever that instant is still the
/// 5th locally.
pub fn matches_calendar_day<Tz: TimeZone>(ts: DateTime<Utc>, day: NaiveDate, tz: &Tz) -> bool {
    ts.with_timezone(tz).date_naive() == day
}

/// Filters `items` to those whose date falls on `day` (all items when no
/// day is selected). Shared by the expense, drawer, invoice and returns
/// views.
pub fn filter_by_day<'a, T, Tz, F>(
    items: &'a [T],
    date_of: F,
    day: Option<NaiveDate>,
    tz: &Tz,
) -> Vec<&'a T>
where
    Tz: TimeZone,
    F: Fn(&T) -> DateTime<Utc>,
{
    items
        .iter()
        .filter(|item| day.map_or(true, |d| matches_calendar_day(date_of(item), d, tz)))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CartLine, Discount, LineKind, PaymentMethod, PaymentType, Unit,
    };
    use chrono::FixedOffset;
    use serde_json::json;

    fn sale(channel: SaleChannel, total: i64, items: Vec<CartLine>) -> Sale {
        Sale {
            id: format!("sale-{}", total),
            sale_type: channel,
            customer_name: None,
            customer_phone: None,
            items,
            subtotal: Money::from_paise(total),
            discount: Discount::NONE,
            discount_amount: Money::zero(),
            total: Money::from_paise(total),
            payment_method: PaymentMethod::Cash,
            payment_type: PaymentType::Full,
            cash_received: None,
            gpay_return: None,
            amount_paid: None,
            balance_amount: None,
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    fn expense(category: &str, paise: i64, date: DateTime<Utc>) -> Expense {
        Expense {
            id: format!("e-{}-{}", category, paise),
            category_id: "c".to_string(),
            category_name: category.to_string(),
            amount: Money::from_paise(paise),
            payment_source: PaymentMethod::Cash,
            description: None,
            date,
            created_at: date,
        }
    }

    fn product_line(product_id: &str, quantity: i64) -> CartLine {
        CartLine {
            kind: LineKind::Product {
                product_id: product_id.to_string(),
            },
            name: product_id.to_string(),
            quantity,
            unit_price: Money::from_paise(10000),
            total: Money::from_paise(10000 * quantity),
        }
    }

    #[test]
    fn test_sales_breakdown_by_channel() {
        let sales = vec![
            sale(SaleChannel::Retail, 30000, Vec::new()),
            sale(SaleChannel::Wholesale, 50000, Vec::new()),
            sale(SaleChannel::Retail, 20000, Vec::new()),
        ];

        let breakdown = SalesBreakdown::from_sales(&sales);
        assert_eq!(breakdown.total.paise(), 100000);
        assert_eq!(breakdown.count, 3);
        assert_eq!(breakdown.retail.paise(), 50000);
        assert_eq!(breakdown.wholesale.paise(), 50000);
    }

    #[test]
    fn test_expense_grouping_by_category_name() {
        let now = Utc::now();
        let expenses = vec![
            expense("Rent", 10000, now),
            expense("Tea", 500, now),
            expense("Rent", 2500, now),
        ];

        let breakdown = ExpenseBreakdown::from_expenses(&expenses);
        assert_eq!(breakdown.total.paise(), 13000);
        assert_eq!(breakdown.by_category.len(), 2);
        assert_eq!(breakdown.by_category["Rent"].paise(), 12500);
        assert_eq!(breakdown.by_category["Tea"].paise(), 500);
    }

    #[test]
    fn test_profit_formula() {
        // sales 1000, cost 600, expenses 150 -> profit 250
        let sales = vec![sale(SaleChannel::Retail, 100000, Vec::new())];
        let expenses = vec![expense("Rent", 15000, Utc::now())];

        let summary = ReportSummary::build(&sales, &expenses, Money::from_paise(60000));
        assert_eq!(summary.profit.paise(), 25000);
        assert!(summary.is_profit());
    }

    #[test]
    fn test_loss_is_flagged() {
        let sales = vec![sale(SaleChannel::Retail, 10000, Vec::new())];
        let summary = ReportSummary::build(&sales, &[], Money::from_paise(20000));
        assert_eq!(summary.profit.paise(), -10000);
        assert!(!summary.is_profit());
    }

    #[test]
    fn test_cost_of_sales_skips_set_lines() {
        let mut products = vec![crate::cart::doc_product()];
        products[0].id = "p-1".to_string();
        products[0].cost_price = Money::from_paise(6000);
        products[0].unit = Unit::Pieces;

        let set_line = CartLine {
            kind: LineKind::Set {
                set_id: "s-1".to_string(),
            },
            name: "Kit".to_string(),
            quantity: 4,
            unit_price: Money::from_paise(50000),
            total: Money::from_paise(200000),
        };
        let sales = vec![sale(
            SaleChannel::Retail,
            230000,
            vec![product_line("p-1", 3), set_line],
        )];

        // Only the product line costs: 3 x 60.00
        assert_eq!(cost_of_sales(&sales, &products).paise(), 18000);
    }

    #[test]
    fn test_cost_of_sales_ignores_unknown_products() {
        let sales = vec![sale(SaleChannel::Retail, 10000, vec![product_line("ghost", 1)])];
        assert_eq!(cost_of_sales(&sales, &[]), Money::zero());
    }

    #[test]
    fn test_matches_calendar_day_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();

        assert!(matches_calendar_day(evening, day, &Utc));
        assert!(matches_calendar_day(midnight, day, &Utc));
        assert!(!matches_calendar_day(
            Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap(),
            day,
            &Utc
        ));
    }

    #[test]
    fn test_matches_calendar_day_is_local() {
        // 20:00 UTC on the 5th is already the 6th at UTC+05:30
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 20, 0, 0).unwrap();

        assert!(matches_calendar_day(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
            &ist
        ));
        assert!(!matches_calendar_day(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            &ist
        ));
    }

    #[test]
    fn test_filter_by_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let expenses = vec![
            expense("Rent", 100, Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap()),
            expense("Tea", 200, Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap()),
        ];

        let matched = filter_by_day(&expenses, |e| e.date, Some(day), &Utc);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category_name, "Rent");

        // No selected day -> everything
        assert_eq!(filter_by_day(&expenses, |e| e.date, None, &Utc).len(), 2);
    }

    #[test]
    fn test_daily_report_parses_endpoint_shape() {
        let report: DailyReport = serde_json::from_value(json!({
            "date": "2024-03-05",
            "sales": { "total": 1000.0, "count": 2, "retail": 600.0, "wholesale": 400.0 },
            "expenses": { "total": 150.0, "by_category": { "Rent": 100.0, "Tea": 50.0 } },
            "cost": 600.0,
            "profit": 250.0,
            "sales_list": [],
            "expenses_list": []
        }))
        .unwrap();

        assert_eq!(report.summary.sales.total.paise(), 100000);
        assert_eq!(report.summary.expenses.by_category["Tea"].paise(), 5000);
        assert_eq!(report.summary.profit.paise(), 25000);
        assert!(report.summary.is_profit());
    }
}
