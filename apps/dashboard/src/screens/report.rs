//! # Report Screen
//!
//! Daily/monthly reports, the invoice and return histories with their
//! calendar-day filter, the outstanding credit sales list, and return
//! processing.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use sauda_client::ApiClient;
use sauda_core::refund::ReturnDraft;
use sauda_core::report::{filter_by_day, DailyReport, MonthlyReport};
use sauda_core::types::{PaymentMethod, Sale, SaleReturn};

use crate::error::{AppError, AppResult};

/// Snapshot of the reports page.
#[derive(Debug)]
pub struct ReportScreen {
    /// The day the daily report was loaded for.
    pub date: NaiveDate,
    pub daily: DailyReport,
    /// All sales, for the invoices tab.
    pub sales: Vec<Sale>,
    /// Credit sales with an outstanding balance.
    pub credit_sales: Vec<Sale>,
    pub returns: Vec<SaleReturn>,
}

impl ReportScreen {
    /// Loads the four independent data sets concurrently.
    pub async fn load(client: &ApiClient, date: NaiveDate) -> AppResult<Self> {
        debug!(%date, "loading report screen");
        let reports_api = client.reports();
        let sales_api = client.sales();
        let returns_api = client.returns();
        let (daily, sales, credit_sales, returns) = tokio::join!(
            reports_api.daily(date),
            sales_api.list(),
            sales_api.credit(),
            returns_api.list()
        );

        Ok(ReportScreen {
            date,
            daily: daily?,
            sales: sales?,
            credit_sales: credit_sales?,
            returns: returns?,
        })
    }

    /// Fetches a monthly report on demand; does not replace the snapshot.
    pub async fn monthly(client: &ApiClient, year: i32, month: u32) -> AppResult<MonthlyReport> {
        Ok(client.reports().monthly(year, month).await?)
    }

    /// Invoices on one local calendar day (all when no day selected).
    pub fn invoices(&self, day: Option<NaiveDate>) -> Vec<&Sale> {
        filter_by_day(&self.sales, |s| s.date, day, &Local)
    }

    /// Returns on one local calendar day (all when no day selected).
    pub fn returns_on(&self, day: Option<NaiveDate>) -> Vec<&SaleReturn> {
        filter_by_day(&self.returns, |r| r.date, day, &Local)
    }

    /// Starts a return against one of the loaded sales.
    ///
    /// Selecting an unknown sale is rejected here, before any toggling
    /// happens.
    pub fn start_return(&self, sale_id: &str) -> AppResult<ReturnDraft> {
        let sale = self
            .sales
            .iter()
            .find(|s| s.id == sale_id)
            .ok_or_else(|| AppError::not_found("Sale", sale_id))?;
        Ok(ReturnDraft::for_sale(sale))
    }

    /// Submits a return and reloads.
    ///
    /// An empty selection is rejected locally by the refund processor;
    /// the backend computes the refund amount from the submitted items.
    pub async fn submit_return(
        self,
        client: &ApiClient,
        draft: ReturnDraft,
        refund_method: PaymentMethod,
        reason: Option<String>,
    ) -> AppResult<Self> {
        let request = draft.into_request(refund_method, reason)?;
        let processed = client.returns().create(&request).await?;
        info!(
            return_id = %processed.id,
            refund = %processed.refund_amount,
            "return processed"
        );

        Self::load(client, self.date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sauda_core::report::ReportSummary;
    use sauda_core::types::{Discount, PaymentType, SaleChannel};
    use sauda_core::Money;

    fn sale(id: &str, date: chrono::DateTime<Utc>) -> Sale {
        Sale {
            id: id.to_string(),
            sale_type: SaleChannel::Retail,
            customer_name: None,
            customer_phone: None,
            items: Vec::new(),
            subtotal: Money::from_paise(10000),
            discount: Discount::NONE,
            discount_amount: Money::zero(),
            total: Money::from_paise(10000),
            payment_method: PaymentMethod::Cash,
            payment_type: PaymentType::Full,
            cash_received: None,
            gpay_return: None,
            amount_paid: None,
            balance_amount: None,
            date,
            created_at: date,
        }
    }

    fn screen(sales: Vec<Sale>) -> ReportScreen {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        ReportScreen {
            date,
            daily: DailyReport {
                date,
                summary: ReportSummary::build(&[], &[], Money::zero()),
                sales_list: Vec::new(),
                expenses_list: Vec::new(),
            },
            sales,
            credit_sales: Vec::new(),
            returns: Vec::new(),
        }
    }

    #[test]
    fn test_start_return_requires_known_sale() {
        let screen = screen(vec![sale("s-1", Utc::now())]);

        assert_eq!(screen.start_return("s-1").unwrap().sale_id(), "s-1");
        assert!(screen.start_return("ghost").is_err());
    }

    #[test]
    fn test_invoices_unfiltered_returns_all() {
        let screen = screen(vec![
            sale("s-1", Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap()),
            sale("s-2", Utc.with_ymd_and_hms(2024, 3, 6, 10, 0, 0).unwrap()),
        ]);

        assert_eq!(screen.invoices(None).len(), 2);
    }
}
