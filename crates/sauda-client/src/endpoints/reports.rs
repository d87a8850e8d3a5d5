//! # Report Endpoints

use chrono::NaiveDate;

use sauda_core::report::{DailyReport, MonthlyReport};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Operations on `/api/reports`.
#[derive(Debug, Clone, Copy)]
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ReportsApi { client }
    }

    /// `GET /api/reports/daily?date=YYYY-MM-DD`.
    pub async fn daily(&self, date: NaiveDate) -> ClientResult<DailyReport> {
        self.client
            .get_query("/reports/daily", &[("date", date.to_string())])
            .await
    }

    /// `GET /api/reports/monthly?year=&month=`.
    pub async fn monthly(&self, year: i32, month: u32) -> ClientResult<MonthlyReport> {
        self.client
            .get_query(
                "/reports/monthly",
                &[("year", year.to_string()), ("month", month.to_string())],
            )
            .await
    }
}
