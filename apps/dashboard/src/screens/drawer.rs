//! # Cash Drawer Screen
//!
//! Balance card plus the drawer history (withdrawals and deposits).
//! Withdraw-all and custom withdrawals are planned against the queried
//! balance by the core ledger before any request leaves the machine; a
//! two-leg plan is two independent requests with no compensating
//! rollback if the second one fails.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use sauda_client::ApiClient;
use sauda_core::ledger;
use sauda_core::money::Money;
use sauda_core::types::{Balance, MoneyTransfer};

use crate::error::AppResult;

/// Snapshot of the drawer: balances and drawer-classified transfers.
#[derive(Debug)]
pub struct DrawerScreen {
    pub balance: Balance,
    /// Withdrawals and deposits only; exchanges live on the transfer
    /// history view.
    pub transfers: Vec<MoneyTransfer>,
}

impl DrawerScreen {
    /// Loads balance and transfer history concurrently.
    pub async fn load(client: &ApiClient) -> AppResult<Self> {
        debug!("loading drawer screen");
        let transfers_api = client.transfers();
        let (balance, transfers) = tokio::join!(client.balance(), transfers_api.list());

        let transfers = transfers?
            .into_iter()
            .filter(|t| t.transfer_type.is_drawer())
            .collect();

        Ok(DrawerScreen {
            balance: balance?,
            transfers,
        })
    }

    /// Drawer history, optionally restricted to one local calendar day.
    pub fn history(&self, day: Option<NaiveDate>) -> Vec<&MoneyTransfer> {
        sauda_core::report::filter_by_day(&self.transfers, |t| t.date, day, &Local)
    }

    /// Sum of withdrawals in the (optionally date-filtered) history.
    pub fn total_withdrawn(&self, day: Option<NaiveDate>) -> Money {
        ledger::total_withdrawn(&self.transfers, day, &Local)
    }

    /// Withdraws both balances in full, skipping any zero leg.
    pub async fn withdraw_all(self, client: &ApiClient) -> AppResult<Self> {
        let today = Local::now().date_naive();
        let plan = ledger::plan_withdraw_all(&self.balance, today)?;

        for request in &plan {
            client.transfers().create(request).await?;
        }
        info!(
            legs = plan.len(),
            total = %self.balance.total(),
            "withdraw-all completed"
        );

        Self::load(client).await
    }

    /// Withdraws specific cash/GPay amounts after validating them
    /// against the queried balance.
    pub async fn withdraw(
        self,
        client: &ApiClient,
        cash_amount: Money,
        gpay_amount: Money,
        description: Option<String>,
        date: NaiveDate,
    ) -> AppResult<Self> {
        let plan = ledger::plan_withdrawal(&self.balance, cash_amount, gpay_amount, description, date)?;

        for request in &plan {
            client.transfers().create(request).await?;
        }
        info!(legs = plan.len(), "withdrawal completed");

        Self::load(client).await
    }

    /// Deposits cash and/or GPay; deposits have no upper bound.
    pub async fn deposit(
        self,
        client: &ApiClient,
        cash_amount: Money,
        gpay_amount: Money,
        description: Option<String>,
        date: NaiveDate,
    ) -> AppResult<Self> {
        let plan = ledger::plan_deposit(cash_amount, gpay_amount, description, date)?;

        for request in &plan {
            client.transfers().create(request).await?;
        }
        info!(legs = plan.len(), "deposit completed");

        Self::load(client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sauda_core::types::TransferType;

    fn transfer(transfer_type: TransferType, paise: i64, date: chrono::DateTime<Utc>) -> MoneyTransfer {
        MoneyTransfer {
            id: format!("t-{}", paise),
            transfer_type,
            amount: Money::from_paise(paise),
            description: None,
            date,
            created_at: date,
        }
    }

    #[test]
    fn test_total_withdrawn_ignores_deposits() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let screen = DrawerScreen {
            balance: Balance::default(),
            transfers: vec![
                transfer(TransferType::CashWithdrawal, 10000, now),
                transfer(TransferType::GpayWithdrawal, 5000, now),
                transfer(TransferType::CashDeposit, 99900, now),
            ],
        };

        assert_eq!(screen.total_withdrawn(None).paise(), 15000);
    }

    #[test]
    fn test_history_unfiltered_returns_all() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let screen = DrawerScreen {
            balance: Balance::default(),
            transfers: vec![
                transfer(TransferType::CashWithdrawal, 10000, now),
                transfer(TransferType::GpayDeposit, 5000, now),
            ],
        };

        assert_eq!(screen.history(None).len(), 2);
    }
}
