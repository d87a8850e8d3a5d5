//! # Money Ledger Model
//!
//! Cash/GPay balance semantics: how every recorded event moves the two
//! settlement balances, and how valid transfer requests are constructed.
//!
//! The balance is never mutated directly. It is the fold of the full
//! history, performed authoritatively by the backend; [`reconcile`]
//! implements the same fold so the arithmetic is pinned down and
//! testable on this side of the wire.
//!
//! ## Balance Effects
//! ```text
//! transfer_type            cash    gpay
//! ─────────────────────    ─────   ─────
//! cash_to_gpay              -a      +a     own money exchange
//! gpay_to_cash              +a      -a     own money exchange
//! customer_cash_to_gpay     +a      -a     customer hands cash, we GPay them
//! customer_gpay_to_cash     -a      +a     customer GPays, we hand cash
//! cash_withdrawal           -a       0     drawer
//! gpay_withdrawal            0      -a     drawer
//! cash_deposit              +a       0     drawer
//! gpay_deposit               0      +a     drawer
//! ─────────────────────────────────────
//! sale                     +collected on its payment_method side
//! expense                  -amount on its payment_source side
//! return                   -refund_amount on its refund_method side
//! ```
//! Exchanges preserve `cash + gpay`; drawer transfers change it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::report::matches_calendar_day;
use crate::types::{
    Balance, Expense, MoneyTransfer, PaymentMethod, Sale, SaleReturn, TransferType,
};

// =============================================================================
// Balance Effects
// =============================================================================

impl TransferType {
    /// Signed (cash, gpay) deltas this transfer applies to the balance.
    pub fn balance_effect(&self, amount: Money) -> (Money, Money) {
        let zero = Money::zero();
        match self {
            TransferType::CashToGpay => (zero - amount, amount),
            TransferType::GpayToCash => (amount, zero - amount),
            TransferType::CustomerCashToGpay => (amount, zero - amount),
            TransferType::CustomerGpayToCash => (zero - amount, amount),
            TransferType::CashWithdrawal => (zero - amount, zero),
            TransferType::GpayWithdrawal => (zero, zero - amount),
            TransferType::CashDeposit => (amount, zero),
            TransferType::GpayDeposit => (zero, amount),
        }
    }
}

// =============================================================================
// Reconciliation
// =============================================================================

/// Folds the full history into the pair of settlement balances.
///
/// Mirrors the backend's authoritative computation:
/// - a sale credits `collected()` to its payment method's side
///   (a sale's GPay-return leg arrives separately, as the expense the
///   backend materializes for it, so it is not double-counted here)
/// - an expense debits its payment source
/// - a transfer applies its [`TransferType::balance_effect`]
/// - a return debits `refund_amount` from its refund method
pub fn reconcile(
    transfers: &[MoneyTransfer],
    sales: &[Sale],
    expenses: &[Expense],
    returns: &[SaleReturn],
) -> Balance {
    let mut balance = Balance::default();

    for sale in sales {
        credit(&mut balance, sale.payment_method, sale.collected());
    }

    for expense in expenses {
        credit(&mut balance, expense.payment_source, Money::zero() - expense.amount);
    }

    for transfer in transfers {
        let (cash, gpay) = transfer.transfer_type.balance_effect(transfer.amount);
        balance.cash += cash;
        balance.gpay += gpay;
    }

    for ret in returns {
        credit(&mut balance, ret.refund_method, Money::zero() - ret.refund_amount);
    }

    balance
}

fn credit(balance: &mut Balance, side: PaymentMethod, amount: Money) {
    match side {
        PaymentMethod::Cash => balance.cash += amount,
        PaymentMethod::Gpay => balance.gpay += amount,
    }
}

// =============================================================================
// Transfer Requests
// =============================================================================

/// The `POST /api/money-transfers` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub transfer_type: TransferType,
    pub amount: Money,
    pub description: Option<String>,
    /// Calendar date of the movement (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
}

/// Plans a full withdrawal of both balances.
///
/// Emits up to two transfers, skipping any leg whose balance is zero.
/// An entirely zero balance is rejected before any request is issued.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use sauda_core::ledger::plan_withdraw_all;
/// use sauda_core::money::Money;
/// use sauda_core::types::Balance;
///
/// let balance = Balance { cash: Money::from_rupees(500), gpay: Money::zero() };
/// let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
///
/// let plan = plan_withdraw_all(&balance, today).unwrap();
/// assert_eq!(plan.len(), 1); // no GPay leg
/// ```
pub fn plan_withdraw_all(balance: &Balance, date: NaiveDate) -> CoreResult<Vec<TransferRequest>> {
    if balance.cash.is_zero() && balance.gpay.is_zero() {
        return Err(CoreError::NothingToWithdraw);
    }

    let mut plan = Vec::new();
    if balance.cash.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::CashWithdrawal,
            amount: balance.cash,
            description: Some("Full cash withdrawal".to_string()),
            date,
        });
    }
    if balance.gpay.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::GpayWithdrawal,
            amount: balance.gpay,
            description: Some("Full GPay withdrawal".to_string()),
            date,
        });
    }
    Ok(plan)
}

/// Plans a custom withdrawal of specific cash/GPay amounts.
///
/// Each requested leg is validated against the queried balance before
/// anything is emitted; a request with no positive leg is rejected.
pub fn plan_withdrawal(
    balance: &Balance,
    cash_amount: Money,
    gpay_amount: Money,
    description: Option<String>,
    date: NaiveDate,
) -> CoreResult<Vec<TransferRequest>> {
    if !cash_amount.is_positive() && !gpay_amount.is_positive() {
        return Err(CoreError::EmptyTransfer);
    }

    if cash_amount > balance.cash {
        return Err(CoreError::InsufficientBalance {
            method: PaymentMethod::Cash,
            available: balance.cash,
            requested: cash_amount,
        });
    }

    if gpay_amount > balance.gpay {
        return Err(CoreError::InsufficientBalance {
            method: PaymentMethod::Gpay,
            available: balance.gpay,
            requested: gpay_amount,
        });
    }

    let mut plan = Vec::new();
    if cash_amount.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::CashWithdrawal,
            amount: cash_amount,
            description: Some(leg_description(&description, "Cash withdrawal")),
            date,
        });
    }
    if gpay_amount.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::GpayWithdrawal,
            amount: gpay_amount,
            description: Some(leg_description(&description, "GPay withdrawal")),
            date,
        });
    }
    Ok(plan)
}

/// Plans a deposit into the business.
///
/// Deposits have no upper bound; only an all-zero request is rejected.
pub fn plan_deposit(
    cash_amount: Money,
    gpay_amount: Money,
    description: Option<String>,
    date: NaiveDate,
) -> CoreResult<Vec<TransferRequest>> {
    if !cash_amount.is_positive() && !gpay_amount.is_positive() {
        return Err(CoreError::EmptyTransfer);
    }

    let mut plan = Vec::new();
    if cash_amount.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::CashDeposit,
            amount: cash_amount,
            description: Some(leg_description(&description, "Cash deposit")),
            date,
        });
    }
    if gpay_amount.is_positive() {
        plan.push(TransferRequest {
            transfer_type: TransferType::GpayDeposit,
            amount: gpay_amount,
            description: Some(leg_description(&description, "GPay deposit")),
            date,
        });
    }
    Ok(plan)
}

fn leg_description(entered: &Option<String>, fallback: &str) -> String {
    match entered.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

// =============================================================================
// History Views
// =============================================================================

/// Drawer history: withdrawals and deposits only.
pub fn drawer_history(transfers: &[MoneyTransfer]) -> Vec<&MoneyTransfer> {
    transfers
        .iter()
        .filter(|t| t.transfer_type.is_drawer())
        .collect()
}

/// Exchange history: the complement of the drawer set.
pub fn exchange_history(transfers: &[MoneyTransfer]) -> Vec<&MoneyTransfer> {
    transfers
        .iter()
        .filter(|t| !t.transfer_type.is_drawer())
        .collect()
}

/// Sum of withdrawal-type transfer amounts, optionally restricted to one
/// calendar day in the given timezone.
pub fn total_withdrawn<Tz: chrono::TimeZone>(
    transfers: &[MoneyTransfer],
    day: Option<NaiveDate>,
    tz: &Tz,
) -> Money {
    transfers
        .iter()
        .filter(|t| t.transfer_type.is_withdrawal())
        .filter(|t| day.map_or(true, |d| matches_calendar_day(t.date, d, tz)))
        .map(|t| t.amount)
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartLine, Discount, LineKind, PaymentType, SaleChannel};
    use chrono::{TimeZone, Utc};

    fn transfer(transfer_type: TransferType, paise: i64) -> MoneyTransfer {
        MoneyTransfer {
            id: format!("t-{:?}-{}", transfer_type, paise),
            transfer_type,
            amount: Money::from_paise(paise),
            description: None,
            date: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn sale(method: PaymentMethod, payment_type: PaymentType, total: i64, paid: Option<i64>) -> Sale {
        Sale {
            id: "sale".to_string(),
            sale_type: SaleChannel::Retail,
            customer_name: None,
            customer_phone: None,
            items: vec![CartLine {
                kind: LineKind::Product {
                    product_id: "p".to_string(),
                },
                name: "Item".to_string(),
                quantity: 1,
                unit_price: Money::from_paise(total),
                total: Money::from_paise(total),
            }],
            subtotal: Money::from_paise(total),
            discount: Discount::NONE,
            discount_amount: Money::zero(),
            total: Money::from_paise(total),
            payment_method: method,
            payment_type,
            cash_received: None,
            gpay_return: None,
            amount_paid: paid.map(Money::from_paise),
            balance_amount: paid.map(|p| Money::from_paise(total - p)),
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    fn expense(source: PaymentMethod, paise: i64) -> Expense {
        Expense {
            id: "e".to_string(),
            category_id: "c".to_string(),
            category_name: "Rent".to_string(),
            amount: Money::from_paise(paise),
            payment_source: source,
            description: None,
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_balance_effects_all_eight_types() {
        let a = Money::from_paise(100);
        let z = Money::zero();
        let n = Money::from_paise(-100);

        assert_eq!(TransferType::CashToGpay.balance_effect(a), (n, a));
        assert_eq!(TransferType::GpayToCash.balance_effect(a), (a, n));
        assert_eq!(TransferType::CustomerCashToGpay.balance_effect(a), (a, n));
        assert_eq!(TransferType::CustomerGpayToCash.balance_effect(a), (n, a));
        assert_eq!(TransferType::CashWithdrawal.balance_effect(a), (n, z));
        assert_eq!(TransferType::GpayWithdrawal.balance_effect(a), (z, n));
        assert_eq!(TransferType::CashDeposit.balance_effect(a), (a, z));
        assert_eq!(TransferType::GpayDeposit.balance_effect(a), (z, a));
    }

    #[test]
    fn test_exchanges_preserve_total() {
        for transfer_type in [
            TransferType::CashToGpay,
            TransferType::GpayToCash,
            TransferType::CustomerCashToGpay,
            TransferType::CustomerGpayToCash,
        ] {
            let (cash, gpay) = transfer_type.balance_effect(Money::from_paise(777));
            assert!((cash + gpay).is_zero(), "{:?} changed the sum", transfer_type);
        }
    }

    #[test]
    fn test_reconcile_folds_full_history() {
        let transfers = vec![
            transfer(TransferType::CashDeposit, 50000),
            transfer(TransferType::CashToGpay, 10000),
            transfer(TransferType::GpayWithdrawal, 2000),
        ];
        let sales = vec![
            sale(PaymentMethod::Cash, PaymentType::Full, 30000, None),
            sale(PaymentMethod::Gpay, PaymentType::Full, 12000, None),
        ];
        let expenses = vec![expense(PaymentMethod::Cash, 5000)];
        let returns = vec![SaleReturn {
            id: "r".to_string(),
            sale_id: "sale".to_string(),
            items: Vec::new(),
            refund_amount: Money::from_paise(3000),
            refund_method: PaymentMethod::Cash,
            reason: None,
            date: Utc::now(),
            created_at: Utc::now(),
        }];

        let balance = reconcile(&transfers, &sales, &expenses, &returns);

        // cash: +500 deposit -100 exchange +300 sale -50 expense -30 refund
        assert_eq!(balance.cash.paise(), 50000 - 10000 + 30000 - 5000 - 3000);
        // gpay: +100 exchange -20 withdrawal +120 sale
        assert_eq!(balance.gpay.paise(), 10000 - 2000 + 12000);
    }

    #[test]
    fn test_reconcile_credit_sale_counts_amount_paid() {
        let sales = vec![sale(
            PaymentMethod::Cash,
            PaymentType::Credit,
            30000,
            Some(10000),
        )];
        let balance = reconcile(&[], &sales, &[], &[]);
        assert_eq!(balance.cash.paise(), 10000);
        assert_eq!(balance.gpay, Money::zero());
    }

    #[test]
    fn test_withdraw_all_skips_zero_leg() {
        // cash Rs 500, gpay Rs 0 -> exactly one cash_withdrawal of 500
        let balance = Balance {
            cash: Money::from_rupees(500),
            gpay: Money::zero(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let plan = plan_withdraw_all(&balance, date).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].transfer_type, TransferType::CashWithdrawal);
        assert_eq!(plan[0].amount, Money::from_rupees(500));
    }

    #[test]
    fn test_withdraw_all_both_legs() {
        let balance = Balance {
            cash: Money::from_rupees(500),
            gpay: Money::from_rupees(200),
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let plan = plan_withdraw_all(&balance, date).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].transfer_type, TransferType::GpayWithdrawal);
        assert_eq!(plan[1].amount, Money::from_rupees(200));
    }

    #[test]
    fn test_withdraw_all_rejects_zero_balance() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(matches!(
            plan_withdraw_all(&Balance::default(), date),
            Err(CoreError::NothingToWithdraw)
        ));
    }

    #[test]
    fn test_custom_withdrawal_validates_balance() {
        let balance = Balance {
            cash: Money::from_rupees(100),
            gpay: Money::from_rupees(50),
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let err = plan_withdrawal(
            &balance,
            Money::from_rupees(150),
            Money::zero(),
            None,
            date,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientBalance {
                method: PaymentMethod::Cash,
                ..
            }
        ));

        assert!(matches!(
            plan_withdrawal(&balance, Money::zero(), Money::zero(), None, date),
            Err(CoreError::EmptyTransfer)
        ));

        let plan = plan_withdrawal(
            &balance,
            Money::from_rupees(60),
            Money::from_rupees(50),
            Some("Festival payout".to_string()),
            date,
        )
        .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].description.as_deref(), Some("Festival payout"));
    }

    #[test]
    fn test_deposit_has_no_upper_bound() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let plan = plan_deposit(Money::from_rupees(1_000_000), Money::zero(), None, date).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].transfer_type, TransferType::CashDeposit);
        assert_eq!(plan[0].description.as_deref(), Some("Cash deposit"));

        assert!(matches!(
            plan_deposit(Money::zero(), Money::zero(), None, date),
            Err(CoreError::EmptyTransfer)
        ));
    }

    #[test]
    fn test_transfer_request_wire_shape() {
        let request = TransferRequest {
            transfer_type: TransferType::GpayDeposit,
            amount: Money::from_paise(30050),
            description: Some("Opening float".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["transfer_type"], "gpay_deposit");
        assert_eq!(value["amount"], 300.5);
        assert_eq!(value["date"], "2024-03-05");
    }

    #[test]
    fn test_history_partition() {
        let transfers = vec![
            transfer(TransferType::CashWithdrawal, 100),
            transfer(TransferType::CashToGpay, 200),
            transfer(TransferType::GpayDeposit, 300),
            transfer(TransferType::CustomerGpayToCash, 400),
        ];

        let drawer = drawer_history(&transfers);
        assert_eq!(drawer.len(), 2);
        assert!(drawer.iter().all(|t| t.transfer_type.is_drawer()));

        let exchanges = exchange_history(&transfers);
        assert_eq!(exchanges.len(), 2);
        assert!(exchanges.iter().all(|t| !t.transfer_type.is_drawer()));
    }

    #[test]
    fn test_total_withdrawn_filters_type_and_day() {
        let mut on_day = transfer(TransferType::CashWithdrawal, 10000);
        on_day.date = Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap();

        let mut other_day = transfer(TransferType::GpayWithdrawal, 5000);
        other_day.date = Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap();

        // Deposits never count towards the withdrawn total
        let deposit = transfer(TransferType::CashDeposit, 99900);

        let transfers = vec![on_day, other_day, deposit];

        assert_eq!(total_withdrawn(&transfers, None, &Utc).paise(), 15000);

        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(total_withdrawn(&transfers, Some(day), &Utc).paise(), 10000);
    }
}
