//! # Return/Refund Processor
//!
//! Reconstructs refundable line items from a completed sale and builds
//! the return submission.
//!
//! The user toggles each original line in and out of the selection;
//! membership is matched by line name, and toggling the same line twice
//! restores the selection to its prior state. The refund amount itself
//! is computed by the backend from the submitted items' totals — the
//! client-side total is a preview only.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, PaymentMethod, Sale};

// =============================================================================
// Return Draft
// =============================================================================

/// The in-progress selection of lines to return from one sale.
#[derive(Debug, Clone)]
pub struct ReturnDraft {
    sale_id: String,
    selected: Vec<CartLine>,
}

impl ReturnDraft {
    /// Starts an empty selection against the given sale.
    pub fn for_sale(sale: &Sale) -> Self {
        ReturnDraft {
            sale_id: sale.id.clone(),
            selected: Vec::new(),
        }
    }

    pub fn sale_id(&self) -> &str {
        &self.sale_id
    }

    pub fn selected(&self) -> &[CartLine] {
        &self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|l| l.name == name)
    }

    /// Toggles a line's membership in the selection.
    ///
    /// Present (by name) ⇒ removed; absent ⇒ the original line's snapshot
    /// is pushed. Toggling twice is the identity.
    pub fn toggle(&mut self, line: &CartLine) {
        if let Some(index) = self.selected.iter().position(|l| l.name == line.name) {
            self.selected.remove(index);
        } else {
            self.selected.push(line.clone());
        }
    }

    /// Preview of the refund: sum of the selected lines' totals.
    pub fn selected_total(&self) -> Money {
        self.selected.iter().map(|l| l.total).sum()
    }

    /// Builds the submission payload.
    ///
    /// Rejected locally, before any network call, when nothing is
    /// selected.
    pub fn into_request(
        self,
        refund_method: PaymentMethod,
        reason: Option<String>,
    ) -> CoreResult<ReturnRequest> {
        if self.selected.is_empty() {
            return Err(CoreError::NoItemsSelected);
        }

        Ok(ReturnRequest {
            sale_id: self.sale_id,
            items: self.selected,
            refund_method,
            reason: reason.filter(|r| !r.trim().is_empty()),
        })
    }
}

// =============================================================================
// Return Request
// =============================================================================

/// The `POST /api/returns` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub sale_id: String,
    pub items: Vec<CartLine>,
    pub refund_method: PaymentMethod,
    pub reason: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
