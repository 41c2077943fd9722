//! The transaction dashboard view-model: the displayed record list, the
//! formatted balance snapshot and the column sort state.

use tracing::{debug, warn};

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::{BalanceView, TransactionRecord};
use crate::normalize::{normalize_balance, normalize_transactions};
use crate::sort::{SortKey, SortState, sort_records};

/// Owns the displayed transaction list and balance for one session.
///
/// Single-owner state: only the session task mutates it, so there is no
/// locking anywhere in the view-model.
#[derive(Debug, Default)]
pub struct Dashboard {
    transactions: Vec<TransactionRecord>,
    balance: Option<BalanceView>,
    sort: SortState,
}

impl Dashboard {
    /// An empty dashboard: no records, no balance, no sort applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and normalize the backend state, then replace the displayed
    /// list and balance in one step.
    ///
    /// Partial updates are not observable: both the list and the balance are
    /// fully normalized before either is stored. On any error the previous
    /// displayed state is left untouched and the error is returned so the
    /// caller can surface it.
    ///
    /// The list lands in server order; a remembered sort is not reapplied.
    pub async fn refresh(&mut self, gateway: &Gateway) -> Result<()> {
        let payload = match gateway.transactions().await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "transaction fetch failed; keeping displayed state");
                return Err(err);
            }
        };

        let transactions = normalize_transactions(payload.transactions)?;
        let balance = normalize_balance(&payload.balance)?;

        debug!(count = transactions.len(), "dashboard refreshed");
        self.transactions = transactions;
        self.balance = Some(balance);
        Ok(())
    }

    /// Toggle the sort state for `key` and re-sort the current list.
    ///
    /// Reorders the records already held; nothing is re-fetched and no
    /// formatted field is re-derived. Synchronous, with no failure mode
    /// beyond an empty list being a no-op.
    pub fn sort_by(&mut self, key: SortKey) {
        let direction = self.sort.toggle(key);
        sort_records(&mut self.transactions, key, direction);
    }

    /// The displayed records, in current sort order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// The formatted balance snapshot, once a refresh has succeeded.
    pub fn balance(&self) -> Option<&BalanceView> {
        self.balance.as_ref()
    }

    /// The current column sort state, for header highlighting.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Whether the "no records" display state applies. How that state is
    /// rendered is the presentation layer's concern.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
