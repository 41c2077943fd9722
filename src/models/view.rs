use super::transaction::TransactionType;

// ---------------------------------------------------------------------------
// TransactionRecord — display-ready transaction
// ---------------------------------------------------------------------------

/// A normalized, display-ready transaction.
///
/// Produced once per raw [`Transaction`](super::Transaction) by the
/// normalizer. Carries the raw sort keys (`value`, `created_at`) alongside
/// the derived display strings, so re-sorting reorders records without ever
/// re-deriving them.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub title: String,
    /// Raw signed amount, used for value sorting.
    pub value: f64,
    pub kind: TransactionType,
    /// Category title, used for category sorting.
    pub category: String,
    /// Raw ISO-8601 timestamp, used for date sorting.
    pub created_at: String,
    /// Currency-formatted amount, `"- "`-prefixed for outgoing transactions.
    pub formatted_value: String,
    /// Localized calendar date derived from `created_at`.
    pub formatted_date: String,
}

// ---------------------------------------------------------------------------
// BalanceView — display-ready balance snapshot
// ---------------------------------------------------------------------------

/// The balance snapshot with every field currency-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    pub income: String,
    pub outcome: String,
    pub total: String,
}
