use serde::{Deserialize, Serialize};

use super::balance::Balance;

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// Direction of a transaction. Determines the display sign only; the raw
/// amount itself stays backend-authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

// ---------------------------------------------------------------------------
// Transaction — raw server record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// A transaction exactly as the backend sends it. Never mutated client-side;
/// display fields live on [`TransactionRecord`](super::TransactionRecord).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// TransactionsResponse — GET /transactions payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}
