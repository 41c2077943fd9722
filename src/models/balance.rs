use serde::{Deserialize, Serialize};

/// Balance snapshot as the backend sends it: decimal amounts as numeric
/// strings. The backend is the authoritative aggregator; the client never
/// recomputes these from the transaction list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}
