//! Normalization of raw server payloads into display-ready view records.
//!
//! Pure mapping step: raw records stay untouched, derived display fields are
//! computed exactly once here. Deterministic for a given input.

use crate::error::Result;
use crate::format::{format_currency, format_local_date};
use crate::models::{Balance, BalanceView, Transaction, TransactionRecord, TransactionType};

/// Normalize one raw transaction into a [`TransactionRecord`].
///
/// The formatted amount is the currency-formatted magnitude, prefixed with
/// `"- "` for outgoing transactions. A `created_at` value that is not valid
/// ISO-8601 fails the whole operation.
pub fn normalize_transaction(raw: Transaction) -> Result<TransactionRecord> {
    let magnitude = format_currency(raw.value);
    let formatted_value = match raw.kind {
        TransactionType::Outcome => format!("- {magnitude}"),
        TransactionType::Income => magnitude,
    };
    let formatted_date = format_local_date(&raw.created_at)?;

    Ok(TransactionRecord {
        id: raw.id,
        title: raw.title,
        value: raw.value,
        kind: raw.kind,
        category: raw.category.title,
        created_at: raw.created_at,
        formatted_value,
        formatted_date,
    })
}

/// Normalize the full raw transaction list, preserving server order.
pub fn normalize_transactions(raw: Vec<Transaction>) -> Result<Vec<TransactionRecord>> {
    raw.into_iter().map(normalize_transaction).collect()
}

/// Normalize the balance snapshot: each field independently parsed as a
/// number and currency-formatted. The backend totals are taken as-is, never
/// recomputed from the transaction list.
pub fn normalize_balance(raw: &Balance) -> Result<BalanceView> {
    Ok(BalanceView {
        income: format_currency(raw.income.parse::<f64>()?),
        outcome: format_currency(raw.outcome.parse::<f64>()?),
        total: format_currency(raw.total.parse::<f64>()?),
    })
}
