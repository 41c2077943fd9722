//! Display format adapters: currency, date and file-size strings.
//!
//! Pure, deterministic and locale-fixed (pt-BR / BRL). Normalization calls
//! these exactly once per record; sorting never re-derives formatted fields.

use std::sync::OnceLock;

use chrono::DateTime;
use numfmt::{Formatter, Precision};

use crate::error::Result;

/// Format a raw amount as Brazilian real, e.g. `1234.5` -> `"R$ 1.234,50"`.
///
/// Negative amounts render as `"-R$ ..."`. Callers that want the
/// outgoing-transaction display form (`"- R$ ..."`) prefix the sign
/// themselves on the formatted magnitude.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "R$ 0,00".to_owned();
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    to_pt_br(formatted_string)
}

/// numfmt only emits en-US separators; swap them for pt-BR output.
fn to_pt_br(formatted: String) -> String {
    formatted
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            c => c,
        })
        .collect()
}

/// Format an ISO-8601 timestamp as a pt-BR calendar date, e.g.
/// `"2020-05-24T00:00:00Z"` -> `"24/05/2020"`.
pub fn format_local_date(iso: &str) -> Result<String> {
    let date = DateTime::parse_from_rfc3339(iso)?;
    Ok(date.format("%d/%m/%Y").to_string())
}

/// Human-readable byte count for staged files, e.g. `2048` -> `"2.00 KB"`.
///
/// Base-2 units with SI-style labels (KB = 1024 bytes).
pub fn readable_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}
