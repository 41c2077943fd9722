//! Column sorting for the displayed transaction list.
//!
//! The engine remembers only the last-applied column and its direction, not
//! a sort history. Activating a column that is not currently active applies
//! that column's first-click direction (descending for the string and date
//! columns, ascending for the amount column); re-activating the active
//! column flips the direction.

use std::cmp::Ordering;

use crate::models::TransactionRecord;

// ---------------------------------------------------------------------------
// SortKey / SortDirection
// ---------------------------------------------------------------------------

/// A sortable dashboard column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Value,
    Category,
    Date,
}

impl SortKey {
    /// Direction applied the first time this column is activated.
    ///
    /// A first click on a string or date column shows it reversed; a first
    /// click on the amount column shows it smallest-first.
    fn initial_direction(self) -> SortDirection {
        match self {
            SortKey::Value => SortDirection::Ascending,
            SortKey::Title | SortKey::Category | SortKey::Date => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// ---------------------------------------------------------------------------
// SortState
// ---------------------------------------------------------------------------

/// The active sort column and direction, if any.
///
/// A single tagged value rather than one flag per column, so two columns can
/// never be active at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortKey, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `key` and return the direction to sort with.
    ///
    /// Flips the direction when `key` is already active, otherwise applies
    /// the column's first-click direction. Any previously active column is
    /// forgotten.
    pub fn toggle(&mut self, key: SortKey) -> SortDirection {
        let direction = match self.active {
            Some((active, direction)) if active == key => direction.flipped(),
            _ => key.initial_direction(),
        };
        self.active = Some((key, direction));
        direction
    }

    /// The active column and its direction, for header highlighting.
    pub fn active(&self) -> Option<(SortKey, SortDirection)> {
        self.active
    }

    /// The direction of `key` if it is the active column.
    pub fn direction_of(&self, key: SortKey) -> Option<SortDirection> {
        match self.active {
            Some((active, direction)) if active == key => Some(direction),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// sort_records
// ---------------------------------------------------------------------------

/// Stable in-place sort of the current record list by one column.
///
/// String columns use case-insensitive ordering; the value column compares
/// the raw amount; the date column compares the raw ISO timestamp, which
/// orders chronologically. Ties keep their prior relative order. An empty
/// list is a no-op.
pub fn sort_records(records: &mut [TransactionRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => compare_folded(&a.title, &b.title),
            SortKey::Value => a.value.total_cmp(&b.value),
            SortKey::Category => compare_folded(&a.category, &b.category),
            SortKey::Date => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Case-insensitive ordering; stands in for locale collation.
fn compare_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
