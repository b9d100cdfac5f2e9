//! Row-level problems recovered during a run, and run totals.

use std::fmt;

use serde::Serialize;

/// Which source export a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceTable {
    Primary,
    Secondary,
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// A recovered per-row condition. None of these abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowIssue {
    /// The row has no issue key and was dropped.
    MissingKey {
        table: SourceTable,
        /// 1-based data row index (header excluded).
        row: usize,
    },
    /// A date cell did not match the source format; an empty date was written.
    InvalidDate {
        issue_key: String,
        field: String,
        value: String,
    },
    /// The priority was not in the table; the fallback code was written.
    UnknownPriority { issue_key: String, value: String },
}

impl RowIssue {
    /// Whether the row carrying this issue was left out of the output.
    pub fn drops_row(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey { table, row } => {
                write!(f, "{table} row {row}: missing issue key, row skipped")
            }
            Self::InvalidDate {
                issue_key,
                field,
                value,
            } => write!(f, "{issue_key}: invalid {field} date '{value}'"),
            Self::UnknownPriority { issue_key, value } => {
                write!(f, "{issue_key}: unknown priority '{value}'")
            }
        }
    }
}

/// Totals and recovered issues of one migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub primary_rows: usize,
    pub secondary_rows: usize,
    /// Distinct issue keys in the join lookup.
    pub enriched_issues: usize,
    pub output_rows: usize,
    /// Output rows whose key had no secondary-table entry.
    pub unmatched_keys: usize,
    pub issues: Vec<RowIssue>,
}

impl MigrationReport {
    pub fn skipped_rows(&self, table: SourceTable) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, RowIssue::MissingKey { table: t, .. } if *t == table))
            .count()
    }

    pub fn invalid_dates(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, RowIssue::InvalidDate { .. }))
            .count()
    }

    pub fn unknown_priorities(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, RowIssue::UnknownPriority { .. }))
            .count()
    }
}
