//! Loosely-typed source rows.

use std::collections::BTreeMap;

use crate::columns::ISSUE_KEY;

/// One row of a source export, keyed by column header.
///
/// Columns missing from the file, and cells missing from a short row, are
/// simply absent. No schema is enforced beyond the columns a caller reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell value for `column`, if the column was present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Returns the cell value for `column`, or an empty string when absent.
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Returns the value for `column` when it is present and not blank.
    pub fn non_blank(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|value| !value.trim().is_empty())
    }

    /// The join key of this row, trimmed. `None` when absent or blank.
    pub fn issue_key(&self) -> Option<&str> {
        self.non_blank(ISSUE_KEY).map(str::trim)
    }

    /// Sets a cell, returning the previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(column.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for RawRow {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_column() {
        let row: RawRow = [("Summary", "Crash")].into_iter().collect();
        assert_eq!(row.get("Summary"), Some("Crash"));
        assert_eq!(row.get("Assignee"), None);
        assert_eq!(row.get_or_empty("Assignee"), "");
    }

    #[test]
    fn test_issue_key_blank_is_missing() {
        let blank: RawRow = [("Issue key", "   ")].into_iter().collect();
        assert_eq!(blank.issue_key(), None);

        let absent = RawRow::new();
        assert_eq!(absent.issue_key(), None);
    }

    #[test]
    fn test_issue_key_trimmed() {
        let row: RawRow = [("Issue key", " PROJ-7 ")].into_iter().collect();
        assert_eq!(row.issue_key(), Some("PROJ-7"));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut row = RawRow::new();
        assert_eq!(row.insert("Description", "old"), None);
        assert_eq!(row.insert("Description", "new"), Some("old".to_string()));
        assert_eq!(row.get("Description"), Some("new"));
        assert_eq!(row.len(), 1);
    }
}
