//! Secondary-table join: issue key to enriched fields.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use trackmig_model::columns::secondary;
use trackmig_model::{EnrichedFields, MigrationConfig, RawRow, RowIssue, SourceTable, UrlPattern};

use crate::text::{extract_urls, normalize_markup};

/// Enriched fields by issue key. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct IssueLookup {
    entries: BTreeMap<String, EnrichedFields>,
}

impl IssueLookup {
    pub fn get(&self, issue_key: &str) -> Option<&EnrichedFields> {
        self.entries.get(issue_key)
    }

    pub fn contains(&self, issue_key: &str) -> bool {
        self.entries.contains_key(issue_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The lookup plus the rows that could not be keyed.
#[derive(Debug, Clone, Default)]
pub struct JoinOutcome {
    pub lookup: IssueLookup,
    pub issues: Vec<RowIssue>,
}

/// Computes the enriched fields of one secondary-table row.
pub fn enrich_row(row: &RawRow, url_pattern: UrlPattern) -> EnrichedFields {
    let description = normalize_markup(row.get_or_empty(secondary::DESCRIPTION));
    let urls = extract_urls(row.get_or_empty(secondary::ATTACHMENT), url_pattern);
    EnrichedFields::new(description, row.get(secondary::ENVIRONMENT), &urls)
}

/// Builds the issue lookup from the secondary table.
///
/// Rows without an issue key are skipped with a warning. A key seen twice
/// keeps the later row.
pub fn build_lookup(rows: &[RawRow], config: &MigrationConfig) -> JoinOutcome {
    let mut outcome = JoinOutcome::default();

    for (idx, row) in rows.iter().enumerate() {
        let row_number = idx + 1;
        let Some(issue_key) = row.issue_key() else {
            warn!(
                table = %SourceTable::Secondary,
                row = row_number,
                "skipping row with missing issue key"
            );
            outcome.issues.push(RowIssue::MissingKey {
                table: SourceTable::Secondary,
                row: row_number,
            });
            continue;
        };

        let fields = enrich_row(row, config.url_pattern());
        if outcome
            .lookup
            .entries
            .insert(issue_key.to_string(), fields)
            .is_some()
        {
            debug!(issue_key, row = row_number, "duplicate issue key, later row wins");
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackmig_model::{NO_ATTACHMENTS, NOT_PROVIDED};

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_enrich_row_full() {
        let fields = enrich_row(
            &row(&[
                ("Issue key", "A-1"),
                ("Description", "*bold*"),
                ("Environment", "Staging"),
                ("Attachment", "x;https://f.example/1.png;https://f.example/2.png"),
            ]),
            UrlPattern::WhitespaceOrSemicolon,
        );
        assert_eq!(fields.description, "_bold_");
        assert_eq!(fields.environment, "Staging");
        assert_eq!(
            fields.attachments,
            "https://f.example/1.png\nhttps://f.example/2.png"
        );
    }

    #[test]
    fn test_enrich_row_missing_columns() {
        let fields = enrich_row(&row(&[("Issue key", "A-1")]), UrlPattern::default());
        assert_eq!(fields, EnrichedFields::default());
        assert_eq!(fields.environment, NOT_PROVIDED);
        assert_eq!(fields.attachments, NO_ATTACHMENTS);
    }

    #[test]
    fn test_missing_key_skipped() {
        let rows = vec![
            row(&[("Issue key", ""), ("Description", "orphan")]),
            row(&[("Issue key", "A-2"), ("Description", "kept")]),
        ];
        let outcome = build_lookup(&rows, &MigrationConfig::default());
        assert_eq!(outcome.lookup.len(), 1);
        assert_eq!(
            outcome.issues,
            vec![RowIssue::MissingKey {
                table: SourceTable::Secondary,
                row: 1
            }]
        );
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let rows = vec![
            row(&[("Issue key", "A-1"), ("Description", "first")]),
            row(&[("Issue key", "A-1"), ("Description", "second")]),
        ];
        let outcome = build_lookup(&rows, &MigrationConfig::default());
        assert_eq!(outcome.lookup.len(), 1);
        assert_eq!(outcome.lookup.get("A-1").unwrap().description, "second");
        assert!(outcome.issues.is_empty());
    }
}
