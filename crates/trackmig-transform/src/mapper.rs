//! Primary-table row to import record.

use tracing::{debug, warn};
use trackmig_model::columns::primary;
use trackmig_model::{EnrichedFields, MigrationConfig, OutputRow, RawRow, RowIssue, SourceTable};

use crate::datetime::{format_target_date, parse_source_date};
use crate::join::IssueLookup;

/// Result of mapping one primary-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedRow {
    /// The row produced an output record.
    Mapped {
        row: OutputRow,
        /// Whether the issue key had a secondary-table entry.
        matched: bool,
        /// Recovered problems (bad dates, unknown priority).
        issues: Vec<RowIssue>,
    },
    /// The row was dropped.
    Skipped(RowIssue),
}

/// Builds import records from primary-table rows and the finished lookup.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    config: &'a MigrationConfig,
}

impl<'a> RowMapper<'a> {
    pub fn new(config: &'a MigrationConfig) -> Self {
        Self { config }
    }

    /// Maps one row. `row_number` is the 1-based data row index, used only
    /// for reporting.
    pub fn map_row(&self, row_number: usize, row: &RawRow, lookup: &IssueLookup) -> MappedRow {
        let Some(issue_key) = row.issue_key() else {
            warn!(
                table = %SourceTable::Primary,
                row = row_number,
                "skipping row with missing issue key"
            );
            return MappedRow::Skipped(RowIssue::MissingKey {
                table: SourceTable::Primary,
                row: row_number,
            });
        };

        let mut issues = Vec::new();
        let default_fields = EnrichedFields::default();
        let (fields, matched) = match lookup.get(issue_key) {
            Some(fields) => (fields, true),
            None => {
                debug!(issue_key, "no secondary entry, using placeholders");
                (&default_fields, false)
            }
        };

        let priority = self.priority(issue_key, row, &mut issues);
        let created_date = date_field(issue_key, row, primary::CREATED, &mut issues);
        let changed_date = date_field(issue_key, row, primary::UPDATED, &mut issues);

        let output = OutputRow {
            work_item_type: self.config.work_item_type().to_string(),
            title: row.get_or_empty(primary::SUMMARY).to_string(),
            assigned_to: row.get_or_empty(primary::ASSIGNEE).to_string(),
            created_by: row.get_or_empty(primary::REPORTER).to_string(),
            priority,
            state: row.get_or_empty(primary::STATUS).to_string(),
            created_date,
            changed_date,
            description: build_description(issue_key, fields, self.config),
        };

        MappedRow::Mapped {
            row: output,
            matched,
            issues,
        }
    }

    fn priority(&self, issue_key: &str, row: &RawRow, issues: &mut Vec<RowIssue>) -> String {
        let priorities = self.config.priorities();
        let source = row.get(primary::PRIORITY);
        if let Some(code) = source.and_then(|value| priorities.get(value)) {
            return code.to_string();
        }
        let value = source.unwrap_or_default();
        debug!(
            issue_key,
            value,
            fallback = priorities.fallback(),
            "unknown priority"
        );
        issues.push(RowIssue::UnknownPriority {
            issue_key: issue_key.to_string(),
            value: value.to_string(),
        });
        priorities.fallback_code().to_string()
    }
}

fn date_field(issue_key: &str, row: &RawRow, column: &str, issues: &mut Vec<RowIssue>) -> String {
    let value = row.get_or_empty(column);
    match parse_source_date(value) {
        Ok(Some(parsed)) => format_target_date(&parsed),
        Ok(None) => String::new(),
        Err(error) => {
            warn!(issue_key, field = column, %error, "invalid date format");
            issues.push(RowIssue::InvalidDate {
                issue_key: issue_key.to_string(),
                field: column.to_string(),
                value: value.to_string(),
            });
            String::new()
        }
    }
}

/// Assembles the four-section work item description.
pub fn build_description(
    issue_key: &str,
    fields: &EnrichedFields,
    config: &MigrationConfig,
) -> String {
    [
        format!("### Description\n{}", fields.description),
        format!("### Environment\n{}", fields.environment),
        format!(
            "### Original Issue\n[{}]({})",
            config.link_label(),
            config.issue_url(issue_key)
        ),
        format!("### Attachments\n{}", fields.attachments),
    ]
    .join("\n\n")
}
