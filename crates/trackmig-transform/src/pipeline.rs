//! Two-pass migration: join the secondary table, then map the primary rows.

use tracing::{info, info_span};
use trackmig_model::columns::secondary;
use trackmig_model::{MigrationConfig, MigrationReport, OutputRow, RawRow};

use crate::join::build_lookup;
use crate::mapper::{MappedRow, RowMapper};
use crate::text::normalize_markup;

/// Records produced by a run and what happened along the way.
#[derive(Debug, Clone, Default)]
pub struct MigrationOutput {
    pub rows: Vec<OutputRow>,
    pub report: MigrationReport,
}

/// Migration pipeline bound to one tracker configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: MigrationConfig,
}

impl Pipeline {
    pub fn new(config: MigrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Runs the migration over fully loaded tables.
    ///
    /// The lookup is completed before any primary row is mapped, so a
    /// primary row can match a secondary row that appears later in its file.
    /// Output keeps primary-table order; rows without an issue key are left
    /// out. Row-level problems are recorded in the report, never raised.
    pub fn run(&self, primary_rows: &[RawRow], secondary_rows: &[RawRow]) -> MigrationOutput {
        let mut report = MigrationReport {
            primary_rows: primary_rows.len(),
            secondary_rows: secondary_rows.len(),
            ..MigrationReport::default()
        };

        let join = info_span!("join", rows = secondary_rows.len())
            .in_scope(|| build_lookup(secondary_rows, &self.config));
        report.enriched_issues = join.lookup.len();
        report.issues.extend(join.issues);
        info!(
            rows = secondary_rows.len(),
            issues = report.enriched_issues,
            "processed secondary table"
        );

        let mapper = RowMapper::new(&self.config);
        let map_span = info_span!("map", rows = primary_rows.len());
        let _guard = map_span.enter();
        let mut rows = Vec::with_capacity(primary_rows.len());
        for (idx, row) in primary_rows.iter().enumerate() {
            match mapper.map_row(idx + 1, row, &join.lookup) {
                MappedRow::Mapped {
                    row,
                    matched,
                    issues,
                } => {
                    if !matched {
                        report.unmatched_keys += 1;
                    }
                    report.issues.extend(issues);
                    rows.push(row);
                }
                MappedRow::Skipped(issue) => report.issues.push(issue),
            }
        }
        report.output_rows = rows.len();
        info!(
            rows = primary_rows.len(),
            written = report.output_rows,
            unmatched = report.unmatched_keys,
            "processed primary table"
        );

        MigrationOutput { rows, report }
    }
}

/// Normalizes the description column of every row, leaving other columns
/// as they are.
pub fn clean_descriptions(rows: Vec<RawRow>) -> Vec<RawRow> {
    rows.into_iter()
        .map(|mut row| {
            let cleaned = normalize_markup(row.get_or_empty(secondary::DESCRIPTION));
            row.insert(secondary::DESCRIPTION, cleaned);
            row
        })
        .collect()
}
