use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::{info, info_span, warn};

use trackmig_ingest::{CsvTable, read_csv_table, write_output_rows, write_raw_rows};
use trackmig_model::MigrationConfig;
use trackmig_model::columns::secondary;
use trackmig_transform::{Pipeline, clean_descriptions};

use crate::summary::{align_column, apply_table_style, header_cell};
use crate::types::{CleanResult, InputSummary, MigratePaths, MigrateResult};

fn load(path: &Path, label: &str) -> Result<CsvTable> {
    read_csv_table(path).with_context(|| format!("read {label} export"))
}

fn input_summary(path: &Path, table: &CsvTable) -> InputSummary {
    InputSummary {
        path: path.to_path_buf(),
        encoding: table.encoding,
        rows: table.len(),
    }
}

/// Runs a full migration: load both exports, join, map and write the
/// import file.
pub fn run_migrate(paths: &MigratePaths, config: MigrationConfig) -> Result<MigrateResult> {
    let span = info_span!("migrate", output = %paths.output.display());
    let _guard = span.enter();
    let start = Instant::now();

    let primary = load(&paths.default_fields, "default-fields")?;
    let secondary = load(&paths.all_fields, "all-fields")?;

    let output = Pipeline::new(config).run(&primary.rows, &secondary.rows);

    write_output_rows(&paths.output, &output.rows).context("write import file")?;
    info!(
        rows = output.rows.len(),
        path = %paths.output.display(),
        "migration complete"
    );

    Ok(MigrateResult {
        default_fields: input_summary(&paths.default_fields, &primary),
        all_fields: input_summary(&paths.all_fields, &secondary),
        output: paths.output.clone(),
        report: output.report,
        elapsed: start.elapsed(),
    })
}

/// Rewrites the Description column of one export, keeping every other
/// column and the header order.
pub fn run_clean_descriptions(input: &Path, output: &Path) -> Result<CleanResult> {
    let span = info_span!("clean_descriptions", input = %input.display());
    let _guard = span.enter();

    let table = load(input, "input")?;
    let summary = input_summary(input, &table);
    let had_description = table.has_column(secondary::DESCRIPTION);
    let mut headers = table.headers;
    if !had_description {
        warn!(
            path = %input.display(),
            "no Description column; every description becomes the placeholder"
        );
        headers.push(secondary::DESCRIPTION.to_string());
    }

    let rows = clean_descriptions(table.rows);
    write_raw_rows(output, &headers, &rows).context("write cleaned CSV")?;

    Ok(CleanResult {
        input: summary,
        output: output.to_path_buf(),
        had_description,
    })
}

/// The active priority mapping as a display table.
pub fn priority_table(config: &MigrationConfig) -> Table {
    let priorities = config.priorities();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Jira priority"),
        header_cell("Azure DevOps priority"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (severity, code) in priorities.iter() {
        let label = if severity == priorities.fallback() {
            format!("{severity} (fallback)")
        } else {
            severity.to_string()
        };
        table.add_row(vec![label, code.to_string()]);
    }
    table
}

pub fn run_priorities(config: &MigrationConfig) -> Result<()> {
    println!("{}", priority_table(config));
    Ok(())
}
