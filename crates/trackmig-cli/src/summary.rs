use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trackmig_model::{RowIssue, SourceTable};

use crate::types::{CleanResult, InputSummary, MigrateResult};

/// Issues listed individually before the table is cut short.
const MAX_LISTED_ISSUES: usize = 20;

pub fn print_summary(result: &MigrateResult) {
    println!("Output: {}", result.output.display());
    println!("Elapsed: {:.2?}", result.elapsed);
    println!("{}", input_table(&[&result.default_fields, &result.all_fields]));

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Issues enriched"),
        Cell::new(report.enriched_issues),
    ]);
    table.add_row(vec![
        Cell::new("Rows written").add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Without secondary data"),
        count_cell(report.unmatched_keys, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (primary)"),
        count_cell(report.skipped_rows(SourceTable::Primary), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (secondary)"),
        count_cell(report.skipped_rows(SourceTable::Secondary), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Invalid dates"),
        count_cell(report.invalid_dates(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Fallback priorities"),
        count_cell(report.unknown_priorities(), Color::Yellow),
    ]);
    println!("{table}");
    print_issue_table(&report.issues);
}

pub fn print_clean_summary(result: &CleanResult) {
    println!("Output: {}", result.output.display());
    println!("{}", input_table(&[&result.input]));
    if !result.had_description {
        eprintln!("warning: input had no Description column");
    }
}

fn input_table(inputs: &[&InputSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Encoding"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for input in inputs {
        table.add_row(vec![
            Cell::new(input.path.display()),
            Cell::new(input.encoding),
            Cell::new(input.rows),
        ]);
    }
    table
}

fn print_issue_table(issues: &[RowIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Detail")]);
    apply_table_style(&mut table);
    for issue in issues.iter().take(MAX_LISTED_ISSUES) {
        table.add_row(vec![kind_cell(issue), Cell::new(issue.to_string())]);
    }
    if issues.len() > MAX_LISTED_ISSUES {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(format!("{} more", issues.len() - MAX_LISTED_ISSUES)),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn kind_cell(issue: &RowIssue) -> Cell {
    match issue {
        RowIssue::MissingKey { .. } => Cell::new("skipped").fg(Color::Red),
        RowIssue::InvalidDate { .. } => Cell::new("date").fg(Color::Yellow),
        RowIssue::UnknownPriority { .. } => dim_cell("priority"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
