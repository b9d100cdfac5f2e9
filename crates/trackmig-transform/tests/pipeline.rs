//! End-to-end tests of the join and mapping passes.

use trackmig_model::{
    MigrationConfig, OUTPUT_COLUMNS, PriorityMap, RawRow, SourceTable, UrlPattern,
};
use trackmig_transform::{Pipeline, normalize_date};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs.iter().copied().collect()
}

fn primary_rows() -> Vec<RawRow> {
    vec![
        row(&[
            ("Issue key", "APP-1"),
            ("Summary", "Login fails"),
            ("Assignee", "Dana"),
            ("Reporter", "Lee"),
            ("Priority", "Highest"),
            ("Status", "Open"),
            ("Created", "11/Mar/25 1:31 PM"),
            ("Updated", "12/Mar/25 10:02 AM"),
        ]),
        row(&[("Issue key", ""), ("Summary", "orphan")]),
        row(&[
            ("Issue key", "APP-2"),
            ("Summary", "Typo"),
            ("Priority", "Lowest"),
            ("Created", "03/Feb/24 11:59 PM"),
            ("Updated", "sometime"),
        ]),
    ]
}

fn secondary_rows() -> Vec<RawRow> {
    vec![row(&[
        ("Issue key", "APP-1"),
        ("Description", "h3. *Observed:*\nThe *login* button spins."),
        ("Environment", "Chrome 120"),
        (
            "Attachment",
            "01/Mar/25 9:00 AM;dana;a.png;https://t.example/a.png https://t.example/b.log",
        ),
    ])]
}

#[test]
fn output_count_excludes_blank_keys() {
    let primary = primary_rows();
    let output = Pipeline::default().run(&primary, &secondary_rows());

    let blank = primary.iter().filter(|r| r.issue_key().is_none()).count();
    assert_eq!(output.rows.len(), primary.len() - blank);
    assert_eq!(output.report.skipped_rows(SourceTable::Primary), blank);
}

#[test]
fn matched_row_fields() {
    let output = Pipeline::default().run(&primary_rows(), &secondary_rows());
    let first = &output.rows[0];

    assert_eq!(first.priority, "1");
    assert_eq!(first.created_date, "2025-03-11T13:31:00");
    assert_eq!(first.changed_date, "2025-03-12T10:02:00");
    assert_eq!(
        first.description,
        "### Description\n**Observed:**\nThe _login_ button spins.\n\n\
         ### Environment\nChrome 120\n\n\
         ### Original Issue\n[View in Jira](https://microtec.atlassian.net/browse/APP-1)\n\n\
         ### Attachments\nhttps://t.example/a.png\nhttps://t.example/b.log"
    );
}

#[test]
fn unmatched_row_uses_placeholders_and_keeps_bad_date_row() {
    let output = Pipeline::default().run(&primary_rows(), &secondary_rows());
    let second = &output.rows[1];

    assert_eq!(second.title, "Typo");
    assert_eq!(second.priority, "4");
    assert_eq!(second.created_date, "2024-02-03T23:59:00");
    assert_eq!(second.changed_date, "");
    assert!(second.description.contains("### Description\nNo description available."));
    assert!(second.description.contains("### Environment\nNot Provided"));
    assert!(second.description.ends_with("### Attachments\nNo Attachments"));
    assert_eq!(output.report.invalid_dates(), 1);
    assert_eq!(output.report.unmatched_keys, 1);
}

#[test]
fn description_sections_in_fixed_order() {
    let output = Pipeline::default().run(&primary_rows(), &secondary_rows());
    for record in &output.rows {
        let sections: Vec<&str> = record
            .description
            .split("\n\n")
            .filter_map(|part| part.lines().next())
            .collect();
        assert_eq!(
            sections,
            vec![
                "### Description",
                "### Environment",
                "### Original Issue",
                "### Attachments"
            ]
        );
    }
}

#[test]
fn every_row_has_all_columns() {
    let output = Pipeline::default().run(&primary_rows(), &[]);
    for record in &output.rows {
        for column in OUTPUT_COLUMNS {
            assert!(record.field(column).is_some(), "missing {column}");
        }
    }
}

#[test]
fn rerun_is_identical() {
    let pipeline = Pipeline::default();
    let first = pipeline.run(&primary_rows(), &secondary_rows());
    let second = pipeline.run(&primary_rows(), &secondary_rows());
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.report, second.report);
}

#[test]
fn injected_config_changes_target_values() {
    let priorities = PriorityMap::new(
        [("Highest", "Critical"), ("Medium", "Normal"), ("Low", "Minor")],
        "Medium",
    )
    .unwrap();
    let config = MigrationConfig::new()
        .with_issue_base_url("https://jira.internal.example/browse/")
        .unwrap()
        .with_work_item_type("Issue")
        .with_link_label("Source issue")
        .with_priorities(priorities)
        .with_url_pattern(UrlPattern::Whitespace);
    let output = Pipeline::new(config).run(&primary_rows(), &secondary_rows());

    assert_eq!(output.rows[0].work_item_type, "Issue");
    assert_eq!(output.rows[0].priority, "Critical");
    assert_eq!(output.rows[1].priority, "Normal");
    assert!(
        output.rows[0]
            .description
            .contains("[Source issue](https://jira.internal.example/browse/APP-1)")
    );
    assert!(
        output.rows[0]
            .description
            .ends_with("### Attachments\nhttps://t.example/a.png\nhttps://t.example/b.log")
    );
}

#[test]
fn loose_url_pattern_keeps_semicolon_suffix() {
    let secondary = vec![row(&[
        ("Issue key", "APP-1"),
        ("Attachment", "https://t.example/a.png;dana"),
    ])];
    let strict = Pipeline::default().run(&primary_rows(), &secondary);
    let loose = Pipeline::new(MigrationConfig::new().with_url_pattern(UrlPattern::Whitespace))
        .run(&primary_rows(), &secondary);

    assert!(strict.rows[0].description.ends_with("\nhttps://t.example/a.png"));
    assert!(loose.rows[0].description.ends_with("\nhttps://t.example/a.png;dana"));
}

#[test]
fn normalize_date_examples() {
    assert_eq!(normalize_date("11/Mar/25 1:31 PM"), "2025-03-11T13:31:00");
    assert_eq!(normalize_date("not a date"), "");
    assert_eq!(normalize_date(""), "");
}
