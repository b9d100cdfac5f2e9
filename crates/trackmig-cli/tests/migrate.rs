//! Integration tests for the migrate and clean-descriptions commands.

use std::path::Path;

use tempfile::TempDir;
use trackmig_cli::commands::{run_clean_descriptions, run_migrate};
use trackmig_cli::types::MigratePaths;
use trackmig_model::MigrationConfig;

const DEFAULT_FIELDS: &str = "\
Issue key,Summary,Assignee,Reporter,Priority,Status,Created,Updated
APP-1,Login fails,Ana,Ben,Highest,Open,11/Mar/25 1:31 PM,12/Mar/25 9:05 AM
,Orphan row,,,Low,Open,,
APP-2,Typo in footer,,Ben,Trivial,Done,not a date,
";

const ALL_FIELDS: &str = "\
Issue key,Description,Environment,Attachment
APP-1,\"h3. *Steps:*\n# open\n\n\n# click *save*\",Chrome,https://t.example/a.png https://t.example/b.log
";

fn setup(dir: &TempDir) -> MigratePaths {
    let input = dir.path().join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("default_fields.csv"), DEFAULT_FIELDS).unwrap();
    std::fs::write(input.join("all_fields.csv"), ALL_FIELDS).unwrap();
    MigratePaths {
        default_fields: input.join("default_fields.csv"),
        all_fields: input.join("all_fields.csv"),
        output: dir.path().join("output").join("azure_output.csv"),
    }
}

fn read_output(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(Result::unwrap).collect()
}

#[test]
fn migrate_writes_import_file() {
    let dir = TempDir::new().unwrap();
    let paths = setup(&dir);

    let result = run_migrate(&paths, MigrationConfig::default()).unwrap();

    assert_eq!(result.default_fields.rows, 3);
    assert_eq!(result.all_fields.rows, 1);
    assert_eq!(result.report.output_rows, 2);
    assert_eq!(result.report.unmatched_keys, 1);
    assert_eq!(result.report.invalid_dates(), 1);
    assert_eq!(result.report.unknown_priorities(), 1);

    let rows = read_output(&paths.output);
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert_eq!(&first[0], "Bug");
    assert_eq!(&first[1], "Login fails");
    assert_eq!(&first[4], "1");
    assert_eq!(&first[6], "2025-03-11T13:31:00");
    assert_eq!(&first[7], "2025-03-12T09:05:00");
    assert_eq!(
        &first[8],
        "### Description\n**Steps:**\n- open\n- click _save_\n\n\
         ### Environment\nChrome\n\n\
         ### Original Issue\n[View in Jira](https://microtec.atlassian.net/browse/APP-1)\n\n\
         ### Attachments\nhttps://t.example/a.png\nhttps://t.example/b.log"
    );

    let second = &rows[1];
    assert_eq!(&second[2], "");
    assert_eq!(&second[4], "3");
    assert_eq!(&second[6], "");
    assert!(second[8].contains("No description available."));
    assert!(second[8].ends_with("### Attachments\nNo Attachments"));
}

#[test]
fn migrate_output_is_byte_identical_on_rerun() {
    let dir = TempDir::new().unwrap();
    let paths = setup(&dir);

    run_migrate(&paths, MigrationConfig::default()).unwrap();
    let first = std::fs::read(&paths.output).unwrap();
    run_migrate(&paths, MigrationConfig::default()).unwrap();
    let second = std::fs::read(&paths.output).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(b"Work Item Type,Title,"));
}

#[test]
fn migrate_missing_input_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let mut paths = setup(&dir);
    paths.all_fields = dir.path().join("input").join("missing.csv");

    let err = run_migrate(&paths, MigrationConfig::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("read all-fields export"));
    assert!(message.contains("missing.csv"));
    assert!(!paths.output.exists());
}

#[test]
fn clean_descriptions_keeps_other_columns() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(
        &input,
        "Summary,Description,Issue key\nA,\"*bold* text\",APP-1\nB,,APP-2\n",
    )
    .unwrap();
    let output = dir.path().join("clean.csv");

    let result = run_clean_descriptions(&input, &output).unwrap();
    assert!(result.had_description);
    assert_eq!(result.input.rows, 2);

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Summary,Description,Issue key\r\nA,_bold_ text,APP-1\r\nB,No description available.,APP-2\r\n"
    );
}

#[test]
fn clean_descriptions_without_column_appends_it() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("export.csv");
    std::fs::write(&input, "Issue key\nAPP-1\n").unwrap();
    let output = dir.path().join("clean.csv");

    let result = run_clean_descriptions(&input, &output).unwrap();
    assert!(!result.had_description);

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Issue key,Description\r\nAPP-1,No description available.\r\n"
    );
}
