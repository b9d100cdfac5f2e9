//! Reading export files in the encodings trackers produce.

use std::path::Path;

use tempfile::TempDir;
use trackmig_ingest::{IngestError, read_csv_table, write_output_rows};

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn utf16_export_with_bom() {
    let dir = TempDir::new().unwrap();
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Issue key,Summary\r\nAPP-1,Überprüfung\r\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let path = write_file(&dir, "export.csv", &bytes);

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.encoding, "UTF-16LE");
    assert_eq!(table.rows[0].get("Summary"), Some("Überprüfung"));
}

#[test]
fn utf8_export_with_multiline_descriptions() {
    let dir = TempDir::new().unwrap();
    let content = "Issue key,Description,Environment,Attachment\n\
                   APP-1,\"h3. *Steps:*\n# open\n# click\",Prod,https://t.example/a.png\n\
                   APP-2,,,\n";
    let path = write_file(&dir, "all_fields.csv", content.as_bytes());

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows[0].get("Description"),
        Some("h3. *Steps:*\n# open\n# click")
    );
    assert_eq!(table.rows[1].get("Environment"), Some(""));
}

#[test]
fn invalid_utf8_after_bom_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.csv", b"\xEF\xBB\xBFIssue key\n\xFF\xFE\xFD\n");
    let err = read_csv_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
    assert!(err.to_string().starts_with("could not decode"));
}

#[test]
fn missing_input_is_reported_with_path() {
    let err = read_csv_table(Path::new("no/such/default_fields.csv")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CSV file not found: no/such/default_fields.csv"
    );
}

#[test]
fn unwritable_output_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = write_file(&dir, "not_a_dir", b"");
    let err = write_output_rows(&blocker.join("out.csv"), &[]).unwrap_err();
    assert!(matches!(err, IngestError::FileWrite { .. }));
}
