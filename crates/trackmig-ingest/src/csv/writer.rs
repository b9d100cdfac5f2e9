//! CSV writing of import records and cleaned tables.
//!
//! Output is always UTF-8 without BOM, CRLF line endings, quoting only
//! where needed. The header is written even when there are no rows.

use std::fs::File;
use std::path::Path;

use tracing::info;
use trackmig_model::{OUTPUT_COLUMNS, OutputRow, RawRow};

use crate::error::{IngestError, Result};

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IngestError::write(parent, e))?;
    }
    let file = File::create(path).map_err(|e| IngestError::write(path, e))?;
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file))
}

fn finish(mut writer: csv::Writer<File>, path: &Path) -> Result<()> {
    writer.flush().map_err(|e| IngestError::write(path, e))
}

/// Writes import records under the fixed nine-column header.
pub fn write_output_rows(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let csv_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = create_writer(path)?;
    writer.write_record(OUTPUT_COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    finish(writer, path)?;

    info!(path = %path.display(), rows = rows.len(), "wrote import file");
    Ok(())
}

/// Writes rows under `headers`, in header order. Cells a row lacks are
/// written empty; columns not in `headers` are dropped.
pub fn write_raw_rows(path: &Path, headers: &[String], rows: &[RawRow]) -> Result<()> {
    let csv_error = |source| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = create_writer(path)?;
    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record(headers.iter().map(|h| row.get_or_empty(h)))
            .map_err(csv_error)?;
    }
    finish(writer, path)?;

    info!(path = %path.display(), rows = rows.len(), "wrote CSV");
    Ok(())
}
