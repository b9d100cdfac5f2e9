//! CSV loading into row maps.

use std::path::Path;

use tracing::{debug, info};
use trackmig_model::RawRow;

use crate::encoding::decode;
use crate::error::{IngestError, Result};

/// A fully loaded CSV file.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Header names in file order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    /// Name of the encoding the file was decoded with.
    pub encoding: &'static str,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// Reads a CSV file with a single header row into row maps.
///
/// The encoding is detected from the bytes. Short rows leave trailing
/// columns absent; cells beyond the header width are ignored; a repeated
/// header keeps the rightmost cell.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let decoded = decode(&bytes, path)?;
    let encoding = decoded.encoding.name();
    info!(path = %path.display(), encoding, "detected encoding");

    let (headers, rows) = parse_csv_text(&decoded.text, path)?;
    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded CSV"
    );

    Ok(CsvTable {
        headers,
        rows,
        encoding,
    })
}

/// Parses decoded CSV text. `path` is used only for error context.
pub fn parse_csv_text(text: &str, path: &Path) -> Result<(Vec<String>, Vec<RawRow>)> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok((headers, rows))
}
