//! Issue export ingestion.
//!
//! This crate is the I/O side of a migration: it turns export files into
//! [`trackmig_model::RawRow`]s and writes [`trackmig_model::OutputRow`]s back
//! out. All failures here are fatal to a run.
//!
//! # Features
//!
//! - **Encoding detection**: BOM sniffing, then a `chardetng` guess
//! - **CSV loading**: single header row, ragged rows tolerated
//! - **CSV writing**: UTF-8 import file with the fixed output header
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use trackmig_ingest::{read_csv_table, write_output_rows};
//!
//! let table = read_csv_table(Path::new("input/default_fields.csv"))?;
//! println!("{} rows, {}", table.len(), table.encoding);
//! ```

mod csv;
mod encoding;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Encoding ===
pub use encoding::{DecodedText, decode, detect_encoding};

// === CSV Reading / Writing ===
pub use self::csv::{CsvTable, parse_csv_text, read_csv_table, write_output_rows, write_raw_rows};
