//! CSV reading and writing.

mod reader;
mod writer;

pub use reader::{CsvTable, parse_csv_text, read_csv_table};
pub use writer::{write_output_rows, write_raw_rows};
