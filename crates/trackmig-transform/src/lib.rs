//! Issue migration transforms.
//!
//! - **text**: source markup to Markdown, attachment URL extraction
//! - **datetime**: source timestamp parsing and ISO 8601 output
//! - **join**: secondary-table lookup by issue key
//! - **mapper**: primary row to import record
//! - **pipeline**: join then map, with a run report

pub mod datetime;
pub mod join;
pub mod mapper;
pub mod pipeline;
pub mod text;

pub use datetime::{DateParseError, normalize_date, parse_source_date};
pub use join::{IssueLookup, JoinOutcome, build_lookup, enrich_row};
pub use mapper::{MappedRow, RowMapper, build_description};
pub use pipeline::{MigrationOutput, Pipeline, clean_descriptions};
pub use text::{extract_urls, normalize_markup};
