//! Data model for issue tracker migration.
//!
//! This crate defines the shapes that flow through a migration run:
//!
//! - **row**: [`RawRow`], one loosely-typed row of a source export
//! - **columns**: source and target column names
//! - **enriched**: [`EnrichedFields`], the per-issue data joined in from the secondary table
//! - **output**: [`OutputRow`], the fixed nine-column import record
//! - **config**: [`MigrationConfig`] and [`PriorityMap`], injected into the pipeline
//! - **report**: [`RowIssue`] and [`MigrationReport`] for recovered row-level problems

pub mod columns;
mod config;
mod enriched;
mod error;
mod output;
mod report;
mod row;

pub use config::{
    DEFAULT_ISSUE_BASE_URL, DEFAULT_LINK_LABEL, DEFAULT_WORK_ITEM_TYPE, MigrationConfig,
    PriorityMap, UrlPattern,
};
pub use enriched::{EnrichedFields, NO_ATTACHMENTS, NO_DESCRIPTION, NOT_PROVIDED};
pub use error::ConfigError;
pub use output::{OUTPUT_COLUMNS, OutputRow};
pub use report::{MigrationReport, RowIssue, SourceTable};
pub use row::RawRow;
