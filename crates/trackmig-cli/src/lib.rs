//! CLI library components for the tracker migration tool.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
