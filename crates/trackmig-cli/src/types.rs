use std::path::PathBuf;
use std::time::Duration;

use trackmig_model::MigrationReport;

/// Input and output locations of a migration run.
#[derive(Debug, Clone)]
pub struct MigratePaths {
    pub default_fields: PathBuf,
    pub all_fields: PathBuf,
    pub output: PathBuf,
}

/// One loaded input file.
#[derive(Debug, Clone)]
pub struct InputSummary {
    pub path: PathBuf,
    pub encoding: &'static str,
    pub rows: usize,
}

#[derive(Debug)]
pub struct MigrateResult {
    pub default_fields: InputSummary,
    pub all_fields: InputSummary,
    pub output: PathBuf,
    pub report: MigrationReport,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct CleanResult {
    pub input: InputSummary,
    pub output: PathBuf,
    /// False when the input had no Description column.
    pub had_description: bool,
}
