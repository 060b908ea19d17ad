//! MINA spec-vs-simulator audit report generator
//!
//! Renders the fixed audit template with a generation timestamp and the
//! latest test status, then writes it to a timestamped file in a dist
//! directory.

pub mod models;
pub mod report;
pub mod validator;
pub mod output;
pub mod error;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{ReportError, Result};
pub use models::{GeneratedReport, Report, ReportFields, TestStatus, Timestamp};
pub use output::CollisionPolicy;

use std::path::PathBuf;
use tracing::info;

/// Default output directory, relative to the working directory
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub tests_passed: bool,
    pub dist_dir: PathBuf,
    pub on_collision: CollisionPolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            tests_passed: false,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            on_collision: CollisionPolicy::default(),
        }
    }
}

/// Main entry point: render and write the report stamped with the current local time
pub fn generate_report(options: &GenerateOptions) -> Result<GeneratedReport> {
    generate_report_at(options, &Timestamp::now())
}

/// Same as [`generate_report`] but for a caller-supplied instant
pub fn generate_report_at(
    options: &GenerateOptions,
    timestamp: &Timestamp,
) -> Result<GeneratedReport> {
    // 1. Fill in the dynamic fields
    let fields = ReportFields::at(timestamp, TestStatus::from_flag(options.tests_passed));

    // 2. Render (validates that no markers remain)
    let report = report::render(&fields)?;

    // 3. Write
    let path = output::write_report(
        &options.dist_dir,
        timestamp,
        &report,
        options.on_collision,
    )?;

    let written = report.fields();
    info!(
        path = %path.display(),
        test_status = %written.test_status,
        "report written"
    );

    Ok(GeneratedReport {
        path,
        generated: written.generated.clone(),
        test_status: written.test_status,
    })
}
