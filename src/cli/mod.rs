//! Command-line surface

pub mod args;
pub mod logging;

pub use args::Cli;
pub use logging::init_logging;

use crate::{generate_report, GeneratedReport};
use anyhow::{Context, Result};

/// Run one invocation and return the line to print on stdout
pub fn run(cli: &Cli) -> Result<String> {
    let options = cli.to_options();
    let generated = generate_report(&options).with_context(|| {
        format!("failed to generate report in {}", options.dist_dir.display())
    })?;
    format_output(&generated, cli.json)
}

fn format_output(generated: &GeneratedReport, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(generated).context("failed to serialize report summary")
    } else {
        Ok(generated.path.display().to_string())
    }
}
