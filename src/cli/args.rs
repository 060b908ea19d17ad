//! Argument definitions

use crate::{CollisionPolicy, GenerateOptions, DEFAULT_DIST_DIR};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spec-vs-sim")]
#[command(about = "Generate spec-vs-sim report with timestamp.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark test status as passed
    #[arg(long)]
    pub tests_passed: bool,

    /// Output directory
    #[arg(long = "dist", value_name = "PATH", default_value = DEFAULT_DIST_DIR)]
    pub dist: PathBuf,

    /// What to do if a report with the same timestamp already exists
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Suffix)]
    pub on_collision: CollisionPolicy,

    /// Print a JSON summary instead of the bare path
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_options(&self) -> GenerateOptions {
        GenerateOptions {
            tests_passed: self.tests_passed,
            dist_dir: self.dist.clone(),
            on_collision: self.on_collision,
        }
    }

    /// Log level derived from `-v`/`-q`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
