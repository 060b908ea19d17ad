//! Output placement: dist directory, file naming, and the single write

pub mod writer;

pub use writer::{ensure_dist_dir, report_path, write_report};

/// What to do when the computed report path already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CollisionPolicy {
    /// Append `-1`, `-2`, ... before the extension until a free name is found
    #[default]
    Suffix,
    /// Replace the existing file
    Overwrite,
    /// Fail and leave the existing file alone
    Error,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::Suffix => write!(f, "suffix"),
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Error => write!(f, "error"),
        }
    }
}
