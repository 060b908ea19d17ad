//! Validation of rendered output

pub mod placeholders;

pub use placeholders::find_placeholders;

use crate::error::{ReportError, Result};

/// Fail if any substitution marker survived rendering
pub fn validate_rendered(content: &str) -> Result<()> {
    let tokens = find_placeholders(content);
    if tokens.is_empty() {
        Ok(())
    } else {
        Err(ReportError::UnresolvedPlaceholder { tokens })
    }
}
