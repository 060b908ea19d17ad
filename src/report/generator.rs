//! Substitutes the dynamic fields into the template

use super::template::{template, GENERATED_PLACEHOLDER, TEST_STATUS_PLACEHOLDER};
use crate::error::Result;
use crate::models::{Report, ReportFields};
use crate::validator;

/// Render the report for the given fields.
///
/// Pure apart from the validation pass: identical fields always yield
/// identical content.
pub fn render(fields: &ReportFields) -> Result<Report> {
    let content = template()
        .replace(GENERATED_PLACEHOLDER, &fields.generated)
        .replace(TEST_STATUS_PLACEHOLDER, fields.test_status.as_str());

    validator::validate_rendered(&content)?;

    Ok(Report {
        fields: fields.clone(),
        content,
    })
}
