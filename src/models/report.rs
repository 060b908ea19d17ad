//! Rendered report and the values that go into it

use super::{TestStatus, Timestamp};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// The two dynamic fields substituted into the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFields {
    pub generated: String,
    pub test_status: TestStatus,
}

impl ReportFields {
    pub fn new(generated: impl Into<String>, test_status: TestStatus) -> Self {
        Self {
            generated: generated.into(),
            test_status,
        }
    }

    pub fn at(timestamp: &Timestamp, test_status: TestStatus) -> Self {
        Self::new(timestamp.display(), test_status)
    }
}

/// A fully rendered report. Only constructed by `report::render`,
/// which guarantees no placeholder tokens remain in `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub(crate) fields: ReportFields,
    pub(crate) content: String,
}

impl Report {
    pub fn fields(&self) -> &ReportFields {
        &self.fields
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReport {
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub generated: String,
    pub test_status: TestStatus,
}

/// Same text as the plain-path output, so non-UTF-8 paths never fail
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.display().to_string())
}
