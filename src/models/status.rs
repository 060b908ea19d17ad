//! Test status carried into the report body

use serde::Serialize;

/// Whether the simulator's test suite most recently passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    #[default]
    #[serde(rename = "not recorded")]
    NotRecorded,
}

impl TestStatus {
    pub fn from_flag(tests_passed: bool) -> Self {
        if tests_passed {
            TestStatus::Passed
        } else {
            TestStatus::NotRecorded
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::NotRecorded => "not recorded",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(TestStatus::from_flag(true), TestStatus::Passed);
        assert_eq!(TestStatus::from_flag(false), TestStatus::NotRecorded);
    }

    #[test]
    fn test_display() {
        assert_eq!(TestStatus::Passed.to_string(), "passed");
        assert_eq!(TestStatus::NotRecorded.to_string(), "not recorded");
    }

    #[test]
    fn test_serialized_form_matches_display() {
        for status in [TestStatus::Passed, TestStatus::NotRecorded] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
