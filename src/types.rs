/// Core data structures for a cucumber run
///
/// This module defines the feature tree produced by the loader. Text fields
/// hold presentation fragments that were rendered at load time; statuses of
/// scenarios and features are not stored here, they are derived once by the
/// `stats` module.

/// Raw status of a single step, as reported by the cucumber runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Undefined,
    Pending,
    /// Any other raw value, kept verbatim (may be empty)
    Other(String),
}

impl StepStatus {
    /// Parse a raw status string. Matching is exact and case-sensitive.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "passed" => StepStatus::Passed,
            "failed" => StepStatus::Failed,
            "skipped" => StepStatus::Skipped,
            "undefined" => StepStatus::Undefined,
            "pending" => StepStatus::Pending,
            other => StepStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StepStatus::Passed => "passed",
            StepStatus::Failed => "failed",
            StepStatus::Skipped => "skipped",
            StepStatus::Undefined => "undefined",
            StepStatus::Pending => "pending",
            StepStatus::Other(raw) => raw,
        }
    }
}

impl serde::Serialize for StepStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Derived status of a scenario or feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }
}

/// A single step (leaf of the tree)
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Step {
    pub name: String, // rendered keyword + text, may be empty
    pub status: StepStatus,
    pub error_message: String, // empty if none
}

/// A scenario and its steps, in document order
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Scenario {
    pub name: String,
    pub tags: String,
    pub steps: Vec<Step>,
}

/// A feature and its scenarios, in document order
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Feature {
    pub name: String,
    /// Filesystem-safe identifier derived from the feature's URI
    pub file: String,
    pub description: String,
    pub tags: String,
    pub scenarios: Vec<Scenario>,
}

impl Feature {
    /// Total number of steps across all scenarios
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}
