//! Statistics aggregation for a loaded feature tree.
//!
//! This is the only place where scenario and feature statuses are derived.
//! The renderer reads every count and status from `Statistics` and never
//! walks the steps itself, so the detail pages and the overview agree.

use crate::types::{Feature, Scenario, Status, Step, StepStatus};

/// Run-level counters
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Totals {
    pub features: usize,
    pub scenarios: usize,
    pub steps: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Per-feature rollup
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FeatureStats {
    pub name: String,
    pub scenarios: usize,
    pub steps: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub status: Status,
    pub file: String,
    /// Derived status of each scenario, in document order
    pub scenario_statuses: Vec<Status>,
}

/// Aggregated statistics for one result document
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Statistics {
    pub totals: Totals,
    pub features: Vec<FeatureStats>,
}

/// A scenario failed iff at least one of its steps failed.
pub fn scenario_status(steps: &[Step]) -> Status {
    if steps.iter().any(|s| s.status == StepStatus::Failed) { Status::Failed } else { Status::Passed }
}

/// A feature failed iff at least one of its scenarios failed.
pub fn feature_status(scenarios: &[Scenario]) -> Status {
    if scenarios.iter().any(|s| scenario_status(&s.steps) == Status::Failed) {
        Status::Failed
    } else {
        Status::Passed
    }
}

/// Count steps in `scenarios` whose raw status is exactly `status`
fn count_steps(scenarios: &[Scenario], status: &StepStatus) -> usize {
    scenarios.iter().flat_map(|s| s.steps.iter()).filter(|step| step.status == *status).count()
}

/// Compute per-feature and run-level statistics.
///
/// Only `passed`, `failed` and `skipped` have bucket counters. Steps with
/// any other raw status still count toward `steps`, so the buckets may sum
/// to less than the step total.
pub fn aggregate(features: &[Feature]) -> Statistics {
    let feature_stats: Vec<FeatureStats> = features
        .iter()
        .map(|feature| FeatureStats {
            name: feature.name.clone(),
            scenarios: feature.scenarios.len(),
            steps: feature.step_count(),
            passed: count_steps(&feature.scenarios, &StepStatus::Passed),
            failed: count_steps(&feature.scenarios, &StepStatus::Failed),
            skipped: count_steps(&feature.scenarios, &StepStatus::Skipped),
            status: feature_status(&feature.scenarios),
            file: feature.file.clone(),
            scenario_statuses: feature.scenarios.iter().map(|s| scenario_status(&s.steps)).collect(),
        })
        .collect();

    let totals = Totals {
        features: feature_stats.len(),
        scenarios: feature_stats.iter().map(|f| f.scenarios).sum(),
        steps: feature_stats.iter().map(|f| f.steps).sum(),
        passed: feature_stats.iter().map(|f| f.passed).sum(),
        failed: feature_stats.iter().map(|f| f.failed).sum(),
        skipped: feature_stats.iter().map(|f| f.skipped).sum(),
    };

    Statistics { totals, features: feature_stats }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
