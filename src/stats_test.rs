/// Tests for statistics aggregation and status derivation

#[cfg(test)]
mod tests {
    use crate::stats::*;
    use crate::types::*;

    fn step(status: &str) -> Step {
        Step { name: format!("step {}", status), status: StepStatus::from_raw(status), error_message: String::new() }
    }

    fn scenario(statuses: &[&str]) -> Scenario {
        Scenario { name: "scenario".to_string(), tags: String::new(), steps: statuses.iter().map(|s| step(s)).collect() }
    }

    fn feature(file: &str, scenarios: Vec<Scenario>) -> Feature {
        Feature {
            name: file.to_string(),
            file: file.to_string(),
            description: String::new(),
            tags: String::new(),
            scenarios,
        }
    }

    #[test]
    fn test_scenario_status_empty_is_passed() {
        assert_eq!(scenario_status(&[]), Status::Passed);
    }

    #[test]
    fn test_scenario_status_failed_iff_any_failed() {
        let cases: &[(&[&str], Status)] = &[
            (&["passed", "passed"], Status::Passed),
            (&["passed", "failed"], Status::Failed),
            (&["failed"], Status::Failed),
            (&["skipped", "undefined", "pending"], Status::Passed),
            (&["skipped", "failed", "skipped"], Status::Failed),
            (&["FAILED"], Status::Passed),
        ];
        for (statuses, expected) in cases {
            assert_eq!(scenario_status(&scenario(statuses).steps), *expected, "statuses: {:?}", statuses);
        }
    }

    #[test]
    fn test_feature_status_one_level_up() {
        assert_eq!(feature_status(&[]), Status::Passed);
        assert_eq!(feature_status(&[scenario(&["passed"]), scenario(&[])]), Status::Passed);
        assert_eq!(feature_status(&[scenario(&["passed"]), scenario(&["failed"])]), Status::Failed);
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats.totals, Totals::default());
        assert!(stats.features.is_empty());
    }

    #[test]
    fn test_aggregate_feature_without_scenarios() {
        let stats = aggregate(&[feature("empty.feature", vec![])]);
        assert_eq!(stats.totals.features, 1);
        assert_eq!(stats.totals.scenarios, 0);
        assert_eq!(stats.features[0].steps, 0);
        assert_eq!(stats.features[0].status, Status::Passed);
    }

    #[test]
    fn test_aggregate_counts() {
        let features = vec![
            feature("a.feature", vec![scenario(&["passed", "passed"]), scenario(&["passed", "failed", "skipped"])]),
            feature("b.feature", vec![scenario(&["skipped", "passed"])]),
        ];
        let stats = aggregate(&features);

        assert_eq!(
            stats.totals,
            Totals { features: 2, scenarios: 3, steps: 7, passed: 4, failed: 1, skipped: 2 }
        );

        let a = &stats.features[0];
        assert_eq!((a.scenarios, a.steps, a.passed, a.failed, a.skipped), (2, 5, 3, 1, 1));
        assert_eq!(a.status, Status::Failed);
        assert_eq!(a.scenario_statuses, vec![Status::Passed, Status::Failed]);
        assert_eq!(a.file, "a.feature");

        let b = &stats.features[1];
        assert_eq!(b.status, Status::Passed);
        assert_eq!(b.scenario_statuses, vec![Status::Passed]);
    }

    #[test]
    fn test_other_statuses_count_only_toward_steps() {
        let features = vec![feature("x.feature", vec![scenario(&["passed", "undefined", "pending", "ambiguous", ""])])];
        let totals = aggregate(&features).totals;
        assert_eq!(totals.steps, 5);
        assert_eq!(totals.passed + totals.failed + totals.skipped, 1);
    }

    #[test]
    fn test_bucket_sum_equals_steps_for_known_statuses() {
        let features = vec![
            feature("a.feature", vec![scenario(&["passed", "failed"]), scenario(&["skipped"])]),
            feature("b.feature", vec![scenario(&["failed", "failed", "passed"])]),
        ];
        let stats = aggregate(&features);
        let bucket_sum: usize = stats.features.iter().map(|f| f.passed + f.failed + f.skipped).sum();
        assert_eq!(bucket_sum, stats.totals.steps);
        assert_eq!(bucket_sum, stats.totals.passed + stats.totals.failed + stats.totals.skipped);
    }

    #[test]
    fn test_feature_order_preserved() {
        let features = vec![feature("z.feature", vec![]), feature("a.feature", vec![]), feature("m.feature", vec![])];
        let files: Vec<_> = aggregate(&features).features.into_iter().map(|f| f.file).collect();
        assert_eq!(files, vec!["z.feature", "a.feature", "m.feature"]);
    }
}
