/// Tests for the publishing pipeline
///
/// These write into temporary directories and check which files exist
/// afterwards, including the per-document isolation of failures.

#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, ReportError};
    use crate::publisher::*;
    use crate::report::{CHART_FILE, OVERVIEW_FILE, RenderContext, STATISTICS_FILE};
    use std::fs;

    const ONE_FEATURE: &str = r#"[{"name": "Search", "uri": "web/search.feature", "elements": [
      {"keyword": "Scenario", "name": "By keyword", "steps": [
        {"keyword": "Given ", "name": "the home page", "result": {"status": "passed"}},
        {"keyword": "When ", "name": "I search", "result": {"status": "failed", "error_message": "timeout after 30s"}}
      ]}
    ]}]"#;

    #[test]
    fn test_empty_input_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let target = PublishTarget::new(dir.path(), "p", "1");
        let mut calls = 0;

        let err = publish(&[], &target, |_| calls += 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(calls, 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_publish_writes_all_documents() {
        let dir = tempfile::tempdir().unwrap();
        let target = PublishTarget::new(dir.path(), "web", "12");

        let outcomes = publish(&[ResultDocument::new("search.json", ONE_FEATURE)], &target, |_| {}).unwrap();

        assert_eq!(outcomes.len(), 1);
        let report = outcomes[0].result.as_ref().unwrap();
        assert_eq!(report.written.len(), 3);
        assert_eq!(report.totals.failed, 1);

        assert!(dir.path().join("web-search.feature.html").exists());
        assert!(dir.path().join(OVERVIEW_FILE).exists());
        assert!(dir.path().join(CHART_FILE).exists());
        assert!(!dir.path().join(STATISTICS_FILE).exists());

        let page = fs::read_to_string(dir.path().join("web-search.feature.html")).unwrap();
        assert!(page.contains("timeout after 30s"));
    }

    #[test]
    fn test_bad_document_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        let target = PublishTarget::new(dir.path(), "web", "12");
        let docs = vec![ResultDocument::new("broken.json", "{not json"), ResultDocument::new("search.json", ONE_FEATURE)];
        let mut seen = Vec::new();

        let outcomes = publish(&docs, &target, |o| seen.push((o.document.clone(), o.is_success()))).unwrap();

        assert_eq!(seen, vec![("broken.json".to_string(), false), ("search.json".to_string(), true)]);
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.document(), Some("broken.json"));
        assert!(dir.path().join("web-search.feature.html").exists());
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = PublishTarget::new(dir.path(), "web", "12");

        let outcomes = publish(&[ResultDocument::new("shape.json", r#"[{"uri": "x.feature"}]"#)], &target, |_| {}).unwrap();

        assert!(matches!(outcomes[0].result, Err(ReportError::Shape { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let target = PublishTarget::new(&missing, "web", "12");

        let outcomes = publish(&[ResultDocument::new("search.json", ONE_FEATURE)], &target, |_| {}).unwrap();

        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!missing.exists(), "output directory must not be created");
    }

    #[test]
    fn test_dump_statistics() {
        let dir = tempfile::tempdir().unwrap();
        let mut target = PublishTarget::new(dir.path(), "web", "12");
        target.dump_statistics = true;

        publish(&[ResultDocument::new("search.json", ONE_FEATURE)], &target, |_| {}).unwrap();

        let dump: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(STATISTICS_FILE)).unwrap()).unwrap();
        assert_eq!(dump["totals"]["steps"], 2);
        assert_eq!(dump["features"][0]["status"], "failed");
        assert_eq!(dump["features"][0]["file"], "web-search.feature");
    }

    #[test]
    fn test_republish_is_identical_for_fixed_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RenderContext::new("web", "12", "2026-10-17 10:00:00 +0000");
        let doc = ResultDocument::new("search.json", ONE_FEATURE);

        let first = publish_document(&doc, dir.path(), &ctx, false).unwrap();
        let snapshot: Vec<String> = first.written.iter().map(|p| fs::read_to_string(p).unwrap()).collect();

        let second = publish_document(&doc, dir.path(), &ctx, false).unwrap();
        let again: Vec<String> = second.written.iter().map(|p| fs::read_to_string(p).unwrap()).collect();

        assert_eq!(first.written, second.written);
        assert_eq!(snapshot, again);
    }
}
