/// Report publishing - the single entry point of the pipeline
///
/// Each result document runs Loader -> Aggregator -> Renderer -> write on its
/// own. A document that fails to parse writes nothing; a document that fails
/// while writing keeps the files it already wrote. Either way the remaining
/// documents are still processed.
use crate::error::ReportError;
use crate::loader;
use crate::report::{self, RenderContext};
use crate::stats::{self, Totals};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// One raw result document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDocument {
    /// Identity used in logs and errors (usually the file name)
    pub id: String,
    pub contents: String,
}

impl ResultDocument {
    pub fn new(id: impl Into<String>, contents: impl Into<String>) -> Self {
        ResultDocument { id: id.into(), contents: contents.into() }
    }
}

/// Where and for whom the reports are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    /// Existing directory the documents are written into
    pub output_dir: PathBuf,
    pub project: String,
    pub build: String,
    /// Also write the aggregated statistics as JSON
    pub dump_statistics: bool,
}

impl PublishTarget {
    pub fn new(output_dir: impl Into<PathBuf>, project: &str, build: &str) -> Self {
        PublishTarget {
            output_dir: output_dir.into(),
            project: project.to_string(),
            build: build.to_string(),
            dump_statistics: false,
        }
    }
}

/// Summary of a successfully published document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    pub totals: Totals,
    pub written: Vec<PathBuf>,
}

/// Outcome of publishing one document
#[derive(Debug)]
pub struct DocumentOutcome {
    pub document: String,
    pub result: Result<DocumentReport, ReportError>,
}

impl DocumentOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Publish reports for every document, in order.
///
/// The callback is invoked for each document as soon as it completes.
/// Returns `ReportError::MissingInput` when `documents` is empty; every
/// other failure is reported per document in the returned outcomes.
pub fn publish<F>(
    documents: &[ResultDocument],
    target: &PublishTarget,
    mut on_outcome: F,
) -> Result<Vec<DocumentOutcome>, ReportError>
where
    F: FnMut(&DocumentOutcome),
{
    if documents.is_empty() {
        return Err(ReportError::MissingInput);
    }

    debug!("Publishing {} result documents into {}", documents.len(), target.output_dir.display());

    let mut outcomes = Vec::with_capacity(documents.len());
    for document in documents {
        let ctx = RenderContext::now(&target.project, &target.build);
        let outcome = DocumentOutcome {
            document: document.id.clone(),
            result: publish_document(document, &target.output_dir, &ctx, target.dump_statistics),
        };

        match &outcome.result {
            Ok(report) => info!("Published {} ({} files)", document.id, report.written.len()),
            Err(e) => warn!("Failed to publish {}: {}", document.id, e),
        }

        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Run the full pipeline for a single document
pub fn publish_document(
    document: &ResultDocument,
    output_dir: &Path,
    ctx: &RenderContext,
    dump_statistics: bool,
) -> Result<DocumentReport, ReportError> {
    let features = loader::load_features(&document.id, &document.contents)?;
    let statistics = stats::aggregate(&features);

    debug!(
        "{}: {} features, {} scenarios, {} steps",
        document.id, statistics.totals.features, statistics.totals.scenarios, statistics.totals.steps
    );

    let docs = report::render_all(&features, &statistics, ctx).map_err(|source| ReportError::Io {
        document: document.id.clone(),
        path: output_dir.join(report::CHART_FILE),
        source,
    })?;

    let mut written = report::write_documents(output_dir, &document.id, &docs)?;
    if dump_statistics {
        written.push(report::write_statistics_json(output_dir, &document.id, &statistics)?);
    }

    Ok(DocumentReport { totals: statistics.totals, written })
}

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;
