//! Result loader - parses one cucumber JSON document into a feature tree.
//!
//! The loader owns the raw serde layout of the document. Text fields are
//! turned into HTML fragments here (see `fragment`), so downstream code
//! only deals with ready-to-embed strings.

use crate::error::ReportError;
use crate::fragment;
use crate::types::{Feature, Scenario, Step, StepStatus};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawFeature {
    name: Option<String>,
    description: Option<String>,
    uri: Option<String>,
    tags: Option<Vec<RawTag>>,
    elements: Option<Vec<RawElement>>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    keyword: Option<String>,
    name: Option<String>,
    tags: Option<Vec<RawTag>>,
    steps: Option<Vec<RawStep>>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    keyword: Option<String>,
    name: Option<String>,
    result: Option<RawResult>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResult {
    status: Option<String>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTag {
    name: Option<String>,
}

/// Parse a cucumber JSON document into its features.
///
/// The document either loads completely or fails; no partial tree is
/// returned. `document` identifies the input in error messages.
pub fn load_features(document: &str, raw: &str) -> Result<Vec<Feature>, ReportError> {
    let raw_features: Vec<RawFeature> =
        serde_json::from_str(raw).map_err(|source| ReportError::Parse { document: document.to_string(), source })?;

    debug!("Parsed {} features from {}", raw_features.len(), document);

    raw_features
        .into_iter()
        .enumerate()
        .map(|(idx, raw_feature)| convert_feature(document, idx, raw_feature))
        .collect()
}

/// Turn a feature URI into a filesystem-safe identifier
pub fn file_id(uri: &str) -> String {
    uri.replace(['/', '\\'], "-")
}

fn shape_error(document: &str, reason: String) -> ReportError {
    ReportError::Shape { document: document.to_string(), reason }
}

fn convert_feature(document: &str, idx: usize, raw: RawFeature) -> Result<Feature, ReportError> {
    let uri = raw.uri.ok_or_else(|| shape_error(document, format!("feature #{} has no `uri`", idx + 1)))?;
    let elements = raw
        .elements
        .ok_or_else(|| shape_error(document, format!("feature `{}` has no `elements`", uri)))?;

    let scenarios = elements
        .into_iter()
        .enumerate()
        .map(|(element_idx, element)| -> Result<Scenario, ReportError> {
            let steps = element.steps.ok_or_else(|| {
                shape_error(document, format!("element #{} of feature `{}` has no `steps`", element_idx + 1, uri))
            })?;
            Ok(Scenario {
                name: fragment::scenario_name(element.keyword.as_deref(), element.name.as_deref()),
                tags: tag_fragment(element.tags.as_deref()),
                steps: steps.into_iter().map(convert_step).collect(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Feature {
        name: fragment::feature_name(raw.name.as_deref()),
        file: file_id(&uri),
        description: fragment::feature_description(raw.description.as_deref()),
        tags: tag_fragment(raw.tags.as_deref()),
        scenarios,
    })
}

fn convert_step(raw: RawStep) -> Step {
    let result = raw.result.unwrap_or_default();
    Step {
        name: fragment::step_name(raw.keyword.as_deref(), raw.name.as_deref()),
        status: StepStatus::from_raw(result.status.as_deref().unwrap_or("")),
        error_message: result.error_message.unwrap_or_default(),
    }
}

fn tag_fragment(tags: Option<&[RawTag]>) -> String {
    let names: Vec<&str> = tags.unwrap_or_default().iter().filter_map(|t| t.name.as_deref()).collect();
    fragment::tags(&names)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
