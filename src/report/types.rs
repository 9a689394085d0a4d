//! Report type definitions for the rendering model.
//!
//! This module defines the inputs the renderer needs besides the feature
//! tree and statistics, and the rendered documents it produces.

use crate::types::Status;

/// Caller-supplied values that parameterize every page.
///
/// `project` and `build` are opaque; they only end up in generated links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub project: String,
    pub build: String,
    /// Generation timestamp printed in page footers
    pub generated_at: String,
}

impl RenderContext {
    pub fn new(project: &str, build: &str, generated_at: &str) -> Self {
        RenderContext { project: project.to_string(), build: build.to_string(), generated_at: generated_at.to_string() }
    }

    /// Context stamped with the current local time
    pub fn now(project: &str, build: &str) -> Self {
        Self::new(project, build, &chrono::Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string())
    }
}

/// A fully rendered output file, not yet written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub contents: String,
}

/// Background colour of a statistics table cell.
///
/// Passed, failed and totals cells must stay visually distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Passed,
    Failed,
    Totals,
}

impl CellColor {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Passed => CellColor::Passed,
            Status::Failed => CellColor::Failed,
        }
    }

    /// Inline style for a cell of this colour
    pub fn style(&self) -> &'static str {
        match self {
            CellColor::Passed => "background-color:#C5D88A;",
            CellColor::Failed => "background-color:#D88A8A;",
            CellColor::Totals => "background-color:lightgray;font-weight:bold;",
        }
    }
}
