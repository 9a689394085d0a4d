//! Report rendering - turns a feature tree and its statistics into documents.
//!
//! This module handles:
//! - One detail page per feature
//! - The overview page with the per-feature statistics table
//! - The chart data document with the run totals
//! - Writing rendered documents into the output directory
//!
//! Rendering never derives counts or statuses; everything comes from
//! `stats::Statistics`.
//!
//! # Module Organization
//!
//! - `types` - Render context, rendered documents, cell colours
//! - `page` - Head, navigation and footer shared by all pages
//! - `table` - Statistics table header and rows
//! - `feature_page` - Per-feature detail page
//! - `overview` - Overview page
//! - `chart` - Chart data XML
//! - `export` - Writing documents and the statistics dump to disk

mod chart;
mod export;
mod feature_page;
mod overview;
mod page;
mod table;
mod types;

pub use chart::render_chart_data;
pub use export::{write_documents, write_statistics_json};
pub use feature_page::render_feature_page;
pub use overview::render_overview;
pub use types::{CellColor, RenderContext, RenderedDocument};

use crate::stats::Statistics;
use crate::types::Feature;
use std::io;

/// Extension of the generated pages
pub const PAGE_EXTENSION: &str = "html";
/// File name of the overview page
pub const OVERVIEW_FILE: &str = "feature-overview.html";
/// File name of the chart data document
pub const CHART_FILE: &str = "feature-overview.xml";
/// File name of the optional statistics dump
pub const STATISTICS_FILE: &str = "feature-statistics.json";

/// File name of the detail page for a feature file identifier
pub fn feature_file_name(file: &str) -> String {
    format!("{}.{}", file, PAGE_EXTENSION)
}

/// Render every document of a run.
///
/// Order: feature pages in input order, then the overview, then the chart
/// data. `stats` must be the aggregate of `features`.
pub fn render_all(features: &[Feature], stats: &Statistics, ctx: &RenderContext) -> io::Result<Vec<RenderedDocument>> {
    let mut docs: Vec<RenderedDocument> = features
        .iter()
        .zip(&stats.features)
        .map(|(feature, feature_stats)| RenderedDocument {
            file_name: feature_file_name(&feature.file),
            contents: render_feature_page(feature, feature_stats, ctx),
        })
        .collect();

    docs.push(RenderedDocument { file_name: OVERVIEW_FILE.to_string(), contents: render_overview(stats, ctx) });
    docs.push(RenderedDocument { file_name: CHART_FILE.to_string(), contents: render_chart_data(&stats.totals)? });

    Ok(docs)
}
