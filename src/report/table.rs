//! Statistics tables for the feature pages and the overview.

use super::page::feature_href;
use super::types::{CellColor, RenderContext};
use crate::stats::{FeatureStats, Totals};

const COLUMNS: [&str; 7] = ["Feature", "Scenarios", "Steps", "Passed", "Failed", "Skipped", "Status"];

/// Table opening with the column headers
pub fn table_header() -> String {
    let mut html = String::from("<br/>\n<h2>Feature Statistics</h2>\n<table class=\"stats-table\">\n<tr>\n");
    for column in COLUMNS {
        html.push_str(&format!("<th>{}</th>\n", column));
    }
    html.push_str("</tr>\n");
    html
}

pub fn table_footer() -> &'static str {
    "</table>\n"
}

/// One row per feature, the name linking to its detail page
pub fn feature_row(ctx: &RenderContext, feature: &FeatureStats) -> String {
    let mut html = String::from("<tr>\n");
    html.push_str(&format!("<td><a href=\"{}\">{}</a></td>\n", feature_href(ctx, &feature.file), feature.name));
    for count in [feature.scenarios, feature.steps, feature.passed, feature.failed, feature.skipped] {
        html.push_str(&format!("<td>{}</td>\n", count));
    }
    html.push_str(&format!(
        "<td style=\"{}\">{}</td>\n",
        CellColor::for_status(feature.status).style(),
        feature.status.as_str()
    ));
    html.push_str("</tr>\n");
    html
}

/// Final run-level row, styled apart from the feature rows
pub fn totals_row(totals: &Totals) -> String {
    let style = CellColor::Totals.style();
    let mut html = String::from("<tr class=\"totals\">\n");
    for count in [totals.features, totals.scenarios, totals.steps, totals.passed, totals.failed, totals.skipped] {
        html.push_str(&format!("<td style=\"{}\">{}</td>\n", style, count));
    }
    html.push_str(&format!("<td style=\"{}\">Totals</td>\n", style));
    html.push_str("</tr>\n");
    html
}
