//! Overview page: chart placeholder plus one statistics row per feature.

use super::page;
use super::table;
use super::types::RenderContext;
use super::CHART_FILE;
use crate::stats::Statistics;

/// Render the overview page for the whole run
pub fn render_overview(stats: &Statistics, ctx: &RenderContext) -> String {
    let mut html = page::page_head("Feature Overview");
    html.push_str(&page::body_header(
        ctx,
        "Feature Overview",
        "The following graph shows number of steps passing, failing and skipped for this build:",
        false,
    ));
    html.push_str("<div class=\"container_12\">\n<div class=\"grid_9\">\n");
    html.push_str(&format!(
        "<div style=\"text-align:center;\"><div id=\"feature-chart\" class=\"chart\" data-chart-source=\"{}\"></div></div>\n",
        CHART_FILE
    ));
    html.push_str("<br/>\n<div class=\"grid_12 hr\"></div>\n<div>\n");

    html.push_str(&table::table_header());
    for feature in &stats.features {
        html.push_str(&table::feature_row(ctx, feature));
    }
    html.push_str(&table::totals_row(&stats.totals));
    html.push_str(table::table_footer());

    html.push_str("</div>\n</div>\n</div>\n");
    html.push_str(&page::footer(ctx));
    html
}
