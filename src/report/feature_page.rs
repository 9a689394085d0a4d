//! Detail page for a single feature.

use super::page;
use super::table;
use super::types::RenderContext;
use crate::fragment::{escape_html, escape_text};
use crate::stats::FeatureStats;
use crate::types::{Feature, Step, StepStatus};

/// Render the detail page of `feature`.
///
/// Statuses of the feature and its scenarios come from `stats`, which must
/// be the rollup of this same feature.
pub fn render_feature_page(feature: &Feature, stats: &FeatureStats, ctx: &RenderContext) -> String {
    let mut html = page::page_head(&page::plain_text(&feature.name));
    html.push_str(&page::body_header(ctx, "Feature Result", "Below are the results for this feature:", true));
    html.push_str("<div class=\"container_12\">\n<div class=\"grid_12\">\n<div style=\"color:black;\">\n");

    html.push_str(&feature.tags);
    html.push_str(&format!("<div class=\"{}\">{}</div>\n", stats.status.as_str(), feature.name));
    html.push_str(&feature.description);
    html.push('\n');

    for (scenario, status) in feature.scenarios.iter().zip(&stats.scenario_statuses) {
        html.push_str(&scenario.tags);
        html.push_str(&format!("<div class=\"{}\">{}</div>\n", status.as_str(), scenario.name));
        for step in &scenario.steps {
            html.push_str(&step_block(step));
        }
    }

    html.push_str("</div>\n<br/>\n<div class=\"grid_12 hr\"></div>\n<div>\n");
    html.push_str(&table::table_header());
    html.push_str(&table::feature_row(ctx, stats));
    html.push_str(table::table_footer());
    html.push_str("</div>\n</div>\n</div>\n");
    html.push_str(&page::footer(ctx));
    html
}

/// Status-tagged block for one step; failed steps carry their error message
fn step_block(step: &Step) -> String {
    let class = escape_html(step.status.as_str());
    if step.status == StepStatus::Failed {
        format!(
            "<div class=\"{}\">{}<div class=\"step-error-message\"><pre>{}</pre></div></div>\n",
            class,
            step.name,
            escape_text(&step.error_message)
        )
    } else {
        format!("<div class=\"{}\">{}</div>\n", class, step.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(status: &str, error: &str) -> Step {
        Step {
            name: "<span class=\"step-name\">x</span>".to_string(),
            status: StepStatus::from_raw(status),
            error_message: error.to_string(),
        }
    }

    #[test]
    fn test_failed_step_renders_error_block() {
        let html = step_block(&step("failed", "boom: a < b"));
        assert_eq!(
            html,
            "<div class=\"failed\"><span class=\"step-name\">x</span>\
             <div class=\"step-error-message\"><pre>boom: a &lt; b</pre></div></div>\n"
        );
    }

    #[test]
    fn test_error_message_keeps_quotes_and_apostrophes() {
        let message = "expected 423 but was 200 (can't \"log\" in)";
        let html = step_block(&step("failed", message));
        assert!(html.contains(&format!("<pre>{}</pre>", message)), "{}", html);
    }

    #[test]
    fn test_other_statuses_render_name_only() {
        for status in ["passed", "skipped", "undefined", "pending"] {
            let html = step_block(&step(status, "ignored"));
            assert_eq!(html, format!("<div class=\"{}\"><span class=\"step-name\">x</span></div>\n", status));
        }
    }
}
