//! Page chrome shared by the feature pages and the overview page.

use super::types::RenderContext;
use crate::fragment::{escape_html, escape_text};

const INLINE_CSS: &str = r#"<style>
.feature-keyword{font-weight:bold;}
.feature-description{padding-left:15px;font-style:italic;background-color:beige;}
.feature-role{font-weight:bold;}
.feature-action{font-weight:bold;}
.feature-value{font-weight:bold;}
.feature-tags{padding-top:10px;padding-left:15px;color:darkblue;}
.scenario-keyword{font-weight:bold;padding-left:15px;}
.scenario-name{padding-left:15px;}
.step-keyword{font-weight:bold;padding-left:50px;}
.step-error-message{background-color:#FFEEEE;padding-left:50px;border:1px solid #D88A8A;}
.passed{background-color:#C5D88A;}
.failed{background-color:#D88A8A;}
.skipped{background-color:#2DEAEC;}
.undefined{background-color:#F2F28A;}
.pending{background-color:#F2F28A;}
table.stats-table{color:black;border-width:1px;border-spacing:2px;border-style:outset;border-color:gray;border-collapse:collapse;background-color:white;}
table.stats-table th{color:black;border-width:1px;padding:5px;border-style:inset;border-color:gray;background-color:#66CCEE;}
table.stats-table td{color:black;text-align:center;border-width:1px;padding:5px;border-style:inset;border-color:gray;background-color:white;}
</style>"#;

const STYLESHEETS: [&str; 5] =
    ["blue/css/style.css", "blue/css/skin/style.css", "blue/css/960.css", "blue/css/reset.css", "blue/css/text.css"];

/// Document head with title, stylesheets and the chart script.
///
/// `title` must already be HTML-safe.
pub fn page_head(title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head>\n");
    html.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />\n");
    html.push_str(&format!("<title>Cucumber Reports - {}</title>\n", title));
    for sheet in STYLESHEETS {
        html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\" type=\"text/css\" media=\"screen\" />\n", sheet));
    }
    html.push_str("<link rel=\"shortcut icon\" href=\"blue/favicon.ico\" />\n");
    html.push_str("<script src=\"charts/charts.js\" type=\"text/javascript\"></script>\n");
    html.push_str(INLINE_CSS);
    html.push_str("\n</head>\n");
    html
}

/// Link back to the overview page of this build
pub fn overview_href(ctx: &RenderContext) -> String {
    format!("overview?build_project={}&build_number={}", escape_html(&ctx.project), escape_html(&ctx.build))
}

/// Link to a feature page of this build
pub fn feature_href(ctx: &RenderContext, file: &str) -> String {
    format!(
        "feature?build_project={}&build_number={}&feature={}",
        escape_html(&ctx.project),
        escape_html(&ctx.build),
        escape_html(&super::feature_file_name(file))
    )
}

/// Body opening: navigation header and the page heading.
///
/// Feature pages also get a link back to the overview.
pub fn body_header(ctx: &RenderContext, heading: &str, subhead: &str, back_to_overview: bool) -> String {
    let mut html = String::new();
    html.push_str("<body id=\"top\">\n<div id=\"fullwidth_header\">\n<div class=\"container_12\">\n");
    html.push_str(&format!(
        "<h1 class=\"grid_4 logo\"><a href=\"{}\" class=\"ie6fix\">Cucumber</a></h1>\n",
        overview_href(ctx)
    ));
    html.push_str("<div class=\"grid_6\" id=\"nav\">\n<ul>\n");
    html.push_str(&format!(
        "<li><a href=\"/job/{}/{}\">Back To Build</a></li>\n",
        escape_html(&ctx.project),
        escape_html(&ctx.build)
    ));
    if back_to_overview {
        html.push_str(&format!("<li><a href=\"{}\">Back To Overview</a></li>\n", overview_href(ctx)));
    }
    html.push_str("</ul>\n</div>\n</div>\n</div>\n");
    html.push_str("<div id=\"fullwidth_gradient\">\n<div class=\"container_12\">\n<div class=\"grid_9 heading\">\n");
    html.push_str(&format!("<h2>{} for Build: {}</h2>\n", heading, escape_text(&ctx.build)));
    html.push_str(&format!("<span class=\"subhead\">{}</span>\n", subhead));
    html.push_str("</div>\n</div>\n</div>\n");
    html
}

/// Footer with the generation timestamp, closing body and html
pub fn footer(ctx: &RenderContext) -> String {
    format!(
        "<div class=\"container_12\">\n<div class=\"grid_12 hr\"></div>\n<div class=\"grid_12 footer\">\n\
         <p style=\"text-align:center;\">Cucumber Reports - {}</p>\n</div>\n</div>\n\
         <div class=\"clear\"></div>\n</body>\n</html>\n",
        escape_text(&ctx.generated_at)
    )
}

/// Strip markup from a rendered fragment, leaving its text
pub fn plain_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}
