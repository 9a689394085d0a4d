//! HTML fragments rendered while loading a result document.
//!
//! Each builder takes the raw (optional) text from the result document and
//! returns a ready-to-embed fragment. Absent or empty input always yields an
//! empty string.

/// Description phrases that get emphasis, with their CSS classes
const DESCRIPTION_PHRASES: [(&str, &str); 3] =
    [("As an", "feature-role"), ("I want to", "feature-action"), ("So that", "feature-value")];

/// Escape text for embedding in HTML element content.
///
/// Only `&`, `<` and `>` are rewritten; quotes and apostrophes pass through.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for embedding in a quoted HTML attribute value
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn present(item: Option<&str>) -> Option<&str> {
    item.filter(|s| !s.is_empty())
}

/// Feature heading line
pub fn feature_name(name: Option<&str>) -> String {
    match present(name) {
        Some(name) => format!(
            "<div class=\"feature-line\"><span class=\"feature-keyword\">Feature:</span> {}</div>",
            escape_text(name)
        ),
        None => String::new(),
    }
}

/// Feature description with the narrative phrases emphasized and line breaks kept
pub fn feature_description(description: Option<&str>) -> String {
    let Some(description) = present(description) else {
        return String::new();
    };

    let mut content = escape_text(&description.replace("\r\n", "\n"));
    for (phrase, class) in DESCRIPTION_PHRASES {
        content = emphasize_first_line(&content, phrase, class);
    }

    format!("<div class=\"feature-description\">{}</div>", content.replace('\n', "<br/>"))
}

/// Wrap `phrase` in a span on the first line that starts with it
fn emphasize_first_line(text: &str, phrase: &str, class: &str) -> String {
    let mut done = false;
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_start();
            if !done && trimmed.starts_with(phrase) {
                done = true;
                let indent = &line[..line.len() - trimmed.len()];
                format!("{}<span class=\"{}\">{}</span>{}", indent, class, phrase, &trimmed[phrase.len()..])
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma-separated tag list
pub fn tags(names: &[&str]) -> String {
    let names: Vec<String> = names.iter().filter(|n| !n.is_empty()).map(|n| escape_text(n)).collect();
    if names.is_empty() {
        return String::new();
    }
    format!("<div class=\"feature-tags\">{}</div>", names.join(","))
}

/// Scenario keyword and name; either part may be missing
pub fn scenario_name(keyword: Option<&str>, name: Option<&str>) -> String {
    let mut content = String::new();
    if let Some(keyword) = present(keyword) {
        content.push_str(&format!("<span class=\"scenario-keyword\">{}: </span>", escape_text(keyword)));
    }
    if let Some(name) = present(name) {
        content.push_str(&format!("<span class=\"scenario-name\">{}</span>", escape_text(name)));
    }
    content
}

/// Step keyword and text; rendered only when both are present
pub fn step_name(keyword: Option<&str>, name: Option<&str>) -> String {
    match (present(keyword), present(name)) {
        (Some(keyword), Some(name)) => format!(
            "<span class=\"step-keyword\">{}</span><span class=\"step-name\">{}</span>",
            escape_text(keyword),
            escape_text(name)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;
