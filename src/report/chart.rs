//! Chart data document consumed by the overview page's chart component.
//!
//! Only the run-level passed/failed/skipped step counts are encoded.

use crate::stats::Totals;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{self, Cursor};

const SERIES: [(&str, &str); 3] = [("Passed", "88dd11"), ("Failed", "cc1134"), ("Skipped", "88aaff")];

fn xml_error<E: std::fmt::Display>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

fn text_element<W: io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(xml_error)?;
    writer.write_event(Event::Text(BytesText::new(text))).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(xml_error)?;
    Ok(())
}

fn start<W: io::Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(xml_error)
}

fn end<W: io::Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(xml_error)
}

/// Render the donut chart document for the run totals
pub fn render_chart_data(totals: &Totals) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None))).map_err(xml_error)?;
    start(&mut writer, "chart")?;
    start(&mut writer, "chart_data")?;

    // Label row
    start(&mut writer, "row")?;
    writer.write_event(Event::Empty(BytesStart::new("null"))).map_err(xml_error)?;
    for (label, _) in SERIES {
        text_element(&mut writer, "string", label)?;
    }
    end(&mut writer, "row")?;

    // Value row
    start(&mut writer, "row")?;
    writer.write_event(Event::Empty(BytesStart::new("string"))).map_err(xml_error)?;
    for count in [totals.passed, totals.failed, totals.skipped] {
        text_element(&mut writer, "number", &count.to_string())?;
    }
    end(&mut writer, "row")?;

    end(&mut writer, "chart_data")?;
    text_element(&mut writer, "chart_type", "donut")?;

    start(&mut writer, "series_color")?;
    for (_, color) in SERIES {
        text_element(&mut writer, "color", color)?;
    }
    end(&mut writer, "series_color")?;
    end(&mut writer, "chart")?;

    let mut xml = String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)?;
    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_encodes_run_totals_only() {
        let totals = Totals { features: 3, scenarios: 9, steps: 30, passed: 21, failed: 4, skipped: 2 };
        let xml = render_chart_data(&totals).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<string>Passed</string>"));
        assert!(xml.contains("<string>Failed</string>"));
        assert!(xml.contains("<string>Skipped</string>"));
        assert_eq!(xml.matches("<number>").count(), 3);

        let numbers: Vec<&str> = xml
            .split("<number>")
            .skip(1)
            .map(|rest| rest.split("</number>").next().unwrap())
            .collect();
        assert_eq!(numbers, vec!["21", "4", "2"]);
        assert!(!xml.contains(">30<"));
        assert!(xml.contains("<chart_type>donut</chart_type>"));
    }

    #[test]
    fn test_chart_with_zero_counts() {
        let xml = render_chart_data(&Totals::default()).unwrap();
        assert_eq!(xml.matches("<number>0</number>").count(), 3);
    }
}
