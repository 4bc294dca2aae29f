use anyhow::{Context, Result};
use quick_xml::{
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};

use crate::MatchedPair;

use super::describe;

const NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const TITLE: &str = "Tesla Superchargers near In-N-Out";
const SUMMARY: &str =
    "Tesla Superchargers within walking distance of In-N-Out Burger in California";

/// KML document with one placemark per pair, pinned at the supercharger.
pub fn render(pairs: &[MatchedPair]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("kml").with_attributes([("xmlns", NAMESPACE)]),
    ))?;
    writer.write_event(Event::Start(BytesStart::new("Document")))?;
    text(&mut writer, "name", TITLE)?;
    text(&mut writer, "description", SUMMARY)?;

    for pair in pairs {
        let point = pair
            .supercharger
            .point()
            .with_context(|| format!("{} has no coordinates", pair.supercharger.name))?;

        writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
        text(&mut writer, "name", &describe::placemark_name(pair))?;

        writer.write_event(Event::Start(BytesStart::new("description")))?;
        writer.write_event(Event::CData(BytesCData::new(describe::html_description(
            pair,
        ))))?;
        writer.write_event(Event::End(BytesEnd::new("description")))?;

        writer.write_event(Event::Start(BytesStart::new("Point")))?;
        text(
            &mut writer,
            "coordinates",
            &format!("{:?},{:?},0", point.x(), point.y()),
        )?;
        writer.write_event(Event::End(BytesEnd::new("Point")))?;

        writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Document")))?;
    writer.write_event(Event::End(BytesEnd::new("kml")))?;

    let mut output = String::from_utf8(writer.into_inner())?;
    output.push('\n');
    Ok(output)
}

fn text(writer: &mut Writer<Vec<u8>>, tag: &str, content: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
