use anyhow::Result;

use crate::MatchedPair;

use super::describe;

const HEADER: [&str; 4] = ["Name", "Description", "Latitude", "Longitude"];

/// CSV in the shape Google My Maps imports: title column plus a lat/lng pair.
pub fn render(pairs: &[MatchedPair]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for pair in pairs {
        writer.write_record([
            describe::placemark_name(pair),
            describe::text_description(pair),
            coordinate(pair.supercharger.lat),
            coordinate(pair.supercharger.lng),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|x| x.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

// always with a fractional part, `34.0` rather than `34`
fn coordinate(x: Option<f64>) -> String {
    x.map(|x| format!("{x:?}")).unwrap_or_default()
}
