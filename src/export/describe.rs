use quick_xml::escape::escape;

use crate::{Location, MatchedPair};

pub fn placemark_name(pair: &MatchedPair) -> String {
    format!("Tesla SC + In-N-Out: {}", pair.supercharger.city)
}

pub fn text_description(pair: &MatchedPair) -> String {
    format!(
        "Supercharger: {} ({} stalls)\nIn-N-Out: {}\nWalking distance: {}m (~{} min)",
        pair.supercharger.name,
        stalls(&pair.supercharger),
        pair.in_n_out.address,
        pair.distance_meters,
        pair.walking_minutes,
    )
}

/// Markup for map popups; upstream text is escaped.
pub fn html_description(pair: &MatchedPair) -> String {
    format!(
        "<b>Supercharger:</b> {} ({} stalls)<br>\
         <b>In-N-Out:</b> {}<br>\
         <b>Walking distance:</b> {}m (~{} min)",
        escape(pair.supercharger.name.as_str()),
        stalls(&pair.supercharger),
        escape(pair.in_n_out.address.as_str()),
        pair.distance_meters,
        pair.walking_minutes,
    )
}

fn stalls(charger: &Location) -> String {
    charger
        .stalls
        .map_or_else(|| "?".to_string(), |x| x.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, stalls: Option<u32>, address: &str) -> MatchedPair {
        MatchedPair {
            supercharger: Location {
                name: name.to_string(),
                address: "14660 Baldwin Park Towne Center".to_string(),
                city: "Baldwin Park".to_string(),
                lat: Some(34.0686),
                lng: Some(-117.9695),
                stalls,
            },
            in_n_out: Location {
                name: "In-N-Out #1".to_string(),
                address: address.to_string(),
                city: "Baldwin Park".to_string(),
                lat: Some(34.0690),
                lng: Some(-117.9700),
                stalls: None,
            },
            distance_meters: 64,
            walking_minutes: 1,
        }
    }

    #[test]
    fn name() {
        let x = pair("Baldwin Park, CA", Some(12), "13850 Francisquito Avenue");
        assert_eq!(placemark_name(&x), "Tesla SC + In-N-Out: Baldwin Park");
    }

    #[test]
    fn text() {
        let x = pair("Baldwin Park, CA", Some(12), "13850 Francisquito Avenue");
        assert_eq!(
            text_description(&x),
            "Supercharger: Baldwin Park, CA (12 stalls)\n\
             In-N-Out: 13850 Francisquito Avenue\n\
             Walking distance: 64m (~1 min)"
        );
    }

    #[test]
    fn unknown_stalls() {
        let x = pair("Baldwin Park, CA", None, "");
        assert!(text_description(&x).starts_with("Supercharger: Baldwin Park, CA (? stalls)"));
    }

    #[test]
    fn html_is_escaped() {
        let x = pair("Fish & Chips <Plaza>", Some(8), "1 A&B Street");
        let html = html_description(&x);
        assert!(html.contains("<b>Supercharger:</b> Fish &amp; Chips &lt;Plaza&gt; (8 stalls)<br>"));
        assert!(html.contains("<b>In-N-Out:</b> 1 A&amp;B Street<br>"));
        assert!(html.ends_with("<b>Walking distance:</b> 64m (~1 min)"));
    }
}
