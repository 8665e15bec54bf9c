//! Stop lookup extractors: autocomplete, full-text search, stops by character

use domain::{LookupResult, Stop, StopPoint};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::Deserialize;

use super::{from_json, stops::RawNumberedStop, unescape_html};
use crate::error::ParseError;

/// Extract stops from the HTML autocomplete fragment
///
/// Items look like `<li stop="131">Dworzec Główny</li>` and are returned in
/// document order. Items without a numeric `stop` attribute are skipped.
pub fn extract_autocomplete_stops(html: &str) -> Result<Vec<Stop>, ParseError> {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;

    let mut stops = Vec::new();
    let mut buf = Vec::new();
    // (number, name) of the item being read
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"li" => {
                current = stop_number(&e)?.map(|number| (number, String::new()));
            },
            Ok(Event::Text(e)) => {
                if let Some((_, name)) = current.as_mut() {
                    let text =
                        std::str::from_utf8(&e).map_err(|err| ParseError::Html(err.to_string()))?;
                    name.push_str(&unescape_html(text));
                }
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"li" => {
                if let Some((number, name)) = current.take() {
                    stops.push(Stop {
                        number: Some(number),
                        name: Some(name.trim().to_string()),
                        ..Stop::default()
                    });
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Html(e.to_string())),
            _ => {},
        }
        buf.clear();
    }

    Ok(stops)
}

/// Numeric value of the `stop` attribute, if any
fn stop_number(element: &BytesStart<'_>) -> Result<Option<String>, ParseError> {
    let Some(attribute) = element
        .try_get_attribute("stop")
        .map_err(|e| ParseError::Html(e.to_string()))?
    else {
        return Ok(None);
    };

    let value =
        std::str::from_utf8(&attribute.value).map_err(|e| ParseError::Html(e.to_string()))?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    Ok(Some(value.to_string()))
}

/// Extract stops from the JSON autocomplete response
///
/// The first array element is a header and is skipped.
pub fn extract_autocomplete_stops_json(body: &str) -> Result<Vec<Stop>, ParseError> {
    let entries: Vec<serde_json::Value> = from_json(body)?;

    entries
        .into_iter()
        .skip(1)
        .map(|entry| -> Result<Stop, ParseError> {
            let raw: RawAutocompleteEntry = serde_json::from_value(entry)?;
            Ok(Stop {
                number: Some(raw.id),
                name: Some(unescape_html(&raw.name).into_owned()),
                ..Stop::default()
            })
        })
        .collect()
}

/// Extract stops near a position; same format as the JSON autocomplete
pub fn extract_near_stops(body: &str) -> Result<Vec<Stop>, ParseError> {
    extract_autocomplete_stops_json(body)
}

/// Extract full-text lookup hits
///
/// A hit carrying a `stop` key is a stop, otherwise one carrying a
/// `stopPoint` key is a stop point. A hit with neither is rejected.
pub fn extract_fulltext(body: &str) -> Result<Vec<LookupResult>, ParseError> {
    let raw: Vec<RawLookupResult> = from_json(body)?;
    raw.into_iter().map(convert_lookup_result).collect()
}

fn convert_lookup_result(raw: RawLookupResult) -> Result<LookupResult, ParseError> {
    let name = Some(unescape_html(&raw.name).into_owned());
    match (raw.stop, raw.stop_point) {
        (Some(number), _) => Ok(LookupResult::Stop(Stop {
            number: Some(number),
            name,
            ..Stop::default()
        })),
        (None, Some(code)) => Ok(LookupResult::StopPoint(StopPoint {
            code: Some(code),
            name,
            ..StopPoint::default()
        })),
        (None, None) => Err(ParseError::MissingDiscriminant),
    }
}

/// Extract the flat stop list returned for an initial character
pub fn extract_stops_by_character(body: &str) -> Result<Vec<Stop>, ParseError> {
    let raw: Vec<RawNumberedStop> = from_json(body)?;
    Ok(raw.into_iter().map(RawNumberedStop::into_stop).collect())
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawAutocompleteEntry {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLookupResult {
    stop: Option<String>,
    stop_point: Option<String>,
    name: String,
}
