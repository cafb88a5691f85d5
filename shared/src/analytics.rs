//! Per-visit analytics derivation. Everything here is a pure transform over
//! the inbound headers, apart from the timestamp read in [`create_statistics`].

use lambda_http::http::HeaderMap;
use mongodb::bson::DateTime;
use serde::Serialize;

/// Allow-list of proxy-forwarded headers, in the order they are checked.
/// Anything not listed here is dropped.
const HEADER_FIELDS: [(&str, fn(&mut TargetHeaders, String)); 5] = [
    ("referer", |h, v| h.referer = Some(v)),
    ("x-appengine-country", |h, v| h.country = Some(v)),
    ("x-appengine-region", |h, v| h.region = Some(v)),
    ("x-appengine-user-ip", |h, v| h.ip = Some(v)),
    ("x-appengine-citylatlong", |h, v| h.location = Some(v)),
];

/// The selected and renamed headers for one request. `location` is still the
/// raw `"lat,lng"` string at this stage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TargetHeaders {
    pub referer: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub ip: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn point(coordinates: [f64; 2]) -> Self {
        Self {
            geometry_type: "Point".to_string(),
            coordinates,
        }
    }
}

/// A citylatlong header that cannot be parsed is stored as its raw value
/// rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Point(GeoPoint),
    Raw(String),
}

/// One persisted visit. Only `reference` and `accessedAt` are always present;
/// the rest mirror whichever headers the request carried.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub reference: String,
    pub accessed_at: DateTime,
}

pub fn filter_transform_headers(headers: &HeaderMap) -> TargetHeaders {
    let mut target = TargetHeaders::default();
    for (name, assign) in HEADER_FIELDS {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            assign(&mut target, value.to_string());
        }
    }
    target
}

/// Splits a `"lat,lng"` string into a point. Segments are taken in source
/// order and non-numeric segments become NaN, never an error.
pub fn create_location(raw: &str) -> Option<GeoPoint> {
    if !raw.contains(',') {
        return None;
    }
    let mut segments = raw.split(',');
    let first = parse_coordinate(segments.next().unwrap_or_default());
    let second = parse_coordinate(segments.next().unwrap_or_default());
    Some(GeoPoint::point([first, second]))
}

fn parse_coordinate(segment: &str) -> f64 {
    segment.trim().parse().unwrap_or(f64::NAN)
}

pub fn create_statistics(headers: &HeaderMap, reference: &str) -> Visit {
    let target = filter_transform_headers(headers);
    let location = target.location.map(|raw| match create_location(&raw) {
        Some(point) => Location::Point(point),
        None => Location::Raw(raw),
    });

    Visit {
        referer: target.referer,
        country: target.country,
        region: target.region,
        ip: target.ip,
        location,
        reference: reference.to_string(),
        accessed_at: DateTime::now(),
    }
}
