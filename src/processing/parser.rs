//! Decoding of ISS and visible-body JSON records
//!
//! The ISS record follows the `wheretheiss.at` satellite response; unknown
//! fields such as `daynum` or `solar_lat` are ignored. Visible bodies follow
//! the JSON:API envelope used by the visible-planets service.

use crate::core::TargetPosition;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors that can occur while decoding a record
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty payload")]
    Empty,
}

/// Snapshot of the ISS as reported by the position service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// NORAD catalog id
    #[serde(default)]
    pub id: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers above the subpoint
    pub altitude: f64,
    /// Kilometers per hour
    pub velocity: f64,
    #[serde(default)]
    pub visibility: Option<String>,
    /// Diameter of the ground footprint (km)
    #[serde(default)]
    pub footprint: Option<f64>,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
    #[serde(default)]
    pub units: Option<String>,
}

impl IssRecord {
    /// Minimal record, mostly useful for tests and replays
    pub fn at(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            name: Some("iss".to_string()),
            id: Some(25544),
            latitude,
            longitude,
            altitude,
            velocity: 0.0,
            visibility: None,
            footprint: None,
            timestamp: 0.0,
            units: Some("kilometers".to_string()),
        }
    }

    pub fn target(&self) -> TargetPosition {
        TargetPosition::new(self.latitude, self.longitude, self.altitude)
    }
}

/// A sky object currently reported for the observer's location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleBody {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: String,
    /// Degrees above the horizon
    pub altitude: f64,
    /// Degrees clockwise from north
    pub azimuth: f64,
    pub magnitude: Option<f64>,
    pub constellation: Option<String>,
}

#[derive(Deserialize)]
struct VisibleBodiesEnvelope {
    data: Vec<VisibleBodyResource>,
}

#[derive(Deserialize)]
struct VisibleBodyResource {
    id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    attributes: VisibleBodyAttributes,
}

#[derive(Deserialize)]
struct VisibleBodyAttributes {
    name: String,
    altitude: f64,
    azimuth: f64,
    #[serde(default)]
    magnitude: Option<f64>,
    #[serde(default)]
    constellation: Option<String>,
}

impl From<VisibleBodyResource> for VisibleBody {
    fn from(resource: VisibleBodyResource) -> Self {
        let VisibleBodyResource { id, kind, attributes } = resource;
        Self {
            id,
            kind,
            name: attributes.name,
            altitude: attributes.altitude,
            azimuth: attributes.azimuth,
            magnitude: attributes.magnitude,
            constellation: attributes.constellation,
        }
    }
}

/// Decode a single ISS position response
pub fn parse_iss_record(payload: &str) -> Result<IssRecord, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Decode a JSON array of ISS records, as stored in replay files
pub fn parse_iss_records(payload: &str) -> Result<Vec<IssRecord>, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Decode a visible-bodies response, highest body first
pub fn parse_visible_bodies(payload: &str) -> Result<Vec<VisibleBody>, ParseError> {
    if payload.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    let envelope: VisibleBodiesEnvelope = serde_json::from_str(payload)?;
    let mut bodies: Vec<VisibleBody> = envelope.data.into_iter().map(VisibleBody::from).collect();
    sort_by_altitude(&mut bodies);
    Ok(bodies)
}

/// Order bodies from highest to lowest above the horizon
pub fn sort_by_altitude(bodies: &mut [VisibleBody]) {
    bodies.sort_by(|a, b| b.altitude.partial_cmp(&a.altitude).unwrap_or(Ordering::Equal));
}
