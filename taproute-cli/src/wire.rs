//! JSON payloads accepted and produced by the CLI commands.
//!
//! Candidate breweries are arbitrary JSON objects. Only `latitude` and
//! `longitude` are read; every other field is carried through to the output
//! untouched and in its original order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use taproute_core::{
    Coordinate, CoordinateError, DiscoveryError, DiscoveryQuery, Located, Nearby, Route,
    RouteRequest, StopLimit,
};
use thiserror::Error;

const FIELD_LATITUDE: &str = "latitude";
const FIELD_LONGITUDE: &str = "longitude";
const FIELD_DISTANCE: &str = "distance";

/// Reasons a single candidate record is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandidateError {
    /// The record is not a JSON object.
    #[error("candidate is not a JSON object")]
    NotAnObject,
    /// A coordinate field is absent or null.
    #[error("candidate is missing {0}")]
    MissingField(&'static str),
    /// A coordinate field is neither a number nor a numeric string.
    #[error("candidate {0} is not a number")]
    NotANumber(&'static str),
    /// The coordinate is out of range.
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
}

/// Reasons a request payload is rejected before it reaches the planner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// A required top-level field is absent.
    #[error("missing required field {0}")]
    MissingField(&'static str),
    /// `breweries` is present but not a JSON array.
    #[error("breweries must be a list")]
    CandidatesNotList,
    /// The start or search origin is out of range.
    #[error("invalid origin: {0}")]
    InvalidOrigin(#[source] CoordinateError),
    /// A candidate failed validation.
    #[error("brewery at index {index} is invalid: {source}")]
    InvalidCandidate {
        /// Zero-based position in `breweries`.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: CandidateError,
    },
    /// The requested search radius is unusable.
    #[error("invalid radius: {0}")]
    InvalidRadius(#[source] DiscoveryError),
}

/// A caller-supplied brewery record with its parsed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stop {
    #[serde(skip)]
    location: Coordinate,
    record: Map<String, Value>,
}

impl Stop {
    /// Parse the position out of `record`, keeping the record intact.
    ///
    /// Coordinates may be JSON numbers or numeric strings, as public brewery
    /// directories commonly publish them as text.
    pub fn from_record(record: Value) -> Result<Self, CandidateError> {
        let Value::Object(fields) = record else {
            return Err(CandidateError::NotAnObject);
        };
        let latitude = coordinate_field(&fields, FIELD_LATITUDE)?;
        let longitude = coordinate_field(&fields, FIELD_LONGITUDE)?;
        let location = Coordinate::new(latitude, longitude)?;
        Ok(Self {
            location,
            record: fields,
        })
    }
}

impl Located for Stop {
    fn location(&self) -> Coordinate {
        self.location
    }
}

fn coordinate_field(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, CandidateError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(CandidateError::MissingField(field)),
        Some(Value::Number(number)) => number.as_f64().ok_or(CandidateError::NotANumber(field)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| CandidateError::NotANumber(field)),
        Some(_) => Err(CandidateError::NotANumber(field)),
    }
}

fn candidate_records(breweries: Option<Value>) -> Result<Vec<Value>, RequestError> {
    match breweries {
        None => Err(RequestError::MissingField("breweries")),
        Some(Value::Array(records)) => Ok(records),
        Some(_) => Err(RequestError::CandidatesNotList),
    }
}

fn origin(
    latitude: Option<f64>,
    longitude: Option<f64>,
    names: (&'static str, &'static str),
) -> Result<Coordinate, RequestError> {
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => Coordinate::new(lat, lng).map_err(RequestError::InvalidOrigin),
        (None, _) => Err(RequestError::MissingField(names.0)),
        (Some(_), None) => Err(RequestError::MissingField(names.1)),
    }
}

/// Body of a `plan` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    /// Start latitude in degrees.
    pub start_lat: Option<f64>,
    /// Start longitude in degrees.
    pub start_lng: Option<f64>,
    /// Candidate records; must be a list.
    pub breweries: Option<Value>,
    /// Optional stop cap; non-positive values mean no stops.
    pub max_stops: Option<i64>,
}

impl PlanPayload {
    /// Validate the payload into a planner request.
    ///
    /// Any invalid candidate rejects the whole request. An absent
    /// `maxStops` falls back to `default_limit`.
    pub fn into_request(
        self,
        default_limit: StopLimit,
    ) -> Result<RouteRequest<Stop>, RequestError> {
        let start = origin(self.start_lat, self.start_lng, ("startLat", "startLng"))?;
        let candidates = candidate_records(self.breweries)?
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Stop::from_record(record)
                    .map_err(|source| RequestError::InvalidCandidate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let max_stops = self
            .max_stops
            .map_or(default_limit, StopLimit::from_signed);
        Ok(RouteRequest::new(start, candidates, max_stops))
    }
}

/// Body of a `plan` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Records in visiting order.
    pub route: Vec<Stop>,
    /// Miles, two decimals.
    pub total_distance: f64,
    /// Minutes, two decimals.
    pub estimated_time: f64,
}

impl From<Route<Stop>> for PlanResponse {
    fn from(route: Route<Stop>) -> Self {
        let (stops, metrics) = route.into_parts();
        let rounded = metrics.rounded();
        Self {
            route: stops,
            total_distance: rounded.total_distance_miles,
            estimated_time: rounded.estimated_minutes,
        }
    }
}

/// Body of a `nearby` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NearbyPayload {
    /// Search origin latitude.
    pub lat: Option<f64>,
    /// Search origin longitude.
    pub lng: Option<f64>,
    /// Candidate records; must be a list.
    pub breweries: Option<Value>,
    /// Optional radius override in miles.
    pub radius: Option<f64>,
    /// Optional result cap override.
    pub limit: Option<usize>,
}

/// A validated `nearby` request.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearch {
    /// Search origin.
    pub origin: Coordinate,
    /// Records with usable coordinates.
    pub candidates: Vec<Stop>,
    /// Radius and cap.
    pub query: DiscoveryQuery,
}

impl NearbyPayload {
    /// Validate the payload into a discovery search.
    ///
    /// Records without usable coordinates are skipped with a warning rather
    /// than failing the search. Absent `radius` and `limit` fall back to
    /// `defaults`.
    pub fn into_search(self, defaults: &DiscoveryQuery) -> Result<NearbySearch, RequestError> {
        let search_origin = origin(self.lat, self.lng, ("lat", "lng"))?;
        let default_radius = defaults.radius_miles();
        let default_limit = defaults.limit();
        let query = DiscoveryQuery::new(
            self.radius.unwrap_or(default_radius),
            self.limit.unwrap_or(default_limit),
        )
        .map_err(RequestError::InvalidRadius)?;
        let candidates = candidate_records(self.breweries)?
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                Stop::from_record(record)
                    .inspect_err(|err| log::warn!("skipping brewery at index {index}: {err}"))
                    .ok()
            })
            .collect();
        Ok(NearbySearch {
            origin: search_origin,
            candidates,
            query,
        })
    }
}

/// Body of a `nearby` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyResponse {
    /// Matching records, closest first, each with a `distance` in miles.
    pub breweries: Vec<Map<String, Value>>,
    /// Number of records returned.
    pub total: usize,
}

impl From<Vec<Nearby<Stop>>> for NearbyResponse {
    fn from(found: Vec<Nearby<Stop>>) -> Self {
        let breweries: Vec<Map<String, Value>> = found
            .into_iter()
            .map(|nearby| {
                let mut record = nearby.candidate.record;
                record.insert(FIELD_DISTANCE.to_owned(), Value::from(nearby.distance_miles));
                record
            })
            .collect();
        Self {
            total: breweries.len(),
            breweries,
        }
    }
}
