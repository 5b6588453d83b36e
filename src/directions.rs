//! Deserialization of directions and nearby-search response bodies.
//!
//! Fetching is the caller's job; these helpers turn an already-fetched
//! JSON body (Google Directions / Places Nearby Search shape) into the
//! inputs the rest of the crate consumes.

use serde::Deserialize;
use tracing::debug;

use crate::error::PayloadError;
use crate::polyline::Coordinate;
use crate::traits::{Place, RouteDescription};

const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
    overview_polyline: OverviewPolyline,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    #[serde(default)]
    steps: Vec<DirectionsStep>,
}

#[derive(Debug, Deserialize)]
struct DirectionsStep {
    distance: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<NearbyResult>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    name: Option<String>,
    vicinity: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Extracts the step distances and overview polyline of the first route.
///
/// Returns `Ok(None)` when the provider status is not `OK` or no route was
/// returned. Steps of every leg are concatenated in order.
pub fn parse_directions_response(body: &str) -> Result<Option<RouteDescription>, PayloadError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;

    if response.status != STATUS_OK {
        debug!(status = %response.status, "directions lookup returned no route");
        return Ok(None);
    }

    let Some(route) = response.routes.into_iter().next() else {
        debug!("directions lookup returned OK without routes");
        return Ok(None);
    };

    let legs = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .map(|step| step.distance.text)
        .collect();

    Ok(Some(RouteDescription {
        legs,
        polyline: route.overview_polyline.points,
    }))
}

/// Returns the first named and located result of a nearby search, if any.
///
/// The provider is expected to rank results by distance, so the first
/// result with both a name and a location is the closest one.
pub fn parse_nearby_response(body: &str) -> Result<Option<Place>, PayloadError> {
    let response: NearbyResponse = serde_json::from_str(body)?;

    let place = response.results.into_iter().find_map(|result| {
        let location = result.geometry?.location;
        Some(Place {
            name: result.name?,
            address: result.vicinity,
            location: Coordinate::new(location.lat, location.lng),
        })
    });

    Ok(place)
}
