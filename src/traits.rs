//! Interfaces to the remote and presentation collaborators.
//!
//! The crate never talks to the network or draws anything itself. Callers
//! implement these traits for their provider (Google Maps, OSRM, a test
//! double) and the report layer drives them.

use serde::{Deserialize, Serialize};

use crate::polyline::{Coordinate, Polyline};

/// What a directions lookup yields for an origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescription {
    /// Display text of each leg distance, e.g. `"0.3 mi"`.
    pub legs: Vec<String>,
    /// Encoded polyline of the whole route.
    pub polyline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceCategory {
    Lodging,
    Dining,
}

impl PlaceCategory {
    /// Place type name used by nearby-search APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Lodging => "lodging",
            PlaceCategory::Dining => "restaurant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: Option<String>,
    pub location: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationKind {
    Midpoint,
    Lodging,
    Dining,
}

/// A labelled point for the map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub location: Coordinate,
    pub label: String,
}

/// Looks up a driving route between two places.
pub trait DirectionsProvider {
    /// Returns `None` when the provider reports no route (non-OK status).
    fn directions(&self, origin: &str, destination: &str) -> Option<RouteDescription>;
}

/// Finds the closest place of a category around a coordinate.
pub trait PlacesProvider {
    /// Returns `None` when nothing of that category was found.
    fn closest(&self, at: Coordinate, category: PlaceCategory) -> Option<Place>;
}

/// Produces a visual artifact from a path and its annotations.
pub trait MapRenderer {
    type Output;

    fn render(&self, path: &Polyline, focus: Coordinate, annotations: &[Annotation]) -> Self::Output;
}
