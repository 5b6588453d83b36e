//! Shared test data for route-midpoint integration tests.
//!
//! Provides:
//! - The canonical encoded polyline worked example
//! - Directions / nearby-search response bodies in the provider's JSON shape

#![allow(dead_code)]

use route_midpoint::polyline::Coordinate;

/// Canonical worked example of the encoded polyline format.
pub const SAMPLE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

pub const SAMPLE_POINTS: [Coordinate; 3] = [
    Coordinate::new(38.5, -120.2),
    Coordinate::new(40.7, -120.95),
    Coordinate::new(43.252, -126.453),
];

pub const DIRECTIONS_OK: &str = r#"{
    "status": "OK",
    "routes": [{
        "legs": [{
            "steps": [
                {"distance": {"text": "0.3 mi", "value": 483}},
                {"distance": {"text": "500 ft", "value": 152}},
                {"distance": {"text": "12.4 mi", "value": 19956}},
                {"distance": {"text": "2.1 mi", "value": 3380}},
                {"distance": {"text": "800 ft", "value": 244}}
            ]
        }],
        "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@"}
    }]
}"#;

pub const DIRECTIONS_NOT_FOUND: &str = r#"{"status": "NOT_FOUND", "routes": []}"#;

pub const NEARBY_LODGING: &str = r#"{
    "status": "OK",
    "results": [
        {"name": "Sierra Inn", "vicinity": "12 Pine Rd, Auburn",
         "geometry": {"location": {"lat": 40.81, "lng": -121.02}}}
    ]
}"#;

pub const NEARBY_EMPTY: &str = r#"{"status": "ZERO_RESULTS", "results": []}"#;
