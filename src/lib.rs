//! route-midpoint
//!
//! Decodes encoded route polylines, totals per-leg distances and locates
//! the halfway point of a driving route. Fetching directions, searching
//! for places and drawing maps are left to callers through [`traits`].

pub mod error;
pub mod traits;
pub mod distance;
pub mod polyline;
pub mod directions;
pub mod report;

pub use distance::parse_and_summarize_distances;
pub use polyline::{centroid, decode as decode_polyline, midpoint_by_index};
