//! Composition of distance summary and path geometry into a route report.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{self, RouteDistanceSummary, SummaryOptions};
use crate::error::{ParseError, RouteError};
use crate::polyline::{Coordinate, Polyline, PolylineOptions};
use crate::traits::{
    Annotation, AnnotationKind, DirectionsProvider, MapRenderer, PlaceCategory, PlacesProvider,
    RouteDescription,
};

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub summary: SummaryOptions,
    pub polyline: PolylineOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub summary: RouteDistanceSummary,
    pub path: Polyline,
    /// Point at the middle index of the decoded path.
    pub midpoint: Coordinate,
    pub centroid: Coordinate,
}

impl RouteReport {
    pub fn build<S: AsRef<str>>(legs: &[S], polyline: &str) -> Result<Self, RouteError> {
        Self::build_with(legs, polyline, &ReportOptions::default())
    }

    pub fn build_with<S: AsRef<str>>(
        legs: &[S],
        polyline: &str,
        options: &ReportOptions,
    ) -> Result<Self, RouteError> {
        let summary = distance::summarize_with(legs, &options.summary)?;
        let path = Polyline::decode_with(polyline, &options.polyline)?;
        let midpoint = path.midpoint_by_index()?;
        let centroid = path.centroid()?;

        debug!(
            points = path.len(),
            total_miles = summary.total_miles,
            "built route report"
        );

        Ok(Self {
            summary,
            path,
            midpoint,
            centroid,
        })
    }

    pub fn from_description(route: &RouteDescription) -> Result<Self, RouteError> {
        Self::build(route.legs.as_slice(), &route.polyline)
    }

    /// Midpoint marker plus the closest lodging and dining around the centroid.
    ///
    /// Categories for which the provider finds nothing are left out.
    pub fn annotations<P: PlacesProvider>(&self, places: &P) -> Vec<Annotation> {
        let mut annotations = vec![Annotation {
            kind: AnnotationKind::Midpoint,
            location: self.midpoint,
            label: "Middle Point".to_string(),
        }];

        for (category, kind, title) in [
            (PlaceCategory::Lodging, AnnotationKind::Lodging, "Hotel"),
            (PlaceCategory::Dining, AnnotationKind::Dining, "Restaurant"),
        ] {
            match places.closest(self.centroid, category) {
                Some(place) => {
                    let label = match &place.address {
                        Some(address) => format!("{}: {}\nAddress: {}", title, place.name, address),
                        None => format!("{}: {}", title, place.name),
                    };
                    annotations.push(Annotation {
                        kind,
                        location: place.location,
                        label,
                    });
                }
                None => debug!(category = category.as_str(), "no nearby place found"),
            }
        }

        annotations
    }

    /// Renders the path centred on its centroid with all annotations.
    pub fn render<P, R>(&self, places: &P, renderer: &R) -> R::Output
    where
        P: PlacesProvider,
        R: MapRenderer,
    {
        let annotations = self.annotations(places);
        renderer.render(&self.path, self.centroid, &annotations)
    }
}

/// Looks up a route and builds its report; `Ok(None)` if no route exists.
pub fn plan_route<D: DirectionsProvider>(
    directions: &D,
    origin: &str,
    destination: &str,
) -> Result<Option<RouteReport>, RouteError> {
    match directions.directions(origin, destination) {
        Some(route) => RouteReport::from_description(&route).map(Some),
        None => {
            debug!(origin, destination, "no route between origin and destination");
            Ok(None)
        }
    }
}

/// Summarizes many routes in parallel; results keep the input order.
pub fn summarize_batch<S>(routes: &[Vec<S>]) -> Vec<Result<RouteDistanceSummary, ParseError>>
where
    S: AsRef<str> + Sync,
{
    routes
        .par_iter()
        .map(|legs| distance::parse_and_summarize_distances(legs.as_slice()))
        .collect()
}
