//! End-to-end route reports driven through stub collaborators.

mod fixtures;

use std::cell::RefCell;
use std::collections::HashMap;

use route_midpoint::directions::{parse_directions_response, parse_nearby_response};
use route_midpoint::polyline::{Coordinate, Polyline};
use route_midpoint::report::{plan_route, RouteReport};
use route_midpoint::traits::{
    Annotation, AnnotationKind, DirectionsProvider, MapRenderer, Place, PlaceCategory,
    PlacesProvider, RouteDescription,
};

use fixtures::{DIRECTIONS_NOT_FOUND, DIRECTIONS_OK, NEARBY_EMPTY, NEARBY_LODGING};

/// Serves canned provider bodies keyed by origin.
struct CannedDirections {
    bodies: HashMap<&'static str, &'static str>,
}

impl DirectionsProvider for CannedDirections {
    fn directions(&self, origin: &str, _destination: &str) -> Option<RouteDescription> {
        let body = self.bodies.get(origin)?;
        parse_directions_response(body).expect("fixture parses")
    }
}

/// Records every search and answers from canned nearby-search bodies.
struct CannedPlaces {
    lodging: &'static str,
    dining: &'static str,
    searched_at: RefCell<Vec<Coordinate>>,
}

impl PlacesProvider for CannedPlaces {
    fn closest(&self, at: Coordinate, category: PlaceCategory) -> Option<Place> {
        self.searched_at.borrow_mut().push(at);
        let body = match category {
            PlaceCategory::Lodging => self.lodging,
            PlaceCategory::Dining => self.dining,
        };
        parse_nearby_response(body).expect("fixture parses")
    }
}

/// Returns what it was asked to draw.
struct CapturingRenderer;

impl MapRenderer for CapturingRenderer {
    type Output = (usize, Coordinate, Vec<Annotation>);

    fn render(&self, path: &Polyline, focus: Coordinate, annotations: &[Annotation]) -> Self::Output {
        (path.len(), focus, annotations.to_vec())
    }
}

fn directions() -> CannedDirections {
    CannedDirections {
        bodies: HashMap::from([("Sacramento", DIRECTIONS_OK), ("Atlantis", DIRECTIONS_NOT_FOUND)]),
    }
}

#[test]
fn plans_route_from_provider_payload() {
    let report = plan_route(&directions(), "Sacramento", "Eureka")
        .expect("valid payload")
        .expect("route exists");

    assert_eq!(report.path.len(), 3);
    assert_eq!(report.summary.halfway_leg_index, Some(2));
    assert!((report.midpoint.latitude - 40.7).abs() < 1e-5);
    assert!((report.midpoint.longitude + 120.95).abs() < 1e-5);
}

#[test]
fn missing_route_is_not_an_error() {
    let report = plan_route(&directions(), "Atlantis", "Eureka").expect("not an error");
    assert!(report.is_none());

    let report = plan_route(&directions(), "Unknown", "Eureka").expect("not an error");
    assert!(report.is_none());
}

#[test]
fn annotations_skip_categories_without_results() {
    let report = plan_route(&directions(), "Sacramento", "Eureka")
        .expect("valid payload")
        .expect("route exists");
    let places = CannedPlaces {
        lodging: NEARBY_LODGING,
        dining: NEARBY_EMPTY,
        searched_at: RefCell::new(Vec::new()),
    };

    let annotations = report.annotations(&places);
    let kinds: Vec<_> = annotations.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AnnotationKind::Midpoint, AnnotationKind::Lodging]);
    assert_eq!(annotations[1].label, "Hotel: Sierra Inn\nAddress: 12 Pine Rd, Auburn");

    // Both searches are centred on the centroid.
    let searched = places.searched_at.borrow();
    assert_eq!(searched.len(), 2);
    assert!(searched.iter().all(|c| *c == report.centroid));
}

#[test]
fn renders_centred_on_centroid() {
    let report = RouteReport::build(&["1 mi", "1 mi"], fixtures::SAMPLE_POLYLINE).expect("valid");
    let places = CannedPlaces {
        lodging: NEARBY_LODGING,
        dining: NEARBY_LODGING,
        searched_at: RefCell::new(Vec::new()),
    };

    let (points, focus, annotations) = report.render(&places, &CapturingRenderer);
    assert_eq!(points, 3);
    assert_eq!(focus, report.centroid);
    assert_eq!(annotations.len(), 3);
    assert_eq!(annotations[2].kind, AnnotationKind::Dining);
    assert!(annotations[2].label.starts_with("Restaurant: "));
}
