//! Route distance aggregation.
//!
//! Directions providers report each leg as display text such as `"0.3 mi"`
//! or `"500 ft"`. This module parses those strings, normalizes them to
//! miles and finds the leg on which the halfway mark of the route falls.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ParseError;

pub const FEET_PER_MILE: f64 = 5280.0;

/// Unit a leg distance was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Mile,
    Foot,
    /// Neither unit token was found; the leg counts as zero distance.
    Unrecognized,
}

/// How to treat a distance string with no recognized unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitPolicy {
    /// Treat the leg as zero miles.
    #[default]
    Lenient,
    /// Reject the leg with [`ParseError::UnrecognizedUnit`].
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub unit_policy: UnitPolicy,
}

/// A single parsed leg measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceLeg {
    pub magnitude: f64,
    pub unit: DistanceUnit,
}

impl DistanceLeg {
    pub fn new(magnitude: f64, unit: DistanceUnit) -> Self {
        Self { magnitude, unit }
    }

    pub fn miles(&self) -> f64 {
        to_miles(self)
    }
}

/// Total distance of a route and where its halfway mark falls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistanceSummary {
    pub total_miles: f64,
    pub halfway_miles: f64,
    /// First leg whose cumulative distance reaches `halfway_miles`.
    pub halfway_leg_index: Option<usize>,
    /// Cumulative distance at the start of the halfway leg.
    pub halfway_leg_start_miles: Option<f64>,
}

/// Parses a leg string using the lenient unit policy.
pub fn parse_leg(text: &str) -> Result<DistanceLeg, ParseError> {
    parse_leg_with(text, UnitPolicy::Lenient)
}

/// Parses a leg string such as `"0.3 mi"` or `"500 ft"`.
///
/// Unit detection is substring based and checks miles before feet. The
/// unit token is removed and the remaining text must be a plain decimal
/// number.
pub fn parse_leg_with(text: &str, policy: UnitPolicy) -> Result<DistanceLeg, ParseError> {
    let (unit, token) = if text.contains("mi") {
        (DistanceUnit::Mile, " mi")
    } else if text.contains("ft") {
        (DistanceUnit::Foot, " ft")
    } else {
        return match policy {
            UnitPolicy::Lenient => {
                warn!(input = text, "unrecognized distance unit, counting leg as 0 miles");
                Ok(DistanceLeg::new(0.0, DistanceUnit::Unrecognized))
            }
            UnitPolicy::Strict => Err(ParseError::UnrecognizedUnit {
                input: text.to_string(),
            }),
        };
    };

    let number = text.replace(token, "");
    let magnitude: f64 = number.trim().parse().map_err(|_| ParseError::InvalidNumber {
        input: text.to_string(),
    })?;

    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(ParseError::InvalidMagnitude {
            input: text.to_string(),
        });
    }

    Ok(DistanceLeg::new(magnitude, unit))
}

pub fn to_miles(leg: &DistanceLeg) -> f64 {
    match leg.unit {
        DistanceUnit::Mile => leg.magnitude,
        DistanceUnit::Foot => leg.magnitude / FEET_PER_MILE,
        DistanceUnit::Unrecognized => 0.0,
    }
}

pub fn total_distance(legs: &[DistanceLeg]) -> f64 {
    legs.iter().map(to_miles).sum()
}

/// Returns half the total distance and the first leg index at which the
/// running total reaches it.
pub fn halfway(legs: &[DistanceLeg]) -> (f64, Option<usize>) {
    let (halfway_miles, crossing) = locate_halfway(legs);
    (halfway_miles, crossing.map(|(index, _)| index))
}

/// Halfway distance plus `(index, miles before that leg)` of the crossing leg.
fn locate_halfway(legs: &[DistanceLeg]) -> (f64, Option<(usize, f64)>) {
    if legs.is_empty() {
        return (0.0, None);
    }

    let halfway_miles = total_distance(legs) / 2.0;
    let mut accumulated = 0.0;

    for (index, leg) in legs.iter().enumerate() {
        let start = accumulated;
        accumulated += to_miles(leg);
        if accumulated >= halfway_miles {
            return (halfway_miles, Some((index, start)));
        }
    }

    (halfway_miles, None)
}

pub fn summarize(legs: &[DistanceLeg]) -> RouteDistanceSummary {
    let (halfway_miles, crossing) = locate_halfway(legs);
    let summary = RouteDistanceSummary {
        total_miles: total_distance(legs),
        halfway_miles,
        halfway_leg_index: crossing.map(|(index, _)| index),
        halfway_leg_start_miles: crossing.map(|(_, start)| start),
    };

    debug!(
        legs = legs.len(),
        total_miles = summary.total_miles,
        halfway_leg = ?summary.halfway_leg_index,
        "summarized route distance"
    );

    summary
}

/// Parses every leg string and summarizes the route with default options.
pub fn parse_and_summarize_distances<S: AsRef<str>>(
    distances: &[S],
) -> Result<RouteDistanceSummary, ParseError> {
    summarize_with(distances, &SummaryOptions::default())
}

pub fn summarize_with<S: AsRef<str>>(
    distances: &[S],
    options: &SummaryOptions,
) -> Result<RouteDistanceSummary, ParseError> {
    let legs = distances
        .iter()
        .map(|text| parse_leg_with(text.as_ref(), options.unit_policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(summarize(&legs))
}
