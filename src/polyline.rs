//! Encoded polyline codec and path geometry.
//!
//! Directions providers return route geometry in the compact encoded
//! polyline format: each coordinate is stored as a delta from the previous
//! one, scaled to fixed point, zigzag folded and written as 5-bit chunks
//! offset into printable ASCII. Decoding happens once at the boundary; the
//! rest of the crate works with [`Polyline`] values.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DecodeError, EmptyPath, EncodeError};

/// Decimal digits kept by the standard encoding (scale 100000).
pub const DEFAULT_PRECISION: u32 = 5;

/// Chunks a single value may span before it can no longer fit in an `i64`.
const MAX_CHUNKS: u32 = 12;

/// Largest scaled magnitude the encoder accepts. Deltas then stay within
/// 2^58, so every zigzag-folded value fits in `MAX_CHUNKS` chunks.
const MAX_SCALED: f64 = (1u64 << 57) as f64;

const CHUNK_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

/// Bounding box of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude)
            && (self.min_lng..=self.max_lng).contains(&point.longitude)
    }
}

#[derive(Debug, Clone)]
pub struct PolylineOptions {
    /// Decimal digits of the fixed-point encoding (5 for Google, 6 for OSRM `polyline6`).
    pub precision: u32,
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// A decoded route geometry in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from already decoded points in traversal order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes a standard precision-5 encoded polyline.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        decode(encoded)
    }

    /// Decodes using the precision configured in `options`.
    pub fn decode_with(encoded: &str, options: &PolylineOptions) -> Result<Self, DecodeError> {
        decode_with_precision(encoded, options.precision)
    }

    /// Encodes the points at the standard precision.
    pub fn encode(&self) -> Result<String, EncodeError> {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// See [`midpoint_by_index`].
    pub fn midpoint_by_index(&self) -> Result<Coordinate, EmptyPath> {
        midpoint_by_index(&self.points)
    }

    /// See [`centroid`].
    pub fn centroid(&self) -> Result<Coordinate, EmptyPath> {
        centroid(&self.points)
    }

    /// Returns `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let init = Bounds {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };

        Some(self.points.iter().fold(init, |b, p| Bounds {
            min_lat: b.min_lat.min(p.latitude),
            max_lat: b.max_lat.max(p.latitude),
            min_lng: b.min_lng.min(p.longitude),
            max_lng: b.max_lng.max(p.longitude),
        }))
    }
}

/// Decodes a standard precision-5 encoded polyline.
pub fn decode(encoded: &str) -> Result<Polyline, DecodeError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decodes an encoded polyline whose values carry `precision` decimal digits.
///
/// Every iteration of the outer loop consumes one latitude value followed
/// by one longitude value, so the output has exactly one point per encoded
/// pair. An input that stops between the two values is rejected.
pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<Polyline, DecodeError> {
    let factor = scale(precision);
    let bytes = encoded.as_bytes();
    let mut cursor = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut points = Vec::new();

    while cursor < bytes.len() {
        let start = cursor;
        let lat_delta = next_value(bytes, &mut cursor)?;
        let lng_delta = next_value(bytes, &mut cursor)?;

        latitude = latitude
            .checked_add(lat_delta)
            .ok_or(DecodeError::Overflow { position: start })?;
        longitude = longitude
            .checked_add(lng_delta)
            .ok_or(DecodeError::Overflow { position: start })?;

        points.push(Coordinate::new(
            latitude as f64 / factor,
            longitude as f64 / factor,
        ));
    }

    debug!(bytes = bytes.len(), points = points.len(), "decoded polyline");
    Ok(Polyline::new(points))
}

/// Reads one zigzag-folded value starting at `cursor` and advances past it.
fn next_value(bytes: &[u8], cursor: &mut usize) -> Result<i64, DecodeError> {
    let start = *cursor;
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *cursor;
        let byte = *bytes.get(position).ok_or(DecodeError::Truncated { position })?;
        let chunk = match byte {
            63..=126 => i64::from(byte - CHUNK_OFFSET),
            _ => return Err(DecodeError::InvalidCharacter { position, byte }),
        };
        if shift >= MAX_CHUNKS * 5 {
            return Err(DecodeError::Overflow { position: start });
        }

        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *cursor += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encodes coordinates at the standard precision.
pub fn encode(points: &[Coordinate]) -> Result<String, EncodeError> {
    encode_with_precision(points, DEFAULT_PRECISION)
}

/// Encodes coordinates, rounding each to `precision` decimal digits.
///
/// Non-finite coordinates and values whose fixed-point form would not
/// decode back are rejected rather than clamped.
pub fn encode_with_precision(
    points: &[Coordinate],
    precision: u32,
) -> Result<String, EncodeError> {
    let factor = scale(precision);
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for (index, point) in points.iter().enumerate() {
        let lat = to_fixed(point.latitude, factor, index)?;
        let lng = to_fixed(point.longitude, factor, index)?;
        push_value(lat - prev_lat, &mut out);
        push_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(out)
}

fn to_fixed(value: f64, factor: f64, index: usize) -> Result<i64, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::NonFinite { index });
    }

    let scaled = (value * factor).round();
    if !(-MAX_SCALED..=MAX_SCALED).contains(&scaled) {
        return Err(EncodeError::OutOfRange { index });
    }

    Ok(scaled as i64)
}

fn push_value(delta: i64, out: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
    while value >= CONTINUATION_BIT as u64 {
        let chunk = (CONTINUATION_BIT as u64 | (value & CHUNK_MASK as u64)) as u8;
        out.push(char::from(chunk + CHUNK_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}

fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// The point at the structural middle of the path (`len / 2`).
pub fn midpoint_by_index(points: &[Coordinate]) -> Result<Coordinate, EmptyPath> {
    points.get(points.len() / 2).copied().ok_or(EmptyPath)
}

/// Mean latitude and mean longitude of the path.
pub fn centroid(points: &[Coordinate]) -> Result<Coordinate, EmptyPath> {
    if points.is_empty() {
        return Err(EmptyPath);
    }

    let n = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.latitude, lng + p.longitude));

    Ok(Coordinate::new(lat_sum / n, lng_sum / n))
}
