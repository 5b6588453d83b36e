//! Error types for distance parsing, polyline decoding and report assembly.

use thiserror::Error;

/// A distance string could not be turned into a [`DistanceLeg`](crate::distance::DistanceLeg).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("distance {input:?} does not contain a number")]
    InvalidNumber { input: String },

    #[error("distance {input:?} is negative or not finite")]
    InvalidMagnitude { input: String },

    /// Only produced under [`UnitPolicy::Strict`](crate::distance::UnitPolicy::Strict).
    #[error("distance {input:?} has no recognized unit")]
    UnrecognizedUnit { input: String },
}

/// The encoded polyline violates the chunk grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("polyline ends mid-value at byte {position}")]
    Truncated { position: usize },

    #[error("invalid polyline byte {byte:#04x} at {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("polyline value starting at byte {position} overflows")]
    Overflow { position: usize },
}

/// A coordinate cannot be represented in the encoded polyline format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("coordinate {index} is not finite")]
    NonFinite { index: usize },

    #[error("coordinate {index} is too large to encode")]
    OutOfRange { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("path has no points")]
pub struct EmptyPath;

/// A provider response body could not be deserialized.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed provider payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure while assembling a [`RouteReport`](crate::report::RouteReport).
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    EmptyPath(#[from] EmptyPath),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_input() {
        let err = ParseError::InvalidNumber {
            input: "abc mi".to_string(),
        };
        assert!(err.to_string().contains("abc mi"));
    }

    #[test]
    fn test_decode_error_display_formats_byte() {
        let err = DecodeError::InvalidCharacter { position: 3, byte: 0x20 };
        assert_eq!(err.to_string(), "invalid polyline byte 0x20 at 3");
    }

    #[test]
    fn test_route_error_from_conversions() {
        let err: RouteError = EmptyPath.into();
        assert!(matches!(err, RouteError::EmptyPath(_)));

        let err: RouteError = DecodeError::Truncated { position: 1 }.into();
        assert_eq!(err.to_string(), "polyline ends mid-value at byte 1");
    }
}
