//! Error types for board edits, terrain tags and startup configuration.

use thiserror::Error;

use crate::hex::HexCoordinate;

/// Board edit that would break the one-hex-per-coordinate rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexPositionError {
    /// Tried to add a hex where one already exists.
    #[error("hex already exists at {0}")]
    Occupied(HexCoordinate),

    /// Tried to remove a hex where there is none.
    #[error("no hex at {0}")]
    Vacant(HexCoordinate),
}

/// Terrain tag that does not name any known terrain kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid terrain kind: {0:?}")]
pub struct InvalidTerrainKind(pub String);

/// Rejected startup configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("radius bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    RadiusBounds { min: u32, max: u32 },

    #[error("initial hex radius {radius} is outside [{min}, {max}]")]
    InitialRadius { radius: u32, min: u32, max: u32 },

    #[error("max hex radius {max} exceeds the limit of {limit}")]
    RadiusTooLarge { max: u32, limit: u32 },

    #[error("board must be between 1x1 and {limit}x{limit}, got {width}x{height}")]
    BoardSize { width: u32, height: u32, limit: u32 },

    #[error("zoom step must be positive")]
    ZeroZoomStep,

    #[error("malformed terrain placement {0:?}, expected kind@q,r")]
    Placement(String),

    #[error(transparent)]
    Terrain(#[from] InvalidTerrainKind),
}
