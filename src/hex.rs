//! Axial hex coordinates and the edges between them.
//!
//! A [`HexCoordinate`] stores only the axial pair `(q, r)`; the third cube
//! coordinate `s = -q - r` is derived on demand, so the cube constraint
//! `q + r + s == 0` holds by construction.

use std::fmt;

use bevy::prelude::*;
use hexx::Hex;

/// Axial coordinate of a single hex cell.
///
/// Ordered and hashed by `(q, r)`, which makes it usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Reflect)]
pub struct HexCoordinate {
    q: i32,
    r: i32,
}

impl HexCoordinate {
    /// The `(0, 0)` cell.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Builds a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Axial column.
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// Axial row.
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Derived cube coordinate, always `-q - r`.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six cells sharing an edge with this one.
    pub fn neighbors(self) -> [HexCoordinate; 6] {
        Hex::from(self).all_neighbors().map(HexCoordinate::from)
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(self, other: HexCoordinate) -> bool {
        self.neighbors().contains(&other)
    }

    /// Text shown on the cell when coordinate labels are enabled.
    pub fn label(self) -> String {
        format!("{}, {}", self.q, self.r)
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<Hex> for HexCoordinate {
    fn from(hex: Hex) -> Self {
        Self::new(hex.x, hex.y)
    }
}

impl From<HexCoordinate> for Hex {
    fn from(coord: HexCoordinate) -> Self {
        Hex::new(coord.q, coord.r)
    }
}

/// Unordered pair of cells.
///
/// Endpoints are normalized on construction so `Edge::new(a, b) == Edge::new(b, a)`
/// and both hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    low: HexCoordinate,
    high: HexCoordinate,
}

impl Edge {
    /// Edge between `a` and `b`, in either order.
    pub fn new(a: HexCoordinate, b: HexCoordinate) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both endpoints, smaller coordinate first.
    pub fn endpoints(&self) -> (HexCoordinate, HexCoordinate) {
        (self.low, self.high)
    }

    /// Whether `coord` is one of the endpoints.
    pub fn touches(&self, coord: HexCoordinate) -> bool {
        self.low == coord || self.high == coord
    }
}
