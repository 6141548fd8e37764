//! Terrain kinds and the factory that turns them into board hexagons.
//!
//! The board stores a [`TerrainKind`] tag per hex and never looks further; how a
//! terrain is drawn (its image asset) and what it costs to cross are looked up
//! here through [`TerrainKind::attributes`].

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::board::Hexagon;
use crate::error::{ConfigError, InvalidTerrainKind};
use crate::hex::HexCoordinate;

/// Terrain a hex can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TerrainKind {
    /// Woodland.
    Forest,
    /// Impassable-looking peaks.
    Mountain,
    /// Lakes and sea.
    Water,
    /// Open grassland.
    Plain,
}

/// Everything the rest of the app needs to know about a terrain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainAttributes {
    /// Lowercase tag, also the name accepted on the command line.
    pub tag: &'static str,
    /// Movement cost of a hex with this terrain, at least 1.
    pub move_cost: u32,
    /// Image asset path, relative to the asset root.
    pub asset: &'static str,
}

impl TerrainKind {
    /// Every kind, in declaration order.
    pub const ALL: [TerrainKind; 4] = [
        TerrainKind::Forest,
        TerrainKind::Mountain,
        TerrainKind::Water,
        TerrainKind::Plain,
    ];

    /// Attribute bundle for this kind.
    pub const fn attributes(self) -> TerrainAttributes {
        match self {
            TerrainKind::Forest => TerrainAttributes {
                tag: "forest",
                move_cost: 1,
                asset: "forest.png",
            },
            TerrainKind::Mountain => TerrainAttributes {
                tag: "mountain",
                move_cost: 1,
                asset: "mountain.png",
            },
            TerrainKind::Water => TerrainAttributes {
                tag: "water",
                move_cost: 1,
                asset: "water.png",
            },
            TerrainKind::Plain => TerrainAttributes {
                tag: "plain",
                move_cost: 1,
                asset: "plain.png",
            },
        }
    }

    /// Shorthand for `attributes().tag`.
    pub const fn tag(self) -> &'static str {
        self.attributes().tag
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TerrainKind {
    type Err = InvalidTerrainKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        TerrainKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| InvalidTerrainKind(s.to_string()))
    }
}

/// Builds a hexagon of `kind` at `(q, r)` with that kind's default move cost.
pub fn create_terrain_at(kind: TerrainKind, q: i32, r: i32) -> Hexagon {
    Hexagon::with_terrain(HexCoordinate::new(q, r), kind)
}

/// Like [`create_terrain_at`], but takes the terrain as a string tag.
pub fn create_terrain_from_tag(tag: &str, q: i32, r: i32) -> Result<Hexagon, InvalidTerrainKind> {
    let kind = tag.parse()?;
    Ok(create_terrain_at(kind, q, r))
}

/// A terrain hex to place on the board at startup, written as `kind@q,r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct TerrainPlacement {
    /// Terrain to place.
    pub kind: TerrainKind,
    /// Where to place it.
    pub coord: HexCoordinate,
}

impl TerrainPlacement {
    /// The hexagon this placement puts on the board.
    pub fn hexagon(&self) -> Hexagon {
        create_terrain_at(self.kind, self.coord.q(), self.coord.r())
    }
}

impl FromStr for TerrainPlacement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::Placement(s.to_string());

        let (tag, position) = s.split_once('@').ok_or_else(malformed)?;
        let (q, r) = position.split_once(',').ok_or_else(malformed)?;
        let q = q.trim().parse().map_err(|_| malformed())?;
        let r = r.trim().parse().map_err(|_| malformed())?;

        Ok(Self {
            kind: tag.parse()?,
            coord: HexCoordinate::new(q, r),
        })
    }
}
