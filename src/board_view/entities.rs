use bevy::prelude::*;

use crate::hex::HexCoordinate;

/// The 2D camera the board is drawn through.
#[derive(Component, Reflect)]
pub struct BoardCamera;

/// Terrain image sprite for one hexagon.
#[derive(Component, Reflect)]
pub struct TerrainTile {
    /// The hexagon whose terrain this shows.
    pub coord: HexCoordinate,
}
