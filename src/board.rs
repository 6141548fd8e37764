//! Board storage: one hexagon per axial coordinate, laid out as an offset rectangle.

mod entities;
mod systems;

pub use entities::{Board, Hexagon, offset_rectangle, offset_to_axial};

use bevy::prelude::*;

use crate::error::ConfigError;
use crate::hex::HexCoordinate;
use crate::terrain::{TerrainKind, TerrainPlacement};

/// Board extent and the terrain seeded onto it at startup.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Terrain hexes replacing blank ones after setup.
    pub placements: Vec<TerrainPlacement>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            placements: vec![TerrainPlacement {
                kind: TerrainKind::Forest,
                coord: HexCoordinate::new(6, 5),
            }],
        }
    }
}

/// Largest accepted board side, in hexes.
pub const MAX_BOARD_SIDE: u32 = 1024;

impl BoardConfig {
    /// Rejects empty boards and sides above [`MAX_BOARD_SIDE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = 1..=MAX_BOARD_SIDE;
        if !sides.contains(&self.width) || !sides.contains(&self.height) {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
                limit: MAX_BOARD_SIDE,
            });
        }
        Ok(())
    }
}

/// Builds the [`Board`] resource at startup.
pub struct BoardPlugin(pub BoardConfig);

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardConfig>()
            .insert_resource(self.0.clone())
            .init_resource::<Board>()
            .add_systems(Startup, systems::setup_board);
    }
}
