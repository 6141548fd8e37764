//! Renders the board through the [`Viewport`](crate::viewport::Viewport).
//!
//! Outlines are gizmo line strips, terrain images are sprites sized to the
//! current radius, and coordinate labels plus the label toggle button are egui
//! overlays. All positions go canvas → window → 2D world.

mod entities;
mod systems;

pub use entities::{BoardCamera, TerrainTile};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::board::Board;
use crate::viewport::ViewSet;

/// Colors and label font.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct BoardViewConfig {
    /// Window clear color behind the board.
    pub background: Color,
    /// Hexagon outline stroke.
    pub outline_color: Color,
    /// Coordinate label text.
    pub label_color: Color,
    /// Coordinate label size in points.
    pub label_font_size: f32,
}

impl Default for BoardViewConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            outline_color: Color::BLACK,
            label_color: Color::BLACK,
            label_font_size: 11.0,
        }
    }
}

/// Camera, outlines, terrain sprites and egui overlays.
pub struct BoardViewPlugin(pub BoardViewConfig);

impl Plugin for BoardViewPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardViewConfig>()
            .register_type::<TerrainTile>()
            .register_type::<BoardCamera>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.background))
            .add_systems(Startup, systems::spawn_camera)
            .add_systems(
                Update,
                (
                    systems::sync_terrain_tiles.run_if(resource_changed::<Board>),
                    systems::place_terrain_tiles,
                    systems::draw_hex_outlines,
                )
                    .chain()
                    .in_set(ViewSet::Draw),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (systems::view_controls_panel, systems::draw_coordinate_labels),
            );
    }
}
