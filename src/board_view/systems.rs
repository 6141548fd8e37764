//! Drawing systems: gizmo outlines, terrain sprites and egui overlays.

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::egui;

use super::BoardViewConfig;
use super::entities::{BoardCamera, TerrainTile};
use crate::board::Board;
use crate::math;
use crate::viewport::{ViewCommand, Viewport};

/// Camera2d centered on the window.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((BoardCamera, Camera2d, Name::new("Board Camera")));
}

/// Rebuilds the terrain sprites whenever the board changes.
pub fn sync_terrain_tiles(
    mut commands: Commands,
    board: Res<Board>,
    assets: Res<AssetServer>,
    tiles: Query<Entity, With<TerrainTile>>,
) {
    for entity in &tiles {
        commands.entity(entity).despawn();
    }

    let mut spawned = 0;
    for hex in board.iter() {
        let Some(kind) = hex.terrain() else {
            continue;
        };
        commands.spawn((
            TerrainTile { coord: hex.coord() },
            Sprite::from_image(assets.load(kind.attributes().asset)),
            Transform::default(),
            Name::new(format!("{kind} {}", hex.coord())),
        ));
        spawned += 1;
    }
    debug!("spawned {spawned} terrain tiles");
}

/// Centers each terrain sprite on its hexagon at the current radius.
pub fn place_terrain_tiles(
    mut viewport: ResMut<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tiles: Query<(&TerrainTile, &mut Sprite, &mut Transform)>,
) {
    let Ok(window) = windows.single() else { return };
    let size = math::terrain_image_size(viewport.hex_radius());

    for (tile, mut sprite, mut transform) in &mut tiles {
        let center = viewport.hex_center(tile.coord).as_vec2();
        let world = math::screen_to_world(viewport.to_window(center), window.size());
        transform.translation = world.extend(transform.translation.z);
        sprite.custom_size = Some(size);
    }
}

/// Strokes every hexagon outline as a closed gizmo line strip.
pub fn draw_hex_outlines(
    mut gizmos: Gizmos,
    mut viewport: ResMut<Viewport>,
    board: Res<Board>,
    cfg: Res<BoardViewConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else { return };
    let window_size = window.size();

    for shape in viewport.hex_shapes(&board) {
        let strip = closed_outline(shape.outline, |p| {
            math::screen_to_world(viewport.to_window(p), window_size)
        });
        gizmos.linestrip_2d(strip, cfg.outline_color);
    }
}

/// Draws `q, r` on each hexagon while labels are switched on.
pub fn draw_coordinate_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    mut viewport: ResMut<Viewport>,
    board: Res<Board>,
    cfg: Res<BoardViewConfig>,
    mut ready: Local<bool>,
) {
    // Egui fonts aren't available until after the first Context::run() in the render pass.
    if !*ready {
        *ready = true;
        return;
    }
    if !viewport.draw_coordinates() {
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());
    let color = egui_color(cfg.label_color);
    let font = egui::FontId::proportional(cfg.label_font_size);

    for hex in board.iter() {
        let coord = hex.coord();
        let center = viewport.hex_center(coord).as_vec2();
        let center = viewport.to_window(center);
        let galley = painter.layout_no_wrap(coord.label(), font.clone(), color);
        let text_size = Vec2::new(galley.size().x, galley.size().y);
        let baseline = math::label_anchor(center, text_size);
        // Galleys are positioned by their top edge.
        painter.galley(
            egui::pos2(baseline.x, baseline.y - text_size.y),
            galley,
            color,
        );
    }
}

/// The "Toggle Coordinates" button in the top-left corner.
pub fn view_controls_panel(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    mut out: MessageWriter<ViewCommand>,
) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    egui::Area::new(egui::Id::new("view_controls"))
        .fixed_pos(egui::pos2(8.0, 8.0))
        .show(ctx.get_mut(), |ui| {
            if ui.button("Toggle Coordinates").clicked() {
                out.write(ViewCommand::ToggleLabels);
            }
        });
}

/// Outline corners mapped through `to_world`, with the first corner repeated to close the loop.
fn closed_outline(outline: [Vec2; 6], to_world: impl Fn(Vec2) -> Vec2) -> [Vec2; 7] {
    let mut strip = [Vec2::ZERO; 7];
    for (slot, corner) in strip.iter_mut().zip(outline.iter().chain(&outline[..1])) {
        *slot = to_world(*corner);
    }
    strip
}

fn egui_color(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexCoordinate;
    use crate::terrain::{TerrainKind, create_terrain_at};

    // ── closed_outline ──────────────────────────────────────────────

    #[test]
    fn outline_is_closed() {
        let corners = math::corner_points(IVec2::new(30, 30), 30);
        let strip = closed_outline(corners, |p| p);
        assert_eq!(strip[0], strip[6]);
        assert_eq!(&strip[..6], &corners[..]);
    }

    #[test]
    fn outline_goes_through_mapping() {
        let corners = math::corner_points(IVec2::ZERO, 10);
        let strip = closed_outline(corners, |p| p + Vec2::splat(5.0));
        assert_eq!(strip[3], corners[3] + Vec2::splat(5.0));
    }

    // ── egui_color ──────────────────────────────────────────────────

    #[test]
    fn black_stays_black() {
        assert_eq!(egui_color(Color::BLACK), egui::Color32::BLACK);
    }

    // ── sync_terrain_tiles ──────────────────────────────────────────

    fn tile_coords(app: &mut App) -> Vec<HexCoordinate> {
        let mut coords: Vec<_> = app
            .world_mut()
            .query::<&TerrainTile>()
            .iter(app.world())
            .map(|t| t.coord)
            .collect();
        coords.sort();
        coords
    }

    fn tile_app(board: Board) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Image>()
            .insert_resource(board)
            .add_systems(
                Update,
                sync_terrain_tiles.run_if(resource_changed::<Board>),
            );
        app
    }

    #[test]
    fn one_tile_per_terrain_hex() {
        let mut board = Board::default();
        board.setup(4, 4).unwrap();
        board.replace(create_terrain_at(TerrainKind::Forest, 1, 1));
        board.replace(create_terrain_at(TerrainKind::Water, 2, 0));

        let mut app = tile_app(board);
        app.update();

        assert_eq!(
            tile_coords(&mut app),
            vec![HexCoordinate::new(1, 1), HexCoordinate::new(2, 0)]
        );
    }

    #[test]
    fn tiles_follow_board_changes() {
        let mut board = Board::default();
        board.setup(4, 4).unwrap();
        board.replace(create_terrain_at(TerrainKind::Forest, 1, 1));

        let mut app = tile_app(board);
        app.update();

        app.world_mut()
            .resource_mut::<Board>()
            .replace(create_terrain_at(TerrainKind::Plain, 1, 1));
        app.world_mut()
            .resource_mut::<Board>()
            .replace(create_terrain_at(TerrainKind::Mountain, 0, 3));
        app.update();

        assert_eq!(
            tile_coords(&mut app),
            vec![HexCoordinate::new(0, 3), HexCoordinate::new(1, 1)]
        );
    }
}
