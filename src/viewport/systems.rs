use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ViewportSettings;
use super::entities::{ViewCommand, Viewport};
use crate::board::Board;

/// Folds this frame's [`ViewCommand`]s into the viewport, in arrival order.
pub fn apply_view_commands(
    mut commands: MessageReader<ViewCommand>,
    mut viewport: ResMut<Viewport>,
    board: Res<Board>,
) {
    for &command in commands.read() {
        if viewport.apply(command, &board) {
            debug!(
                "{command:?}: radius {}, origin {}",
                viewport.hex_radius(),
                viewport.origin()
            );
        }
    }
}

/// Pushes edited [`ViewportSettings`] into the viewport; invalid edits are ignored.
pub fn sync_viewport_settings(settings: Res<ViewportSettings>, mut viewport: ResMut<Viewport>) {
    if viewport.settings() == &*settings {
        return;
    }
    if let Err(err) = settings.validate() {
        warn!("ignoring viewport settings: {err}");
        return;
    }
    viewport.set_settings(settings.clone());
    info!(
        "viewport settings updated: radius {} in [{}, {}], step {}",
        viewport.hex_radius(),
        settings.min_radius,
        settings.max_radius,
        settings.zoom_step
    );
}

/// Sizes the primary window to the padded board canvas.
pub fn fit_window_to_canvas(
    viewport: Res<Viewport>,
    board: Res<Board>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let size = viewport.canvas_size(&board);
    window.resolution.set(size.x as f32, size.y as f32);
    info!("window sized to {}x{} canvas", size.x, size.y);
}
