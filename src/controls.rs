//! Mouse and keyboard bindings that drive the viewport.
//!
//! Alt + left-drag pans, the wheel zooms around the cursor, `C` toggles
//! coordinate labels. Everything is emitted as [`ViewCommand`](crate::viewport::ViewCommand)s.

mod gestures;
mod systems;

pub use gestures::{PointerState, pan_command, wheel_command};

use bevy::prelude::*;

use crate::AppState;
use crate::viewport::ViewSet;

/// Which buttons and keys map to view commands.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct ControlsConfig {
    /// Mouse button that drags the canvas.
    pub pan_button: MouseButton,
    /// Keys of which one must be held when the pan button goes down.
    pub pan_modifiers: Vec<KeyCode>,
    /// Key that shows or hides coordinate labels.
    pub toggle_labels_key: KeyCode,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pan_button: MouseButton::Left,
            pan_modifiers: vec![KeyCode::AltLeft, KeyCode::AltRight],
            toggle_labels_key: KeyCode::KeyC,
        }
    }
}

/// Translates raw input into view commands while the app is running.
pub struct ControlsPlugin(pub ControlsConfig);

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControlsConfig>()
            .insert_resource(self.0.clone())
            .add_systems(
                Update,
                (
                    systems::pan_with_pointer,
                    systems::zoom_with_wheel,
                    systems::toggle_labels_with_key,
                )
                    .in_set(ViewSet::Input)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(OnExit(AppState::Running), systems::end_pan);
    }
}
