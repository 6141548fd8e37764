use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ControlsConfig;
use super::gestures::{PointerState, pan_command, wheel_command};
use crate::viewport::{ViewCommand, Viewport};

/// Modifier-drag panning.
pub fn pan_with_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<ControlsConfig>,
    viewport: Res<Viewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut out: MessageWriter<ViewCommand>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let pointer = PointerState {
        pressed: buttons.just_pressed(cfg.pan_button),
        released: buttons.just_released(cfg.pan_button),
        held: buttons.pressed(cfg.pan_button),
        modifier_held: keys.any_pressed(cfg.pan_modifiers.iter().copied()),
        cursor: window.cursor_position(),
    };
    if let Some(command) = pan_command(pointer, viewport.pan_anchor()) {
        out.write(command);
    }
}

/// One zoom step per wheel message, anchored at the cursor.
pub fn zoom_with_wheel(
    mut wheel: MessageReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut out: MessageWriter<ViewCommand>,
) {
    let Ok(window) = windows.single() else {
        wheel.clear();
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        wheel.clear();
        return;
    };
    for ev in wheel.read() {
        if let Some(command) = wheel_command(ev.y, cursor) {
            out.write(command);
        }
    }
}

/// Drops any pan in progress; its release won't be seen while input is paused.
pub fn end_pan(viewport: Res<Viewport>, mut out: MessageWriter<ViewCommand>) {
    if viewport.is_panning() {
        out.write(ViewCommand::PanEnd);
    }
}

/// Label toggle from the keyboard.
pub fn toggle_labels_with_key(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<ControlsConfig>,
    mut out: MessageWriter<ViewCommand>,
) {
    if keys.just_pressed(cfg.toggle_labels_key) {
        out.write(ViewCommand::ToggleLabels);
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;
    use crate::AppState;
    use crate::board::Board;
    use crate::controls::{ControlsConfig, ControlsPlugin};
    use crate::viewport::{ViewportPlugin, ViewportSettings};

    fn app() -> App {
        let mut board = Board::default();
        board.setup(20, 20).unwrap();

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<AppState>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_message::<MouseWheel>()
            .insert_resource(board)
            .add_plugins(ViewportPlugin(ViewportSettings::default()))
            .add_plugins(ControlsPlugin(ControlsConfig::default()));
        app
    }

    fn set_state(app: &mut App, state: AppState) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(state);
        app.update();
    }

    #[test]
    fn leaving_running_ends_pan() {
        let mut app = app();
        app.world_mut()
            .write_message(ViewCommand::PanBegin(Vec2::new(10.0, 10.0)));
        app.update();
        assert!(app.world().resource::<Viewport>().is_panning());

        set_state(&mut app, AppState::Inspecting);
        set_state(&mut app, AppState::Running);

        let vp = app.world().resource::<Viewport>();
        assert!(!vp.is_panning());
        assert_eq!(vp.origin(), Vec2::ZERO);
    }

    #[test]
    fn leaving_running_without_pan_is_quiet() {
        let mut app = app();
        set_state(&mut app, AppState::Inspecting);
        assert!(!app.world().resource::<Viewport>().is_panning());
    }

    #[test]
    fn c_key_toggles_labels() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyC);
        app.update();
        assert!(app.world().resource::<Viewport>().draw_coordinates());
    }
}
