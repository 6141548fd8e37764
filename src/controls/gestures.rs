use bevy::prelude::*;

use crate::viewport::ViewCommand;

/// One frame of pan-relevant pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pan button went down this frame.
    pub pressed: bool,
    /// Pan button went up this frame.
    pub released: bool,
    /// Pan button is down.
    pub held: bool,
    /// A pan modifier key is held.
    pub modifier_held: bool,
    /// Cursor in window coordinates, `None` when outside the window.
    pub cursor: Option<Vec2>,
}

/// Pan command for this frame, given the viewport's current pan anchor.
///
/// A pan starts only on a modified press inside the window. While panning, the
/// delta is measured from the anchor, which the viewport advances with every move.
/// A pan whose button is no longer down ends even if the release went unseen.
pub fn pan_command(pointer: PointerState, anchor: Option<Vec2>) -> Option<ViewCommand> {
    match anchor {
        Some(_) if pointer.released || !pointer.held => Some(ViewCommand::PanEnd),
        Some(last) => pointer
            .cursor
            .filter(|&cursor| cursor != last)
            .map(|cursor| ViewCommand::PanMove(cursor - last)),
        None if pointer.pressed && pointer.modifier_held => {
            pointer.cursor.map(ViewCommand::PanBegin)
        }
        None => None,
    }
}

/// Zoom command for a wheel notch; upward scroll zooms in.
pub fn wheel_command(scroll_y: f32, cursor: Vec2) -> Option<ViewCommand> {
    if scroll_y > 0.0 {
        Some(ViewCommand::ZoomIn(cursor))
    } else if scroll_y < 0.0 {
        Some(ViewCommand::ZoomOut(cursor))
    } else {
        None
    }
}
