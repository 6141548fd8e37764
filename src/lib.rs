#![warn(missing_docs)]
//! Hexagon board viewer.
//!
//! A rectangular board of pointy-top hexagons in axial coordinates, drawn as
//! outlines with optional terrain images and `q, r` labels. Alt-drag pans,
//! the mouse wheel zooms around the cursor.

pub mod board;
pub mod board_view;
pub mod controls;
pub mod error;
pub mod hex;
pub mod math;
pub mod terrain;
pub mod viewport;

use bevy::prelude::*;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Board input is live.
    #[default]
    Running,
    /// World inspector open (Tab to toggle); board input is paused.
    Inspecting,
}
