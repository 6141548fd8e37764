//! Pan and zoom: maps board hexes to window pixels.
//!
//! Input systems write [`ViewCommand`] messages in [`ViewSet::Input`];
//! [`ViewSet::Apply`] folds them into the [`Viewport`] resource; drawing runs in
//! [`ViewSet::Draw`], so it always sees geometry for the current radius.

mod cache;
mod entities;
mod systems;

pub use cache::GeometryCache;
pub use entities::{HexShape, ViewCommand, Viewport};

use bevy::prelude::*;

use crate::error::ConfigError;

/// Per-frame ordering of view systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewSet {
    /// Raw input becomes [`ViewCommand`]s.
    Input,
    /// Commands are applied to the [`Viewport`].
    Apply,
    /// The board is drawn.
    Draw,
}

/// Largest accepted `max_radius`, in pixels.
pub const MAX_HEX_RADIUS: u32 = 1000;

/// Hex radius and zoom bounds, all in pixels.
#[derive(Resource, Clone, Debug, PartialEq, Eq, Reflect)]
pub struct ViewportSettings {
    /// Radius at startup.
    pub hex_radius: u32,
    /// Smallest radius zooming out can reach.
    pub min_radius: u32,
    /// Largest radius zooming in can reach.
    pub max_radius: u32,
    /// Radius change per wheel notch.
    pub zoom_step: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            hex_radius: 30,
            min_radius: 30,
            max_radius: 150,
            zoom_step: 5,
        }
    }
}

impl ViewportSettings {
    /// `radius` limited to `[min_radius, max_radius]`.
    pub fn clamp_radius(&self, radius: u32) -> u32 {
        radius.clamp(self.min_radius, self.max_radius.max(self.min_radius))
    }

    /// Rejects bounds that cannot hold a radius, radii above [`MAX_HEX_RADIUS`]
    /// and a zero zoom step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_radius, self.max_radius);
        if min == 0 || min > max {
            return Err(ConfigError::RadiusBounds { min, max });
        }
        if max > MAX_HEX_RADIUS {
            return Err(ConfigError::RadiusTooLarge {
                max,
                limit: MAX_HEX_RADIUS,
            });
        }
        if !(min..=max).contains(&self.hex_radius) {
            return Err(ConfigError::InitialRadius {
                radius: self.hex_radius,
                min,
                max,
            });
        }
        if self.zoom_step == 0 {
            return Err(ConfigError::ZeroZoomStep);
        }
        Ok(())
    }
}

/// Owns the [`Viewport`] and applies [`ViewCommand`]s to it.
pub struct ViewportPlugin(pub ViewportSettings);

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ViewportSettings>()
            .insert_resource(self.0.clone())
            .insert_resource(Viewport::new(self.0.clone()))
            .add_message::<ViewCommand>()
            .configure_sets(Update, (ViewSet::Input, ViewSet::Apply, ViewSet::Draw).chain())
            .add_systems(PostStartup, systems::fit_window_to_canvas)
            .add_systems(
                Update,
                (
                    systems::sync_viewport_settings
                        .run_if(resource_changed::<ViewportSettings>),
                    systems::apply_view_commands,
                )
                    .chain()
                    .in_set(ViewSet::Apply),
            );
    }
}
