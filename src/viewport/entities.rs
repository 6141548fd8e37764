use bevy::prelude::*;

use super::ViewportSettings;
use super::cache::GeometryCache;
use crate::board::Board;
use crate::hex::HexCoordinate;
use crate::math;
use crate::terrain::TerrainKind;

/// Everything that can change the view, independent of any input device.
///
/// Positions are window coordinates (top-left origin, y down).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Start dragging the canvas from this pointer position.
    PanBegin(Vec2),
    /// Pointer moved by this delta while dragging.
    PanMove(Vec2),
    /// Stop dragging.
    PanEnd,
    /// Grow hexes by one step around this pointer position.
    ZoomIn(Vec2),
    /// Shrink hexes by one step around this pointer position.
    ZoomOut(Vec2),
    /// Show or hide the `q, r` labels.
    ToggleLabels,
}

/// Screen placement of one hexagon, in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexShape {
    /// Which hexagon.
    pub coord: HexCoordinate,
    /// Pixel center.
    pub center: IVec2,
    /// Corner polygon, clockwise from the upper-right corner.
    pub outline: [Vec2; 6],
    /// Terrain to draw, if any.
    pub terrain: Option<TerrainKind>,
}

/// Maps the board onto the window: hex radius, pan origin and label toggle.
///
/// The canvas (board plus padding) has its top-left corner at [`Viewport::origin`]
/// in window coordinates. Geometry is memoized per radius; every radius write
/// clears the memo in the same call.
#[derive(Resource, Debug, Clone)]
pub struct Viewport {
    settings: ViewportSettings,
    hex_radius: u32,
    origin: Vec2,
    pan_anchor: Option<Vec2>,
    draw_coordinates: bool,
    geometry: GeometryCache,
}

impl Viewport {
    /// Viewport at `settings.hex_radius` (clamped into range) with the canvas at the window origin.
    pub fn new(settings: ViewportSettings) -> Self {
        let hex_radius = settings.clamp_radius(settings.hex_radius);
        Self {
            settings,
            hex_radius,
            origin: Vec2::ZERO,
            pan_anchor: None,
            draw_coordinates: false,
            geometry: GeometryCache::default(),
        }
    }

    // ── State access ───────────────────────────────────────────────

    /// Current hex radius in pixels.
    pub fn hex_radius(&self) -> u32 {
        self.hex_radius
    }

    /// Window position of the canvas top-left corner.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Whether a pan drag is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Last pointer position seen during the current pan drag.
    pub fn pan_anchor(&self) -> Option<Vec2> {
        self.pan_anchor
    }

    /// Whether coordinate labels should be drawn.
    pub fn draw_coordinates(&self) -> bool {
        self.draw_coordinates
    }

    /// Zoom bounds and step.
    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    /// Memoized geometry for the current radius.
    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// Board extent in pixels at the current radius, without padding.
    pub fn board_pixel_size(&self, board: &Board) -> UVec2 {
        math::board_pixel_size(board.width(), board.height(), self.hex_radius)
    }

    /// Board extent plus one radius of padding on every side.
    pub fn canvas_size(&self, board: &Board) -> UVec2 {
        math::canvas_size(board.width(), board.height(), self.hex_radius)
    }

    /// Window position of a canvas-local point.
    pub fn to_window(&self, canvas_point: Vec2) -> Vec2 {
        self.origin + canvas_point
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Sets the radius (clamped) and clears cached geometry if it changed.
    ///
    /// Returns `false`, leaving the cache untouched, when the clamped radius
    /// equals the current one.
    pub fn set_hex_radius(&mut self, radius: u32) -> bool {
        let radius = self.settings.clamp_radius(radius);
        if radius == self.hex_radius {
            return false;
        }
        self.hex_radius = radius;
        self.geometry.invalidate();
        true
    }

    /// Swaps in new zoom bounds and step, re-clamping the current radius.
    ///
    /// Returns whether the radius moved.
    pub fn set_settings(&mut self, settings: ViewportSettings) -> bool {
        self.settings = settings;
        self.set_hex_radius(self.hex_radius)
    }

    /// One zoom step larger, anchored at `cursor`.
    pub fn zoom_in(&mut self, cursor: Vec2, board: &Board) -> bool {
        let radius = self.hex_radius.saturating_add(self.settings.zoom_step);
        self.zoom_to(radius, cursor, board)
    }

    /// One zoom step smaller, anchored at `cursor`.
    pub fn zoom_out(&mut self, cursor: Vec2, board: &Board) -> bool {
        let radius = self.hex_radius.saturating_sub(self.settings.zoom_step);
        self.zoom_to(radius, cursor, board)
    }

    fn zoom_to(&mut self, radius: u32, cursor: Vec2, board: &Board) -> bool {
        let before = self.canvas_size(board);
        if !self.set_hex_radius(radius) {
            return false;
        }
        let after = self.canvas_size(board);
        let change = math::zoom_scale_change(before, after);
        self.origin += math::cursor_anchor_shift(cursor - self.origin, change);
        true
    }

    /// Enters pan mode with the pointer at `pointer`.
    pub fn pan_begin(&mut self, pointer: Vec2) {
        self.pan_anchor = Some(pointer);
    }

    /// Moves the canvas by `delta`. Ignored unless a pan is active.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        let Some(anchor) = self.pan_anchor.as_mut() else {
            return false;
        };
        *anchor += delta;
        self.origin += delta;
        true
    }

    /// Leaves pan mode. Returns whether a pan was active.
    pub fn pan_end(&mut self) -> bool {
        self.pan_anchor.take().is_some()
    }

    /// Flips label drawing. Has no effect on geometry.
    pub fn toggle_coordinate_labels(&mut self) {
        self.draw_coordinates = !self.draw_coordinates;
    }

    /// Applies one command; returns whether the view changed.
    pub fn apply(&mut self, command: ViewCommand, board: &Board) -> bool {
        match command {
            ViewCommand::PanBegin(pointer) => {
                self.pan_begin(pointer);
                true
            }
            ViewCommand::PanMove(delta) => self.pan(delta),
            ViewCommand::PanEnd => self.pan_end(),
            ViewCommand::ZoomIn(cursor) => self.zoom_in(cursor, board),
            ViewCommand::ZoomOut(cursor) => self.zoom_out(cursor, board),
            ViewCommand::ToggleLabels => {
                self.toggle_coordinate_labels();
                true
            }
        }
    }

    // ── Geometry queries ───────────────────────────────────────────

    /// Canvas-local pixel center of `coord`.
    pub fn hex_center(&mut self, coord: HexCoordinate) -> IVec2 {
        self.geometry.center(coord, self.hex_radius)
    }

    /// Canvas-local corner polygon of `coord`.
    pub fn hex_outline(&mut self, coord: HexCoordinate) -> [Vec2; 6] {
        let center = self.hex_center(coord);
        self.geometry.corners(center, self.hex_radius)
    }

    /// Placement of every hexagon on `board` at the current radius.
    pub fn hex_shapes(&mut self, board: &Board) -> Vec<HexShape> {
        board
            .iter()
            .map(|hex| {
                let coord = hex.coord();
                HexShape {
                    coord,
                    center: self.hex_center(coord),
                    outline: self.hex_outline(coord),
                    terrain: hex.terrain(),
                }
            })
            .collect()
    }
}
