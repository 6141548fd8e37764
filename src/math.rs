//! Pure pixel geometry for pointy-top hexes.
//!
//! Everything here is a closed-form function of its arguments: no Bevy ECS access
//! and no caching. [`crate::viewport::GeometryCache`] memoizes the two per-hex
//! functions, [`pixel_center`] and [`corner_points`].
//!
//! Screen space is canvas-local: origin at the top-left corner, y pointing down.

use std::f64::consts::PI;

use bevy::prelude::{IVec2, UVec2, Vec2};

use crate::hex::HexCoordinate;

/// `√3`, the width of a pointy-top hex relative to its radius.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Vertical distance between hex rows, relative to the radius.
pub const ROW_SPACING: f64 = 1.5;

/// Terrain images are drawn taller than the hex so the artwork covers its points.
pub const TERRAIN_IMAGE_HEIGHT: f64 = 2.3;

/// Pixel center of `coord` for hexes of `radius`.
///
/// The `+ radius` on both axes keeps the top-left hex fully inside the canvas.
/// Rounded to whole pixels, ties to even, so the result can key the corner cache.
///
/// # Examples
/// ```
/// # use hex_board::hex::HexCoordinate;
/// # use hex_board::math::pixel_center;
/// assert_eq!(pixel_center(HexCoordinate::new(0, 0), 30).to_array(), [30, 30]);
/// assert_eq!(pixel_center(HexCoordinate::new(0, 1), 30).to_array(), [56, 75]);
/// ```
pub fn pixel_center(coord: HexCoordinate, radius: u32) -> IVec2 {
    let radius = f64::from(radius);
    let q = f64::from(coord.q());
    let r = f64::from(coord.r());
    let x = radius * SQRT_3 * (q + r / 2.0) + radius;
    let y = radius * ROW_SPACING * r + radius;
    IVec2::new(x.round_ties_even() as i32, y.round_ties_even() as i32)
}

/// The six corners of a pointy-top hex around `center`.
///
/// Corner `i` sits at `60·i − 30` degrees, so corner 0 is upper-right and the
/// order runs clockwise on screen (y down).
pub fn corner_points(center: IVec2, radius: u32) -> [Vec2; 6] {
    let radius = f64::from(radius);
    let cx = f64::from(center.x);
    let cy = f64::from(center.y);
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0) * PI / 180.0;
        Vec2::new(
            (cx + radius * angle.cos()) as f32,
            (cy + radius * angle.sin()) as f32,
        )
    })
}

/// Pixel extent of a `width × height` board, without padding.
pub fn board_pixel_size(width: u32, height: u32, radius: u32) -> UVec2 {
    let radius = f64::from(radius);
    UVec2::new(
        (f64::from(width) * radius * SQRT_3).ceil() as u32,
        (f64::from(height) * radius * ROW_SPACING).ceil() as u32,
    )
}

/// Board extent plus `radius` of padding on every side, so no outer hex is clipped.
pub fn canvas_size(width: u32, height: u32, radius: u32) -> UVec2 {
    let padding = UVec2::splat(radius.saturating_mul(2));
    board_pixel_size(width, height, radius).saturating_add(padding)
}

/// Relative change in linear scale between two canvas sizes.
///
/// `sqrt(new_area / old_area) - 1`: both axes scale together, hence the root.
pub fn zoom_scale_change(old_canvas: UVec2, new_canvas: UVec2) -> f64 {
    let old_area = f64::from(old_canvas.x) * f64::from(old_canvas.y);
    let new_area = f64::from(new_canvas.x) * f64::from(new_canvas.y);
    (new_area / old_area).sqrt() - 1.0
}

/// Origin shift that keeps the canvas point under `local_cursor` fixed after a zoom.
pub fn cursor_anchor_shift(local_cursor: Vec2, scale_change: f64) -> Vec2 {
    Vec2::new(
        (-f64::from(local_cursor.x) * scale_change).round_ties_even() as f32,
        (-f64::from(local_cursor.y) * scale_change).round_ties_even() as f32,
    )
}

/// Size of the terrain image drawn over a hex.
pub fn terrain_image_size(radius: u32) -> Vec2 {
    let radius = f64::from(radius);
    Vec2::new(
        (radius * SQRT_3).round_ties_even() as f32,
        (radius * TERRAIN_IMAGE_HEIGHT).round_ties_even() as f32,
    )
}

/// Baseline position for a coordinate label of `text_size` centered on `center`.
///
/// Only a quarter of the text height is added below the center; a half pushes
/// the label visibly low.
pub fn label_anchor(center: Vec2, text_size: Vec2) -> Vec2 {
    Vec2::new(
        center.x - (text_size.x / 2.0).round_ties_even(),
        center.y + (text_size.y / 4.0).round_ties_even(),
    )
}

/// Converts a window position (top-left origin, y down) to 2D world space
/// for a camera centered on the window (center origin, y up).
pub fn screen_to_world(screen: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(screen.x - window_size.x / 2.0, window_size.y / 2.0 - screen.y)
}
