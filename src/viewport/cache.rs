use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::hex::HexCoordinate;
use crate::math;

/// Memoized hex centers and corner polygons for one hex radius.
///
/// Entries carry no radius of their own, so the owner must call
/// [`GeometryCache::invalidate`] whenever the radius changes; [`super::Viewport`]
/// does so in the same call that writes the new radius.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    centers: HashMap<HexCoordinate, IVec2>,
    corners: HashMap<IVec2, [Vec2; 6]>,
}

impl GeometryCache {
    /// Pixel center of `coord`, computed on first use.
    pub fn center(&mut self, coord: HexCoordinate, radius: u32) -> IVec2 {
        *self
            .centers
            .entry(coord)
            .or_insert_with(|| math::pixel_center(coord, radius))
    }

    /// Corner polygon around `center`, computed on first use.
    pub fn corners(&mut self, center: IVec2, radius: u32) -> [Vec2; 6] {
        *self
            .corners
            .entry(center)
            .or_insert_with(|| math::corner_points(center, radius))
    }

    /// Drops every entry.
    pub fn invalidate(&mut self) {
        self.centers.clear();
        self.corners.clear();
    }

    /// Number of memoized centers.
    pub fn cached_centers(&self) -> usize {
        self.centers.len()
    }

    /// Number of memoized corner polygons.
    pub fn cached_corners(&self) -> usize {
        self.corners.len()
    }

    /// Whether nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty() && self.corners.is_empty()
    }
}
