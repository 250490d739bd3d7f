//! Per-tile attributes: terrain, height, and vectors derived from the corners.

use glam::Vec3;

use crate::terrain::{Terrain, TileTexture};

/// One triangular tile of the globe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tile {
    /// Terrain assigned by game setup.
    pub terrain: Terrain,
    /// Elevation above sea level, applied when the globe is configured.
    pub height: f32,
    /// Texture selected by the last classification pass.
    pub texture: TileTexture,
    /// Centroid of the three corners.
    pub origin: Vec3,
    /// Unit face normal.
    pub normal: Vec3,
    /// Unit vector from the centroid towards corner 0.
    pub forward: Vec3,
}

impl Tile {
    /// A fresh tile with the given terrain and height and no derived vectors.
    #[must_use]
    pub fn new(terrain: Terrain, height: f32) -> Self {
        Self {
            terrain,
            height,
            ..Self::default()
        }
    }

    /// Recompute `normal`, `origin` and `forward` from the tile's corner positions.
    pub fn compute_vectors(&mut self, corners: [Vec3; 3]) {
        let [a, b, c] = corners;
        self.normal = (a - b).cross(a - c).normalize_or_zero();
        self.origin = (a + b + c) / 3.0;
        self.forward = (a - self.origin).normalize_or_zero();
    }
}
