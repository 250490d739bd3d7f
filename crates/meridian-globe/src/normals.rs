//! Shading normals blended across each vertex ring.

use glam::Vec3;

use crate::globe::Globe;
use crate::ring::Ring;

impl Globe {
    /// Current smoothing factor.
    #[must_use]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Change the smoothing factor and recompute every vertex normal.
    pub fn set_smoothing(&mut self, factor: f32) {
        self.smoothing = clamp_factor(factor);
        self.apply_smoothing();
        self.dirty = true;
    }

    /// Recompute vertex normals with `factor` (clamped to `[0, 1]`, NaN and
    /// infinities count as `0`) without storing it.
    ///
    /// `0` gives flat shading: every record takes its tile's face normal. Above
    /// that, each record blends its face normal towards the mean face normal of
    /// the tiles around its point.
    pub fn smooth(&mut self, factor: f32) {
        let factor = clamp_factor(factor);
        if factor <= 0.0 {
            for (vertex, record) in self.vertices.iter_mut().enumerate() {
                record.normal = self.tiles[vertex / 3].normal;
            }
        } else {
            let normals: Vec<Vec3> = (0..self.vertices.len())
                .map(|vertex| {
                    let ring = Ring::walk(&self.vertices, vertex);
                    let mean = ring.tiles().map(|t| self.tiles[t].normal).sum::<Vec3>()
                        / ring.len() as f32;
                    let own = self.tiles[vertex / 3].normal;
                    (own * (1.0 - factor) + mean * factor).normalize_or_zero()
                })
                .collect();
            for (record, normal) in self.vertices.iter_mut().zip(normals) {
                record.normal = normal;
            }
        }
        self.dirty = true;
    }

    pub(crate) fn apply_smoothing(&mut self) {
        self.smooth(self.smoothing);
    }
}

/// Clamp a smoothing factor to `[0, 1]`. Non-finite factors give flat shading.
pub(crate) fn clamp_factor(factor: f32) -> f32 {
    if factor.is_finite() {
        factor.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
