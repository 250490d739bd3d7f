//! Tile elevation: radial displacement spread evenly over each corner's ring.

use crate::error::GlobeError;
use crate::globe::Globe;
use crate::ring::Ring;

impl Globe {
    /// Raise a tile by `height`.
    ///
    /// Each corner's ring receives `height / ring_len`, added to the radial
    /// distance of every record in the ring. Once every tile around a corner
    /// has been shaped, the corner sits at the mean of their heights. Calls are
    /// additive, and the stored tile height accumulates with them so that
    /// [`Globe::configure`] reproduces the shape. Normals are left untouched
    /// until the next smoothing pass.
    pub fn set_tile_height(&mut self, tile: usize, height: f32) -> Result<(), GlobeError> {
        self.check_tile(tile)?;
        self.tiles[tile].height += height;
        self.displace_tile(tile, height);

        for corner in 0..3 {
            let ring = Ring::walk(&self.vertices, 3 * tile + corner);
            for touched in ring.tiles() {
                self.update_tile(touched);
            }
        }
        self.dirty = true;
        Ok(())
    }

    pub(crate) fn displace_tile(&mut self, tile: usize, height: f32) {
        if height == 0.0 {
            return;
        }
        for corner in 0..3 {
            let ring = Ring::walk(&self.vertices, 3 * tile + corner);
            let share = height / ring.len() as f32;
            for vertex in ring.vertices() {
                let position = self.vertices[vertex].position;
                let dist = position.length();
                self.vertices[vertex].position = position * ((dist + share) / dist);
            }
        }
    }
}
