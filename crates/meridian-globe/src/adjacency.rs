//! Tile adjacency queries for gameplay and pathfinding.

use crate::error::GlobeError;
use crate::globe::Globe;
use crate::ring::Ring;
use crate::vertex::{face_next, face_prev};

/// Longest path accepted by [`Globe::walk_path`].
pub const PATH_MAX: usize = 256;

impl Globe {
    /// The three tiles sharing an edge with `tile`. Entry `c` lies across the
    /// edge from corner `c` to corner `c + 1`.
    pub fn neighbors(&self, tile: usize) -> Result<[usize; 3], GlobeError> {
        self.check_tile(tile)?;
        Ok([0, 1, 2].map(|c| self.vertices[3 * tile + c].next_tile()))
    }

    /// Every other tile touching any corner of `tile`, without duplicates.
    ///
    /// Each corner's ring is walked from the tile after `tile` up to, but not
    /// including, the edge neighbor that the next corner's walk starts with.
    pub fn region(&self, tile: usize) -> Result<Vec<usize>, GlobeError> {
        self.check_tile(tile)?;
        let mut region = Vec::with_capacity(12);
        for corner in 0..3 {
            let vertex = 3 * tile + corner;
            let stop = self.vertices[face_prev(vertex)].next_tile();
            let ring = Ring::walk(&self.vertices, vertex);
            region.extend(ring.tiles().skip(1).take_while(|&t| t != stop));
        }
        Ok(region)
    }

    /// Whether land flanks the edge between neighbors `a` and `b` on both
    /// ends, making the strait too narrow to sail through.
    pub fn land_bridge(&self, a: usize, b: usize) -> Result<bool, GlobeError> {
        self.check_tile(b)?;
        let edge = self
            .neighbors(a)?
            .iter()
            .position(|&n| n == b)
            .ok_or(GlobeError::NotNeighbors { a, b })?;
        let vertex = 3 * a + edge;
        Ok(self.ring_has_land(vertex, a, b) && self.ring_has_land(face_next(vertex), a, b))
    }

    fn ring_has_land(&self, vertex: usize, a: usize, b: usize) -> bool {
        Ring::walk(&self.vertices, vertex)
            .tiles()
            .filter(|&t| t != a && t != b)
            .any(|t| !self.tiles[t].terrain.is_water())
    }

    /// Follow a sequence of edge steps from `start`.
    ///
    /// Each step is an edge index as returned by [`Globe::neighbors`]. Returns
    /// every tile visited, starting with `start`.
    pub fn walk_path(&self, start: usize, steps: &[u8]) -> Result<Vec<usize>, GlobeError> {
        self.check_tile(start)?;
        if steps.len() > PATH_MAX {
            return Err(GlobeError::PathTooLong {
                len: steps.len(),
                max: PATH_MAX,
            });
        }
        let mut path = Vec::with_capacity(steps.len() + 1);
        path.push(start);
        let mut tile = start;
        for &step in steps {
            if step > 2 {
                return Err(GlobeError::InvalidDirection(step));
            }
            tile = self.vertices[3 * tile + step as usize].next_tile();
            path.push(tile);
        }
        Ok(path)
    }
}
