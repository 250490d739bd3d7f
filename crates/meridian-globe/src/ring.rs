//! Walking the ring of records that share one point.

use crate::vertex::GlobeVertex;

/// Largest ring on a subdivided icosahedron. Original corners have 5 members,
/// every other point has 6.
pub const MAX_RING: usize = 6;

/// The records around one shared point, starting with the record the walk
/// began at, in ring-successor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    members: [u32; MAX_RING],
    len: usize,
}

impl Ring {
    /// Follow ring successors from `start` until it recurs.
    ///
    /// # Panics
    ///
    /// Panics if the ring does not close within [`MAX_RING`] records or
    /// `start` is out of bounds.
    #[must_use]
    pub fn walk(vertices: &[GlobeVertex], start: usize) -> Self {
        let mut members = [0; MAX_RING];
        members[0] = start as u32;
        let mut len = 1;
        let mut pos = vertices[start].next as usize;
        while pos != start {
            if len >= MAX_RING {
                panic!("vertex {start} ring overflow");
            }
            members[len] = pos as u32;
            len += 1;
            pos = vertices[pos].next as usize;
        }
        Self { members, len }
    }

    /// Number of records (and tiles) around the point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a ring contains at least its starting record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Record indices in walk order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.members[..self.len]
    }

    /// Record indices in walk order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().map(|&v| v as usize)
    }

    /// Tiles touching the point, in walk order, starting with the start record's tile.
    pub fn tiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices().map(|v| v / 3)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn cycle(len: usize) -> Vec<GlobeVertex> {
        (0..len)
            .map(|i| GlobeVertex {
                position: Vec3::ZERO,
                normal: Vec3::ZERO,
                next: ((i + 1) % len) as u32,
            })
            .collect()
    }

    #[test]
    fn test_walk_visits_cycle_in_order() {
        let vertices = cycle(5);
        let ring = Ring::walk(&vertices, 2);
        assert_eq!(ring.as_slice(), &[2, 3, 4, 0, 1]);
        assert_eq!(ring.len(), 5);
        assert!(!ring.is_empty());
    }

    #[test]
    fn test_tiles_divide_by_three() {
        let vertices = cycle(6);
        let ring = Ring::walk(&vertices, 0);
        let tiles: Vec<usize> = ring.tiles().collect();
        assert_eq!(tiles, vec![0, 0, 0, 1, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "ring overflow")]
    fn test_long_ring_panics() {
        let vertices = cycle(7);
        let _ = Ring::walk(&vertices, 0);
    }

    #[test]
    #[should_panic(expected = "ring overflow")]
    fn test_unclosed_ring_panics() {
        let mut vertices = cycle(4);
        // 3 -> 1 never returns to 0
        vertices[3].next = 1;
        let _ = Ring::walk(&vertices, 0);
    }
}
