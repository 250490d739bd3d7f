//! Per-corner vertex records and the GPU-facing vertex layout.

use glam::Vec3;

/// One corner of one tile.
///
/// Records are never deduplicated: a point shared by six tiles is stored six
/// times. The copies are linked through `next`, which names the record of the
/// tile across the edge that leaves this corner going forward in the tile
/// (`corner -> corner + 1`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobeVertex {
    /// Position relative to the globe center.
    pub position: Vec3,
    /// Shading normal.
    pub normal: Vec3,
    /// Ring successor: index of the next record around the shared point.
    pub next: u32,
}

impl GlobeVertex {
    /// Tile that owns this record's successor.
    #[inline]
    #[must_use]
    pub fn next_tile(&self) -> usize {
        self.next as usize / 3
    }
}

/// Vertex layout uploaded to the GPU: position followed by normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Shading normal.
    pub normal: [f32; 3],
}

impl From<&GlobeVertex> for RenderVertex {
    fn from(vertex: &GlobeVertex) -> Self {
        Self {
            position: vertex.position.to_array(),
            normal: vertex.normal.to_array(),
        }
    }
}

/// The record one step forward within the same tile (`2` wraps to `0`).
#[inline]
#[must_use]
pub fn face_next(vertex: usize) -> usize {
    3 * (vertex / 3) + (vertex + 1) % 3
}

/// The record one step backward within the same tile (`0` wraps to `2`).
#[inline]
#[must_use]
pub fn face_prev(vertex: usize) -> usize {
    3 * (vertex / 3) + (vertex + 2) % 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_next_wraps_within_tile() {
        assert_eq!(face_next(0), 1);
        assert_eq!(face_next(1), 2);
        assert_eq!(face_next(2), 0);
        assert_eq!(face_next(14), 12);
    }

    #[test]
    fn test_face_prev_is_inverse_of_next() {
        for v in 0..30 {
            assert_eq!(face_prev(face_next(v)), v);
            assert_eq!(face_next(face_prev(v)), v);
            assert_eq!(face_prev(v) / 3, v / 3);
        }
    }

    #[test]
    fn test_render_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<RenderVertex>(), 24);
        let vertex = GlobeVertex {
            position: Vec3::new(1.0, 2.0, 3.0),
            normal: Vec3::Y,
            next: 7,
        };
        let render = RenderVertex::from(&vertex);
        let bytes: &[u8] = bytemuck::bytes_of(&render);
        assert_eq!(bytes.len(), 24);
        assert_eq!(render.position, [1.0, 2.0, 3.0]);
        assert_eq!(render.normal, [0.0, 1.0, 0.0]);
    }
}
