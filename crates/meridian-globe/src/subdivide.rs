//! Four-way tile subdivision with arithmetic ring successor propagation.
//!
//! Tile `i` becomes tiles `4i..4i + 4`, so its records become `12i..12i + 12`:
//!
//! ```text
//!           3
//!          / \
//!         4---5
//!
//!      6  2---1  9
//!     / \  \ /  / \
//!    7---8  0  10-11
//! ```
//!
//! Child `4i` is the center tile, `4i + 1..4i + 3` sit at parent corners 0, 1
//! and 2. Successors inside the parent are fixed offsets. Successors across a
//! parent edge land in a child of the parent's neighbor, at an offset that only
//! depends on whether the neighbor's mirroring agrees with this tile's.

use glam::Vec3;

use crate::vertex::GlobeVertex;

/// Split every tile into four, reading from `vertices` and returning the new
/// record array.
///
/// `flip_limit` is the orientation threshold of the input level. Positions of
/// new records are plain edge midpoints; call [`sphericize`] afterwards.
pub(crate) fn subdivide(vertices: &[GlobeVertex], flip_limit: usize) -> Vec<GlobeVertex> {
    let mut out = vec![GlobeVertex::default(); vertices.len() * 4];
    for (tile, corners) in vertices.chunks_exact(3).enumerate() {
        let mirrored = tile < flip_limit;
        let n = [0, 1, 2].map(|c| corners[c].next_tile());
        let f = n.map(|neighbor| (neighbor < flip_limit) != mirrored);
        let [v0, v1, v2] = [0, 1, 2].map(|c| corners[c].position);
        let m01 = (v0 + v1) / 2.0;
        let m02 = (v0 + v2) / 2.0;
        let m12 = (v1 + v2) / 2.0;

        let own = 12 * tile;
        let across = |c: usize, flipped: usize, same: usize| {
            12 * n[c] + if f[c] { flipped } else { same }
        };

        let records: [(Vec3, usize); 12] = [
            // center
            (m12, own + 10),
            (m02, own + 5),
            (m01, own + 6),
            // corner 0
            (v0, across(0, 3, 7)),
            (m01, own + 2),
            (m02, across(2, 4, 9)),
            // corner 1
            (m01, across(0, 9, 4)),
            (v1, 12 * n[1] + 11),
            (m12, own),
            // corner 2
            (m02, own + 1),
            (m12, 12 * n[1] + 8),
            (v2, across(2, 7, 3)),
        ];
        for (slot, (position, next)) in out[own..own + 12].iter_mut().zip(records) {
            *slot = GlobeVertex {
                position,
                normal: Vec3::ZERO,
                next: next as u32,
            };
        }
    }
    out
}

/// Push every record out (or in) along its own direction to `radius`.
pub(crate) fn sphericize(vertices: &mut [GlobeVertex], radius: f32) {
    for vertex in vertices {
        vertex.position *= radius / vertex.position.length();
    }
}
