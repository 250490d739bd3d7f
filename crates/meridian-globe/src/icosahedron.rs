//! The base icosahedron: 12 corners, 20 tiles, 60 vertex records.
//!
//! Corner coordinates are the cyclic permutations of `(0, ±φ, ±1)`. The first
//! four tiles take the corners directly in storage order and wind as the mirror
//! image of the remaining sixteen, which is what the orientation threshold
//! tracks through subdivision.

use glam::Vec3;

use crate::vertex::GlobeVertex;

/// The golden ratio.
pub const PHI: f32 = 1.618_034;

/// Number of tiles on the unsubdivided globe.
pub const BASE_TILES: usize = 20;

/// Tiles below this index are mirrored on the unsubdivided globe.
pub const BASE_FLIP_LIMIT: usize = 4;

/// The 12 icosahedron corners. Read three at a time they also form the four
/// mirrored tiles.
const CORNERS: [Vec3; 12] = [
    Vec3::new(0.0, PHI, 1.0),
    Vec3::new(-PHI, 1.0, 0.0),
    Vec3::new(-1.0, 0.0, PHI),
    Vec3::new(0.0, -PHI, 1.0),
    Vec3::new(PHI, -1.0, 0.0),
    Vec3::new(1.0, 0.0, PHI),
    Vec3::new(0.0, PHI, -1.0),
    Vec3::new(PHI, 1.0, 0.0),
    Vec3::new(1.0, 0.0, -PHI),
    Vec3::new(0.0, -PHI, -1.0),
    Vec3::new(-PHI, -1.0, 0.0),
    Vec3::new(-1.0, 0.0, -PHI),
];

/// Corner indices of the 16 canonical tiles.
#[rustfmt::skip]
const CANONICAL_TILES: [usize; 48] = [
    // front
    7, 5, 4,    5, 7, 0,    0, 2, 5,
    3, 5, 2,    2, 10, 3,   10, 2, 1,
    // rear
    1, 11, 10,  11, 1, 6,   6, 8, 11,
    9, 11, 8,   8, 4, 9,    4, 8, 7,
    // top and bottom
    0, 6, 1,    6, 0, 7,    9, 3, 10,   3, 9, 4,
];

/// Radius of the sphere through the base corners, `sqrt(φ² + 1)`.
#[must_use]
pub fn base_radius() -> f32 {
    (PHI * PHI + 1.0).sqrt()
}

/// Emit the 60 vertex records of the base icosahedron.
///
/// Ring successors are left at zero; [`crate::neighbors::resolve_ring_successors`]
/// fills them in.
pub(crate) fn icosahedron_vertices() -> Vec<GlobeVertex> {
    CORNERS
        .iter()
        .chain(CANONICAL_TILES.iter().map(|&i| &CORNERS[i]))
        .map(|&position| GlobeVertex {
            position,
            ..GlobeVertex::default()
        })
        .collect()
}
