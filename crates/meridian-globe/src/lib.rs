//! Geodesic globe mesh: icosahedron subdivision, ring-successor adjacency, and per-tile
//! shaping (height, terrain transitions, smoothed normals).
//!
//! Every triangular tile owns three vertex records. Records that share a position are
//! linked into a ring by their `next` index, so all adjacency questions are answered by
//! index arithmetic instead of geometric search.

mod adjacency;
mod classify;
mod error;
mod globe;
mod icosahedron;
mod neighbors;
mod normals;
mod ring;
mod shaping;
mod subdivide;
mod terrain;
mod tile;
mod vertex;

pub use adjacency::PATH_MAX;
pub use error::GlobeError;
pub use globe::{Globe, GlobeSettings, MAX_SUBDIVISIONS, MAX_TILES};
pub use icosahedron::{BASE_FLIP_LIMIT, BASE_TILES, PHI, base_radius};
pub use ring::{MAX_RING, Ring};
pub use terrain::{TRANSITION_OFFSET, Terrain, TileTexture};
pub use tile::Tile;
pub use vertex::{GlobeVertex, RenderVertex, face_next, face_prev};
