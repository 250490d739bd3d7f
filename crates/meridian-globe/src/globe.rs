//! The globe: vertex records, tiles, and the bookkeeping carried between passes.

use glam::Vec3;
use tracing::{debug, info, warn};

use crate::error::GlobeError;
use crate::icosahedron::{BASE_FLIP_LIMIT, BASE_TILES, base_radius, icosahedron_vertices};
use crate::neighbors::resolve_ring_successors;
use crate::normals::clamp_factor;
use crate::ring::Ring;
use crate::subdivide::{sphericize, subdivide};
use crate::terrain::Terrain;
use crate::tile::Tile;
use crate::vertex::{GlobeVertex, RenderVertex};

/// Deepest supported subdivision.
pub const MAX_SUBDIVISIONS: u32 = 5;

/// Tile count at [`MAX_SUBDIVISIONS`].
pub const MAX_TILES: usize = BASE_TILES * 4usize.pow(MAX_SUBDIVISIONS);

/// Inbound globe settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeSettings {
    /// Number of four-way subdivisions of the base icosahedron.
    pub subdivisions: u32,
    /// Normal smoothing factor in `[0, 1]`.
    pub smoothing: f32,
    /// Whether classification may pick transition textures.
    pub transitions: bool,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            subdivisions: 4,
            smoothing: 1.0,
            transitions: true,
        }
    }
}

/// A subdivided icosahedron with per-tile terrain and height.
///
/// Built once per session, shaped during setup, then queried. Record `3t + c`
/// is corner `c` of tile `t`.
#[derive(Clone, Debug)]
pub struct Globe {
    pub(crate) vertices: Vec<GlobeVertex>,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) radius: f32,
    /// Tiles below this index are mirrored.
    pub(crate) flip_limit: usize,
    pub(crate) depth: u32,
    pub(crate) smoothing: f32,
    pub(crate) transitions: bool,
    pub(crate) dirty: bool,
}

impl Globe {
    /// Build a globe with `subdivisions` levels and default settings otherwise.
    #[must_use]
    pub fn new(subdivisions: u32) -> Self {
        Self::from_settings(&GlobeSettings {
            subdivisions,
            ..GlobeSettings::default()
        })
    }

    /// Build a globe from settings. Subdivision requests above
    /// [`MAX_SUBDIVISIONS`] are clamped with a warning.
    #[must_use]
    pub fn from_settings(settings: &GlobeSettings) -> Self {
        let depth = clamp_subdivisions(settings.subdivisions);

        let mut vertices = icosahedron_vertices();
        resolve_ring_successors(&mut vertices);

        let mut globe = Self {
            vertices,
            tiles: vec![Tile::default(); BASE_TILES],
            radius: base_radius(),
            flip_limit: BASE_FLIP_LIMIT,
            depth: 0,
            smoothing: clamp_factor(settings.smoothing),
            transitions: settings.transitions,
            dirty: true,
        };
        for _ in 0..depth {
            globe.subdivide_level();
        }
        globe.update_tile_vectors();
        globe.apply_smoothing();

        debug!(
            "Generated globe with {} subdivisions: {} tiles, radius {:.2}",
            globe.depth,
            globe.tiles.len(),
            globe.radius
        );
        globe
    }

    /// Subdivide every tile once more. Children inherit their parent's terrain
    /// and height; vertex displacement from earlier shaping is discarded.
    ///
    /// Returns `false` (and logs a warning) if the globe is already at
    /// [`MAX_SUBDIVISIONS`].
    pub fn subdivide(&mut self) -> bool {
        if self.depth >= MAX_SUBDIVISIONS {
            warn!(
                "Globe already at maximum subdivision depth {}",
                MAX_SUBDIVISIONS
            );
            return false;
        }
        self.subdivide_level();
        self.update_tile_vectors();
        self.apply_smoothing();
        self.dirty = true;
        true
    }

    fn subdivide_level(&mut self) {
        self.vertices = subdivide(&self.vertices, self.flip_limit);
        self.tiles = self
            .tiles
            .iter()
            .flat_map(|&tile| std::iter::repeat_n(Tile::new(tile.terrain, tile.height), 4))
            .collect();
        self.flip_limit *= 4;
        self.depth += 1;
        // Keep tiles the same size as the count grows
        self.radius *= 2.0;
        sphericize(&mut self.vertices, self.radius);
    }

    /// Apply stored heights, classify terrain, recompute tile vectors and
    /// smooth normals.
    ///
    /// Vertices are first reset onto the sphere, so configuring twice gives the
    /// same result as configuring once.
    pub fn configure(&mut self) {
        sphericize(&mut self.vertices, self.radius);
        for tile in 0..self.tiles.len() {
            let height = self.tiles[tile].height;
            self.displace_tile(tile, height);
        }

        let mut transitions = 0;
        for tile in 0..self.tiles.len() {
            let texture = self.classify_tile(tile);
            transitions += usize::from(texture.is_transition());
            self.tiles[tile].texture = texture;
        }

        self.update_tile_vectors();
        self.apply_smoothing();
        self.dirty = true;

        info!(
            "Configured globe: {} tiles, {} transition tiles",
            self.tiles.len(),
            transitions
        );
    }

    pub(crate) fn check_tile(&self, tile: usize) -> Result<(), GlobeError> {
        if tile < self.tiles.len() {
            Ok(())
        } else {
            Err(GlobeError::TileOutOfRange {
                tile,
                len: self.tiles.len(),
            })
        }
    }

    /// Recompute centroid, normal and forward for every tile.
    pub(crate) fn update_tile_vectors(&mut self) {
        for tile in 0..self.tiles.len() {
            self.update_tile(tile);
        }
    }

    pub(crate) fn update_tile(&mut self, tile: usize) {
        let corners = self.corners(tile);
        self.tiles[tile].compute_vectors(corners);
    }

    fn corners(&self, tile: usize) -> [Vec3; 3] {
        [0, 1, 2].map(|c| self.vertices[3 * tile + c].position)
    }

    /// Number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of vertex records, always three per tile.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Current sea-level radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of subdivisions applied to the base icosahedron.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Orientation threshold: tiles below this index are mirrored.
    #[must_use]
    pub fn flip_limit(&self) -> usize {
        self.flip_limit
    }

    /// Whether `tile` is wound as the mirror image of canonical tiles. The
    /// renderer mirrors such tiles' texture coordinates.
    #[must_use]
    pub fn is_mirrored(&self, tile: usize) -> bool {
        tile < self.flip_limit
    }

    /// Whether classification may pick transition textures.
    #[must_use]
    pub fn transitions(&self) -> bool {
        self.transitions
    }

    /// Enable or disable transition textures for the next [`Globe::configure`].
    pub fn set_transitions(&mut self, enabled: bool) {
        self.transitions = enabled;
    }

    /// All vertex records.
    #[must_use]
    pub fn vertices(&self) -> &[GlobeVertex] {
        &self.vertices
    }

    /// All tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// One tile.
    pub fn tile(&self, tile: usize) -> Result<&Tile, GlobeError> {
        self.check_tile(tile)?;
        Ok(&self.tiles[tile])
    }

    /// One tile, mutably. Changes to terrain or height take effect on the next
    /// [`Globe::configure`].
    pub fn tile_mut(&mut self, tile: usize) -> Result<&mut Tile, GlobeError> {
        self.check_tile(tile)?;
        Ok(&mut self.tiles[tile])
    }

    /// Set a tile's terrain.
    pub fn set_terrain(&mut self, tile: usize, terrain: Terrain) -> Result<(), GlobeError> {
        self.tile_mut(tile)?.terrain = terrain;
        Ok(())
    }

    /// Set a tile's terrain and stored height.
    pub fn set_tile(&mut self, tile: usize, terrain: Terrain, height: f32) -> Result<(), GlobeError> {
        let entry = self.tile_mut(tile)?;
        entry.terrain = terrain;
        entry.height = height;
        Ok(())
    }

    /// Positions of a tile's three corners.
    pub fn tile_coords(&self, tile: usize) -> Result<[Vec3; 3], GlobeError> {
        self.check_tile(tile)?;
        Ok(self.corners(tile))
    }

    /// Geocentric latitude of the tile in radians, from the mean height of its
    /// corners above the equatorial plane.
    pub fn latitude(&self, tile: usize) -> Result<f32, GlobeError> {
        let corners = self.tile_coords(tile)?;
        let center_y = corners.iter().map(|c| c.y).sum::<f32>() / 3.0;
        Ok((center_y / self.radius).clamp(-1.0, 1.0).asin())
    }

    /// The ring of records sharing the position of record `vertex`.
    pub fn ring(&self, vertex: usize) -> Result<Ring, GlobeError> {
        if vertex >= self.vertices.len() {
            return Err(GlobeError::VertexOutOfRange {
                vertex,
                len: self.vertices.len(),
            });
        }
        Ok(Ring::walk(&self.vertices, vertex))
    }

    /// Whether positions or normals changed since the last call. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Whether positions or normals changed since the last [`Globe::take_dirty`].
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Vertex data ready for GPU upload, three vertices per tile.
    #[must_use]
    pub fn render_vertices(&self) -> Vec<RenderVertex> {
        self.vertices.iter().map(RenderVertex::from).collect()
    }
}

fn clamp_subdivisions(requested: u32) -> u32 {
    if requested > MAX_SUBDIVISIONS {
        warn!(
            "Too many subdivisions requested ({}), clamping to {}",
            requested, MAX_SUBDIVISIONS
        );
        MAX_SUBDIVISIONS
    } else {
        requested
    }
}
