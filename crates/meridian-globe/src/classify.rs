//! Terrain texture selection from the terrain around a tile's corners.

use std::array;

use crate::error::GlobeError;
use crate::globe::Globe;
use crate::ring::Ring;
use crate::terrain::{Terrain, TileTexture};

impl Globe {
    /// Pick the texture for a tile.
    ///
    /// Each corner reports the most dominant base terrain in its ring. A tile
    /// whose base wins at all three corners is drawn plain. When the other
    /// corners agree on a single alternate terrain the tile gets a transition
    /// pointing at the odd corner out; mixed alternates fall back to the plain
    /// terrain.
    pub fn classify(&self, tile: usize) -> Result<TileTexture, GlobeError> {
        self.check_tile(tile)?;
        Ok(self.classify_tile(tile))
    }

    pub(crate) fn classify_tile(&self, tile: usize) -> TileTexture {
        let terrain = self.tiles[tile].terrain;
        let base = terrain.base();
        if base >= Terrain::TOP_BASE {
            return TileTexture::Plain(terrain);
        }
        if !self.transitions {
            return TileTexture::Plain(base);
        }

        let dominant: [Terrain; 3] = array::from_fn(|corner| {
            Ring::walk(&self.vertices, 3 * tile + corner)
                .tiles()
                .map(|t| self.tiles[t].terrain.base())
                .fold(base, Terrain::max)
        });
        let base_corners = dominant.iter().filter(|&&t| t == base).count();
        if base_corners == 3 {
            return TileTexture::Plain(terrain);
        }

        let mut alternates = dominant.iter().copied().filter(|&t| t != base);
        let Some(other) = alternates.next() else {
            return TileTexture::Plain(terrain);
        };
        if alternates.any(|t| t != other) {
            return TileTexture::Plain(terrain);
        }

        let (inverted, corner) = match base_corners {
            2 => (false, dominant.iter().position(|&t| t != base)),
            1 => (true, dominant.iter().position(|&t| t == base)),
            _ => (false, Some(0)),
        };
        let corner = corner.unwrap_or(0);

        // Mirrored tiles have corners 1 and 2 swapped in the atlas
        let corner = match corner {
            1 if self.is_mirrored(tile) => 2,
            2 if self.is_mirrored(tile) => 1,
            c => c,
        };

        TileTexture::Transition {
            base,
            other,
            inverted,
            corner: corner as u8,
        }
    }
}
