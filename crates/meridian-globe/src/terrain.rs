//! Terrain kinds and the tile textures selected from them.

use std::fmt;

/// Atlas slot of the first transition texture; slots below it hold plain terrains.
pub const TRANSITION_OFFSET: u16 = 6;

/// Terrain of a single tile.
///
/// Variants of ground and water collapse onto a base terrain (see
/// [`Terrain::base`]). Base terrains are ordered by dominance:
/// `Shallow < Sand < Ground`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Terrain {
    /// Shallow coastal water.
    Shallow = 0,
    /// Beach sand.
    Sand = 1,
    /// Temperate ground.
    Ground = 2,
    /// Tropical ground.
    GroundHot = 3,
    /// Tundra.
    GroundCold = 4,
    /// Deep ocean.
    #[default]
    Water = 5,
}

impl Terrain {
    /// All terrains in atlas order.
    pub const ALL: [Terrain; 6] = [
        Terrain::Shallow,
        Terrain::Sand,
        Terrain::Ground,
        Terrain::GroundHot,
        Terrain::GroundCold,
        Terrain::Water,
    ];

    /// The most dominant base terrain. Tiles of this base never get transitions.
    pub const TOP_BASE: Terrain = Terrain::Ground;

    /// Base terrain used when comparing neighboring tiles.
    #[must_use]
    pub fn base(self) -> Terrain {
        match self {
            Terrain::GroundHot | Terrain::GroundCold => Terrain::Ground,
            Terrain::Water | Terrain::Shallow => Terrain::Shallow,
            other => other,
        }
    }

    /// Whether ships can pass through this terrain.
    #[must_use]
    pub fn is_water(self) -> bool {
        matches!(self, Terrain::Water | Terrain::Shallow)
    }

    /// Human-readable name shown in the tile info panel.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Terrain::GroundHot => "Tropical",
            Terrain::GroundCold => "Tundra",
            Terrain::Ground => "Temperate",
            Terrain::Sand => "Sand",
            Terrain::Water => "Ocean",
            Terrain::Shallow => "Shallow",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Texture chosen for a tile after looking at the terrain around its corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileTexture {
    /// The tile's terrain drawn without blending.
    Plain(Terrain),
    /// A boundary between the tile's base terrain and a dominant neighbor.
    Transition {
        /// Base terrain of the tile itself.
        base: Terrain,
        /// Dominant base terrain found at the differing corners.
        other: Terrain,
        /// `false` when one corner differs, `true` when only one corner keeps
        /// the tile's base.
        inverted: bool,
        /// Corner the transition points at, already adjusted for mirrored tiles.
        corner: u8,
    },
}

impl TileTexture {
    /// Index of this texture in the 6×3 terrain tile sheet.
    #[must_use]
    pub fn atlas_index(self) -> u16 {
        match self {
            TileTexture::Plain(terrain) => terrain as u16,
            TileTexture::Transition {
                base,
                inverted,
                corner,
                ..
            } => {
                let offset = 2 * base as u16 + u16::from(inverted);
                TRANSITION_OFFSET + offset * 3 + u16::from(corner)
            }
        }
    }

    /// Whether this is a transition texture.
    #[must_use]
    pub fn is_transition(self) -> bool {
        matches!(self, TileTexture::Transition { .. })
    }
}

impl Default for TileTexture {
    fn default() -> Self {
        TileTexture::Plain(Terrain::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_collapse_to_base() {
        assert_eq!(Terrain::GroundHot.base(), Terrain::Ground);
        assert_eq!(Terrain::GroundCold.base(), Terrain::Ground);
        assert_eq!(Terrain::Water.base(), Terrain::Shallow);
        assert_eq!(Terrain::Sand.base(), Terrain::Sand);
        for terrain in Terrain::ALL {
            assert!(terrain.base() <= Terrain::TOP_BASE);
            assert_eq!(terrain.base().base(), terrain.base());
        }
    }

    #[test]
    fn test_water_terrains() {
        assert!(Terrain::Water.is_water());
        assert!(Terrain::Shallow.is_water());
        assert!(!Terrain::Sand.is_water());
        assert!(!Terrain::GroundCold.is_water());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Terrain::Water.to_string(), "Ocean");
        assert_eq!(Terrain::GroundHot.to_string(), "Tropical");
        assert_eq!(format!("{}", Terrain::Ground), "Temperate");
    }

    #[test]
    fn test_plain_atlas_index_matches_discriminant() {
        for (i, terrain) in Terrain::ALL.into_iter().enumerate() {
            assert_eq!(TileTexture::Plain(terrain).atlas_index(), i as u16);
        }
    }

    #[test]
    fn test_transition_atlas_layout() {
        let first = TileTexture::Transition {
            base: Terrain::Shallow,
            other: Terrain::Ground,
            inverted: false,
            corner: 0,
        };
        assert_eq!(first.atlas_index(), TRANSITION_OFFSET);

        let last = TileTexture::Transition {
            base: Terrain::Sand,
            other: Terrain::Ground,
            inverted: true,
            corner: 2,
        };
        // 6 plain slots + 12 transition slots fill the 6x3 sheet
        assert_eq!(last.atlas_index(), 17);
        assert!(last.is_transition());
        assert!(!TileTexture::Plain(Terrain::Sand).is_transition());
    }
}
