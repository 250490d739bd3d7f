//! Demo world painter: noise-driven land, coasts and climate bands.
//!
//! This stands in for a real world generator so the binary has something to
//! shape and query.

use meridian_globe::{Globe, Terrain};
use noise::{NoiseFn, Simplex};

/// Spatial frequency of the land noise on the unit sphere.
const LAND_FREQUENCY: f64 = 1.8;

/// Tile height per unit of noise above sea level.
const HEIGHT_SCALE: f32 = 4.0;

/// Paint terrain and heights onto every tile. Returns the number of land tiles
/// placed by the noise pass.
pub fn paint(globe: &mut Globe, seed: u32, sea_level: f64) -> usize {
    let noise = Simplex::new(seed);
    let mut land = 0;

    for tile in 0..globe.tile_count() {
        let Ok(entry) = globe.tile(tile) else {
            continue;
        };
        let dir = entry.origin.normalize_or_zero().as_dvec3() * LAND_FREQUENCY;
        let value = noise.get([dir.x, dir.y, dir.z]);
        if value <= sea_level {
            continue;
        }
        let latitude = globe.latitude(tile).unwrap_or(0.0);
        let terrain = climate(latitude);
        let height = (value - sea_level) as f32 * HEIGHT_SCALE;
        if globe.set_tile(tile, terrain, height).is_ok() {
            land += 1;
        }
    }

    shape_coasts(globe);
    land
}

/// Ground variant for a latitude in radians.
pub fn climate(latitude: f32) -> Terrain {
    let band = latitude.abs() / std::f32::consts::FRAC_PI_2;
    if band > 0.65 {
        Terrain::GroundCold
    } else if band < 0.25 {
        Terrain::GroundHot
    } else {
        Terrain::Ground
    }
}

/// Land touching ocean becomes flat sand and ocean touching land becomes shallows.
fn shape_coasts(globe: &mut Globe) {
    let mut changes = Vec::new();
    for tile in 0..globe.tile_count() {
        let Ok(region) = globe.region(tile) else {
            continue;
        };
        let terrain = globe.tiles()[tile].terrain;
        let touches = |water: bool| {
            region
                .iter()
                .any(|&t| globe.tiles()[t].terrain.is_water() == water)
        };
        if !terrain.is_water() && touches(true) {
            changes.push((tile, Terrain::Sand, 0.0));
        } else if terrain.is_water() && touches(false) {
            changes.push((tile, Terrain::Shallow, 0.0));
        }
    }
    for (tile, terrain, height) in changes {
        let _ = globe.set_tile(tile, terrain, height);
    }
}

/// Counts reported after the world is configured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    /// Tiles that are not water, sand included.
    pub land: usize,
    /// Beach tiles placed along coasts.
    pub sand: usize,
    /// Coastal water tiles.
    pub shallow: usize,
    /// Tiles drawn with a transition texture.
    pub transitions: usize,
    /// Water edges with land on both sides, each edge counted once.
    pub land_bridges: usize,
}

impl WorldStats {
    /// Tally terrain, transition textures and land bridges over every tile.
    /// Transition counts are only meaningful after [`Globe::configure`].
    pub fn collect(globe: &Globe) -> Self {
        let mut stats = Self::default();
        for (tile, entry) in globe.tiles().iter().enumerate() {
            match entry.terrain {
                Terrain::Sand => stats.sand += 1,
                Terrain::Shallow => stats.shallow += 1,
                _ => {}
            }
            if !entry.terrain.is_water() {
                stats.land += 1;
            }
            if entry.texture.is_transition() {
                stats.transitions += 1;
            }
            // Count each water edge once
            if entry.terrain.is_water()
                && let Ok(neighbors) = globe.neighbors(tile)
            {
                stats.land_bridges += neighbors
                    .iter()
                    .filter(|&&n| n > tile && globe.tiles()[n].terrain.is_water())
                    .filter(|&&n| globe.land_bridge(tile, n).unwrap_or(false))
                    .count();
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_bands() {
        assert_eq!(climate(0.0), Terrain::GroundHot);
        assert_eq!(climate(0.7), Terrain::Ground);
        assert_eq!(climate(-1.4), Terrain::GroundCold);
    }

    #[test]
    fn test_paint_is_deterministic() {
        let mut a = Globe::new(2);
        let mut b = Globe::new(2);
        paint(&mut a, 7, 0.1);
        paint(&mut b, 7, 0.1);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_coasts_separate_land_from_ocean() {
        let mut globe = Globe::new(3);
        paint(&mut globe, 3, 0.0);
        for tile in 0..globe.tile_count() {
            let terrain = globe.tiles()[tile].terrain;
            if terrain == Terrain::Water {
                for n in globe.neighbors(tile).unwrap() {
                    assert!(globe.tiles()[n].terrain.is_water());
                }
            }
        }
    }

    #[test]
    fn test_stats_after_configure() {
        let mut globe = Globe::new(3);
        paint(&mut globe, 11, 0.0);
        globe.configure();
        let stats = WorldStats::collect(&globe);
        assert!(stats.land <= globe.tile_count());
        assert!(stats.sand <= stats.land);
        assert!(stats.transitions <= globe.tile_count());
        assert_eq!(stats, WorldStats::collect(&globe));
    }
}
