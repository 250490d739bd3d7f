//! Whole-globe invariants checked across every supported depth.

use std::collections::HashSet;

use meridian_globe::{Globe, GlobeError, MAX_SUBDIVISIONS, Terrain, TileTexture};

#[test]
fn test_closed_manifold_at_every_depth() {
    for depth in 0..=MAX_SUBDIVISIONS {
        let globe = Globe::new(depth);
        let mut corner_records = 0;
        for vertex in 0..globe.vertex_count() {
            let ring = globe.ring(vertex).unwrap();
            match ring.len() {
                5 => corner_records += 1,
                6 => {}
                other => panic!("depth {depth}: vertex {vertex} has ring of {other}"),
            }
            let position = globe.vertices()[vertex].position;
            for member in ring.vertices() {
                let distance = (globe.vertices()[member].position - position).length();
                assert!(distance < 1e-3, "depth {depth}: ring of {vertex} is not one point");
            }
        }
        assert_eq!(corner_records, 60, "depth {depth}");

        for tile in 0..globe.tile_count() {
            let neighbors = globe.neighbors(tile).unwrap();
            let unique: HashSet<usize> = neighbors.iter().copied().collect();
            assert_eq!(unique.len(), 3, "depth {depth}: tile {tile}");
            assert!(!unique.contains(&tile));
        }
    }
}

#[test]
fn test_tile_count_law() {
    for depth in 0..=MAX_SUBDIVISIONS {
        let globe = Globe::new(depth);
        assert_eq!(globe.tile_count(), 20 * 4usize.pow(depth));
        assert_eq!(globe.vertex_count(), 3 * globe.tile_count());
    }
}

#[test]
fn test_sphericity() {
    for depth in 0..=MAX_SUBDIVISIONS {
        let globe = Globe::new(depth);
        let radius = globe.radius();
        for vertex in globe.vertices() {
            let error = (vertex.position.length() - radius).abs() / radius;
            assert!(error < 1e-5, "depth {depth}: relative error {error}");
        }
    }
}

#[test]
fn test_height_mean_property() {
    let mut globe = Globe::new(3);
    let radius = globe.radius();
    for tile in 0..globe.tile_count() {
        globe.set_tile(tile, Terrain::Ground, 2.0).unwrap();
    }
    globe.configure();
    for vertex in globe.vertices() {
        let displacement = vertex.position.length() - radius;
        assert!(
            (displacement - 2.0).abs() < 1e-3,
            "corner displaced by {displacement}"
        );
    }
}

#[test]
fn test_flat_shading_identity() {
    let mut globe = Globe::new(3);
    for tile in (0..globe.tile_count()).step_by(7) {
        globe.set_tile(tile, Terrain::Sand, 1.0).unwrap();
    }
    globe.configure();
    globe.smooth(0.0);
    for (vertex, record) in globe.vertices().iter().enumerate() {
        assert_eq!(record.normal, globe.tiles()[vertex / 3].normal);
    }
}

#[test]
fn test_land_bridge_symmetry() {
    let mut globe = Globe::new(3);
    // Deterministic scatter of land
    for tile in 0..globe.tile_count() {
        if (tile * 7919) % 5 < 2 {
            globe.set_terrain(tile, Terrain::Ground).unwrap();
        }
    }
    let mut bridges = 0;
    for a in 0..globe.tile_count() {
        for b in globe.neighbors(a).unwrap() {
            let forward = globe.land_bridge(a, b).unwrap();
            assert_eq!(forward, globe.land_bridge(b, a).unwrap(), "tiles {a} and {b}");
            bridges += usize::from(forward);
        }
    }
    assert!(bridges > 0);
}

#[test]
fn test_misuse_is_reported() {
    let globe = Globe::new(1);
    assert_eq!(
        globe.neighbors(80),
        Err(GlobeError::TileOutOfRange { tile: 80, len: 80 })
    );
    assert!(globe.region(1000).is_err());
    assert!(globe.classify(80).is_err());
    assert!(globe.latitude(80).is_err());
}

#[test]
fn test_end_to_end_scenario() {
    let mut globe = Globe::new(0);
    assert_eq!(globe.tile_count(), 20);

    let neighbors = globe.neighbors(0).unwrap();
    let unique: HashSet<usize> = neighbors.iter().copied().collect();
    assert_eq!(unique.len(), 3);
    for &n in &neighbors {
        assert_ne!(n, 0);
        assert!(n < globe.tile_count());
    }

    globe.set_terrain(0, Terrain::Water).unwrap();
    for &n in &neighbors {
        globe.set_terrain(n, Terrain::Ground).unwrap();
    }
    let texture = globe.classify(0).unwrap();
    assert!(texture.is_transition(), "got {texture:?}");
    assert_ne!(texture, TileTexture::Plain(Terrain::Water));

    assert!(globe.subdivide());
    assert_eq!(globe.tile_count(), 80);
    assert!(globe.region(0).unwrap().len() > 3);

    for vertex in 0..globe.vertex_count() {
        let len = globe.ring(vertex).unwrap().len();
        assert!(len == 5 || len == 6);
    }
    for tile in 0..globe.tile_count() {
        for n in globe.neighbors(tile).unwrap() {
            assert_ne!(n, tile);
            assert!(globe.neighbors(n).unwrap().contains(&tile));
        }
    }
    let radius = globe.radius();
    for vertex in globe.vertices() {
        assert!((vertex.position.length() - radius).abs() < 1e-4);
    }
}
