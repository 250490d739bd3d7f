//! Meridian entry point.
//!
//! Loads `meridian.ron` (with CLI overrides), builds the globe, paints a demo
//! world onto it, configures heights, textures and normals, and reports what
//! the gameplay queries see.
//!
//! Run with: `cargo run -p meridian-game -- --subdivisions 4`

mod world;

use clap::Parser;
use meridian_config::{CliArgs, Config, default_config_dir};
use meridian_globe::{Globe, GlobeSettings};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    config.apply_cli_overrides(&args);

    meridian_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );
    if let Some(err) = load_error {
        error!("Using default config, {}", err);
    }

    let settings = GlobeSettings {
        subdivisions: config.globe.subdivisions,
        smoothing: config.globe.smoothing,
        transitions: config.globe.transitions,
    };
    let mut globe = Globe::from_settings(&settings);
    info!(
        "Globe: {} subdivisions, {} tiles, radius {:.2}",
        globe.depth(),
        globe.tile_count(),
        globe.radius()
    );

    let painted = world::paint(&mut globe, config.globe.seed, config.globe.sea_level);
    globe.configure();

    let stats = world::WorldStats::collect(&globe);
    info!(
        "World: {} land tiles ({} sand, {} painted), {} shallow, {} land bridges, {} transitions",
        stats.land,
        stats.sand,
        painted,
        stats.shallow,
        stats.land_bridges,
        stats.transitions
    );

    if globe.take_dirty() {
        let vertices = globe.render_vertices();
        info!("Render data ready: {} vertices", vertices.len());
    }
}
