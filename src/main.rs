mod config;
mod raycast;
mod session;
mod walker;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use strata_blocks::BlockRegistry;

use crate::config::{AppConfig, load_config};
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "strata", about = "Headless chunked voxel world driver")]
struct Cli {
    /// TOML config with [grid], [terrain] and [session] sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Terrain seed override
    #[arg(long)]
    seed: Option<i32>,

    /// View distance override, in chunks
    #[arg(long)]
    view_distance: Option<i32>,

    /// Default log level; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_env("RUST_LOG")
        .init();

    let mut cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(seed) = cli.seed {
        cfg.terrain.seed = seed;
    }
    if let Some(v) = cli.view_distance {
        cfg.grid.view_distance_in_chunks = v;
    }
    cfg.grid.validate()?;

    let reg = match &cfg.blocks {
        Some(path) => BlockRegistry::load_from_path(path)?,
        None => BlockRegistry::builtin(),
    };
    log::info!(target: "session", "{} block types loaded", reg.len());

    let mut session = Session::new(cfg, reg);
    let mut edits = 0u64;
    for _ in 0..cli.ticks {
        let report = session.step();
        if let Some(up) = &report.streaming {
            log::debug!(
                target: "session",
                "[tick {}] streaming center=({}, {}) created={}",
                report.tick,
                up.center.cx,
                up.center.cy,
                up.created.len()
            );
        }
        if let Some(coord) = report.built {
            log::trace!(target: "session", "[tick {}] built ({}, {})", report.tick, coord.cx, coord.cy);
        }
        if report.edit.is_some() {
            edits += 1;
        }
    }

    let stats = session.grid.stats();
    let (meshes, quads) = session
        .grid
        .mesh_descriptors()
        .fold((0usize, 0usize), |(m, q), d| (m + 1, q + d.mesh.quad_count()));
    log::info!(
        target: "session",
        "ran {} ticks: resident={} populated={} built={} visible_meshes={} quads={} edits={} pending={}",
        session.tick(),
        session.grid.resident_count(),
        stats.chunks_populated,
        stats.meshes_built,
        meshes,
        quads,
        edits,
        session.grid.pending_builds()
    );
    Ok(())
}
