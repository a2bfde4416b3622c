use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strata_runtime::GridConfig;
use strata_world::TerrainParams;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub terrain: TerrainParams,
    #[serde(default)]
    pub session: SessionConfig,
    /// Block table (`[[blocks]]` entries); the built-in table when absent.
    #[serde(default)]
    pub blocks: Option<PathBuf>,
}

/// Headless observer run: where the walker starts, how it moves, and how often it digs.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Spawn column in voxels; the world center when unset.
    #[serde(default)]
    pub spawn_x: Option<f32>,
    #[serde(default)]
    pub spawn_z: Option<f32>,
    #[serde(default = "default_heading")]
    pub heading_degrees: f32,
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f32,
    /// Dig the block in front of the walker every N ticks; 0 disables digging.
    #[serde(default = "default_dig_every")]
    pub dig_every_ticks: u64,
    #[serde(default = "default_reach")]
    pub reach: f32,
}

fn default_heading() -> f32 {
    0.0
}
fn default_tick_seconds() -> f32 {
    1.0 / 60.0
}
fn default_dig_every() -> u64 {
    120
}
fn default_reach() -> f32 {
    6.0
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            spawn_x: None,
            spawn_z: None,
            heading_degrees: default_heading(),
            tick_seconds: default_tick_seconds(),
            dig_every_ticks: default_dig_every(),
            reach: default_reach(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<AppConfig, Box<dyn Error>> {
    let cfg: AppConfig = toml::from_str(s)?;
    cfg.grid.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_default_independently() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [grid]
            world_width_in_chunks = 12
            max_new_chunks_per_update = 4

            [terrain]
            seed = 99

            [session]
            dig_every_ticks = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.grid.world_width_in_chunks, 12);
        assert_eq!(cfg.grid.view_distance_in_chunks, 5);
        assert_eq!(cfg.grid.max_new_chunks_per_update, Some(4));
        assert_eq!(cfg.terrain.seed, 99);
        assert_eq!(cfg.terrain.noise_scale, 0.25);
        assert_eq!(cfg.session.dig_every_ticks, 0);
        assert_eq!(cfg.session.reach, 6.0);
        assert!(cfg.blocks.is_none());
    }

    #[test]
    fn invalid_grid_sections_are_rejected() {
        let err = parse_config("[grid]\nview_distance_in_chunks = -1\n").unwrap_err();
        assert!(err.to_string().contains("view_distance_in_chunks"));
        assert!(parse_config("[grid]\nworld_width_in_chunks = 5000\n").is_err());
        assert!(parse_config("[grid]\nworld_width_in_chunks = 4\nview_distance_in_chunks = 3\n").is_ok());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.grid, GridConfig::default());
        assert_eq!(cfg.session, SessionConfig::default());
    }
}
