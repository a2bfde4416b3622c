use serde::{Deserialize, Serialize};
use strata_world::{VIEW_DISTANCE_IN_CHUNKS, WORLD_WIDTH_IN_CHUNKS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_world_width")]
    pub world_width_in_chunks: i32,
    #[serde(default = "default_view_distance")]
    pub view_distance_in_chunks: i32,
    /// Upper bound on chunks allocated by one streaming update; `None` = unbounded.
    #[serde(default)]
    pub max_new_chunks_per_update: Option<usize>,
}

fn default_world_width() -> i32 {
    WORLD_WIDTH_IN_CHUNKS
}
fn default_view_distance() -> i32 {
    VIEW_DISTANCE_IN_CHUNKS
}

/// Largest supported world edge, in chunks.
pub const MAX_WORLD_WIDTH_IN_CHUNKS: i32 = 1024;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("world_width_in_chunks must be in 1..={max} (got {got})")]
    WorldWidth { got: i32, max: i32 },

    #[error("view_distance_in_chunks must be in 1..={max} (got {got})")]
    ViewDistance { got: i32, max: i32 },

    #[error("max_new_chunks_per_update must be at least 1")]
    ZeroAdmissionCap,
}

impl GridConfig {
    /// View distance may not exceed the world width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = self.world_width_in_chunks;
        if !(1..=MAX_WORLD_WIDTH_IN_CHUNKS).contains(&w) {
            return Err(ConfigError::WorldWidth {
                got: w,
                max: MAX_WORLD_WIDTH_IN_CHUNKS,
            });
        }
        let v = self.view_distance_in_chunks;
        if !(1..=w).contains(&v) {
            return Err(ConfigError::ViewDistance { got: v, max: w });
        }
        if self.max_new_chunks_per_update == Some(0) {
            return Err(ConfigError::ZeroAdmissionCap);
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            world_width_in_chunks: default_world_width(),
            view_distance_in_chunks: default_view_distance(),
            max_new_chunks_per_update: None,
        }
    }
}
