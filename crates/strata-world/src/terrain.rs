use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;
use strata_blocks::BlockId;
use strata_blocks::types;

use crate::{
    CHUNK_HEIGHT, CHUNK_WIDTH, NOISE_DOMAIN_SHIFT, SUBSURFACE_DEPTH, TERRAIN_NOISE_SCALE,
    WORLD_WIDTH_IN_CHUNKS, world_width_in_voxels,
};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TerrainParams {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f32,
    #[serde(default)]
    pub noise_offset: f32,
    #[serde(default = "default_subsurface_depth")]
    pub subsurface_depth: i32,
    #[serde(default = "default_bedrock")]
    pub bedrock: BlockId,
    #[serde(default = "default_surface")]
    pub surface: BlockId,
    #[serde(default = "default_subsurface")]
    pub subsurface: BlockId,
    #[serde(default = "default_stone")]
    pub stone: BlockId,
}

fn default_seed() -> i32 {
    1337
}
fn default_noise_scale() -> f32 {
    TERRAIN_NOISE_SCALE
}
fn default_subsurface_depth() -> i32 {
    SUBSURFACE_DEPTH
}
fn default_bedrock() -> BlockId {
    types::BEDROCK
}
fn default_surface() -> BlockId {
    types::GRASS
}
fn default_subsurface() -> BlockId {
    types::DIRT
}
fn default_stone() -> BlockId {
    types::STONE
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            noise_scale: default_noise_scale(),
            noise_offset: 0.0,
            subsurface_depth: default_subsurface_depth(),
            bedrock: default_bedrock(),
            surface: default_surface(),
            subsurface: default_subsurface(),
            stone: default_stone(),
        }
    }
}

pub fn load_terrain_params(path: &Path) -> Result<TerrainParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let params: TerrainParams = toml::from_str(&s)?;
    Ok(params)
}

/// Maps world voxel coordinates to block ids: rolling 2-D height field over
/// surface / subsurface / stone layers, with bedrock at `y == 0`.
pub struct TerrainSampler {
    noise: FastNoiseLite,
    params: TerrainParams,
    world_width_voxels: i32,
}

impl fmt::Debug for TerrainSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerrainSampler")
            .field("params", &self.params)
            .field("world_width_voxels", &self.world_width_voxels)
            .finish()
    }
}

impl Default for TerrainSampler {
    fn default() -> Self {
        Self::new(TerrainParams::default(), WORLD_WIDTH_IN_CHUNKS)
    }
}

impl TerrainSampler {
    pub fn new(params: TerrainParams, world_width_in_chunks: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        // Coordinates are pre-scaled in `noise01`.
        noise.set_frequency(Some(1.0));
        Self {
            noise,
            params,
            world_width_voxels: world_width_in_voxels(world_width_in_chunks),
        }
    }

    #[inline]
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    #[inline]
    pub fn world_width_voxels(&self) -> i32 {
        self.world_width_voxels
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && x < self.world_width_voxels
            && z < self.world_width_voxels
            && y < CHUNK_HEIGHT as i32
    }

    /// Coherent noise in `[0, 1]` for column `(x, z)`.
    pub fn noise01(&self, x: i32, z: i32) -> f32 {
        let w = CHUNK_WIDTH as f32;
        let s = self.params.noise_scale;
        let o = self.params.noise_offset;
        let nx = (x as f32 + NOISE_DOMAIN_SHIFT) / w * s + o;
        let nz = (z as f32 + NOISE_DOMAIN_SHIFT) / w * s + o;
        ((self.noise.get_noise_2d(nx, nz) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Y of the surface block in column `(x, z)`.
    #[inline]
    pub fn terrain_height(&self, x: i32, z: i32) -> i32 {
        (CHUNK_HEIGHT as f32 * self.noise01(x, z)).floor() as i32
    }

    pub fn sample(&self, x: i32, y: i32, z: i32) -> BlockId {
        if !self.in_bounds(x, y, z) {
            return types::AIR;
        }
        if y == 0 {
            return self.params.bedrock;
        }
        let h = self.terrain_height(x, z);
        if y > h {
            types::AIR
        } else if y == h {
            self.params.surface
        } else if y >= h - self.params.subsurface_depth {
            self.params.subsurface
        } else {
            self.params.stone
        }
    }
}
