//! World sizing constants, chunk coordinates, and terrain sampling.
#![forbid(unsafe_code)]

mod chunk_coord;
pub mod terrain;

pub use chunk_coord::ChunkCoord;
pub use terrain::{TerrainParams, TerrainSampler, load_terrain_params};

/// Chunk extent on X and Z, in voxels.
pub const CHUNK_WIDTH: usize = 16;
/// Chunk extent on Y. Chunks span the full world height.
pub const CHUNK_HEIGHT: usize = 64;
/// Number of voxels in one chunk.
pub const CHUNK_VOLUME: usize = CHUNK_WIDTH * CHUNK_HEIGHT * CHUNK_WIDTH;

pub const WORLD_WIDTH_IN_CHUNKS: i32 = 100;
pub const VIEW_DISTANCE_IN_CHUNKS: i32 = 5;

pub const TERRAIN_NOISE_SCALE: f32 = 0.25;
/// Added to voxel coordinates before sampling so lattice points never land on integers.
pub const NOISE_DOMAIN_SHIFT: f32 = 0.01;
/// Dirt layers between the surface block and stone.
pub const SUBSURFACE_DEPTH: i32 = 5;

/// Downward acceleration (units/s²) for movement collaborators; unused by the core.
pub const GRAVITY: f32 = -9.8;

/// World extent on X/Z in voxels for a world `width_in_chunks` chunks wide.
#[inline]
pub const fn world_width_in_voxels(width_in_chunks: i32) -> i32 {
    width_in_chunks * CHUNK_WIDTH as i32
}
