//! Chunk voxel storage, terrain fill, and edit footprints.
#![forbid(unsafe_code)]

mod edit;
mod mesh;

pub use edit::{EditFootprint, footprint_at};
pub use mesh::ChunkMesh;

use strata_blocks::BlockId;
use strata_blocks::types::AIR;
use strata_geom::IVec3;
use strata_world::{CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH, ChunkCoord, TerrainSampler};

#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("voxel ({}, {}, {}) is outside chunk ({}, {})", .pos.x, .pos.y, .pos.z, .coord.cx, .coord.cy)]
    OutOfBounds { pos: IVec3, coord: ChunkCoord },
}

/// One `CHUNK_WIDTH x CHUNK_HEIGHT x CHUNK_WIDTH` column of the world.
#[derive(Clone, Debug)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Vec<BlockId>,
    populated: bool,
    active: bool,
    mesh: ChunkMesh,
    mesh_revision: u64,
}

impl Chunk {
    /// All-air chunk, active, not yet populated or built.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![AIR; CHUNK_VOLUME],
            populated: false,
            active: true,
            mesh: ChunkMesh::default(),
            mesh_revision: 0,
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * CHUNK_WIDTH + z) * CHUNK_WIDTH + x
    }

    #[inline]
    pub fn contains_local(x: i32, y: i32, z: i32) -> bool {
        let w = CHUNK_WIDTH as i32;
        x >= 0 && z >= 0 && y >= 0 && x < w && z < w && y < CHUNK_HEIGHT as i32
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    #[inline]
    pub fn world_origin(&self) -> IVec3 {
        self.coord.to_world_origin()
    }

    /// Fills every voxel from `sampler` at the matching world position.
    pub fn populate(&mut self, sampler: &TerrainSampler) {
        let o = self.world_origin();
        let mut solid = 0usize;
        for y in 0..CHUNK_HEIGHT {
            for z in 0..CHUNK_WIDTH {
                for x in 0..CHUNK_WIDTH {
                    let id = sampler.sample(o.x + x as i32, y as i32, o.z + z as i32);
                    if id != AIR {
                        solid += 1;
                    }
                    self.blocks[Self::idx(x, y, z)] = id;
                }
            }
        }
        self.populated = true;
        log::trace!(
            target: "streaming",
            "populated chunk ({}, {}) non-air={}",
            self.coord.cx,
            self.coord.cy,
            solid
        );
    }

    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggles participation in the active set; voxels and mesh are kept.
    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Caller guarantees `(x, y, z)` is inside the chunk.
    #[inline]
    pub fn block_at_local(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[Self::idx(x, y, z)]
    }

    /// Local voxel for world position `pos`, if this chunk owns it.
    #[inline]
    pub fn local_of(&self, pos: IVec3) -> Option<(usize, usize, usize)> {
        let o = self.world_origin();
        let (lx, ly, lz) = (pos.x - o.x, pos.y, pos.z - o.z);
        if !Self::contains_local(lx, ly, lz) {
            return None;
        }
        Some((lx as usize, ly as usize, lz as usize))
    }

    #[inline]
    pub fn block_at_world(&self, pos: IVec3) -> Option<BlockId> {
        self.local_of(pos)
            .map(|(x, y, z)| self.block_at_local(x, y, z))
    }

    /// Writes one voxel and reports which chunks border it. Meshes are not
    /// rebuilt here.
    pub fn set_block_world(&mut self, pos: IVec3, id: BlockId) -> Result<EditFootprint, ChunkError> {
        let (x, y, z) = self.local_of(pos).ok_or(ChunkError::OutOfBounds {
            pos,
            coord: self.coord,
        })?;
        self.blocks[Self::idx(x, y, z)] = id;
        Ok(footprint_at(pos))
    }

    /// Sets every voxel to `id`. Used for synthetic chunks in tools and tests.
    pub fn fill(&mut self, id: BlockId) {
        self.blocks.fill(id);
        self.populated = true;
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        self.blocks.iter().all(|&b| b == AIR)
    }

    #[inline]
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Replaces the mesh buffers and bumps the revision.
    pub fn set_mesh(&mut self, mesh: ChunkMesh) {
        self.mesh = mesh;
        self.mesh_revision += 1;
    }

    /// Number of mesh installs; 0 means never built.
    #[inline]
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    #[inline]
    pub fn is_built(&self) -> bool {
        self.mesh_revision > 0
    }
}
