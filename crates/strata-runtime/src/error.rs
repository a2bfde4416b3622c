use strata_chunk::ChunkError;
use strata_geom::IVec3;
use strata_world::ChunkCoord;

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("no resident chunk ({}, {}) for voxel ({}, {}, {})", .coord.cx, .coord.cy, .pos.x, .pos.y, .pos.z)]
    NoResidentChunk { pos: IVec3, coord: ChunkCoord },

    #[error(transparent)]
    Chunk(#[from] ChunkError),
}
