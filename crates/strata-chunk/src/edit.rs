use strata_geom::IVec3;
use strata_world::{CHUNK_WIDTH, ChunkCoord};

/// Chunks whose meshes may change after a single voxel write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditFootprint {
    pub owner: ChunkCoord,
    /// Face-adjacent chunks sharing a face with the edited voxel, in -X, +X, -Z, +Z order.
    pub neighbors: Vec<ChunkCoord>,
}

impl EditFootprint {
    /// Owner first, then neighbors.
    pub fn all(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        std::iter::once(self.owner).chain(self.neighbors.iter().copied())
    }
}

/// Footprint of an edit at world voxel `pos`. Chunks span the full height, so
/// only X/Z seams produce neighbors.
pub fn footprint_at(pos: IVec3) -> EditFootprint {
    let w = CHUNK_WIDTH as i32;
    let owner = ChunkCoord::from_world_position(pos);
    let lx = pos.x - owner.cx * w;
    let lz = pos.z - owner.cy * w;

    let mut neighbors = Vec::new();
    if lx == 0 {
        neighbors.push(owner.offset(-1, 0));
    }
    if lx == w - 1 {
        neighbors.push(owner.offset(1, 0));
    }
    if lz == 0 {
        neighbors.push(owner.offset(0, -1));
    }
    if lz == w - 1 {
        neighbors.push(owner.offset(0, 1));
    }
    EditFootprint { owner, neighbors }
}
