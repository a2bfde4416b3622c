//! CPU meshing crate: per-face culled chunk meshes (no quad merging).
#![forbid(unsafe_code)]

mod atlas;
mod constants;
mod emit;
mod face;
mod neighbors;

pub use atlas::{atlas_tile, atlas_uvs};
pub use constants::TEXTURE_ATLAS_SIZE_IN_BLOCKS;
pub use face::{face_corners, face_normal};
pub use neighbors::{OpenBoundary, SolidQuery};

use strata_blocks::{BlockRegistry, Face};
use strata_chunk::{Chunk, ChunkMesh};
use strata_geom::Vec3;
use strata_world::{CHUNK_HEIGHT, CHUNK_WIDTH};

use crate::emit::emit_face_quad;

/// Builds the surface mesh of `chunk`: one quad per solid-voxel face whose
/// neighbor is not solid. Neighbors inside the chunk are read directly; the
/// rest go through `outside`.
pub fn build_chunk_mesh(
    chunk: &Chunk,
    reg: &BlockRegistry,
    outside: &impl SolidQuery,
) -> ChunkMesh {
    let mut mesh = ChunkMesh::new();
    let origin = chunk.world_origin();
    for y in 0..CHUNK_HEIGHT {
        for z in 0..CHUNK_WIDTH {
            for x in 0..CHUNK_WIDTH {
                let id = chunk.block_at_local(x, y, z);
                if !reg.is_solid(id) {
                    continue;
                }
                let (xi, yi, zi) = (x as i32, y as i32, z as i32);
                for face in Face::ALL {
                    let (dx, dy, dz) = face.delta();
                    let (nx, ny, nz) = (xi + dx, yi + dy, zi + dz);
                    let covered = if Chunk::contains_local(nx, ny, nz) {
                        reg.is_solid(chunk.block_at_local(nx as usize, ny as usize, nz as usize))
                    } else {
                        outside.is_solid_at(origin.offset((nx, ny, nz)))
                    };
                    if covered {
                        continue;
                    }
                    let at = Vec3::new(x as f32, y as f32, z as f32);
                    emit_face_quad(&mut mesh, at, face, reg.texture_id(id, face));
                }
            }
        }
    }
    mesh.recalculate_normals();
    let c = chunk.coord();
    log::trace!(
        target: "builds",
        "meshed chunk ({}, {}) quads={}",
        c.cx,
        c.cy,
        mesh.quad_count()
    );
    mesh
}
