use strata_blocks::{Face, TextureId};
use strata_chunk::ChunkMesh;
use strata_geom::Vec3;

use crate::atlas::atlas_uvs;
use crate::constants::{QUAD_TRIANGLES, TEXTURE_ATLAS_SIZE_IN_BLOCKS};
use crate::face::face_corners;

/// Appends one independent quad for `face` of the voxel whose min corner is `at`.
/// Normals are left to `ChunkMesh::recalculate_normals`.
#[inline]
pub(crate) fn emit_face_quad(mesh: &mut ChunkMesh, at: Vec3, face: Face, texture: TextureId) {
    let base = mesh.positions.len() as u32;
    for c in face_corners(face) {
        mesh.positions.push(at + c);
    }
    mesh.uvs
        .extend_from_slice(&atlas_uvs(texture, TEXTURE_ATLAS_SIZE_IN_BLOCKS));
    mesh.indices
        .extend(QUAD_TRIANGLES.iter().map(|i| base + i));
}
