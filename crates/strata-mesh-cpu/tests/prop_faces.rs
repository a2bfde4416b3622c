use std::collections::HashSet;

use proptest::prelude::*;
use strata_blocks::{BlockRegistry, Face, types};
use strata_chunk::Chunk;
use strata_geom::IVec3;
use strata_mesh_cpu::{OpenBoundary, build_chunk_mesh, face_normal};
use strata_world::ChunkCoord;

fn voxel() -> impl Strategy<Value = (i32, i32, i32)> {
    // Small box so neighbors touch often, reaching both chunk edges on X/Z.
    (0i32..16, 0i32..6, 0i32..16)
}

fn sparse_fill() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec(voxel(), 0..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // One quad per (solid, non-solid) face pair; outside the chunk counts as open
    #[test]
    fn quad_count_matches_exposed_faces(fill in sparse_fill()) {
        let reg = BlockRegistry::builtin();
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0));
        let solid: HashSet<(i32, i32, i32)> = fill.into_iter().collect();
        for &(x, y, z) in &solid {
            chunk.set_block_world(IVec3::new(x, y, z), types::STONE).unwrap();
        }

        let mut exposed = 0usize;
        for &(x, y, z) in &solid {
            for face in Face::ALL {
                let (dx, dy, dz) = face.delta();
                if !solid.contains(&(x + dx, y + dy, z + dz)) {
                    exposed += 1;
                }
            }
        }

        let mesh = build_chunk_mesh(&chunk, &reg, &OpenBoundary);
        prop_assert_eq!(mesh.quad_count(), exposed);
        prop_assert_eq!(mesh.indices.len(), exposed * 6);
        prop_assert_eq!(mesh.normals.len(), mesh.vertex_count());
    }

    // Every emitted quad faces away from its voxel into a non-solid cell
    #[test]
    fn quads_face_open_cells(fill in sparse_fill()) {
        let reg = BlockRegistry::builtin();
        let mut chunk = Chunk::new(ChunkCoord::new(0, 0));
        let solid: HashSet<(i32, i32, i32)> = fill.into_iter().collect();
        for &(x, y, z) in &solid {
            chunk.set_block_world(IVec3::new(x, y, z), types::DIRT).unwrap();
        }
        let mesh = build_chunk_mesh(&chunk, &reg, &OpenBoundary);
        for q in 0..mesh.quad_count() {
            let quad = &mesh.positions[q * 4..q * 4 + 4];
            let n = mesh.normals[q * 4];
            prop_assert!(Face::ALL.iter().any(|&f| face_normal(f) == n));
            // Quad center stepped half a voxel along the normal lands in an open cell.
            let cx = quad.iter().map(|p| p.x).sum::<f32>() / 4.0 + n.x * 0.5;
            let cy = quad.iter().map(|p| p.y).sum::<f32>() / 4.0 + n.y * 0.5;
            let cz = quad.iter().map(|p| p.z).sum::<f32>() / 4.0 + n.z * 0.5;
            let open = (cx.floor() as i32, cy.floor() as i32, cz.floor() as i32);
            prop_assert!(!solid.contains(&open));
            let inside = (
                (cx - n.x).floor() as i32,
                (cy - n.y).floor() as i32,
                (cz - n.z).floor() as i32,
            );
            prop_assert!(solid.contains(&inside));
        }
    }
}
