//! Shared constants for strata-mesh-cpu.

/// Atlas is a square grid of `N x N` tiles.
pub const TEXTURE_ATLAS_SIZE_IN_BLOCKS: u16 = 4;

/// Unit-cube corners, indexed by the quad table below.
pub(crate) const VOXEL_CORNERS: [(f32, f32, f32); 8] = [
    (0.0, 0.0, 0.0),
    (1.0, 0.0, 0.0),
    (1.0, 1.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (1.0, 0.0, 1.0),
    (1.0, 1.0, 1.0),
    (0.0, 1.0, 1.0),
];

// Per face (back, front, top, bottom, left, right): v0..v3 so that
// (v0, v1, v2) and (v2, v1, v3) wind toward the outward normal.
pub(crate) const FACE_QUADS: [[usize; 4]; 6] = [
    [0, 3, 1, 2],
    [5, 6, 4, 7],
    [3, 7, 2, 6],
    [1, 5, 0, 4],
    [4, 7, 0, 3],
    [1, 2, 5, 6],
];

/// Triangle pattern over a quad's four vertices.
pub(crate) const QUAD_TRIANGLES: [u32; 6] = [0, 1, 2, 2, 1, 3];
