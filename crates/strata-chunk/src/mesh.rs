use strata_geom::{Vec2, Vec3};

/// Plain triangle mesh buffers owned by a chunk. Positions are chunk-local;
/// callers place the mesh at the chunk's world origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChunkMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Independent quads: four vertices and two triangles each.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.indices.clear();
        self.uvs.clear();
    }

    /// Area-weighted vertex normals from the triangle list.
    pub fn recalculate_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc.into_iter().map(Vec3::normalized).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_follow_winding() {
        let mut m = ChunkMesh::new();
        m.positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        m.indices = vec![0, 1, 2, 2, 1, 3];
        m.recalculate_normals();
        assert_eq!(m.normals.len(), 4);
        for n in &m.normals {
            assert_eq!(*n, Vec3::new(0.0, 0.0, -1.0));
        }
        assert_eq!(m.quad_count(), 1);
        assert_eq!(m.triangle_count(), 2);
    }
}
