use strata_blocks::Face;
use strata_geom::Vec3;

use crate::constants::{FACE_QUADS, VOXEL_CORNERS};

/// Returns the unit outward normal for `face`.
#[inline]
pub fn face_normal(face: Face) -> Vec3 {
    let (dx, dy, dz) = face.delta();
    Vec3::new(dx as f32, dy as f32, dz as f32)
}

/// Voxel-local corners v0..v3 of the quad covering `face`.
#[inline]
pub fn face_corners(face: Face) -> [Vec3; 4] {
    FACE_QUADS[face.index()].map(|c| {
        let (x, y, z) = VOXEL_CORNERS[c];
        Vec3::new(x, y, z)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quads_lie_on_their_face_plane() {
        for face in Face::ALL {
            let n = face_normal(face);
            let corners = face_corners(face);
            // Outward faces sit on the far side of the cube along the normal.
            let plane = if n.x + n.y + n.z > 0.0 { 1.0 } else { 0.0 };
            for c in corners {
                let along = c.x * n.x.abs() + c.y * n.y.abs() + c.z * n.z.abs();
                assert_eq!(along, plane, "{face:?}");
            }
        }
    }

    #[test]
    fn winding_matches_normal() {
        for face in Face::ALL {
            let [v0, v1, v2, v3] = face_corners(face);
            let n = face_normal(face);
            assert_eq!((v1 - v0).cross(v2 - v0), n, "{face:?} first triangle");
            assert_eq!((v1 - v2).cross(v3 - v2), n, "{face:?} second triangle");
        }
    }
}
