use serde::{Deserialize, Serialize};
use strata_geom::{IVec3, Vec3};

use crate::CHUNK_WIDTH;

/// Index of a chunk column on the 2-D chunk grid. `cx` spans world X, `cy` spans world Z.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }

    /// Chunk owning the voxel at `pos`. Negative coordinates floor into negative chunks.
    #[inline]
    pub fn from_world_position(pos: IVec3) -> Self {
        let w = CHUNK_WIDTH as i32;
        Self {
            cx: pos.x.div_euclid(w),
            cy: pos.z.div_euclid(w),
        }
    }

    #[inline]
    pub fn from_point(p: Vec3) -> Self {
        Self::from_world_position(p.floor_to_voxel())
    }

    /// World-space position of local voxel `(0, 0, 0)`.
    #[inline]
    pub fn to_world_origin(self) -> IVec3 {
        let w = CHUNK_WIDTH as i32;
        IVec3::new(self.cx * w, 0, self.cy * w)
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
        }
    }

    /// `true` when `0 <= cx < width` and `0 <= cy < width`.
    #[inline]
    pub fn is_within(self, width_in_chunks: i32) -> bool {
        self.cx >= 0 && self.cy >= 0 && self.cx < width_in_chunks && self.cy < width_in_chunks
    }

    #[inline]
    pub fn chebyshev_distance(self, other: ChunkCoord) -> i32 {
        (self.cx - other.cx).abs().max((self.cy - other.cy).abs())
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy)
    }
}
