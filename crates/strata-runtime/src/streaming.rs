use strata_world::ChunkCoord;

/// Summary of one streaming pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamingUpdate {
    pub center: ChunkCoord,
    pub previous: Option<ChunkCoord>,
    /// Allocated, populated, and queued for a build this pass.
    pub created: Vec<ChunkCoord>,
    /// Resident chunks re-entering the active set; not rebuilt.
    pub reactivated: Vec<ChunkCoord>,
    /// Chunks that left the active set; data and meshes are kept.
    pub deactivated: Vec<ChunkCoord>,
    /// Active coordinates still waiting for allocation.
    pub deferred: usize,
}

/// In-world coordinates of the square `[cx - v, cx + v) x [cy - v, cy + v)`,
/// ordered by `cx` then `cy`.
pub fn desired_region(center: ChunkCoord, view_distance: i32, world_width: i32) -> Vec<ChunkCoord> {
    let span = |c: i32| {
        let lo = c.saturating_sub(view_distance).max(0);
        let hi = c.saturating_add(view_distance).min(world_width);
        lo..hi
    };
    let mut out = Vec::new();
    for cx in span(center.cx) {
        for cy in span(center.cy) {
            out.push(ChunkCoord::new(cx, cy));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_half_open() {
        let r = desired_region(ChunkCoord::new(5, 5), 2, 100);
        assert_eq!(r.len(), 16);
        assert_eq!(r.first(), Some(&ChunkCoord::new(3, 3)));
        assert_eq!(r.last(), Some(&ChunkCoord::new(6, 6)));
    }

    #[test]
    fn region_is_clipped_to_world() {
        let r = desired_region(ChunkCoord::new(0, 0), 2, 100);
        assert_eq!(r, vec![
            ChunkCoord::new(0, 0),
            ChunkCoord::new(0, 1),
            ChunkCoord::new(1, 0),
            ChunkCoord::new(1, 1),
        ]);
        assert!(desired_region(ChunkCoord::new(-10, 4), 3, 100).is_empty());
    }

    #[test]
    fn extreme_view_distance_does_not_overflow() {
        let r = desired_region(ChunkCoord::new(2, 3), i32::MAX, 4);
        assert_eq!(r.len(), 16);
        assert!(desired_region(ChunkCoord::new(2, 3), -5, 4).is_empty());
        assert!(desired_region(ChunkCoord::new(i32::MAX, i32::MIN), 2, 4).is_empty());
    }
}
