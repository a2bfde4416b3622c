use strata_geom::{IVec3, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    /// First solid voxel along the ray.
    pub block: IVec3,
    /// Voxel the ray was in just before `block` (where a placed block would go).
    pub previous: IVec3,
    /// Outward normal of the face that was entered.
    pub normal: IVec3,
}

#[inline]
fn inv_or_max(v: f32) -> f32 {
    if v.abs() < 1e-8 { f32::MAX } else { 1.0 / v.abs() }
}

#[inline]
fn step_of(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Grid traversal from `origin` along `dir` up to `max_dist`, returning the
/// first voxel for which `is_solid` holds.
pub fn raycast_first_hit<F>(origin: Vec3, dir: Vec3, max_dist: f32, mut is_solid: F) -> Option<RayHit>
where
    F: FnMut(IVec3) -> bool,
{
    if dir.length() < 1e-6 {
        return None;
    }
    let d = dir.normalized();

    let mut v = origin.floor_to_voxel();
    let step = IVec3::new(step_of(d.x), step_of(d.y), step_of(d.z));
    let inv = Vec3::new(inv_or_max(d.x), inv_or_max(d.y), inv_or_max(d.z));
    let delta = Vec3::new(
        if step.x == 0 { f32::MAX } else { inv.x },
        if step.y == 0 { f32::MAX } else { inv.y },
        if step.z == 0 { f32::MAX } else { inv.z },
    );

    let first = |o: f32, s: i32, inv: f32| {
        let f = o - o.floor();
        match s {
            1 => (1.0 - f) * inv,
            -1 => f * inv,
            _ => f32::MAX,
        }
    };
    let mut t_max = Vec3::new(
        first(origin.x, step.x, inv.x),
        first(origin.y, step.y, inv.y),
        first(origin.z, step.z, inv.z),
    );

    let mut prev = v;
    let mut t = 0.0f32;
    for _ in 0..512 {
        if t > max_dist {
            break;
        }
        if is_solid(v) {
            return Some(RayHit {
                block: v,
                previous: prev,
                normal: prev - v,
            });
        }
        prev = v;
        if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                v.x += step.x;
                t = t_max.x;
                t_max.x += delta.x;
            } else {
                v.z += step.z;
                t = t_max.z;
                t_max.z += delta.z;
            }
        } else if t_max.y < t_max.z {
            v.y += step.y;
            t = t_max.y;
            t_max.y += delta.y;
        } else {
            v.z += step.z;
            t = t_max.z;
            t_max.z += delta.z;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_floor_below() {
        let hit = raycast_first_hit(
            Vec3::new(0.5, 5.5, 0.5),
            Vec3::new(0.0, -1.0, 0.0),
            10.0,
            |p| p.y <= 1,
        )
        .expect("floor");
        assert_eq!(hit.block, IVec3::new(0, 1, 0));
        assert_eq!(hit.previous, IVec3::new(0, 2, 0));
        assert_eq!(hit.normal, IVec3::new(0, 1, 0));
    }

    #[test]
    fn hits_wall_from_the_side() {
        let hit = raycast_first_hit(
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(1.0, 0.0, 0.0),
            10.0,
            |p| p.x == 4,
        )
        .expect("wall");
        assert_eq!(hit.block, IVec3::new(4, 0, 0));
        assert_eq!(hit.normal, IVec3::new(-1, 0, 0));
    }

    #[test]
    fn respects_max_distance() {
        let hit = raycast_first_hit(
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.0, 0.0, 1.0),
            3.0,
            |p| p.z == 8,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn zero_direction_misses() {
        assert!(raycast_first_hit(Vec3::ZERO, Vec3::ZERO, 10.0, |_| true).is_none());
    }
}
