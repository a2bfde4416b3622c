use strata_geom::{Aabb, IVec3, Vec3};
use strata_world::GRAVITY;

/// Upright box that walks over the voxel grid: gravity plus per-axis
/// collision against a solidity query.
#[derive(Clone, Debug)]
pub struct Walker {
    pub pos: Vec3, // feet position (x,z at center, y at feet)
    pub vel: Vec3,
    pub on_ground: bool,
    pub height: f32,
    pub eye_height: f32,
    pub radius: f32,
    pub speed: f32,
    pub gravity: f32,
}

impl Walker {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            on_ground: false,
            height: 1.75,
            eye_height: 1.60,
            radius: 0.35,
            speed: 5.0,
            gravity: GRAVITY,
        }
    }

    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.pos.y + self.eye_height, self.pos.z)
    }

    fn collides_at<F>(&self, is_solid: &F, pos: Vec3) -> bool
    where
        F: Fn(IVec3) -> bool,
    {
        let (min, max) = Aabb::around_feet(pos, self.radius, self.height).voxel_span();
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    if is_solid(IVec3::new(x, y, z)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn move_axis<F>(&mut self, is_solid: &F, axis: usize, amt: f32) -> f32
    where
        F: Fn(IVec3) -> bool,
    {
        if amt == 0.0 {
            return 0.0;
        }
        const STEP_RES: f32 = 0.05;
        let mut moved = 0.0_f32;
        let step = STEP_RES * amt.signum();
        let mut remaining = amt;
        while remaining.abs() > 0.0001 {
            let s = if remaining.abs() < step.abs() {
                remaining
            } else {
                step
            };
            let mut p = self.pos;
            match axis {
                0 => p.x += s,
                1 => p.y += s,
                _ => p.z += s,
            };
            if self.collides_at(is_solid, p) {
                break;
            }
            self.pos = p;
            moved += s;
            remaining -= s;
        }
        moved
    }

    /// Advances one step of `dt` seconds walking toward `wish` (XZ plane).
    pub fn update<F>(&mut self, is_solid: &F, dt: f32, wish: Vec3)
    where
        F: Fn(IVec3) -> bool,
    {
        let flat = Vec3::new(wish.x, 0.0, wish.z).normalized();
        let horiz = flat * self.speed;

        let mut below = self.pos;
        below.y -= 0.10;
        self.on_ground = self.collides_at(is_solid, below);
        if self.on_ground {
            if self.vel.y < 0.0 {
                self.vel.y = 0.0;
            }
        } else {
            self.vel.y += self.gravity * dt;
        }

        let dx = horiz.x * dt;
        let dz = horiz.z * dt;
        let dy = self.vel.y * dt;
        // Horizontal first so the walker hugs terrain while descending.
        self.move_axis(is_solid, 0, dx);
        self.move_axis(is_solid, 2, dz);
        let moved_y = self.move_axis(is_solid, 1, dy);
        if dy < 0.0 && moved_y.abs() < dy.abs() * 0.5 {
            self.on_ground = true;
            self.vel.y = 0.0;
        }
        self.pos.y = self.pos.y.max(0.0);
    }
}
