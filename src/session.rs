use strata_blocks::BlockRegistry;
use strata_blocks::types::AIR;
use strata_geom::{IVec3, Vec3};
use strata_runtime::{EditReport, StreamingUpdate, WorldGrid};
use strata_world::ChunkCoord;

use crate::config::{AppConfig, SessionConfig};
use crate::raycast::raycast_first_hit;
use crate::walker::Walker;

/// What one tick did.
#[derive(Debug, Default)]
pub struct TickReport {
    pub tick: u64,
    pub streaming: Option<StreamingUpdate>,
    pub built: Option<ChunkCoord>,
    pub edit: Option<EditReport>,
}

/// Headless frame loop: walker movement, streaming, one build, occasional digging.
pub struct Session {
    pub grid: WorldGrid,
    pub walker: Walker,
    cfg: SessionConfig,
    tick: u64,
}

impl Session {
    pub fn new(cfg: AppConfig, reg: BlockRegistry) -> Self {
        let grid = WorldGrid::new(cfg.grid, reg, cfg.terrain);
        let half = grid.sampler().world_width_voxels() as f32 * 0.5;
        let sx = cfg.session.spawn_x.unwrap_or(half);
        let sz = cfg.session.spawn_z.unwrap_or(half);
        let (cx, cz) = (sx.floor() as i32, sz.floor() as i32);
        // Highest column under the walker's footprint.
        let mut h = 0;
        for dz in -1..=1 {
            for dx in -1..=1 {
                h = h.max(grid.sampler().terrain_height(cx + dx, cz + dz));
            }
        }
        let spawn = Vec3::new(sx, h as f32 + 1.0, sz);
        log::info!(target: "session", "spawn at ({:.1}, {:.1}, {:.1})", spawn.x, spawn.y, spawn.z);
        Self {
            grid,
            walker: Walker::new(spawn),
            cfg: cfg.session,
            tick: 0,
        }
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn heading(&self) -> Vec3 {
        let yaw = self.cfg.heading_degrees.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    pub fn step(&mut self) -> TickReport {
        self.tick += 1;
        let dt = self.cfg.tick_seconds;
        let heading = self.heading();

        let grid = &self.grid;
        self.walker
            .update(&|p: IVec3| grid.is_solid_at(p), dt, heading);

        let streaming = self.grid.update_streaming(self.walker.pos);
        let built = self.grid.drain_one();

        let edit = if self.cfg.dig_every_ticks > 0 && self.tick % self.cfg.dig_every_ticks == 0 {
            self.dig_ahead()
        } else {
            None
        };

        TickReport {
            tick: self.tick,
            streaming,
            built,
            edit,
        }
    }

    /// Clears the first solid block along the walker's line of sight, tilted
    /// toward the ground.
    pub fn dig_ahead(&mut self) -> Option<EditReport> {
        let dir = self.heading() + Vec3::new(0.0, -0.5, 0.0);
        let grid = &self.grid;
        let hit = raycast_first_hit(self.walker.eye_position(), dir, self.cfg.reach, |p| {
            grid.is_solid_at(p)
        })?;
        log::debug!(
            target: "session",
            "dig hit {:?} through face {:?} from {:?}",
            hit.block,
            hit.normal,
            hit.previous
        );
        match self.grid.edit_voxel_at(hit.block, AIR) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!(target: "session", "dig at {:?} failed: {}", hit.block, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_runtime::GridConfig;
    use strata_world::CHUNK_HEIGHT;

    fn small_session(dig_every_ticks: u64) -> Session {
        let cfg = AppConfig {
            grid: GridConfig {
                world_width_in_chunks: 8,
                view_distance_in_chunks: 2,
                max_new_chunks_per_update: None,
            },
            session: SessionConfig {
                dig_every_ticks,
                ..SessionConfig::default()
            },
            ..AppConfig::default()
        };
        Session::new(cfg, BlockRegistry::builtin())
    }

    #[test]
    fn first_tick_streams_and_builds_one_chunk() {
        let mut s = small_session(0);
        let r = s.step();
        let up = r.streaming.expect("initial streaming");
        assert_eq!(up.created.len(), 16);
        assert!(r.built.is_some());
        assert_eq!(s.grid.pending_builds(), 15);
    }

    #[test]
    fn queue_drains_one_per_tick() {
        let mut s = small_session(0);
        for _ in 0..16 {
            s.step();
        }
        assert_eq!(s.grid.stats().meshes_built, 16);
        assert_eq!(s.grid.mesh_descriptors().count(), 16);
    }

    #[test]
    fn digging_clears_a_block() {
        let mut s = small_session(0);
        s.step();
        // Stone column two voxels ahead, from bedrock to above eye level.
        let eye = s.walker.eye_position().floor_to_voxel();
        let wall_x = s.walker.pos.x.floor() as i32 + 2;
        for y in 1..=(eye.y + 1).min(CHUNK_HEIGHT as i32 - 1) {
            s.grid
                .edit_voxel_at(IVec3::new(wall_x, y, eye.z), strata_blocks::types::STONE)
                .expect("wall chunk is resident");
        }
        let report = s.dig_ahead().expect("ray reaches the wall or the ground");
        assert_eq!(s.grid.block_at(report.pos), AIR);
        assert_eq!(report.block, AIR);
        assert!(!report.rebuilt.is_empty());
        assert!(report.pos.x <= wall_x);
    }
}
