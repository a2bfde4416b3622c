use std::collections::VecDeque;

use hashbrown::HashSet;
use strata_blocks::{BlockId, BlockRegistry, types::AIR};
use strata_chunk::{Chunk, ChunkMesh};
use strata_geom::{IVec3, Vec3};
use strata_mesh_cpu::{SolidQuery, build_chunk_mesh};
use strata_world::{CHUNK_HEIGHT, ChunkCoord, TerrainParams, TerrainSampler};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::scheduler::BuildScheduler;
use crate::streaming::{StreamingUpdate, desired_region};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub chunks_populated: u64,
    pub meshes_built: u64,
    pub reactivations: u64,
    pub deactivations: u64,
    pub edits: u64,
}

/// Mesh of one active, built chunk, placed at its world origin.
#[derive(Clone, Copy, Debug)]
pub struct MeshDescriptor<'a> {
    pub coord: ChunkCoord,
    pub origin: Vec3,
    pub mesh: &'a ChunkMesh,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditReport {
    pub pos: IVec3,
    pub block: BlockId,
    /// Owner first, then any resident face neighbors.
    pub rebuilt: Vec<ChunkCoord>,
}

/// Dense `width x width` table of chunk slots plus the streaming state around
/// one observer.
pub struct WorldGrid {
    cfg: GridConfig,
    reg: BlockRegistry,
    sampler: TerrainSampler,
    chunks: Vec<Option<Chunk>>,
    observer: Option<ChunkCoord>,
    previous_observer: Option<ChunkCoord>,
    active: HashSet<ChunkCoord>,
    scheduler: BuildScheduler,
    deferred: VecDeque<ChunkCoord>,
    stats: GridStats,
}

impl WorldGrid {
    pub fn new(cfg: GridConfig, reg: BlockRegistry, terrain: TerrainParams) -> Self {
        let width = cfg.world_width_in_chunks.max(0) as usize;
        let mut chunks = Vec::with_capacity(width * width);
        chunks.resize_with(width * width, || None);
        let sampler = TerrainSampler::new(terrain, cfg.world_width_in_chunks);
        Self {
            cfg,
            reg,
            sampler,
            chunks,
            observer: None,
            previous_observer: None,
            active: HashSet::new(),
            scheduler: BuildScheduler::new(),
            deferred: VecDeque::new(),
            stats: GridStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.cfg
    }

    #[inline]
    pub fn registry(&self) -> &BlockRegistry {
        &self.reg
    }

    #[inline]
    pub fn sampler(&self) -> &TerrainSampler {
        &self.sampler
    }

    #[inline]
    pub fn stats(&self) -> GridStats {
        self.stats
    }

    #[inline]
    pub fn observer(&self) -> Option<ChunkCoord> {
        self.observer
    }

    #[inline]
    pub fn previous_observer(&self) -> Option<ChunkCoord> {
        self.previous_observer
    }

    #[inline]
    pub fn is_active(&self, coord: ChunkCoord) -> bool {
        self.active.contains(&coord)
    }

    /// Active coordinates, sorted.
    pub fn active_coords(&self) -> Vec<ChunkCoord> {
        let mut v: Vec<_> = self.active.iter().copied().collect();
        v.sort();
        v
    }

    #[inline]
    pub fn pending_builds(&self) -> usize {
        self.scheduler.len()
    }

    #[inline]
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub fn resident_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    fn slot_index(&self, coord: ChunkCoord) -> Option<usize> {
        let w = self.cfg.world_width_in_chunks;
        coord
            .is_within(w)
            .then(|| (coord.cy * w + coord.cx) as usize)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.slot_index(coord)
            .and_then(|i| self.chunks[i].as_ref())
    }

    fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.slot_index(coord)
            .and_then(|i| self.chunks[i].as_mut())
    }

    /// Resident chunk owning world voxel `pos`.
    pub fn chunk_at(&self, pos: IVec3) -> Option<&Chunk> {
        self.chunk(ChunkCoord::from_world_position(pos))
    }

    /// Block at `pos`: resident populated chunks first, then the terrain
    /// sampler. Air outside the world.
    pub fn block_at(&self, pos: IVec3) -> BlockId {
        if pos.y < 0 || pos.y >= CHUNK_HEIGHT as i32 {
            return AIR;
        }
        let coord = ChunkCoord::from_world_position(pos);
        if !coord.is_within(self.cfg.world_width_in_chunks) {
            return AIR;
        }
        match self.chunk(coord) {
            Some(chunk) if chunk.is_populated() => chunk.block_at_world(pos).unwrap_or(AIR),
            _ => self.sampler.sample(pos.x, pos.y, pos.z),
        }
    }

    #[inline]
    pub fn is_solid_at(&self, pos: IVec3) -> bool {
        self.reg.is_solid(self.block_at(pos))
    }

    #[inline]
    pub fn is_solid_at_point(&self, p: Vec3) -> bool {
        self.is_solid_at(p.floor_to_voxel())
    }

    /// Meshes `coord` against the current grid and installs the result.
    /// Returns `false` when no chunk is resident there.
    pub fn rebuild_chunk(&mut self, coord: ChunkCoord) -> bool {
        let mesh = match self.chunk(coord) {
            Some(chunk) => build_chunk_mesh(chunk, &self.reg, &*self),
            None => return false,
        };
        let quads = mesh.quad_count();
        let Some(chunk) = self.chunk_mut(coord) else {
            return false;
        };
        chunk.set_mesh(mesh);
        let rev = chunk.mesh_revision();
        self.stats.meshes_built += 1;
        log::debug!(
            target: "builds",
            "built ({}, {}) rev={} quads={}",
            coord.cx,
            coord.cy,
            rev,
            quads
        );
        true
    }

    /// Builds at most one queued chunk. Returns the coordinate handled.
    pub fn drain_one(&mut self) -> Option<ChunkCoord> {
        let coord = self.scheduler.begin_drain()?;
        if !self.rebuild_chunk(coord) {
            log::warn!(
                target: "builds",
                "queued chunk ({}, {}) is not resident; skipped",
                coord.cx,
                coord.cy
            );
        }
        self.scheduler.finish_drain();
        Some(coord)
    }

    /// Drains the whole queue. Returns the number of coordinates handled.
    pub fn drain_all(&mut self) -> usize {
        let mut n = 0;
        while self.drain_one().is_some() {
            n += 1;
        }
        n
    }

    /// Writes one voxel, then rebuilds its chunk and every resident chunk
    /// sharing a face with it.
    pub fn edit_voxel_at(&mut self, pos: IVec3, block: BlockId) -> Result<EditReport, GridError> {
        let coord = ChunkCoord::from_world_position(pos);
        let Some(chunk) = self.chunk_mut(coord) else {
            log::warn!(
                target: "edits",
                "edit at ({}, {}, {}) ignored: chunk ({}, {}) not resident",
                pos.x,
                pos.y,
                pos.z,
                coord.cx,
                coord.cy
            );
            return Err(GridError::NoResidentChunk { pos, coord });
        };
        let footprint = chunk.set_block_world(pos, block)?;
        self.stats.edits += 1;

        let mut rebuilt = Vec::with_capacity(1 + footprint.neighbors.len());
        for c in footprint.all() {
            if self.rebuild_chunk(c) {
                rebuilt.push(c);
            }
        }
        log::info!(
            target: "edits",
            "set ({}, {}, {}) -> {} rebuilt={:?}",
            pos.x,
            pos.y,
            pos.z,
            block,
            rebuilt
        );
        Ok(EditReport {
            pos,
            block,
            rebuilt,
        })
    }

    fn allocate(&mut self, coord: ChunkCoord) -> bool {
        let Some(i) = self.slot_index(coord) else {
            return false;
        };
        if self.chunks[i].is_some() {
            return false;
        }
        let mut chunk = Chunk::new(coord);
        chunk.populate(&self.sampler);
        self.chunks[i] = Some(chunk);
        self.stats.chunks_populated += 1;
        self.scheduler.enqueue(coord);
        true
    }

    /// Allocates queued admissions in FIFO order, up to the per-update cap.
    fn admit_deferred(&mut self) -> Vec<ChunkCoord> {
        let limit = self.cfg.max_new_chunks_per_update.unwrap_or(usize::MAX);
        let mut admitted = Vec::new();
        while admitted.len() < limit {
            let Some(coord) = self.deferred.pop_front() else {
                break;
            };
            if self.allocate(coord) {
                admitted.push(coord);
            }
        }
        admitted
    }

    /// Recomputes the active set when the observer has entered a new chunk.
    /// Returns `None` when nothing changed.
    pub fn update_streaming(&mut self, observer: Vec3) -> Option<StreamingUpdate> {
        let center = ChunkCoord::from_point(observer);
        if self.observer == Some(center) {
            let created = self.admit_deferred();
            if created.is_empty() {
                return None;
            }
            log::debug!(
                target: "streaming",
                "admitted {} deferred chunks ({} still waiting)",
                created.len(),
                self.deferred.len()
            );
            return Some(StreamingUpdate {
                center,
                previous: self.previous_observer,
                created,
                deferred: self.deferred.len(),
                ..Default::default()
            });
        }

        self.previous_observer = self.observer;
        self.observer = Some(center);

        let desired = desired_region(
            center,
            self.cfg.view_distance_in_chunks,
            self.cfg.world_width_in_chunks,
        );
        let next: HashSet<ChunkCoord> = desired.iter().copied().collect();

        let mut deactivated: Vec<ChunkCoord> = self
            .active
            .iter()
            .copied()
            .filter(|c| !next.contains(c))
            .collect();
        deactivated.sort();
        for &c in &deactivated {
            if let Some(chunk) = self.chunk_mut(c) {
                chunk.set_active(false);
            }
        }
        self.stats.deactivations += deactivated.len() as u64;
        self.deferred.retain(|c| next.contains(c));

        let mut reactivated = Vec::new();
        for &c in &desired {
            if self.active.contains(&c) {
                continue;
            }
            match self.chunk_mut(c) {
                Some(chunk) => {
                    chunk.set_active(true);
                    reactivated.push(c);
                }
                None => {
                    if !self.deferred.contains(&c) {
                        self.deferred.push_back(c);
                    }
                }
            }
        }
        self.stats.reactivations += reactivated.len() as u64;
        self.active = next;

        let created = self.admit_deferred();
        log::info!(
            target: "streaming",
            "observer chunk {:?} -> ({}, {}): created={} reactivated={} deactivated={} deferred={}",
            self.previous_observer.map(|c| (c.cx, c.cy)),
            center.cx,
            center.cy,
            created.len(),
            reactivated.len(),
            deactivated.len(),
            self.deferred.len()
        );
        Some(StreamingUpdate {
            center,
            previous: self.previous_observer,
            created,
            reactivated,
            deactivated,
            deferred: self.deferred.len(),
        })
    }

    /// Active chunks with at least one installed mesh, in slot order.
    pub fn mesh_descriptors(&self) -> impl Iterator<Item = MeshDescriptor<'_>> + '_ {
        self.chunks
            .iter()
            .flatten()
            .filter(|c| c.is_active() && c.is_built())
            .map(|c| MeshDescriptor {
                coord: c.coord(),
                origin: c.world_origin().as_vec3(),
                mesh: c.mesh(),
            })
    }
}

impl SolidQuery for WorldGrid {
    #[inline]
    fn is_solid_at(&self, pos: IVec3) -> bool {
        WorldGrid::is_solid_at(self, pos)
    }
}
