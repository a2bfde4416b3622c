use std::collections::VecDeque;

use strata_world::ChunkCoord;

/// FIFO of chunk coordinates awaiting a mesh build. At most one coordinate is
/// handed out per drain cycle; a cycle must be finished before the next begins.
#[derive(Debug, Default)]
pub struct BuildScheduler {
    queue: VecDeque<ChunkCoord>,
    draining: bool,
}

impl BuildScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, coord: ChunkCoord) {
        self.queue.push_back(coord);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn is_draining(&self) -> bool {
        self.draining
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.queue.contains(&coord)
    }

    /// Pops the next coordinate and opens a drain cycle. Returns `None` when the
    /// queue is empty or a cycle is already open.
    pub fn begin_drain(&mut self) -> Option<ChunkCoord> {
        if self.draining {
            log::warn!(target: "builds", "drain requested while a drain cycle is in progress");
            return None;
        }
        let next = self.queue.pop_front()?;
        self.draining = true;
        Some(next)
    }

    pub fn finish_drain(&mut self) {
        self.draining = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_fifo_order() {
        let mut s = BuildScheduler::new();
        s.enqueue(ChunkCoord::new(1, 0));
        s.enqueue(ChunkCoord::new(0, 2));
        assert_eq!(s.begin_drain(), Some(ChunkCoord::new(1, 0)));
        s.finish_drain();
        assert_eq!(s.begin_drain(), Some(ChunkCoord::new(0, 2)));
        s.finish_drain();
        assert_eq!(s.begin_drain(), None);
        assert!(!s.is_draining());
    }

    #[test]
    fn refuses_reentrant_drain() {
        let mut s = BuildScheduler::new();
        s.enqueue(ChunkCoord::new(0, 0));
        s.enqueue(ChunkCoord::new(1, 1));
        assert!(s.begin_drain().is_some());
        assert!(s.is_draining());
        assert_eq!(s.begin_drain(), None);
        assert_eq!(s.len(), 1);
        s.finish_drain();
        assert_eq!(s.begin_drain(), Some(ChunkCoord::new(1, 1)));
    }

    #[test]
    fn empty_queue_does_not_open_a_cycle() {
        let mut s = BuildScheduler::new();
        assert_eq!(s.begin_drain(), None);
        assert!(!s.is_draining());
    }
}
