// history.rs - Bounded stack of prior grid snapshots

use std::collections::VecDeque;

use crate::grid::Grid;

pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// Capacity-limited snapshot queue, most recent last. Pushing past the
/// limit silently drops the oldest entry; popping an empty history is a
/// no-op.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<Grid>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn push(&mut self, grid: Grid) {
        if self.limit == 0 {
            return;
        }
        if self.snapshots.len() == self.limit {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(grid);
    }

    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
