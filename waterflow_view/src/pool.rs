// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detached cells kept around for reuse, bucketed by [`RecycleId`].

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{RecycleId, WaterflowCell};

/// Cells that have left the viewport and wait to be handed out again.
///
/// The pool is unbounded by default. [`ReusePool::set_limit_per_id`] caps how many
/// cells are retained per [`RecycleId`]; cells beyond the cap are dropped on release.
///
/// Hosts interact with the pool from [`WaterflowDataSource::cell_at`], asking for a
/// cell of the kind they want and constructing one on a miss:
///
/// ```rust
/// use kurbo::Rect;
/// use waterflow_view::{RecycleId, ReusePool, WaterflowCell};
///
/// #[derive(Debug)]
/// struct Tile { frame: Rect }
///
/// impl WaterflowCell for Tile {
///     fn recycle_id(&self) -> RecycleId { RecycleId::new("tile") }
///     fn frame(&self) -> Rect { self.frame }
///     fn set_frame(&mut self, frame: Rect) { self.frame = frame; }
/// }
///
/// let mut pool = ReusePool::<Tile>::new();
/// assert!(pool.dequeue(RecycleId::new("tile")).is_none());
///
/// let tile = pool.dequeue_or_else(RecycleId::new("tile"), || Tile { frame: Rect::ZERO });
/// assert_eq!(tile.frame, Rect::ZERO);
/// ```
///
/// [`WaterflowDataSource::cell_at`]: crate::WaterflowDataSource::cell_at
#[derive(Debug)]
pub struct ReusePool<C> {
    buckets: HashMap<RecycleId, Vec<C>>,
    len: usize,
    limit_per_id: Option<usize>,
}

impl<C> Default for ReusePool<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ReusePool<C> {
    /// Creates an empty, unbounded pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
            limit_per_id: None,
        }
    }

    /// Creates an empty pool retaining at most `limit` cells per [`RecycleId`].
    #[must_use]
    pub fn with_limit_per_id(limit: usize) -> Self {
        Self {
            limit_per_id: Some(limit),
            ..Self::new()
        }
    }

    /// Removes and returns a pooled cell tagged `id`, if there is one.
    ///
    /// Which of several matching cells is returned is unspecified.
    pub fn dequeue(&mut self, id: RecycleId) -> Option<C> {
        let cell = self.buckets.get_mut(&id)?.pop()?;
        self.len -= 1;
        Some(cell)
    }

    /// Returns a pooled cell tagged `id`, or builds a fresh one with `make`.
    pub fn dequeue_or_else(&mut self, id: RecycleId, make: impl FnOnce() -> C) -> C {
        self.dequeue(id).unwrap_or_else(make)
    }

    /// Total number of pooled cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no cells are pooled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pooled cells tagged `id`.
    #[must_use]
    pub fn count_for(&self, id: RecycleId) -> usize {
        self.buckets.get(&id).map_or(0, Vec::len)
    }

    /// Returns the per-identifier cap, if any.
    #[must_use]
    pub const fn limit_per_id(&self) -> Option<usize> {
        self.limit_per_id
    }

    /// Sets the per-identifier cap and drops any cells already beyond it.
    pub fn set_limit_per_id(&mut self, limit: Option<usize>) {
        self.limit_per_id = limit;
        if let Some(limit) = limit {
            let mut dropped = 0;
            for bucket in self.buckets.values_mut() {
                if bucket.len() > limit {
                    dropped += bucket.len() - limit;
                    bucket.truncate(limit);
                }
            }
            self.len -= dropped;
            tracing::debug!(limit, dropped, "reuse pool limit changed");
        }
    }

    /// Drops every pooled cell.
    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<C: WaterflowCell> ReusePool<C> {
    /// Takes ownership of a detached cell.
    ///
    /// Returns `false` if the bucket for the cell's identifier is full and the cell was dropped.
    pub(crate) fn enqueue(&mut self, cell: C) -> bool {
        let bucket = self.buckets.entry(cell.recycle_id()).or_default();
        if self.limit_per_id.is_some_and(|limit| bucket.len() >= limit) {
            return false;
        }
        bucket.push(cell);
        self.len += 1;
        true
    }
}
