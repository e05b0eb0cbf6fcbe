// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied data and callbacks.
//!
//! Both traits split into required methods and provided methods. A provided method
//! carries the default a host gets by not overriding it, so the container never has
//! to ask whether a callback exists.

use core::num::NonZeroUsize;

use waterflow_layout::{DEFAULT_COLUMN_COUNT, DEFAULT_ITEM_HEIGHT, DEFAULT_MARGIN, MarginKind};

use crate::{ReusePool, WaterflowCell};

/// Supplies the items of a [`WaterflowView`](crate::WaterflowView) and builds their cells.
pub trait WaterflowDataSource {
    /// Cell type produced for items.
    type Cell: WaterflowCell;

    /// Number of items, or `None` when there is nothing to show.
    ///
    /// `None` lays out as an empty list with zero content height.
    fn item_count(&self) -> Option<usize>;

    /// Returns a cell for the item at `index`.
    ///
    /// Implementations should first try [`ReusePool::dequeue`] with the kind of cell they
    /// want and only construct a new cell on a miss. The container assigns the frame
    /// after this returns.
    fn cell_at(&mut self, index: usize, pool: &mut ReusePool<Self::Cell>) -> Self::Cell;

    /// Number of columns. Defaults to [`DEFAULT_COLUMN_COUNT`].
    fn column_count(&self) -> NonZeroUsize {
        DEFAULT_COLUMN_COUNT
    }
}

/// Per-item geometry and selection callbacks. Every method is optional.
///
/// `()` implements this trait with all defaults, for hosts with no delegate.
pub trait WaterflowDelegate {
    /// Height of the item at `index`. Defaults to [`DEFAULT_ITEM_HEIGHT`].
    fn height_of(&self, _index: usize) -> f64 {
        DEFAULT_ITEM_HEIGHT
    }

    /// Margin of the given kind. Defaults to [`DEFAULT_MARGIN`].
    fn margin_for(&self, _kind: MarginKind) -> f64 {
        DEFAULT_MARGIN
    }

    /// Called once when a press is released on the same cell it started on.
    fn on_cell_selected(&mut self, _index: usize) {}
}

impl WaterflowDelegate for () {}

#[cfg(test)]
mod tests {
    use waterflow_layout::{MarginKind, Margins};

    use super::WaterflowDelegate;

    #[test]
    fn unit_delegate_uses_defaults() {
        assert_eq!(().height_of(12), 44.0);
        assert_eq!(Margins::from_fn(|kind| ().margin_for(kind)), Margins::uniform(1.0));
        assert_eq!(().margin_for(MarginKind::Row), 1.0);
    }
}
