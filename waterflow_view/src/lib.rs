// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waterflow_view --heading-base-level=0

//! Waterflow View: a virtualized waterfall container.
//!
//! This crate bridges the static geometry from `waterflow_layout` to a live,
//! memory-bounded set of host views ("cells"). It keeps a cell only for the items
//! whose frame is visible in the current scroll window, and parks cells that scroll
//! away in a reuse pool so the host can hand them back out instead of building new ones.
//!
//! The core concepts are:
//!
//! - [`WaterflowDataSource`]: required host callbacks (item count, cell construction)
//!   plus an optional column count.
//! - [`WaterflowDelegate`]: optional host callbacks (item height, margins, selection),
//!   each with a default.
//! - [`WaterflowCell`] and [`RecycleId`]: what the container needs from a host view.
//! - [`ReusePool`]: detached cells bucketed by [`RecycleId`].
//! - [`VisibilityRule`] and [`VisibleWindow`]: how frames are tested against the viewport.
//! - [`PressState`]: press tracking that selects only on release over the pressed target.
//! - [`WaterflowView`]: the container tying these together.
//!
//! This crate deliberately does **not** draw anything or own a platform view tree.
//! Host frameworks are responsible for:
//!
//! - Forwarding scroll offsets via [`WaterflowView::set_scroll_offset`].
//! - Forwarding pointer events via [`WaterflowView::pointer_down`],
//!   [`WaterflowView::pointer_move`], and [`WaterflowView::pointer_up`].
//! - Reacting to [`WaterflowCell::did_attach`] / [`WaterflowCell::did_detach`] and
//!   [`WaterflowCell::set_highlighted`] in their own view system.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use waterflow_view::{
//!     RecycleId, ReusePool, WaterflowCell, WaterflowDataSource, WaterflowDelegate,
//!     WaterflowView,
//! };
//!
//! const TILE: RecycleId = RecycleId::new("tile");
//!
//! struct Tile {
//!     frame: Rect,
//! }
//!
//! impl WaterflowCell for Tile {
//!     fn recycle_id(&self) -> RecycleId { TILE }
//!     fn frame(&self) -> Rect { self.frame }
//!     fn set_frame(&mut self, frame: Rect) { self.frame = frame; }
//! }
//!
//! struct Feed;
//!
//! impl WaterflowDataSource for Feed {
//!     type Cell = Tile;
//!     fn item_count(&self) -> Option<usize> { Some(100) }
//!     fn cell_at(&mut self, _index: usize, pool: &mut ReusePool<Tile>) -> Tile {
//!         pool.dequeue_or_else(TILE, || Tile { frame: Rect::ZERO })
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Taps(Vec<usize>);
//!
//! impl WaterflowDelegate for Taps {
//!     fn height_of(&self, index: usize) -> f64 {
//!         if index % 2 == 0 { 100.0 } else { 70.0 }
//!     }
//!     fn on_cell_selected(&mut self, index: usize) {
//!         self.0.push(index);
//!     }
//! }
//!
//! let mut view = WaterflowView::new(Feed, Taps::default(), Size::new(320.0, 480.0));
//! view.reload();
//! view.set_scroll_offset(0.0);
//! assert!(view.active_len() > 0 && view.active_len() < 100);
//!
//! // Scrolling releases cells into the pool for reuse.
//! view.set_scroll_offset(1200.0);
//! assert!(!view.is_active(0));
//!
//! // Tap the first visible cell.
//! let index = view.active_indices().next().unwrap();
//! let center = view.frame_of(index).unwrap().center();
//! view.pointer_down(center);
//! view.pointer_up(center);
//! assert_eq!(view.delegate().0, [index]);
//! ```
//!
//! All geometry is in content coordinates (typically logical pixels), with the origin
//! at the top-left of the scrollable content.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod pool;
mod press;
mod source;
mod view;
mod visibility;

#[cfg(test)]
mod testing;

pub use cell::{RecycleId, WaterflowCell};
pub use pool::ReusePool;
pub use press::{Press, PressMove, PressResult, PressState};
pub use source::{WaterflowDataSource, WaterflowDelegate};
pub use view::{WaterflowView, visible_indices};
pub use visibility::{VisibilityChange, VisibilityRule, VisibleWindow};

pub use waterflow_layout::{
    DEFAULT_COLUMN_COUNT, DEFAULT_ITEM_HEIGHT, DEFAULT_MARGIN, LayoutConfig, MarginKind, Margins,
    WaterflowLayout,
};
