// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=waterflow_layout --heading-base-level=0

//! Waterflow Layout: shortest-column waterfall (masonry) placement.
//!
//! This crate computes the geometry of a waterfall grid: a fixed number of equal-width
//! columns into which variable-height items are dropped one by one, each into the column
//! that is currently shortest. The result is a frame per item plus the total content height.
//!
//! The core concepts are:
//!
//! - [`MarginKind`] and [`Margins`]: the six gaps around and between items.
//! - [`LayoutConfig`]: column count and margins, with defaults for hosts that do not
//!   specify them ([`DEFAULT_COLUMN_COUNT`], [`DEFAULT_MARGIN`]).
//! - [`compute_layout`]: the placement pass, a pure function of its inputs.
//! - [`WaterflowLayout`]: the computed frames, per-item columns, and content size.
//!
//! This crate deliberately does **not** know about scrolling, visibility, or view
//! recycling; see `waterflow_view` for a container that virtualizes cells over a layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use waterflow_layout::{LayoutConfig, compute_layout};
//!
//! // Three columns with 1px margins on a 320px wide viewport.
//! let config = LayoutConfig::default();
//! let layout = compute_layout(10, &config, 320.0, |i| if i % 2 == 0 { 100.0 } else { 70.0 });
//!
//! assert_eq!(layout.len(), 10);
//! // The first row starts at the top margin in every column.
//! assert_eq!(layout.frame(0).unwrap().y0, 1.0);
//! assert_eq!(layout.frame(2).unwrap().y0, 1.0);
//! assert!(layout.content_height() > 0.0);
//! ```
//!
//! Frames live in content coordinates (typically logical pixels) with the origin at the
//! top-left corner of the scrollable content. Heights are expected to be finite and
//! non-negative; negative values are clamped to zero.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod margins;

pub use layout::{WaterflowLayout, compute_layout, shortest_column};
pub use margins::{
    DEFAULT_COLUMN_COUNT, DEFAULT_ITEM_HEIGHT, DEFAULT_MARGIN, LayoutConfig, MarginKind, Margins,
};
