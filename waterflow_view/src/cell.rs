// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cell contract between the container and host-owned views.

use kurbo::Rect;

/// Tag naming which kind of cell an instance is.
///
/// Pooled cells are only handed back out for requests with the same tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecycleId(&'static str);

impl RecycleId {
    /// Creates a tag from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the tag's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// A host-owned view the container positions, attaches, and recycles.
///
/// The container never draws a cell. It only assigns a frame, tells the cell when it
/// enters or leaves the viewport, and toggles the press highlight. At any time a cell
/// is owned by exactly one of: the container's active set, its [`ReusePool`], or the host.
///
/// [`ReusePool`]: crate::ReusePool
pub trait WaterflowCell {
    /// Kind tag used to match pooled cells with requests.
    fn recycle_id(&self) -> RecycleId;

    /// Current frame in content coordinates.
    fn frame(&self) -> Rect;

    /// Moves the cell to `frame`.
    fn set_frame(&mut self, frame: Rect);

    /// Called after the cell is added to the viewport.
    fn did_attach(&mut self) {}

    /// Called after the cell is removed from the viewport, before it is pooled or dropped.
    fn did_detach(&mut self) {}

    /// Shows or hides the translucent press overlay on top of the cell's content.
    fn set_highlighted(&mut self, _highlighted: bool) {}
}
