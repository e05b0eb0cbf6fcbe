// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility rules and the window a visibility pass tests frames against.

use kurbo::Rect;
use smallvec::SmallVec;

/// How a frame is tested against the visible window `[top, bottom)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VisibilityRule {
    /// The frame overlaps the window: `frame.y1 > top && frame.y0 < bottom`.
    ///
    /// Items taller than the window, or straddling either edge, count as visible.
    #[default]
    Intersects,
    /// The frame's bottom edge lies strictly inside the window:
    /// `frame.y1 > top && frame.y1 < bottom`.
    ///
    /// An item whose bottom is below the window is hidden even if most of it is on
    /// screen. Provided for hosts that depend on this older behavior.
    BottomEdgeInside,
}

impl VisibilityRule {
    /// Returns `true` if `frame` is visible in `window` under this rule.
    #[must_use]
    pub fn is_visible(self, frame: Rect, window: VisibleWindow) -> bool {
        match self {
            Self::Intersects => frame.y1 > window.top && frame.y0 < window.bottom,
            Self::BottomEdgeInside => frame.y1 > window.top && frame.y1 < window.bottom,
        }
    }
}

/// The vertical span of content considered on screen, `[top, bottom)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibleWindow {
    /// First visible content coordinate (inclusive).
    pub top: f64,
    /// End of the visible span (exclusive).
    pub bottom: f64,
}

impl VisibleWindow {
    /// Window for a viewport scrolled to `scroll_offset` and `viewport_height` tall,
    /// widened by the given overscan distances.
    ///
    /// Negative inputs are treated as zero, and the top never goes above the content.
    #[must_use]
    pub fn new(
        scroll_offset: f64,
        viewport_height: f64,
        overscan_before: f64,
        overscan_after: f64,
    ) -> Self {
        let scroll_offset = scroll_offset.max(0.0);
        let viewport_height = viewport_height.max(0.0);
        let top = (scroll_offset - overscan_before.max(0.0)).max(0.0);
        let bottom = scroll_offset + viewport_height + overscan_after.max(0.0);
        Self { top, bottom }
    }

    /// Height of the window.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// What a visibility pass changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityChange {
    /// Indices that gained a cell, ascending.
    pub shown: SmallVec<[usize; 8]>,
    /// Indices whose cell was released to the pool, ascending.
    pub hidden: SmallVec<[usize; 8]>,
}

impl VisibilityChange {
    /// Returns `true` if the pass neither showed nor hid anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.hidden.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{VisibilityRule, VisibleWindow};

    fn frame(y0: f64, y1: f64) -> Rect {
        Rect::new(0.0, y0, 10.0, y1)
    }

    #[test]
    fn window_applies_overscan_and_clamps_top() {
        let window = VisibleWindow::new(50.0, 100.0, 80.0, 20.0);
        assert_eq!(window.top, 0.0);
        assert_eq!(window.bottom, 170.0);

        let window = VisibleWindow::new(-10.0, 100.0, 0.0, 0.0);
        assert_eq!(window, VisibleWindow { top: 0.0, bottom: 100.0 });
        assert_eq!(window.height(), 100.0);
    }

    #[test]
    fn intersects_counts_frames_straddling_either_edge() {
        let window = VisibleWindow::new(100.0, 100.0, 0.0, 0.0);
        let rule = VisibilityRule::Intersects;

        assert!(rule.is_visible(frame(50.0, 150.0), window));
        assert!(rule.is_visible(frame(150.0, 250.0), window));
        // Taller than the window on both sides.
        assert!(rule.is_visible(frame(0.0, 400.0), window));
        // Half-open: touching an edge is not overlapping.
        assert!(!rule.is_visible(frame(0.0, 100.0), window));
        assert!(!rule.is_visible(frame(200.0, 300.0), window));
    }

    #[test]
    fn bottom_edge_rule_hides_items_hanging_below() {
        let window = VisibleWindow::new(100.0, 100.0, 0.0, 0.0);
        let rule = VisibilityRule::BottomEdgeInside;

        assert!(rule.is_visible(frame(50.0, 150.0), window));
        assert!(!rule.is_visible(frame(150.0, 250.0), window));
        assert!(!rule.is_visible(frame(0.0, 400.0), window));
        assert!(!rule.is_visible(frame(150.0, 200.0), window));
    }

    #[test]
    fn zero_height_frames_inside_the_window_are_visible() {
        let window = VisibleWindow::new(0.0, 100.0, 0.0, 0.0);
        assert!(VisibilityRule::Intersects.is_visible(frame(40.0, 40.0), window));
        assert!(!VisibilityRule::Intersects.is_visible(frame(0.0, 0.0), window));
    }
}
