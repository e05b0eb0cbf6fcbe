// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortest-column placement and the resulting frame sequence.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::LayoutConfig;

/// Geometry produced by [`compute_layout`].
///
/// Frames are indexed by item index and are never patched in place; a new
/// layout is computed whenever the inputs change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaterflowLayout {
    frames: Vec<Rect>,
    columns: Vec<usize>,
    column_bottoms: Vec<f64>,
    column_width: f64,
    content_height: f64,
}

impl WaterflowLayout {
    /// A layout with no items and zero content height.
    ///
    /// This is what a host with nothing to show (for example, no data yet) lays out to.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            frames: Vec::new(),
            columns: Vec::new(),
            column_bottoms: Vec::new(),
            column_width: 0.0,
            content_height: 0.0,
        }
    }

    /// Number of laid out items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no items were laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame of the item at `index`, in content coordinates.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    /// All frames, indexed by item index.
    #[must_use]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Column the item at `index` was placed in.
    #[must_use]
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns.get(index).copied()
    }

    /// Width shared by every column (and so by every frame).
    #[must_use]
    pub const fn column_width(&self) -> f64 {
        self.column_width
    }

    /// Number of columns this layout was computed with.
    ///
    /// Zero for [`WaterflowLayout::empty`].
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_bottoms.len()
    }

    /// Final bottom edge of each column, `0.0` for columns that received no item.
    #[must_use]
    pub fn column_bottoms(&self) -> &[f64] {
        &self.column_bottoms
    }

    /// Height of the scrollable content: the tallest column plus the bottom margin.
    #[must_use]
    pub const fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Scrollable content size. The waterfall only scrolls vertically, so the width is zero.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        Size::new(0.0, self.content_height)
    }
}

/// Returns the column with the smallest bottom, preferring the lowest index on ties.
///
/// An empty slice yields column `0`.
#[must_use]
pub fn shortest_column(bottoms: &[f64]) -> usize {
    let mut column = 0;
    let mut best = bottoms.first().copied().unwrap_or(0.0);
    for (i, bottom) in bottoms.iter().copied().enumerate().skip(1) {
        if bottom < best {
            best = bottom;
            column = i;
        }
    }
    column
}

/// Lays out `item_count` items into the columns described by `config`.
///
/// Items are placed in ascending index order, each into the column whose current
/// bottom is smallest (ties go to the lowest column). A column whose bottom is
/// still `0.0` counts as empty and its next item starts at the top margin;
/// otherwise the item starts one row margin below the column's bottom.
///
/// `height_of` is called exactly once per index, in order. Negative heights are
/// treated as `0.0`; zero-height items still take their slot in the column.
///
/// The result is a pure function of the inputs.
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use waterflow_layout::{LayoutConfig, Margins, compute_layout};
///
/// let config = LayoutConfig::new(NonZeroUsize::new(2).unwrap(), Margins::ZERO);
/// let layout = compute_layout(4, &config, 200.0, |_| 100.0);
///
/// let columns: Vec<_> = (0..4).filter_map(|i| layout.column_of(i)).collect();
/// assert_eq!(columns, [0, 1, 0, 1]);
/// assert_eq!(layout.content_height(), 200.0);
/// ```
pub fn compute_layout<F>(
    item_count: usize,
    config: &LayoutConfig,
    viewport_width: f64,
    mut height_of: F,
) -> WaterflowLayout
where
    F: FnMut(usize) -> f64,
{
    let margins = &config.margins;
    let column_width = config.column_width(viewport_width);

    let mut column_bottoms = vec![0.0_f64; config.columns.get()];
    let mut frames = Vec::with_capacity(item_count);
    let mut columns = Vec::with_capacity(item_count);

    for index in 0..item_count {
        let column = shortest_column(&column_bottoms);
        let bottom = column_bottoms[column];

        let mut height = height_of(index);
        debug_assert!(
            height.is_finite(),
            "item heights must be finite; got {height:?} for index {index}"
        );
        if height.is_sign_negative() {
            height = 0.0;
        }

        let x = margins.left + column as f64 * (column_width + margins.column);
        let y = if bottom == 0.0 {
            margins.top
        } else {
            bottom + margins.row
        };

        frames.push(Rect::new(x, y, x + column_width, y + height));
        columns.push(column);
        column_bottoms[column] = y + height;
    }

    let tallest = column_bottoms.iter().copied().fold(0.0_f64, f64::max);

    WaterflowLayout {
        frames,
        columns,
        column_bottoms,
        column_width,
        content_height: tallest + margins.bottom,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use kurbo::Rect;

    use super::{WaterflowLayout, compute_layout, shortest_column};
    use crate::{LayoutConfig, Margins};

    fn config(columns: usize, margins: Margins) -> LayoutConfig {
        LayoutConfig::new(NonZeroUsize::new(columns).unwrap(), margins)
    }

    fn alternating(index: usize) -> f64 {
        if index % 2 == 0 { 100.0 } else { 70.0 }
    }

    #[test]
    fn shortest_column_prefers_lowest_index_on_ties() {
        assert_eq!(shortest_column(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(shortest_column(&[10.0, 5.0, 5.0]), 1);
        assert_eq!(shortest_column(&[10.0, 20.0, 3.0]), 2);
        assert_eq!(shortest_column(&[]), 0);
    }

    #[test]
    fn two_columns_of_equal_items_alternate() {
        let layout = compute_layout(4, &config(2, Margins::ZERO), 200.0, |_| 100.0);

        let columns: Vec<_> = (0..4).map(|i| layout.column_of(i).unwrap()).collect();
        let ys: Vec<_> = layout.frames().iter().map(|r| r.y0).collect();
        assert_eq!(columns, [0, 1, 0, 1]);
        assert_eq!(ys, [0.0, 0.0, 100.0, 100.0]);
        assert_eq!(layout.frame(1), Some(Rect::new(100.0, 0.0, 200.0, 100.0)));
        assert_eq!(layout.content_height(), 200.0);
    }

    #[test]
    fn margins_offset_first_row_and_separate_later_rows() {
        let margins = Margins {
            top: 5.0,
            bottom: 7.0,
            left: 3.0,
            right: 3.0,
            column: 4.0,
            row: 6.0,
        };
        // Column width: (110 - 3 - 3 - 4) / 2 = 50.
        let layout = compute_layout(3, &config(2, margins), 110.0, |_| 10.0);

        assert_eq!(layout.column_width(), 50.0);
        assert_eq!(layout.frame(0), Some(Rect::new(3.0, 5.0, 53.0, 15.0)));
        assert_eq!(layout.frame(1), Some(Rect::new(57.0, 5.0, 107.0, 15.0)));
        assert_eq!(layout.frame(2), Some(Rect::new(3.0, 21.0, 53.0, 31.0)));
        assert_eq!(layout.content_height(), 31.0 + 7.0);
    }

    #[test]
    fn every_item_gets_one_frame_of_uniform_width() {
        for columns in 1..=6 {
            for count in [0_usize, 1, 2, 7, 50] {
                let layout =
                    compute_layout(count, &config(columns, Margins::uniform(2.0)), 375.0, alternating);
                assert_eq!(layout.len(), count);
                for (i, frame) in layout.frames().iter().enumerate() {
                    assert_eq!(frame.height(), alternating(i));
                    assert!((frame.width() - layout.column_width()).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn column_x_ranges_are_disjoint() {
        let layout = compute_layout(30, &config(4, Margins::uniform(2.0)), 400.0, alternating);
        let mut spans: Vec<(usize, f64, f64)> = Vec::new();
        for (i, frame) in layout.frames().iter().enumerate() {
            let column = layout.column_of(i).unwrap();
            match spans.iter().find(|(c, _, _)| *c == column) {
                Some((_, x0, x1)) => assert_eq!((*x0, *x1), (frame.x0, frame.x1)),
                None => spans.push((column, frame.x0, frame.x1)),
            }
        }
        spans.sort_by_key(|(c, _, _)| *c);
        for pair in spans.windows(2) {
            // Adjacent columns are separated by exactly the column margin.
            assert!(pair[0].2 <= pair[1].1);
            assert!((pair[1].1 - pair[0].2 - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn each_placement_picks_a_shortest_column() {
        let heights = [30.0, 120.0, 10.0, 55.0, 0.0, 80.0, 45.0, 45.0, 200.0, 5.0];
        let margins = Margins::uniform(1.0);
        let layout = compute_layout(heights.len(), &config(3, margins), 300.0, |i| heights[i]);

        let mut bottoms = [0.0_f64; 3];
        for (i, frame) in layout.frames().iter().enumerate() {
            let column = layout.column_of(i).unwrap();
            for other in bottoms {
                assert!(bottoms[column] <= other);
            }
            bottoms[column] = frame.y1;
        }
        assert_eq!(layout.column_bottoms(), &bottoms);
    }

    #[test]
    fn content_height_covers_tallest_column() {
        let margins = Margins::uniform(2.0);
        let layout = compute_layout(100, &config(3, margins), 375.0, alternating);

        // Replay the placement to find the tallest column independently.
        let mut bottoms = [0.0_f64; 3];
        for i in 0..100 {
            let column = shortest_column(&bottoms);
            let y = if bottoms[column] == 0.0 {
                2.0
            } else {
                bottoms[column] + 2.0
            };
            bottoms[column] = y + alternating(i);
        }
        let tallest = bottoms.iter().copied().fold(0.0, f64::max);

        assert_eq!(layout.content_height(), tallest + 2.0);
        for frame in layout.frames() {
            assert!(layout.content_height() >= frame.y1);
        }
    }

    #[test]
    fn identical_inputs_give_identical_layouts() {
        let config = config(3, Margins::uniform(2.0));
        let a = compute_layout(64, &config, 320.0, alternating);
        let b = compute_layout(64, &config, 320.0, alternating);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_items_keep_the_bottom_margin() {
        let margins = Margins {
            bottom: 12.0,
            ..Margins::uniform(1.0)
        };
        let layout = compute_layout(0, &config(3, margins), 320.0, |_| 44.0);
        assert!(layout.is_empty());
        assert_eq!(layout.content_height(), 12.0);
        assert_eq!(layout.column_count(), 3);
    }

    #[test]
    fn empty_layout_has_no_content() {
        let layout = WaterflowLayout::empty();
        assert!(layout.is_empty());
        assert_eq!(layout.content_height(), 0.0);
        assert_eq!(layout.frame(0), None);
        assert_eq!(layout.column_of(0), None);
    }

    #[test]
    fn zero_height_items_still_take_their_slot() {
        let heights = [0.0, 10.0, 20.0];
        let layout = compute_layout(3, &config(2, Margins::uniform(1.0)), 100.0, |i| heights[i]);
        // Item 0 is zero-height at y = 1, so column 0's bottom is 1 and it receives item 2.
        assert_eq!(layout.frame(0).unwrap().y0, 1.0);
        assert_eq!(layout.frame(0).unwrap().height(), 0.0);
        assert_eq!(layout.column_of(1), Some(1));
        assert_eq!(layout.column_of(2), Some(0));
        assert_eq!(layout.frame(2).unwrap().y0, 2.0);
    }

    #[test]
    fn negative_heights_are_clamped_to_zero() {
        let layout = compute_layout(1, &config(1, Margins::ZERO), 50.0, |_| -5.0);
        assert_eq!(layout.frame(0).unwrap().height(), 0.0);
    }

    #[test]
    fn height_callback_runs_once_per_index_in_order() {
        let mut seen = Vec::new();
        let _ = compute_layout(5, &config(2, Margins::ZERO), 100.0, |i| {
            seen.push(i);
            10.0
        });
        assert_eq!(seen, [0, 1, 2, 3, 4]);
    }
}
