// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin kinds and the resolved margin set used by a layout pass.

use core::num::NonZeroUsize;

/// Default margin applied to every [`MarginKind`] when the host does not supply one.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// Default height of an item when the host does not supply one.
pub const DEFAULT_ITEM_HEIGHT: f64 = 44.0;

/// Default number of columns when the host does not supply one.
pub const DEFAULT_COLUMN_COUNT: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// The gaps a waterfall layout distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarginKind {
    /// Gap above the first item of every column.
    Top,
    /// Gap below the tallest column.
    Bottom,
    /// Gap left of the first column.
    Left,
    /// Gap right of the last column.
    Right,
    /// Horizontal gap between adjacent columns.
    Column,
    /// Vertical gap between consecutive items in a column.
    Row,
}

impl MarginKind {
    /// Every margin kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::Column,
        Self::Row,
    ];
}

/// A resolved set of margins, one value per [`MarginKind`].
///
/// Values are in the same coordinate space as item heights and the viewport
/// width (typically logical pixels).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Margins {
    /// See [`MarginKind::Top`].
    pub top: f64,
    /// See [`MarginKind::Bottom`].
    pub bottom: f64,
    /// See [`MarginKind::Left`].
    pub left: f64,
    /// See [`MarginKind::Right`].
    pub right: f64,
    /// See [`MarginKind::Column`].
    pub column: f64,
    /// See [`MarginKind::Row`].
    pub row: f64,
}

impl Margins {
    /// All margins set to zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates a margin set with the same value for every kind.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
            column: value,
            row: value,
        }
    }

    /// Resolves every kind through `margin_for`.
    ///
    /// This is how host callbacks are turned into a plain value before a
    /// layout pass, so the pass itself never calls back into the host for margins.
    #[must_use]
    pub fn from_fn(mut margin_for: impl FnMut(MarginKind) -> f64) -> Self {
        Self {
            top: margin_for(MarginKind::Top),
            bottom: margin_for(MarginKind::Bottom),
            left: margin_for(MarginKind::Left),
            right: margin_for(MarginKind::Right),
            column: margin_for(MarginKind::Column),
            row: margin_for(MarginKind::Row),
        }
    }

    /// Returns the margin for `kind`.
    #[must_use]
    pub const fn get(&self, kind: MarginKind) -> f64 {
        match kind {
            MarginKind::Top => self.top,
            MarginKind::Bottom => self.bottom,
            MarginKind::Left => self.left,
            MarginKind::Right => self.right,
            MarginKind::Column => self.column,
            MarginKind::Row => self.row,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

/// Inputs of a layout pass other than the item count, heights, and viewport width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Number of columns.
    pub columns: NonZeroUsize,
    /// Gaps around and between items.
    pub margins: Margins,
}

impl LayoutConfig {
    /// Creates a configuration with `columns` columns and the given margins.
    #[must_use]
    pub const fn new(columns: NonZeroUsize, margins: Margins) -> Self {
        Self { columns, margins }
    }

    /// Width of a single column for a viewport `viewport_width` wide.
    ///
    /// The horizontal margins and the `columns - 1` gaps are subtracted first and
    /// the rest is split evenly. A viewport narrower than its margins yields `0.0`.
    #[must_use]
    pub fn column_width(&self, viewport_width: f64) -> f64 {
        let m = &self.margins;
        let columns = self.columns.get() as f64;
        let width = (viewport_width - m.left - m.right - (columns - 1.0) * m.column) / columns;
        width.max(0.0)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMN_COUNT,
            margins: Margins::default(),
        }
    }
}
