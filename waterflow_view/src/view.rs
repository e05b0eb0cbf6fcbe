// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The virtualized container that keeps cells for visible items only.

use alloc::collections::BTreeMap;
use core::fmt;
use core::mem;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use waterflow_layout::{LayoutConfig, Margins, WaterflowLayout, compute_layout};

use crate::{
    PressMove, PressResult, PressState, ReusePool, VisibilityChange, VisibilityRule,
    VisibleWindow, WaterflowCell, WaterflowDataSource, WaterflowDelegate,
};

/// A vertically scrolling waterfall that materializes cells only for visible items.
///
/// This type:
/// - lays out every item with [`compute_layout`] on [`reload`](Self::reload),
/// - keeps a cell for exactly the items visible in the current window,
/// - moves cells that scroll out of view into a [`ReusePool`] for the data source to
///   hand back out,
/// - tracks press gestures, showing a highlight on the pressed cell and reporting
///   selections to the delegate.
///
/// It does not scroll by itself; the host forwards its scroll offset with
/// [`set_scroll_offset`](Self::set_scroll_offset) and pointer events with
/// [`pointer_down`](Self::pointer_down), [`pointer_move`](Self::pointer_move), and
/// [`pointer_up`](Self::pointer_up). All coordinates are content coordinates.
pub struct WaterflowView<S: WaterflowDataSource, D: WaterflowDelegate = ()> {
    source: S,
    delegate: D,
    viewport: Size,
    scroll_offset: f64,
    overscan_before: f64,
    overscan_after: f64,
    rule: VisibilityRule,

    layout: WaterflowLayout,
    active: BTreeMap<usize, S::Cell>,
    pool: ReusePool<S::Cell>,

    press: PressState<usize>,
    /// Index of the one cell currently showing the press highlight.
    highlight: Option<usize>,
}

impl<S, D> fmt::Debug for WaterflowView<S, D>
where
    S: WaterflowDataSource + fmt::Debug,
    S::Cell: fmt::Debug,
    D: WaterflowDelegate + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaterflowView")
            .field("source", &self.source)
            .field("delegate", &self.delegate)
            .field("viewport", &self.viewport)
            .field("scroll_offset", &self.scroll_offset)
            .field("overscan_before", &self.overscan_before)
            .field("overscan_after", &self.overscan_after)
            .field("rule", &self.rule)
            .field("layout", &self.layout)
            .field("active", &self.active)
            .field("pool", &self.pool)
            .field("press", &self.press)
            .field("highlight", &self.highlight)
            .finish()
    }
}

impl<S: WaterflowDataSource, D: WaterflowDelegate> WaterflowView<S, D> {
    /// Creates a container over `source` and `delegate` for a viewport of `viewport` size.
    ///
    /// Nothing is laid out until [`reload`](Self::reload) is called.
    #[must_use]
    pub fn new(source: S, delegate: D, viewport: Size) -> Self {
        Self {
            source,
            delegate,
            viewport: Size::new(viewport.width.max(0.0), viewport.height.max(0.0)),
            scroll_offset: 0.0,
            overscan_before: 0.0,
            overscan_after: 0.0,
            rule: VisibilityRule::default(),
            layout: WaterflowLayout::empty(),
            active: BTreeMap::new(),
            pool: ReusePool::new(),
            press: PressState::new(),
            highlight: None,
        }
    }

    /// Returns the data source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the data source mutably. Call [`reload`](Self::reload) after changing its items.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the delegate.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Returns the delegate mutably. Call [`reload`](Self::reload) after changing its geometry.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Discards all cells and geometry and lays every item out again.
    ///
    /// Active cells are detached and dropped rather than pooled, and the pool is
    /// emptied, since identities and geometry are about to change. No cells are
    /// materialized; the next [`layout_cells`](Self::layout_cells) or
    /// [`set_scroll_offset`](Self::set_scroll_offset) does that. Any press in
    /// progress is cancelled.
    pub fn reload(&mut self) {
        self.detach_highlight();
        self.press.cancel();
        for (_, mut cell) in mem::take(&mut self.active) {
            cell.did_detach();
        }
        self.pool.clear();

        let delegate = &self.delegate;
        self.layout = match self.source.item_count() {
            Some(count) => {
                let config = LayoutConfig::new(
                    self.source.column_count(),
                    Margins::from_fn(|kind| delegate.margin_for(kind)),
                );
                compute_layout(count, &config, self.viewport.width, |index| {
                    delegate.height_of(index)
                })
            }
            None => WaterflowLayout::empty(),
        };

        tracing::debug!(
            items = self.layout.len(),
            columns = self.layout.column_count(),
            content_height = self.layout.content_height(),
            "waterflow reloaded"
        );
    }

    /// Scrolls to `offset` and brings the set of cells in line with the new window.
    ///
    /// Negative offsets are treated as zero.
    pub fn set_scroll_offset(&mut self, offset: f64) -> VisibilityChange {
        self.scroll_offset = offset.max(0.0);
        self.layout_cells()
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) -> VisibilityChange {
        self.set_scroll_offset(self.scroll_offset + delta)
    }

    /// Makes the set of active cells match the items visible at the current offset.
    ///
    /// Newly visible items get a cell from [`WaterflowDataSource::cell_at`], framed and
    /// attached. Items that are no longer visible have their cell detached and moved
    /// into the pool. Afterwards the active indices are exactly the visible ones.
    pub fn layout_cells(&mut self) -> VisibilityChange {
        let window = self.window();
        let rule = self.rule;
        let mut change = VisibilityChange::default();

        for (index, frame) in self.layout.frames().iter().enumerate() {
            let visible = rule.is_visible(*frame, window);
            let active = self.active.contains_key(&index);
            if visible && !active {
                change.shown.push(index);
            } else if !visible && active {
                change.hidden.push(index);
            }
        }

        // Hidden cells return to the pool before any new cell is requested.
        for &index in &change.hidden {
            self.release(index);
        }
        for &index in &change.shown {
            let frame = self.layout.frames()[index];
            let mut cell = self.source.cell_at(index, &mut self.pool);
            cell.set_frame(frame);
            cell.did_attach();
            self.active.insert(index, cell);
        }

        tracing::trace!(
            top = window.top,
            bottom = window.bottom,
            shown = change.shown.len(),
            hidden = change.hidden.len(),
            active = self.active.len(),
            pooled = self.pool.len(),
            "waterflow visibility pass"
        );
        change
    }

    /// Detaches the cell at `index` and hands it to the pool.
    fn release(&mut self, index: usize) {
        if self.highlight == Some(index) {
            self.detach_highlight();
        }
        if let Some(mut cell) = self.active.remove(&index) {
            cell.did_detach();
            self.pool.enqueue(cell);
        }
    }

    /// Resizes the viewport.
    ///
    /// Column widths depend on the viewport width, so a width change reloads before the
    /// visibility pass. A height-only change just re-runs the visibility pass.
    pub fn set_viewport_size(&mut self, size: Size) -> VisibilityChange {
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        let width_changed = size.width != self.viewport.width;
        self.viewport = size;
        if width_changed {
            self.reload();
        }
        self.layout_cells()
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest scroll offset that keeps the viewport within the content.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.layout.content_height() - self.viewport.height).max(0.0)
    }

    /// Sets the rule used to decide whether a frame is visible.
    ///
    /// Takes effect on the next visibility pass.
    pub fn set_visibility_rule(&mut self, rule: VisibilityRule) {
        self.rule = rule;
    }

    /// Returns the visibility rule.
    #[must_use]
    pub const fn visibility_rule(&self) -> VisibilityRule {
        self.rule
    }

    /// Sets extra distances above and below the viewport in which cells are kept.
    ///
    /// Both default to zero. Takes effect on the next visibility pass.
    pub fn set_overscan(&mut self, overscan_before: f64, overscan_after: f64) {
        self.overscan_before = overscan_before.max(0.0);
        self.overscan_after = overscan_after.max(0.0);
    }

    /// Returns the overscan distance above the viewport.
    #[must_use]
    pub const fn overscan_before(&self) -> f64 {
        self.overscan_before
    }

    /// Returns the overscan distance below the viewport.
    #[must_use]
    pub const fn overscan_after(&self) -> f64 {
        self.overscan_after
    }

    /// The window the next visibility pass tests frames against.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow::new(
            self.scroll_offset,
            self.viewport.height,
            self.overscan_before,
            self.overscan_after,
        )
    }

    /// The current layout.
    #[must_use]
    pub const fn layout(&self) -> &WaterflowLayout {
        &self.layout
    }

    /// Width of every cell in the current layout.
    #[must_use]
    pub const fn cell_width(&self) -> f64 {
        self.layout.column_width()
    }

    /// Scrollable content size of the current layout.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.layout.content_size()
    }

    /// Frame of the item at `index`, whether or not it has a cell.
    #[must_use]
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.layout.frame(index)
    }

    /// The active cell for `index`, if the item currently has one.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&S::Cell> {
        self.active.get(&index)
    }

    /// The active cell for `index`, mutably.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut S::Cell> {
        self.active.get_mut(&index)
    }

    /// Returns `true` if `index` currently has a cell.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains_key(&index)
    }

    /// Indices that currently have a cell, ascending.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.keys().copied()
    }

    /// Number of active cells.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// The pool of detached cells.
    #[must_use]
    pub const fn pool(&self) -> &ReusePool<S::Cell> {
        &self.pool
    }

    /// The pool of detached cells, mutably (for example to cap its size).
    pub fn pool_mut(&mut self) -> &mut ReusePool<S::Cell> {
        &mut self.pool
    }

    /// Index of the first active cell, in ascending index order, whose frame contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.active
            .iter()
            .find(|(_, cell)| cell.frame().contains(point))
            .map(|(&index, _)| index)
    }

    /// Index of the cell currently showing the press highlight.
    #[must_use]
    pub const fn highlighted_index(&self) -> Option<usize> {
        self.highlight
    }

    /// Index of the cell the active press started on.
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.press.target().copied()
    }

    /// Starts a press at `point`.
    ///
    /// If a cell is hit it is remembered as the press target and highlighted, and its
    /// index is returned. A press that misses every cell leaves the container idle.
    pub fn pointer_down(&mut self, point: Point) -> Option<usize> {
        self.detach_highlight();
        self.press.cancel();
        let index = self.hit_test(point)?;
        self.press.on_down(index, point);
        self.attach_highlight(index);
        Some(index)
    }

    /// Tracks a pointer move during a press.
    ///
    /// Leaving the pressed cell removes its highlight; coming back shows it again.
    pub fn pointer_move(&mut self, point: Point) -> PressMove {
        let hit = self.hit_test(point);
        let change = self.press.on_move(hit.as_ref());
        if let Some(pressed) = self.pressed_index() {
            if hit == Some(pressed) {
                if self.highlight != Some(pressed) {
                    self.attach_highlight(pressed);
                }
            } else {
                self.detach_highlight();
            }
        }
        change
    }

    /// Ends a press at `point`.
    ///
    /// The highlight is always removed. If `point` is over the cell the press started on,
    /// the delegate's [`on_cell_selected`](WaterflowDelegate::on_cell_selected) is called
    /// with its index.
    pub fn pointer_up(&mut self, point: Point) -> PressResult<usize> {
        let hit = self.hit_test(point);
        let result = self.press.on_up(hit.as_ref());
        self.detach_highlight();
        if let PressResult::Selected(index) = result {
            tracing::trace!(index, "waterflow cell selected");
            self.delegate.on_cell_selected(index);
        }
        result
    }

    /// Abandons a press in progress without selecting anything.
    pub fn pointer_cancel(&mut self) {
        self.press.cancel();
        self.detach_highlight();
    }

    /// Shows the highlight on the cell at `index`, taking it off any other cell first.
    fn attach_highlight(&mut self, index: usize) {
        if self.highlight == Some(index) {
            return;
        }
        self.detach_highlight();
        if let Some(cell) = self.active.get_mut(&index) {
            cell.set_highlighted(true);
            self.highlight = Some(index);
        }
    }

    /// Removes the highlight from whichever cell shows it.
    fn detach_highlight(&mut self) {
        if let Some(index) = self.highlight.take() {
            if let Some(cell) = self.active.get_mut(&index) {
                cell.set_highlighted(false);
            }
        }
    }
}

/// Indices whose frames are visible in `window` under `rule`, ascending.
///
/// This is the set a [`WaterflowView`] keeps cells for after a visibility pass.
#[must_use]
pub fn visible_indices(
    layout: &WaterflowLayout,
    window: VisibleWindow,
    rule: VisibilityRule,
) -> SmallVec<[usize; 32]> {
    layout
        .frames()
        .iter()
        .enumerate()
        .filter(|(_, frame)| rule.is_visible(**frame, window))
        .map(|(index, _)| index)
        .collect()
}
