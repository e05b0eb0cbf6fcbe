// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording cell and host used by the unit tests.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use kurbo::Rect;
use waterflow_layout::MarginKind;

use crate::{RecycleId, ReusePool, WaterflowCell, WaterflowDataSource, WaterflowDelegate};

pub(crate) const TILE: RecycleId = RecycleId::new("tile");

#[derive(Debug)]
pub(crate) struct TestCell {
    pub(crate) serial: u32,
    pub(crate) id: RecycleId,
    pub(crate) frame: Rect,
    pub(crate) attached: bool,
    pub(crate) highlighted: bool,
}

impl TestCell {
    pub(crate) fn new(serial: u32, id: RecycleId) -> Self {
        Self {
            serial,
            id,
            frame: Rect::ZERO,
            attached: false,
            highlighted: false,
        }
    }
}

impl WaterflowCell for TestCell {
    fn recycle_id(&self) -> RecycleId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn did_attach(&mut self) {
        assert!(!self.attached, "cell {} attached twice", self.serial);
        self.attached = true;
    }

    fn did_detach(&mut self) {
        assert!(self.attached, "cell {} detached while detached", self.serial);
        self.attached = false;
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// Data source that counts constructions and reuses pooled cells.
#[derive(Debug)]
pub(crate) struct TestSource {
    pub(crate) count: Option<usize>,
    pub(crate) columns: NonZeroUsize,
    pub(crate) built: u32,
    pub(crate) reused: u32,
}

impl TestSource {
    pub(crate) fn new(count: usize, columns: usize) -> Self {
        Self {
            count: Some(count),
            columns: NonZeroUsize::new(columns).unwrap(),
            built: 0,
            reused: 0,
        }
    }
}

impl WaterflowDataSource for TestSource {
    type Cell = TestCell;

    fn item_count(&self) -> Option<usize> {
        self.count
    }

    fn cell_at(&mut self, _index: usize, pool: &mut ReusePool<TestCell>) -> TestCell {
        if let Some(cell) = pool.dequeue(TILE) {
            self.reused += 1;
            return cell;
        }
        self.built += 1;
        TestCell::new(self.built, TILE)
    }

    fn column_count(&self) -> NonZeroUsize {
        self.columns
    }
}

/// Delegate cycling through `heights` with a uniform margin, recording selections.
#[derive(Debug, Default)]
pub(crate) struct TestDelegate {
    pub(crate) heights: Vec<f64>,
    pub(crate) margin: f64,
    pub(crate) selected: Vec<usize>,
}

impl TestDelegate {
    pub(crate) fn new(heights: &[f64], margin: f64) -> Self {
        Self {
            heights: heights.to_vec(),
            margin,
            selected: Vec::new(),
        }
    }
}

impl WaterflowDelegate for TestDelegate {
    fn height_of(&self, index: usize) -> f64 {
        self.heights[index % self.heights.len()]
    }

    fn margin_for(&self, _kind: MarginKind) -> f64 {
        self.margin
    }

    fn on_cell_selected(&mut self, index: usize) {
        self.selected.push(index);
    }
}
