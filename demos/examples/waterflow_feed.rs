// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless photo-feed host for `waterflow_view`.
//!
//! This example shows how to:
//! - implement a data source that reuses pooled cells before building new ones,
//! - feed item heights, margins, and a per-orientation column count,
//! - drive the container with scroll offsets, taps, and a rotation.
//!
//! Run:
//! - `RUST_LOG=waterflow_view=trace cargo run -p waterflow_demos --example waterflow_feed`

use core::num::NonZeroUsize;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use waterflow_view::{
    MarginKind, RecycleId, ReusePool, WaterflowCell, WaterflowDataSource, WaterflowDelegate,
    WaterflowView,
};

const PHOTO: RecycleId = RecycleId::new("photo");
const PORTRAIT_COLUMNS: NonZeroUsize = NonZeroUsize::new(3).unwrap();
const LANDSCAPE_COLUMNS: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Tiny xorshift generator; the colors only need to look random.
#[derive(Debug)]
struct Xorshift(u32);

impl Xorshift {
    fn next_u8(&mut self) -> u8 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x.to_le_bytes()[0]
    }
}

/// A cell that would paint a solid color in a real UI.
#[derive(Debug)]
struct PhotoCell {
    serial: u32,
    frame: Rect,
    rgb: [u8; 3],
    highlighted: bool,
}

impl WaterflowCell for PhotoCell {
    fn recycle_id(&self) -> RecycleId {
        PHOTO
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

#[derive(Debug)]
struct Feed {
    landscape: bool,
    rng: Xorshift,
    built: u32,
}

impl WaterflowDataSource for Feed {
    type Cell = PhotoCell;

    fn item_count(&self) -> Option<usize> {
        Some(100)
    }

    fn cell_at(&mut self, _index: usize, pool: &mut ReusePool<PhotoCell>) -> PhotoCell {
        let mut cell = pool.dequeue_or_else(PHOTO, || {
            self.built += 1;
            PhotoCell {
                serial: self.built,
                frame: Rect::ZERO,
                rgb: [0; 3],
                highlighted: false,
            }
        });
        cell.rgb = [self.rng.next_u8(), self.rng.next_u8(), self.rng.next_u8()];
        cell
    }

    fn column_count(&self) -> NonZeroUsize {
        if self.landscape {
            LANDSCAPE_COLUMNS
        } else {
            PORTRAIT_COLUMNS
        }
    }
}

#[derive(Debug, Default)]
struct Taps;

impl WaterflowDelegate for Taps {
    fn height_of(&self, index: usize) -> f64 {
        if index % 2 == 0 { 100.0 } else { 70.0 }
    }

    fn margin_for(&self, _kind: MarginKind) -> f64 {
        2.0
    }

    fn on_cell_selected(&mut self, index: usize) {
        println!("selected cell {index}");
    }
}

fn describe(view: &WaterflowView<Feed, Taps>) {
    let indices: Vec<usize> = view.active_indices().collect();
    println!(
        "offset {:>6.1}: {} cells on screen {:?}, {} pooled, {} built",
        view.scroll_offset(),
        indices.len(),
        indices,
        view.pool().len(),
        view.source().built,
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let feed = Feed {
        landscape: false,
        rng: Xorshift(0x9E37_79B9),
        built: 0,
    };
    let mut view = WaterflowView::new(feed, Taps, Size::new(375.0, 667.0));
    view.reload();
    println!(
        "{} items, cell width {:.1}, content height {:.1}",
        view.layout().len(),
        view.cell_width(),
        view.content_size().height
    );

    // Fling down the feed and back up.
    let max = view.max_scroll_offset();
    let mut offset = 0.0;
    while offset < max {
        view.set_scroll_offset(offset);
        describe(&view);
        offset += 400.0;
    }
    view.set_scroll_offset(0.0);
    describe(&view);

    // Tap the first cell, then press the second and drag off it before releasing.
    if let Some(frame) = view.frame_of(0) {
        view.pointer_down(frame.center());
        view.pointer_up(frame.center());
    }
    if let Some(frame) = view.frame_of(1) {
        view.pointer_down(frame.center());
        if let Some(cell) = view.cell(1) {
            println!(
                "cell 1 (serial {}, rgb {:?}) highlighted: {}",
                cell.serial, cell.rgb, cell.highlighted
            );
        }
        let away = Point::new(frame.center().x, frame.y1 + 500.0);
        view.pointer_move(away);
        let result = view.pointer_up(away);
        println!("drag-off release: {result:?}");
    }

    // Rotate: wider viewport, five columns, fresh layout.
    view.source_mut().landscape = true;
    view.set_viewport_size(Size::new(667.0, 375.0));
    println!(
        "landscape: {} columns, cell width {:.1}, content height {:.1}",
        view.layout().column_count(),
        view.cell_width(),
        view.content_size().height
    );
    describe(&view);
}
