// Copyright 2025 the Waterflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking for tap-to-select with drag-off cancellation.
//!
//! A press starts on a target, may wander off it and back while the pointer is down,
//! and produces a selection only if it is released on the target it started on.
//!
//! ```
//! use kurbo::Point;
//! use waterflow_view::{PressMove, PressResult, PressState};
//!
//! let mut state: PressState<usize> = PressState::new();
//! state.on_down(5, Point::new(10.0, 20.0));
//!
//! // Dragging off the target and back in.
//! assert_eq!(state.on_move(Some(&6)), PressMove::Exited);
//! assert_eq!(state.on_move(Some(&5)), PressMove::Entered);
//!
//! assert_eq!(state.on_up(Some(&5)), PressResult::Selected(5));
//! assert!(!state.is_pressed());
//! ```
//!
//! ## Selection rules
//!
//! 1. **Same target**: release over the pressed target selects it.
//! 2. **Different or no target**: release anywhere else is suppressed, even if the
//!    pointer passed back over the target in between.
//! 3. **No active press**: release is suppressed with no target.
//! 4. **Cancel**: [`PressState::cancel`] ends the press without a result.
//!
//! Unlike a transform-tolerant click recognizer there is no distance or time slack:
//! the release target alone decides.

use kurbo::Point;

/// An active press.
#[derive(Clone, Debug, PartialEq)]
pub struct Press<K> {
    /// Target under the pointer when the press started.
    pub target: K,
    /// Pointer position at press time.
    pub down_position: Point,
    /// `true` while the pointer is over `target`.
    pub inside: bool,
}

/// Outcome of a pointer move during a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PressMove {
    /// No press is active.
    NotPressed,
    /// The pointer stayed on the same side of the pressed target's boundary.
    Unchanged,
    /// The pointer left the pressed target.
    Exited,
    /// The pointer came back over the pressed target.
    Entered,
}

/// Outcome of a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressResult<K> {
    /// Released over the target the press started on.
    Selected(K),
    /// No selection. Carries the pressed target, if there was a press.
    Suppressed(Option<K>),
}

/// Single-pointer press state machine: idle, or pressed on one target.
#[derive(Clone, Debug)]
pub struct PressState<K> {
    press: Option<Press<K>>,
}

impl<K> Default for PressState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PressState<K> {
    /// Creates an idle press state.
    #[must_use]
    pub const fn new() -> Self {
        Self { press: None }
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// The active press, if any.
    #[must_use]
    pub const fn press(&self) -> Option<&Press<K>> {
        self.press.as_ref()
    }

    /// Target of the active press, if any.
    #[must_use]
    pub fn target(&self) -> Option<&K> {
        self.press.as_ref().map(|press| &press.target)
    }

    /// Ends the active press without a result.
    ///
    /// Returns `true` if a press was active.
    pub fn cancel(&mut self) -> bool {
        self.press.take().is_some()
    }
}

impl<K: PartialEq> PressState<K> {
    /// Starts a press on `target`. Any earlier press is replaced.
    pub fn on_down(&mut self, target: K, position: Point) {
        self.press = Some(Press {
            target,
            down_position: position,
            inside: true,
        });
    }

    /// Updates the press with the target now under the pointer.
    pub fn on_move(&mut self, current: Option<&K>) -> PressMove {
        let Some(press) = self.press.as_mut() else {
            return PressMove::NotPressed;
        };
        let inside = current == Some(&press.target);
        let change = match (press.inside, inside) {
            (true, false) => PressMove::Exited,
            (false, true) => PressMove::Entered,
            _ => PressMove::Unchanged,
        };
        press.inside = inside;
        change
    }

    /// Ends the press with the target under the pointer at release time.
    pub fn on_up(&mut self, current: Option<&K>) -> PressResult<K> {
        let Some(press) = self.press.take() else {
            return PressResult::Suppressed(None);
        };
        if current == Some(&press.target) {
            PressResult::Selected(press.target)
        } else {
            PressResult::Suppressed(Some(press.target))
        }
    }
}
