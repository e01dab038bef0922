// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan bookkeeping: the offset captured at pan start, and a helper that turns
//! per-event deltas into cumulative ones.
//!
//! ## Usage
//!
//! 1) When a pan starts, the engine opens a [`GestureSession`] holding the
//!    view offset at that moment.
//! 2) Each pan update carries the *cumulative* displacement since the start;
//!    the new offset is the session origin plus that displacement.
//! 3) When the pan ends or is canceled, the session is dropped.
//!
//! Recognizers that report per-event deltas instead can run them through a
//! [`PanAccumulator`] first.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use picview_gesture::session::PanAccumulator;
//!
//! let mut pan = PanAccumulator::default();
//! pan.start();
//! assert!(pan.is_active());
//!
//! assert_eq!(pan.push(Vec2::new(5.0, 2.0)), Some(Vec2::new(5.0, 2.0)));
//! assert_eq!(pan.push(Vec2::new(1.0, -4.0)), Some(Vec2::new(6.0, -2.0)));
//!
//! pan.end();
//! assert_eq!(pan.push(Vec2::new(1.0, 1.0)), None);
//! ```

use kurbo::Vec2;

/// State that lives only while a pan gesture is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    origin: Vec2,
}

impl GestureSession {
    /// Opens a session anchored at the given view offset.
    #[must_use]
    pub fn begin(origin: Vec2) -> Self {
        Self { origin }
    }

    /// View offset captured when the pan started.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Offset the view should have after a cumulative displacement of `total`.
    #[must_use]
    pub fn offset_for(&self, total: Vec2) -> Vec2 {
        self.origin + total
    }
}

/// Accumulates incremental pan deltas into a running total
#[derive(Debug, Clone, Default, Copy)]
pub struct PanAccumulator {
    total: Option<Vec2>,
}

impl PanAccumulator {
    /// Start accumulating a new pan from zero.
    pub fn start(&mut self) {
        self.total = Some(Vec2::ZERO);
    }

    /// Add a per-event delta, returning the cumulative displacement since start.
    ///
    /// Returns `None` if no pan is active.
    pub fn push(&mut self, delta: Vec2) -> Option<Vec2> {
        let total = self.total.as_mut()?;
        *total += delta;
        Some(*total)
    }

    /// Cumulative displacement so far, if a pan is active.
    pub fn total(&self) -> Option<Vec2> {
        self.total
    }

    /// Stop accumulating and reset.
    pub fn end(&mut self) {
        self.total = None;
    }

    /// Returns `true` while a pan is being accumulated
    pub fn is_active(&self) -> bool {
        self.total.is_some()
    }
}
