// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Lifecycle phase of a continuous gesture, as reported by recognizers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureStatus {
    /// The gesture was recognized and began.
    Started,
    /// The gesture is in progress and reported new values.
    Running,
    /// The gesture finished normally.
    Completed,
    /// The gesture was interrupted.
    Canceled,
}

impl GestureStatus {
    /// Returns `true` for [`Completed`](Self::Completed) and
    /// [`Canceled`](Self::Canceled).
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

/// Normalized gesture event delivered by the host's recognizers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// One-finger drag.
    Pan {
        /// Gesture phase.
        status: GestureStatus,
        /// Displacement since the pan started, in viewport pixels.
        total: Vec2,
    },
    /// Two-finger pinch.
    Pinch {
        /// Gesture phase.
        status: GestureStatus,
        /// Zoom change since the previous pinch event.
        scale: f64,
        /// Pinch center as a fraction of the viewport size, in `[0, 1]` on
        /// both axes.
        origin: Point,
    },
    /// Two taps in quick succession.
    DoubleTap,
}

impl GestureEvent {
    /// Shorthand for a pan event.
    #[must_use]
    pub fn pan(status: GestureStatus, total: Vec2) -> Self {
        Self::Pan { status, total }
    }

    /// Shorthand for a running pinch event.
    #[must_use]
    pub fn pinch(scale: f64, origin: Point) -> Self {
        Self::Pinch {
            status: GestureStatus::Running,
            scale,
            origin,
        }
    }
}
