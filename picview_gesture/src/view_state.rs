// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// User pan and zoom layered on top of the base transform.
///
/// The offset is measured in viewport pixels; the scale is a multiplier on
/// top of the fit-to-viewport scale, so `1.0` means "fitted".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    offset: Vec2,
    scale: f64,
}

impl ViewState {
    /// No pan, no zoom: the picture is shown exactly as fitted.
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a view state from an offset and a scale.
    #[must_use]
    pub const fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Pan offset in viewport pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// User zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `true` when the view is exactly at the fitted state.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub(crate) fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
