// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::base::{BaseTransform, compute_base_transform, has_area};
use crate::modes::{FitAxis, fit_axis};

/// Caches the fit-to-viewport transform for a picture and a viewport.
///
/// `ViewportFitter` tracks the viewport size in device pixels and the
/// optional bounds of the current picture, and keeps the matching
/// [`BaseTransform`] up to date. Every setter that changes an input rebuilds
/// the transform before returning, so a resize can never leave a stale base
/// transform behind for the next frame.
#[derive(Clone, Debug)]
pub struct ViewportFitter {
    viewport: Size,
    bounds: Option<Rect>,
    base: BaseTransform,
}

impl ViewportFitter {
    /// Creates a fitter for a viewport of the given size, with no picture.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            bounds: None,
            base: BaseTransform::IDENTITY,
        }
    }

    /// Returns the current viewport size in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size, rebuilding the base transform if it changed.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild();
    }

    /// Returns the bounds of the current picture, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets (or clears) the picture bounds, rebuilding the base transform if
    /// they changed.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.rebuild();
    }

    /// Returns `true` when picture bounds are present.
    #[must_use]
    pub fn has_picture(&self) -> bool {
        self.bounds.is_some()
    }

    /// Returns `true` when picture bounds are present and have a positive,
    /// finite area.
    ///
    /// Empty bounds still get the identity base transform, but there is
    /// nothing meaningful to draw for them.
    #[must_use]
    pub fn can_fit(&self) -> bool {
        self.bounds.is_some_and(has_area)
    }

    /// Returns the current base transform.
    ///
    /// This is [`BaseTransform::IDENTITY`] when there are no bounds or the
    /// geometry is degenerate.
    #[must_use]
    pub fn base_transform(&self) -> BaseTransform {
        self.base
    }

    /// Returns the axis the current picture is fitted along, if any.
    #[must_use]
    pub fn limiting_axis(&self) -> Option<FitAxis> {
        self.bounds.map(|b| fit_axis(b.abs()))
    }

    /// Snapshot of the current fitter state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportFitterDebugInfo {
        ViewportFitterDebugInfo {
            viewport: self.viewport,
            bounds: self.bounds,
            base: self.base,
            limiting_axis: self.limiting_axis(),
        }
    }

    fn rebuild(&mut self) {
        self.base = match self.bounds {
            Some(bounds) => compute_base_transform(bounds, self.viewport),
            None => BaseTransform::IDENTITY,
        };
    }
}

/// Debug snapshot of a [`ViewportFitter`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportFitterDebugInfo {
    /// Viewport size in device pixels.
    pub viewport: Size,
    /// Bounds of the current picture.
    pub bounds: Option<Rect>,
    /// Cached base transform.
    pub base: BaseTransform,
    /// Axis the picture fills, when a picture is present.
    pub limiting_axis: Option<FitAxis>,
}
