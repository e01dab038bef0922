// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Which viewport dimension a fitted picture exactly fills.
///
/// The other dimension is letterboxed or overflows, depending on the aspect
/// ratios of the picture and the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitAxis {
    /// The picture's width is scaled to the viewport width.
    ///
    /// Chosen whenever the picture is at least as tall as it is wide.
    #[default]
    Width,
    /// The picture's height is scaled to the viewport height.
    ///
    /// Chosen only when the picture is strictly wider than it is tall.
    Height,
}

/// Returns the axis that drives the fit scale for `bounds`.
///
/// Square bounds use [`FitAxis::Width`].
#[must_use]
pub fn fit_axis(bounds: Rect) -> FitAxis {
    if bounds.width() > bounds.height() {
        FitAxis::Height
    } else {
        FitAxis::Width
    }
}
