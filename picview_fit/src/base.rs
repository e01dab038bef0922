// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{FitAxis, fit_axis};

/// Fit-to-viewport transform: a uniform scale followed by a translation.
///
/// A point `p` in picture space lands at `p * scale + translation` in
/// viewport pixels. This is the same mapping as
/// `translate(viewport_center) * scale(scale) * translate(-bounds_center)`,
/// with the two translations folded together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseTransform {
    scale: f64,
    translation: Vec2,
}

impl BaseTransform {
    /// The no-op transform: scale `1.0`, no translation.
    ///
    /// Returned by [`compute_base_transform`] for degenerate inputs.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a base transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Uniform scale from picture units to viewport pixels.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Translation component, in viewport pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns `true` if this is exactly [`BaseTransform::IDENTITY`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Converts to a Kurbo affine transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps a picture-space point into viewport pixels.
    #[must_use]
    pub fn transform_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }
}

impl Default for BaseTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<BaseTransform> for Affine {
    fn from(base: BaseTransform) -> Self {
        base.to_affine()
    }
}

/// Computes the transform that centers `bounds` in a viewport of size
/// `viewport` and scales it so the limiting dimension fills the viewport.
///
/// The scale is `viewport.height / bounds.height` when the bounds are
/// strictly wider than tall, and `viewport.width / bounds.width` otherwise
/// (see [`FitAxis`]). The aspect ratio is preserved.
///
/// Returns [`BaseTransform::IDENTITY`] when either the bounds or the viewport
/// has a zero, negative or non-finite extent.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use picview_fit::compute_base_transform;
///
/// let base = compute_base_transform(Rect::new(0.0, 0.0, 100.0, 50.0), Size::new(200.0, 200.0));
/// assert_eq!(base.scale(), 4.0);
/// assert_eq!(base.transform_point(Point::new(50.0, 25.0)), Point::new(100.0, 100.0));
/// ```
#[must_use]
pub fn compute_base_transform(bounds: Rect, viewport: Size) -> BaseTransform {
    let bounds = bounds.abs();
    if !has_area(bounds) || !is_extent(viewport.width) || !is_extent(viewport.height) {
        return BaseTransform::IDENTITY;
    }

    let ratio = match fit_axis(bounds) {
        FitAxis::Height => viewport.height / bounds.height(),
        FitAxis::Width => viewport.width / bounds.width(),
    };

    let view_center = viewport.to_vec2() * 0.5;
    let translation = view_center - bounds.center().to_vec2() * ratio;
    BaseTransform::new(ratio, translation)
}

/// Returns `true` if `bounds` has a positive, finite width and height.
///
/// Pictures whose bounds fail this check have nothing to fit and should not
/// be drawn.
#[must_use]
pub fn has_area(bounds: Rect) -> bool {
    let bounds = bounds.abs();
    is_extent(bounds.width()) && is_extent(bounds.height())
}

fn is_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
