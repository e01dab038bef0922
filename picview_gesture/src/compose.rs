// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Vec2};
use picview_fit::BaseTransform;

use crate::view_state::ViewState;

/// Composes the transform a frame should draw the picture with.
///
/// Applied to a picture-space point, the innermost step comes first:
///
/// 1. translate by the user offset divided by the total scale,
/// 2. scale by the user zoom,
/// 3. apply the base transform (fit scale, then centering translation).
///
/// The offset is stored in viewport pixels but applied before both scales,
/// so it is divided by `base.scale() * state.scale()`. That makes a pan of
/// `d` pixels move the picture by exactly `d` pixels at any zoom level.
/// When the total scale is zero or not finite the offset is dropped.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use picview_fit::BaseTransform;
/// use picview_gesture::{ViewState, compose_render_transform};
///
/// let base = BaseTransform::new(4.0, Vec2::new(-100.0, 0.0));
/// let state = ViewState::new(Vec2::new(10.0, 0.0), 2.0);
/// let xf = compose_render_transform(&base, &state);
///
/// // Bounds center (50, 25): 4 * 2 * (50, 25) + (-100, 0) + (10, 0).
/// assert_eq!(xf * Point::new(50.0, 25.0), Point::new(310.0, 200.0));
/// ```
#[must_use]
pub fn compose_render_transform(base: &BaseTransform, state: &ViewState) -> Affine {
    let total_scale = base.scale() * state.scale();
    let offset = if total_scale.is_normal() {
        state.offset() / total_scale
    } else {
        Vec2::ZERO
    };
    base.to_affine() * Affine::scale(state.scale()) * Affine::translate(offset)
}
