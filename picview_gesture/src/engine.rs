// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use picview_fit::BaseTransform;

use crate::compose::compose_render_transform;
use crate::session::GestureSession;
use crate::view_state::ViewState;

/// Narrow gesture interface a host adapts platform recognizers to.
///
/// Pan updates carry the cumulative displacement since the pan started.
/// Pinch origins are in viewport pixels.
pub trait GestureHandler {
    /// A pan gesture started.
    fn handle_pan_start(&mut self);
    /// A pan gesture moved by `total` viewport pixels since it started.
    fn handle_pan_update(&mut self, total: Vec2);
    /// A pan gesture ended or was canceled.
    fn handle_pan_end(&mut self);
    /// A pinch gesture changed the zoom by `factor` around `origin`.
    fn handle_pinch(&mut self, factor: f64, origin: Point);
    /// The user double-tapped.
    fn handle_double_tap(&mut self);
}

/// Owns the user view state and turns gestures into pan/zoom changes.
///
/// The engine keeps a copy of the latest [`BaseTransform`], which the host
/// refreshes whenever the viewport or picture changes. Pinch anchoring is
/// computed relative to that base translation.
#[derive(Clone, Debug, Default)]
pub struct GestureTransformEngine {
    state: ViewState,
    session: Option<GestureSession>,
    base: BaseTransform,
}

impl GestureTransformEngine {
    /// Creates an engine at the fitted view with an identity base transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine starting from an existing view state.
    #[must_use]
    pub fn with_view_state(state: ViewState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    /// Current user pan and zoom.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state
    }

    /// The active pan session, if a pan is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Base transform used for pinch anchoring and rendering.
    #[must_use]
    pub fn base_transform(&self) -> BaseTransform {
        self.base
    }

    /// Replaces the base transform with a freshly computed one.
    pub fn set_base_transform(&mut self, base: BaseTransform) {
        self.base = base;
    }

    /// Opens a pan session anchored at the current offset.
    pub fn on_pan_start(&mut self) {
        self.session = Some(GestureSession::begin(self.state.offset()));
    }

    /// Moves the view to the pan origin plus the cumulative displacement.
    ///
    /// An update that arrives without a start opens a session at the
    /// current offset first.
    pub fn on_pan_update(&mut self, total: Vec2) {
        let offset = self.state.offset();
        let session = self
            .session
            .get_or_insert_with(|| GestureSession::begin(offset));
        self.state = self.state.with_offset(session.offset_for(total));
    }

    /// Drops the pan session. The view stays where the last update left it.
    pub fn on_pan_end(&mut self) {
        self.session = None;
    }

    /// Same as [`on_pan_end`](Self::on_pan_end).
    pub fn on_pan_cancel(&mut self) {
        self.on_pan_end();
    }

    /// Zooms by `scale_factor`, keeping the picture point under `origin`
    /// (in viewport pixels) in place.
    ///
    /// Factors that are not finite or not positive are ignored, as are
    /// updates that would push the zoom to zero or infinity.
    pub fn on_pinch_update(&mut self, scale_factor: f64, origin: Point, base: &BaseTransform) {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return;
        }
        let old_scale = self.state.scale();
        let new_scale = old_scale * scale_factor;
        if !new_scale.is_normal() {
            return;
        }
        let ratio = new_scale / old_scale;

        // Anchor relative to the base translation, where offset (0, 0) sits.
        let translated = origin.to_vec2() - base.translation();
        let new_offset = translated - (translated - self.state.offset()) * ratio;

        self.state = ViewState::new(new_offset, new_scale);
    }

    /// Resets to the fitted view. Any pan session is kept, so a pan that
    /// continues afterwards still moves relative to where it started.
    pub fn on_double_tap(&mut self) {
        self.state = ViewState::IDENTITY;
    }

    /// Transform to draw the picture with, from the stored base transform.
    #[must_use]
    pub fn render_transform(&self) -> Affine {
        compose_render_transform(&self.base, &self.state)
    }
}

impl GestureHandler for GestureTransformEngine {
    fn handle_pan_start(&mut self) {
        self.on_pan_start();
    }

    fn handle_pan_update(&mut self, total: Vec2) {
        self.on_pan_update(total);
    }

    fn handle_pan_end(&mut self) {
        self.on_pan_end();
    }

    fn handle_pinch(&mut self, factor: f64, origin: Point) {
        let base = self.base;
        self.on_pinch_update(factor, origin, &base);
    }

    fn handle_double_tap(&mut self) {
        self.on_double_tap();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use picview_fit::BaseTransform;

    use super::{GestureHandler, GestureTransformEngine};
    use crate::ViewState;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn starts_at_fitted_view() {
        let engine = GestureTransformEngine::new();
        assert!(engine.view_state().is_identity());
        assert!(engine.session().is_none());
        assert!(engine.base_transform().is_identity());
    }

    #[test]
    fn pan_uses_cumulative_deltas() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pan_start();
        engine.on_pan_update(Vec2::new(10.0, 5.0));
        engine.on_pan_update(Vec2::new(30.0, -5.0));
        assert_eq!(engine.view_state().offset(), Vec2::new(30.0, -5.0));
        engine.on_pan_end();
        assert!(engine.session().is_none());
        assert_eq!(engine.view_state().offset(), Vec2::new(30.0, -5.0));

        // A second pan continues from where the first left off.
        engine.on_pan_start();
        engine.on_pan_update(Vec2::new(-10.0, 0.0));
        assert_eq!(engine.view_state().offset(), Vec2::new(20.0, -5.0));
    }

    #[test]
    fn pan_preserves_scale() {
        let mut engine = GestureTransformEngine::with_view_state(ViewState::new(
            Vec2::new(3.0, 4.0),
            2.5,
        ));
        engine.on_pan_start();
        engine.on_pan_update(Vec2::new(1.0, 1.0));
        assert_eq!(
            engine.view_state(),
            ViewState::new(Vec2::new(4.0, 5.0), 2.5)
        );
    }

    #[test]
    fn pan_end_does_not_mutate_state() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pan_start();
        engine.on_pan_update(Vec2::new(7.0, 8.0));
        let before = engine.view_state();
        engine.on_pan_cancel();
        assert_eq!(engine.view_state(), before);
        assert!(engine.session().is_none());
    }

    #[test]
    fn pan_update_without_start_is_tolerated() {
        let mut engine =
            GestureTransformEngine::with_view_state(ViewState::new(Vec2::new(5.0, 5.0), 1.0));
        engine.on_pan_update(Vec2::new(2.0, 3.0));
        assert_eq!(engine.view_state().offset(), Vec2::new(7.0, 8.0));
        assert_eq!(engine.session().map(|s| s.origin()), Some(Vec2::new(5.0, 5.0)));

        engine.on_pan_update(Vec2::new(4.0, 4.0));
        assert_eq!(engine.view_state().offset(), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn pinch_about_origin_with_identity_base() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pinch_update(2.0, Point::new(100.0, 100.0), &BaseTransform::IDENTITY);

        let state = engine.view_state();
        assert_eq!(state.scale(), 2.0);
        // translated = 100, new = 100 - 2 * (100 - 0)
        assert_eq!(state.offset(), Vec2::new(-100.0, -100.0));
    }

    #[test]
    fn pinch_subtracts_base_translation() {
        let base = BaseTransform::new(4.0, Vec2::new(-100.0, 20.0));
        let mut engine =
            GestureTransformEngine::with_view_state(ViewState::new(Vec2::new(10.0, -10.0), 1.0));
        engine.on_pinch_update(3.0, Point::new(50.0, 80.0), &base);

        // translated = (150, 60); new = translated - 3 * (translated - offset)
        let state = engine.view_state();
        assert_eq!(state.scale(), 3.0);
        assert_eq!(state.offset(), Vec2::new(150.0 - 3.0 * 140.0, 60.0 - 3.0 * 70.0));
    }

    #[test]
    fn pinch_keeps_point_under_origin_fixed() {
        let base = BaseTransform::new(4.0, Vec2::new(-100.0, 0.0));
        let mut engine =
            GestureTransformEngine::with_view_state(ViewState::new(Vec2::new(12.0, -7.0), 1.5));
        engine.set_base_transform(base);

        let origin = Point::new(130.0, 90.0);
        let before = engine.render_transform();
        let picture_pt = before.inverse() * origin;

        engine.handle_pinch(1.75, origin);
        let after = engine.render_transform();
        assert_close(after * picture_pt, origin);

        engine.handle_pinch(0.4, origin);
        assert_close(engine.render_transform() * picture_pt, origin);
    }

    #[test]
    fn pinch_without_session_uses_current_state() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pan_start();
        engine.on_pan_update(Vec2::new(10.0, 0.0));
        engine.on_pan_end();

        engine.on_pinch_update(1.0, Point::new(40.0, 40.0), &BaseTransform::IDENTITY);
        assert_eq!(
            engine.view_state(),
            ViewState::new(Vec2::new(10.0, 0.0), 1.0)
        );
    }

    #[test]
    fn invalid_pinch_factors_are_ignored() {
        let mut engine = GestureTransformEngine::new();
        for factor in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            engine.on_pinch_update(factor, Point::new(1.0, 1.0), &BaseTransform::IDENTITY);
            assert!(engine.view_state().is_identity(), "factor {factor} applied");
        }
    }

    #[test]
    fn pinch_never_underflows_the_scale() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pinch_update(1e-200, Point::new(10.0, 10.0), &BaseTransform::IDENTITY);
        let tiny = engine.view_state();
        assert_eq!(tiny.scale(), 1e-200);

        engine.on_pinch_update(1e-200, Point::new(10.0, 10.0), &BaseTransform::IDENTITY);
        assert_eq!(engine.view_state(), tiny);

        engine.on_pinch_update(2.0, Point::new(10.0, 10.0), &BaseTransform::IDENTITY);
        let state = engine.view_state();
        assert_eq!(state.scale(), 2e-200);
        assert!(state.offset().is_finite());
    }

    #[test]
    fn pinch_never_overflows_the_scale() {
        let mut engine = GestureTransformEngine::new();
        engine.on_pinch_update(1e200, Point::new(10.0, 10.0), &BaseTransform::IDENTITY);
        let huge = engine.view_state();
        assert_eq!(huge.scale(), 1e200);

        engine.on_pinch_update(1e200, Point::new(10.0, 10.0), &BaseTransform::IDENTITY);
        assert_eq!(engine.view_state(), huge);

        let xf = engine.render_transform();
        assert!(xf.as_coeffs().iter().all(|c| c.is_finite()), "{xf:?}");
    }

    #[test]
    fn double_tap_resets_to_fit() {
        let mut engine = GestureTransformEngine::new();
        engine.handle_pan_start();
        engine.handle_pan_update(Vec2::new(50.0, 60.0));
        engine.handle_pan_end();
        engine.handle_pinch(3.0, Point::new(10.0, 10.0));

        engine.handle_double_tap();
        assert!(engine.view_state().is_identity());

        engine.handle_double_tap();
        assert!(engine.view_state().is_identity());
    }

    #[test]
    fn render_transform_follows_base_refresh() {
        let mut engine = GestureTransformEngine::new();
        engine.set_base_transform(BaseTransform::new(2.0, Vec2::new(10.0, 10.0)));
        assert_close(engine.render_transform() * Point::ORIGIN, Point::new(10.0, 10.0));

        engine.set_base_transform(BaseTransform::new(1.0, Vec2::new(-5.0, 0.0)));
        assert_close(engine.render_transform() * Point::ORIGIN, Point::new(-5.0, 0.0));
    }
}
