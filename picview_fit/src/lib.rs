// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=picview_fit --heading-base-level=0

//! Picview Fit: fit-to-viewport base transforms.
//!
//! This crate computes the transform that places a picture inside a viewport
//! before any user pan or zoom is applied. It focuses on:
//! - Centering the picture's bounding box in the viewport.
//! - Scaling it uniformly so its limiting dimension exactly fills the
//!   corresponding viewport dimension.
//! - Keeping that transform in sync as the viewport is resized or a new
//!   picture is loaded.
//!
//! It does **not** parse pictures, track gestures, or draw anything. Callers
//! are expected to:
//! - Supply the picture's intrinsic bounds (for example an SVG cull rect).
//! - Feed viewport resizes into [`ViewportFitter::set_viewport`].
//! - Layer user pan/zoom on top of the resulting [`BaseTransform`], for
//!   example with `picview_gesture`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use picview_fit::ViewportFitter;
//!
//! // 200x200 surface showing a 100x50 picture.
//! let mut fitter = ViewportFitter::new(Size::new(200.0, 200.0));
//! fitter.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
//!
//! let base = fitter.base_transform();
//! assert_eq!(base.scale(), 4.0);
//! assert_eq!(base.transform_point(Point::new(50.0, 25.0)), Point::new(100.0, 100.0));
//!
//! // A resize rebuilds the transform immediately.
//! fitter.set_viewport(Size::new(400.0, 100.0));
//! assert_eq!(fitter.base_transform().scale(), 2.0);
//! ```
//!
//! ## Degenerate geometry
//!
//! Zero-area bounds and zero-size viewports have nothing meaningful to fit.
//! [`compute_base_transform`] returns [`BaseTransform::IDENTITY`] for them
//! instead of dividing by zero. Pictures with empty bounds should not be
//! drawn at all; [`ViewportFitter::can_fit`] reports whether the current
//! bounds are usable.
//!
//! This crate is `no_std`.

#![no_std]

mod base;
mod fitter;
mod modes;

pub use base::{BaseTransform, compute_base_transform, has_area};
pub use fitter::{ViewportFitter, ViewportFitterDebugInfo};
pub use modes::{FitAxis, fit_axis};
