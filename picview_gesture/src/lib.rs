// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=picview_gesture --heading-base-level=0

//! Picview Gesture: pan, pinch-zoom and double-tap state for a fitted picture.
//!
//! This crate holds the user-controlled half of the view: an offset and a
//! zoom factor layered on top of the fit-to-viewport transform from
//! `picview_fit`. It provides:
//!
//! - [`GestureTransformEngine`]: the state machine consuming gesture events.
//! - [`GestureHandler`]: the narrow interface hosts adapt platform gesture
//!   recognizers to.
//! - [`compose_render_transform`]: a pure function producing the affine
//!   transform for a frame.
//! - [`session`]: pan bookkeeping, including [`session::PanAccumulator`] for
//!   recognizers that report per-event deltas.
//!
//! ## Gesture semantics
//!
//! - **Pan**: `start` captures the current offset; each `update` carries the
//!   cumulative displacement since `start`, so the new offset is the captured
//!   offset plus that displacement. `end` drops the capture.
//! - **Pinch**: multiplies the zoom by the given factor and adjusts the
//!   offset so that the picture point under the pinch origin stays under it.
//! - **Double tap**: resets to the fitted view.
//!
//! Out-of-order events are tolerated: a pinch never depends on a pan being
//! active, and a pan update without a start opens a session implicitly.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use picview_fit::ViewportFitter;
//! use picview_gesture::{GestureHandler, GestureTransformEngine};
//!
//! let mut fitter = ViewportFitter::new(Size::new(200.0, 200.0));
//! fitter.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
//!
//! let mut engine = GestureTransformEngine::new();
//! engine.set_base_transform(fitter.base_transform());
//!
//! // Drag 20px to the right.
//! engine.handle_pan_start();
//! engine.handle_pan_update(Vec2::new(20.0, 0.0));
//! engine.handle_pan_end();
//!
//! // The bounds center moved from the viewport center by exactly 20px.
//! let xf = engine.render_transform();
//! let center = xf * Point::new(50.0, 25.0);
//! assert!((center.x - 120.0).abs() < 1e-9);
//! assert!((center.y - 100.0).abs() < 1e-9);
//!
//! // Zoom in around the viewport center; that point stays put.
//! let anchor = Point::new(100.0, 100.0);
//! let under_anchor = xf.inverse() * anchor;
//! engine.handle_pinch(2.0, anchor);
//! let moved = engine.render_transform() * under_anchor;
//! assert!((moved - anchor).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod compose;
mod engine;
pub mod session;
mod view_state;

pub use compose::compose_render_transform;
pub use engine::{GestureHandler, GestureTransformEngine};
pub use session::GestureSession;
pub use view_state::ViewState;
