// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=picview_frame --heading-base-level=0

//! Picview Frame: an interactive picture control, minus the platform.
//!
//! [`InteractivePicture`] shows one vector picture inside a fixed viewport
//! and lets the user pan, pinch-zoom and double-tap to reset. It is headless:
//! the host supplies the platform pieces through small traits and plain
//! method calls.
//!
//! - [`PictureSource`] turns a resource identifier into a [`Picture`].
//!   [`MemoryPictureSource`] is a ready-made in-memory bundle.
//! - [`PictureCanvas`] receives the clear and draw calls of each paint.
//! - A repaint callback ([`RepaintTrigger`]) is invoked whenever the view
//!   changes and must be drawn again.
//! - Gesture recognizers are adapted into [`GestureEvent`]s and fed to
//!   [`InteractivePicture::handle_gesture`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Affine, BezPath, Point, Rect, Shape, Size, Vec2};
//! use picview_frame::{
//!     GestureEvent, GestureStatus, InteractivePicture, MemoryPictureSource, PictureCanvas,
//! };
//!
//! #[derive(Default)]
//! struct Recorder {
//!     drawn: Vec<Affine>,
//! }
//!
//! impl PictureCanvas<BezPath> for Recorder {
//!     fn clear(&mut self) {
//!         self.drawn.clear();
//!     }
//!     fn draw_picture(&mut self, _picture: &BezPath, transform: Affine) {
//!         self.drawn.push(transform);
//!     }
//! }
//!
//! let mut bundle = MemoryPictureSource::new();
//! bundle.insert("logo", Rect::new(0.0, 0.0, 100.0, 50.0).to_path(0.1));
//!
//! let mut frame = InteractivePicture::new(bundle, Size::new(200.0, 200.0));
//! frame.set_resource_id(Some("logo"));
//!
//! frame.handle_gesture(GestureEvent::pan(GestureStatus::Started, Vec2::ZERO));
//! frame.handle_gesture(GestureEvent::pan(GestureStatus::Running, Vec2::new(10.0, 0.0)));
//! frame.handle_gesture(GestureEvent::pan(GestureStatus::Completed, Vec2::new(10.0, 0.0)));
//!
//! let mut canvas = Recorder::default();
//! assert!(frame.paint(&mut canvas));
//! let center = canvas.drawn[0] * Point::new(50.0, 25.0);
//! assert!((center - Point::new(110.0, 100.0)).hypot() < 1e-9);
//! ```
//!
//! ## Failure behavior
//!
//! Nothing here reports errors to the user. A missing resource identifier or
//! a failed load leaves the frame without a picture: paints only clear the
//! canvas, and gestures still update the view state. A picture whose bounds
//! have no area is kept but never drawn. Load failures are
//! logged through the `log` facade.
//!
//! This crate is `no_std` and requires `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod frame;
mod picture;

pub use event::{GestureEvent, GestureStatus};
pub use frame::{InteractivePicture, InteractivePictureDebugInfo, RepaintTrigger};
pub use picture::{LoadError, MemoryPictureSource, Picture, PictureCanvas, PictureSource};
