// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted gesture replay.
//!
//! Load a small vector picture into an `InteractivePicture`, replay a pan, a
//! pinch, a resize and a double tap, and print where the picture lands after
//! each step. Set `RUST_LOG=debug` (or `trace`) to see the frame's own logging.
//!
//! Run:
//! - `cargo run -p picview_demos --example replay`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Affine, BezPath, Point, Rect, Shape, Size, Vec2};
use picview_frame::{
    GestureEvent, GestureStatus, InteractivePicture, MemoryPictureSource, PictureCanvas,
};

/// Prints the corners of every draw instead of rasterizing.
struct PrintCanvas;

impl PictureCanvas<BezPath> for PrintCanvas {
    fn clear(&mut self) {
        println!("  clear");
    }

    fn draw_picture(&mut self, picture: &BezPath, transform: Affine) {
        let on_screen = transform.transform_rect_bbox(picture.bounding_box());
        println!(
            "  draw  ({:.1}, {:.1}) .. ({:.1}, {:.1})",
            on_screen.x0, on_screen.y0, on_screen.x1, on_screen.y1
        );
    }
}

fn arrow() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 20.0));
    path.line_to((60.0, 20.0));
    path.line_to((60.0, 0.0));
    path.line_to((100.0, 30.0));
    path.line_to((60.0, 60.0));
    path.line_to((60.0, 40.0));
    path.line_to((0.0, 40.0));
    path.close_path();
    path
}

fn main() {
    env_logger::init();

    let mut bundle = MemoryPictureSource::new();
    bundle.insert("arrow", arrow());
    bundle.insert("badge", Rect::new(0.0, 0.0, 40.0, 40.0).to_path(0.1));

    let repaints = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&repaints);
    let mut frame = InteractivePicture::new(bundle, Size::new(320.0, 240.0))
        .with_repaint(move || counter.set(counter.get() + 1));
    let mut canvas = PrintCanvas;

    let mut step = |label: &str, frame: &mut InteractivePicture<MemoryPictureSource<BezPath>>| {
        println!("{label}");
        frame.paint(&mut canvas);
    };

    frame.set_resource_id(Some("arrow"));
    step("loaded `arrow`", &mut frame);

    frame.handle_gesture(GestureEvent::pan(GestureStatus::Started, Vec2::ZERO));
    for i in 1..=4 {
        let total = Vec2::new(10.0 * f64::from(i), -5.0 * f64::from(i));
        frame.handle_gesture(GestureEvent::pan(GestureStatus::Running, total));
    }
    frame.handle_gesture(GestureEvent::pan(GestureStatus::Completed, Vec2::new(40.0, -20.0)));
    step("panned by (40, -20)", &mut frame);

    for _ in 0..3 {
        frame.handle_gesture(GestureEvent::pinch(1.25, Point::new(0.5, 0.5)));
    }
    step("pinched 1.25^3 about the viewport center", &mut frame);

    frame.set_viewport(Size::new(480.0, 480.0));
    step("resized to 480x480", &mut frame);

    frame.handle_gesture(GestureEvent::DoubleTap);
    step("double tap", &mut frame);

    frame.set_resource_id(Some("missing"));
    step("switched to an unknown resource", &mut frame);

    frame.set_resource_id(Some("badge"));
    step("switched to `badge`", &mut frame);

    println!();
    println!("{:#?}", frame.debug_info());
    println!("repaint callbacks: {}", repaints.get());
}
