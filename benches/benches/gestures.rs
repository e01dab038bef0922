// Copyright 2026 the Picview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, BezPath, Point, Rect, Shape, Size, Vec2};
use picview_fit::{ViewportFitter, compute_base_transform};
use picview_frame::{GestureEvent, GestureStatus, InteractivePicture, MemoryPictureSource, PictureCanvas};
use picview_gesture::{GestureTransformEngine, ViewState, compose_render_transform};

struct NullCanvas;

impl PictureCanvas<BezPath> for NullCanvas {
    fn clear(&mut self) {}

    fn draw_picture(&mut self, picture: &BezPath, transform: Affine) {
        black_box((picture, transform));
    }
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    let bounds = Rect::new(-12.0, 3.0, 388.0, 203.0);

    group.bench_function("compute_base_transform", |b| {
        b.iter(|| compute_base_transform(black_box(bounds), black_box(Size::new(1280.0, 720.0))));
    });

    // Alternating sizes so every call actually rebuilds.
    group.bench_function("resize_rebuild", |b| {
        let mut fitter = ViewportFitter::new(Size::new(800.0, 600.0));
        fitter.set_bounds(Some(bounds));
        let sizes = [Size::new(800.0, 600.0), Size::new(600.0, 800.0)];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            fitter.set_viewport(sizes[i]);
            black_box(fitter.base_transform());
        });
    });

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");
    let base = compute_base_transform(Rect::new(0.0, 0.0, 100.0, 50.0), Size::new(1280.0, 720.0));

    for updates in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("pinch_updates", updates), &updates, |b, &n| {
            b.iter_batched(
                GestureTransformEngine::new,
                |mut engine| {
                    for i in 0..n {
                        let factor = if i % 2 == 0 { 1.01 } else { 0.995 };
                        engine.on_pinch_update(factor, Point::new(640.0, 360.0), &base);
                    }
                    black_box(engine.view_state());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("pan_updates", updates), &updates, |b, &n| {
            b.iter_batched(
                GestureTransformEngine::new,
                |mut engine| {
                    engine.on_pan_start();
                    for i in 0..n {
                        engine.on_pan_update(Vec2::new(i as f64, -(i as f64)));
                    }
                    engine.on_pan_end();
                    black_box(engine.view_state());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("compose_render_transform", |b| {
        let state = ViewState::new(Vec2::new(33.0, -12.0), 2.5);
        b.iter(|| compose_render_transform(black_box(&base), black_box(&state)));
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    group.bench_function("gesture_then_paint", |b| {
        let mut bundle = MemoryPictureSource::new();
        bundle.insert("shape", Rect::new(0.0, 0.0, 400.0, 300.0).to_path(0.1));
        let mut frame = InteractivePicture::new(bundle, Size::new(1024.0, 768.0));
        frame.set_resource_id(Some("shape"));
        let mut canvas = NullCanvas;

        b.iter(|| {
            frame.handle_gesture(GestureEvent::pan(GestureStatus::Started, Vec2::ZERO));
            frame.handle_gesture(GestureEvent::pan(GestureStatus::Running, Vec2::new(4.0, 2.0)));
            frame.handle_gesture(GestureEvent::pan(GestureStatus::Completed, Vec2::new(4.0, 2.0)));
            frame.handle_gesture(GestureEvent::pinch(1.001, Point::new(0.5, 0.5)));
            black_box(frame.paint(&mut canvas));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fit, bench_gestures, bench_frame);
criterion_main!(benches);
