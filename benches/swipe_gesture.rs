// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the swipe gesture engine.
//!
//! Measures the performance of:
//! - Tracking a pointer move (runs on every mouse/touch event)
//! - A full drag, release, commit and advance cycle

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use std::hint::black_box;
use swipe_shop::catalog::featured_products;
use swipe_shop::deck::Deck;
use swipe_shop::swipe::{CardTransform, SwipeEngine, SwipeEvent, SwipeSettings};

fn card() -> Rectangle {
    Rectangle::new(Point::new(30.0, 80.0), Size::new(360.0, 540.0))
}

fn engine() -> SwipeEngine {
    SwipeEngine::new(Deck::new(featured_products()), SwipeSettings::default())
}

/// Benchmark a single pointer move while dragging.
fn bench_update_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_gesture");

    let mut engine = engine();
    let center = card().center();
    engine.begin_gesture(center, card());

    let mut x = 0.0_f32;
    group.bench_function("update_gesture", |b| {
        b.iter(|| {
            // Sweep across both indicator thresholds.
            x = if x > 200.0 { -200.0 } else { x + 7.0 };
            let offset = engine.update_gesture(
                Point::new(center.x + x, center.y),
                card(),
                &mut (),
            );
            black_box(offset);
        });
    });

    group.bench_function("update_gesture_recorded", |b| {
        let mut events: Vec<SwipeEvent> = Vec::with_capacity(1024);
        b.iter(|| {
            x = if x > 200.0 { -200.0 } else { x + 7.0 };
            events.clear();
            engine.update_gesture(Point::new(center.x + x, center.y), card(), &mut events);
            black_box(events.len());
        });
    });

    group.bench_function("card_transform", |b| {
        b.iter(|| black_box(CardTransform::dragging(black_box(engine.offset()))));
    });

    group.finish();
}

/// Benchmark a complete swipe: press, drag past commit, release, advance.
fn bench_full_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_gesture");

    let mut engine = engine();
    let center = card().center();

    group.bench_function("full_swipe", |b| {
        b.iter(|| {
            engine.begin_gesture(center, card());
            for step in 1..=10 {
                let dx = step as f32 * 20.0;
                engine.update_gesture(Point::new(center.x + dx, center.y), card(), &mut ());
            }
            let outcome = engine.end_gesture(&mut ());
            engine.complete_commit(&mut ());
            black_box(outcome);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_update_gesture, bench_full_swipe);
criterion_main!(benches);
