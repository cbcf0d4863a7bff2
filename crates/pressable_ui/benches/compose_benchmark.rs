//! Benchmark for per-frame composition.
//!
//! TARGET: a full screen of 100 animated controls composed well under 1ms
//!
//! Run with: cargo bench --package pressable_ui --bench compose_benchmark

#![allow(missing_docs)]

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pressable_ui::{
    compose, AnimatedKind, AnimationClock, AnimationFrame, Color, CompositionEngine, ControlState,
    PressableControl, SizeTier, StyleVariant,
};

fn benchmark_static_resolve(c: &mut Criterion) {
    let variant = StyleVariant::gradient([Color::PURPLE, Color::PINK, Color::ORANGE]);

    c.bench_function("resolve_gradient_idle", |b| {
        b.iter(|| {
            black_box(compose(
                black_box(&variant),
                SizeTier::Medium,
                &ControlState::IDLE,
                None,
            ))
        });
    });
}

fn benchmark_animated_compose(c: &mut Criterion) {
    let variant = StyleVariant::animated(AnimatedKind::GlowingMultiColorBorder);

    c.bench_function("compose_glowing_border_frame", |b| {
        let mut phase = 0.0f32;
        b.iter(|| {
            phase = (phase + 0.016) % 1.0;
            black_box(compose(
                &variant,
                SizeTier::Large,
                &ControlState::IDLE,
                Some(AnimationFrame::at(black_box(phase))),
            ))
        });
    });
}

fn benchmark_screen_frame(c: &mut Criterion) {
    let engine = CompositionEngine::DEFAULT;
    let clock = AnimationClock::new();
    let controls: Vec<PressableControl> = (0..100)
        .map(|i| {
            let kind = AnimatedKind::ALL[i % AnimatedKind::ALL.len()];
            PressableControl::mount(
                StyleVariant::animated(kind),
                SizeTier::ALL[i % 3],
                ControlState::IDLE,
                &engine,
                &clock,
            )
        })
        .collect();

    let mut group = c.benchmark_group("screen_frame");
    group.throughput(Throughput::Elements(controls.len() as u64));

    group.bench_function("tick_and_render_100_controls", |b| {
        b.iter(|| {
            clock.tick(Duration::from_millis(16));
            for control in &controls {
                black_box(control.render(&engine));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_static_resolve,
    benchmark_animated_compose,
    benchmark_screen_frame
);
criterion_main!(benches);
