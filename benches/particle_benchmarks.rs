//! 粒子系统性能基准测试
//!
//! 测试曲线求值和发射器整帧更新的性能

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_engine::{GradientValue, ParticleEmitter, ParticlePool, ScaledValue};
use std::hint::black_box;

fn bench_curve_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluation");

    let mut scaled = ScaledValue::default();
    scaled.set_timeline(vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    scaled.set_scaling(vec![0.0, 0.5, 1.0, 0.8, 0.3, 0.0]);

    group.bench_function("get_scale", |b| {
        b.iter(|| black_box(scaled.get_scale(black_box(0.55))));
    });

    let mut gradient = GradientValue::default();
    gradient.set_timeline(vec![0.0, 0.5, 1.0]);
    gradient.set_colors(vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.2, 0.2, 0.2]);

    group.bench_function("get_color", |b| {
        b.iter(|| black_box(gradient.get_color(black_box(0.7))));
    });

    group.finish();
}

fn running_emitter(max: usize) -> (ParticleEmitter, ParticlePool) {
    let mut emitter = ParticleEmitter::new();
    emitter.set_max_particle_count(max);
    emitter.set_min_particle_count(max);
    emitter.set_continuous(true);
    emitter.duration_curve().set_low(1000.0);
    emitter.life_curve().set_low(2000.0);
    emitter.life_curve().set_high(2000.0);
    emitter.emission_curve().set_low(1000.0);
    emitter.emission_curve().set_high(1000.0);
    emitter.velocity_curve().set_active(true);
    emitter.velocity_curve().set_low(30.0);
    emitter.velocity_curve().set_high(30.0);
    emitter.gravity_curve().set_active(true);
    emitter.gravity_curve().set_low(-90.0);
    emitter.gravity_curve().set_high(-90.0);
    emitter.scale_curve().set_timeline(vec![0.0, 1.0]);
    emitter.scale_curve().set_scaling(vec![1.0, 0.0]);
    emitter.tint_curve().set_timeline(vec![0.0, 1.0]);
    emitter.tint_curve().set_colors(vec![1.0, 0.5, 0.0, 0.1, 0.1, 0.1]);

    let mut pool = ParticlePool::new(max);
    emitter.start();
    // 预热到满载
    for _ in 0..10 {
        emitter.update(&mut pool, 1.0 / 60.0);
    }
    (emitter, pool)
}

fn bench_emitter_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_update");

    for count in [100usize, 500, 1000] {
        group.bench_with_input(BenchmarkId::new("full_frame", count), &count, |b, &count| {
            let (mut emitter, mut pool) = running_emitter(count);
            b.iter(|| {
                emitter.update(&mut pool, black_box(1.0 / 60.0));
                black_box(emitter.active_count());
            });
        });
    }

    group.finish();
}

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_pool");

    group.bench_function("acquire_release", |b| {
        let mut pool = ParticlePool::new(1024);
        b.iter(|| {
            let particle = pool.acquire();
            pool.release(black_box(particle));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_curve_evaluation,
    bench_emitter_update,
    bench_pool
);
criterion_main!(benches);
