use particle_engine::{
    EffectCache, EllipseSide, ParticleEffect, ParticleEmitter, ParticlePool, SpawnShape,
};
use std::io::Write as _;

/// 程序化搭一个双发射器特效：椭圆边缘喷射的火焰 + 方形区域的烟雾
fn build_effect() -> ParticleEffect {
    let mut flame = ParticleEmitter::new();
    flame.set_name("flame");
    flame.set_image_path("flame.png");
    flame.set_max_particle_count(64);
    flame.set_min_particle_count(8);
    flame.duration_curve().set_low(500.0);
    flame.life_curve().set_low_range(100.0, 200.0);
    flame.life_curve().set_high_range(100.0, 200.0);
    flame.emission_curve().set_low(200.0);
    flame.emission_curve().set_high(200.0);
    flame.velocity_curve().set_active(true);
    flame.velocity_curve().set_low_range(20.0, 40.0);
    flame.velocity_curve().set_high_range(20.0, 40.0);
    flame.angle_curve().set_active(true);
    flame.angle_curve().set_low_range(80.0, 100.0);
    flame.angle_curve().set_high_range(80.0, 100.0);
    flame.spawn_shape().set_shape(SpawnShape::Ellipse);
    flame.spawn_shape().set_edges(true);
    flame.spawn_shape().set_side(EllipseSide::Top);
    flame.spawn_width_curve().set_low(30.0);
    flame.spawn_width_curve().set_high(30.0);
    flame.spawn_height_curve().set_low(10.0);
    flame.spawn_height_curve().set_high(10.0);
    flame.tint_curve().set_colors(vec![1.0, 0.5, 0.0, 0.2, 0.2, 0.2]);
    flame.tint_curve().set_timeline(vec![0.0, 1.0]);
    flame.transparency_curve().set_low(1.0);
    flame.transparency_curve().set_high(1.0);

    let mut smoke = ParticleEmitter::new();
    smoke.set_name("smoke");
    smoke.set_image_path("smoke.png");
    smoke.set_max_particle_count(32);
    smoke.duration_curve().set_low(500.0);
    smoke.life_curve().set_low(300.0);
    smoke.life_curve().set_high(300.0);
    smoke.emission_curve().set_low(50.0);
    smoke.emission_curve().set_high(50.0);
    smoke.spawn_shape().set_shape(SpawnShape::Square);
    smoke.spawn_width_curve().set_low(40.0);
    smoke.spawn_width_curve().set_high(40.0);
    smoke.spawn_height_curve().set_low(40.0);
    smoke.spawn_height_curve().set_high(40.0);

    let mut effect = ParticleEffect::new();
    effect.add_emitter(flame);
    effect.add_emitter(smoke);
    effect
}

#[test]
fn test_simulation_spawns_and_completes() {
    let mut pool = ParticlePool::new(256);
    let mut effect = build_effect();
    effect.set_position(100.0, 50.0);
    effect.start();

    let mut peak = 0;
    let mut complete = false;
    // 60 FPS 下 2 秒足够覆盖 500ms 时长加 300ms 最长寿命
    for _ in 0..120 {
        complete = effect.update(&mut pool, 1.0 / 60.0);
        let alive: usize = effect.emitters().iter().map(|e| e.active_count()).sum();
        peak = peak.max(alive);
        if complete {
            break;
        }
    }

    assert!(peak >= 8, "expected spawning, peak was {peak}");
    assert!(complete, "effect never completed");
    assert!(effect.is_complete());
    // 全部粒子回到池中
    assert!(pool.available() >= peak.min(pool.capacity()));
}

#[test]
fn test_render_handoff_exposes_particle_state() {
    let mut pool = ParticlePool::new(256);
    let mut effect = build_effect();
    effect.set_position(100.0, 50.0);
    effect.start();
    for _ in 0..6 {
        effect.update(&mut pool, 1.0 / 60.0);
    }

    let flame = effect.find_emitter("flame").expect("flame emitter");
    assert!(flame.active_count() > 0);
    for particle in flame.active_particles() {
        // 锚点 (100, 50)，生成区域 30x10 的椭圆边缘，再加初速位移
        assert!((particle.position().x - 100.0).abs() < 60.0);
        assert!((particle.position().y - 50.0).abs() < 60.0);
        assert!(particle.current_life() > 0);
        assert!(particle.current_life() <= particle.life());
        assert!(particle.scale() > 0.0);
    }
}

#[test]
fn test_cache_round_trip_drives_simulation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fire.p");
    let mut file = std::fs::File::create(&path).expect("create");
    file.write_all(build_effect().save().as_bytes()).expect("write");
    drop(file);

    let mut cache = EffectCache::new();
    let mut effect = cache.obtain(&path).expect("load from disk");
    assert_eq!(effect.emitters().len(), 2);
    assert_eq!(effect.emitters()[0].name(), "flame");

    let mut pool = ParticlePool::new(256);
    effect.start();
    for _ in 0..12 {
        effect.update(&mut pool, 1.0 / 60.0);
    }
    let alive: usize = effect.emitters().iter().map(|e| e.active_count()).sum();
    assert!(alive > 0, "loaded effect should emit particles");

    // 保存的定义逐字节稳定
    let saved = effect.save();
    let reloaded = ParticleEffect::load(&saved).expect("reparse");
    assert_eq!(reloaded.save(), saved);
}

#[test]
fn test_pool_is_shared_across_effects() {
    let mut pool = ParticlePool::new(64);
    let mut first = build_effect();
    let mut second = build_effect();
    first.start();
    second.start();

    for _ in 0..120 {
        first.update(&mut pool, 1.0 / 60.0);
        second.update(&mut pool, 1.0 / 60.0);
    }
    assert!(first.is_complete());
    assert!(second.is_complete());
    // 两个特效的粒子都归还到同一个池，不超过池容量
    assert!(pool.available() <= pool.capacity());
    assert!(pool.available() > 0);
}

#[test]
fn test_reset_replays_from_scratch() {
    let mut pool = ParticlePool::new(256);
    let mut effect = build_effect();
    effect.start();
    for _ in 0..120 {
        if effect.update(&mut pool, 1.0 / 60.0) {
            break;
        }
    }
    assert!(effect.is_complete());

    effect.reset(&mut pool);
    assert!(!effect.is_complete());
    for _ in 0..6 {
        effect.update(&mut pool, 1.0 / 60.0);
    }
    let alive: usize = effect.emitters().iter().map(|e| e.active_count()).sum();
    assert!(alive > 0, "reset effect should emit again");
}
