//! 粒子特效 - 多发射器聚合
//!
//! 特效把多个发射器当作一个整体驱动：统一开始/重置/更新/定位，
//! 全部发射器完成时触发一次完成回调。
//!
//! 自由模式 (free mode) 下特效记录一个世界锚点，每帧把锚点位移
//! 转成发射器平移，已发射的粒子留在原世界位置形成拖尾。

use glam::Vec2;

use crate::emitter::ParticleEmitter;
use crate::pool::ParticlePool;

/// 完成回调，触发一次后即被消耗
pub type CompleteListener = Box<dyn FnOnce()>;

/// 粒子特效
#[derive(Default)]
pub struct ParticleEffect {
    emitters: Vec<ParticleEmitter>,
    complete_listener: Option<CompleteListener>,
    free_mode: bool,
    world_anchor: Vec2,
    last_world: Vec2,
    completed: bool,
}

impl std::fmt::Debug for ParticleEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleEffect")
            .field("emitters", &self.emitters)
            .field("complete_listener", &self.complete_listener.is_some())
            .field("free_mode", &self.free_mode)
            .field("world_anchor", &self.world_anchor)
            .field("last_world", &self.last_world)
            .field("completed", &self.completed)
            .finish()
    }
}

impl ParticleEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从定义克隆出独立的运行时实例 (回调不随克隆传播)
    pub fn instantiate(&self) -> Self {
        Self {
            emitters: self.emitters.iter().map(ParticleEmitter::instantiate).collect(),
            complete_listener: None,
            free_mode: self.free_mode,
            world_anchor: self.world_anchor,
            last_world: self.last_world,
            completed: false,
        }
    }

    pub fn start(&mut self) {
        self.completed = false;
        for emitter in &mut self.emitters {
            emitter.start();
        }
    }

    pub fn reset(&mut self, pool: &mut ParticlePool) {
        self.completed = false;
        for emitter in &mut self.emitters {
            emitter.reset(pool);
        }
    }

    /// 推进全部发射器；返回特效是否已完成
    pub fn update(&mut self, pool: &mut ParticlePool, delta: f32) -> bool {
        if self.free_mode {
            let shift = self.world_anchor - self.last_world;
            if shift != Vec2::ZERO {
                for emitter in &mut self.emitters {
                    emitter.translate(shift.x, shift.y);
                }
                self.last_world = self.world_anchor;
            }
        }
        for emitter in &mut self.emitters {
            emitter.update(pool, delta);
        }
        let complete = self.is_complete();
        if complete && !self.completed {
            self.completed = true;
            if let Some(listener) = self.complete_listener.take() {
                listener();
            }
        }
        complete
    }

    pub fn allow_completion(&mut self) {
        for emitter in &mut self.emitters {
            emitter.allow_completion();
        }
    }

    pub fn is_complete(&self) -> bool {
        self.emitters.iter().all(ParticleEmitter::is_complete)
    }

    pub fn set_complete_listener(&mut self, listener: impl FnOnce() + 'static) {
        self.complete_listener = Some(Box::new(listener));
    }

    /// 把全部发射器改成固定毫秒时长的一次性播放
    pub fn set_duration(&mut self, duration_millis: f32) {
        self.completed = false;
        for emitter in &mut self.emitters {
            emitter.set_continuous(false);
            emitter.duration = duration_millis;
            emitter.duration_timer = 0.0;
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        if self.free_mode {
            self.world_anchor = Vec2::new(x, y);
            return;
        }
        for emitter in &mut self.emitters {
            emitter.set_position(x, y);
        }
    }

    /// 开启自由模式时以当前世界锚点为平移基准
    pub fn set_free_mode(&mut self, free_mode: bool) {
        self.free_mode = free_mode;
        if free_mode {
            self.last_world = self.world_anchor;
        }
    }

    pub fn is_free_mode(&self) -> bool {
        self.free_mode
    }

    pub fn set_world_anchor(&mut self, x: f32, y: f32) {
        self.world_anchor = Vec2::new(x, y);
    }

    pub fn flip_y(&mut self) {
        for emitter in &mut self.emitters {
            emitter.flip_y();
        }
    }

    /// 按名称查找发射器
    pub fn find_emitter(&self, name: &str) -> Option<&ParticleEmitter> {
        self.emitters.iter().find(|emitter| emitter.name() == name)
    }

    pub fn find_emitter_mut(&mut self, name: &str) -> Option<&mut ParticleEmitter> {
        self.emitters.iter_mut().find(|emitter| emitter.name() == name)
    }

    pub fn emitters(&self) -> &[ParticleEmitter] {
        &self.emitters
    }

    pub fn emitters_mut(&mut self) -> &mut [ParticleEmitter] {
        &mut self.emitters
    }

    pub fn add_emitter(&mut self, emitter: ParticleEmitter) {
        self.emitters.push(emitter);
    }

    /// 整体缩放：尺寸类曲线高低值一起乘，偏移只缩低值
    pub fn scale_effect(&mut self, scale: f32) {
        for emitter in &mut self.emitters {
            emitter.scale_curve().scale_high(scale);
            emitter.scale_curve().scale_low(scale);
            emitter.velocity_curve().scale_high(scale);
            emitter.velocity_curve().scale_low(scale);
            emitter.gravity_curve().scale_high(scale);
            emitter.gravity_curve().scale_low(scale);
            emitter.wind_curve().scale_high(scale);
            emitter.wind_curve().scale_low(scale);
            emitter.spawn_width_curve().scale_high(scale);
            emitter.spawn_width_curve().scale_low(scale);
            emitter.spawn_height_curve().scale_high(scale);
            emitter.spawn_height_curve().scale_low(scale);
            emitter.x_offset_curve().scale_low(scale);
            emitter.y_offset_curve().scale_low(scale);
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
