//! 单个粒子的可变模拟状态

use glam::Vec2;

/// 粒子记录
///
/// 激活时从对象池取出，寿命结束后归还。渲染侧只读
/// position / scale / rotation / color / opacity 五个量。
#[derive(Debug, Clone)]
pub struct Particle {
    // 渲染交付字段
    pub(crate) position: Vec2,
    pub(crate) scale: f32,
    pub(crate) rotation: f32,
    pub(crate) color: [u8; 3],
    pub(crate) opacity: u8,

    // 单位：毫秒
    pub(crate) life: i32,
    pub(crate) current_life: i32,

    // 每条曲线在激活时采样出的 base/diff
    pub(crate) scale_base: f32,
    pub(crate) scale_diff: f32,
    pub(crate) rotation_base: f32,
    pub(crate) rotation_diff: f32,
    pub(crate) velocity_base: f32,
    pub(crate) velocity_diff: f32,
    pub(crate) angle_base: f32,
    pub(crate) angle_diff: f32,
    pub(crate) angle_cos: f32,
    pub(crate) angle_sin: f32,
    pub(crate) transparency_base: f32,
    pub(crate) transparency_diff: f32,
    pub(crate) wind_base: f32,
    pub(crate) wind_diff: f32,
    pub(crate) gravity_base: f32,
    pub(crate) gravity_diff: f32,
    pub(crate) tint: [f32; 3],
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 0.0,
            rotation: 0.0,
            color: [0, 0, 0],
            opacity: 255,
            life: 0,
            current_life: 0,
            scale_base: 0.0,
            scale_diff: 0.0,
            rotation_base: 0.0,
            rotation_diff: 0.0,
            velocity_base: 0.0,
            velocity_diff: 0.0,
            angle_base: 0.0,
            angle_diff: 0.0,
            angle_cos: 0.0,
            angle_sin: 0.0,
            transparency_base: 0.0,
            transparency_diff: 0.0,
            wind_base: 0.0,
            wind_diff: 0.0,
            gravity_base: 0.0,
            gravity_diff: 0.0,
            tint: [0.0, 0.0, 0.0],
        }
    }
}

impl Particle {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// 当前渲染缩放 (均匀)
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// 当前渲染旋转 (度)
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// 剩余寿命 (毫秒)
    pub fn current_life(&self) -> i32 {
        self.current_life
    }

    /// 本次激活抽取的总寿命 (毫秒)
    pub fn life(&self) -> i32 {
        self.life
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
    }
}
