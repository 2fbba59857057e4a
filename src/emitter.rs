//! 粒子发射器 - 定时/生命周期状态机
//!
//! 发射器持有一组参数曲线、一个发射区域配置和固定数量的粒子槽位。
//! `update` 把帧增量累积成整数毫秒步长驱动状态机：
//! 延迟 → 发射 → (连续模式循环重启 | 非连续模式完成)。
//!
//! 每次 `restart` 重新采样周期级参数并重算 `update_flags` 位掩码，
//! 常量曲线只在激活时求值一次，不参与逐帧插值。

use glam::Vec2;

use crate::curve::{GradientValue, RangedValue, ScaledValue};
use crate::particle::Particle;
use crate::pool::ParticlePool;
use crate::spawn::{self, SpawnShape, SpawnShapeValue};

const UPDATE_SCALE: u32 = 1 << 0;
const UPDATE_ANGLE: u32 = 1 << 1;
const UPDATE_ROTATION: u32 = 1 << 2;
const UPDATE_VELOCITY: u32 = 1 << 3;
const UPDATE_WIND: u32 = 1 << 4;
const UPDATE_GRAVITY: u32 = 1 << 5;
const UPDATE_TINT: u32 = 1 << 6;

/// 粒子发射器
#[derive(Debug)]
pub struct ParticleEmitter {
    pub(crate) name: String,
    pub(crate) image_path: String,

    // 定义期曲线，按定义加载或程序化配置
    pub(crate) delay_value: RangedValue,
    pub(crate) duration_value: RangedValue,
    pub(crate) emission_value: ScaledValue,
    pub(crate) life_value: ScaledValue,
    pub(crate) life_offset_value: ScaledValue,
    pub(crate) x_offset_value: ScaledValue,
    pub(crate) y_offset_value: ScaledValue,
    pub(crate) spawn_shape_value: SpawnShapeValue,
    pub(crate) spawn_width_value: ScaledValue,
    pub(crate) spawn_height_value: ScaledValue,
    pub(crate) scale_value: ScaledValue,
    pub(crate) velocity_value: ScaledValue,
    pub(crate) angle_value: ScaledValue,
    pub(crate) rotation_value: ScaledValue,
    pub(crate) wind_value: ScaledValue,
    pub(crate) gravity_value: ScaledValue,
    pub(crate) tint_value: GradientValue,
    pub(crate) transparency_value: ScaledValue,

    pub(crate) min_particle_count: usize,
    pub(crate) max_particle_count: usize,
    pub(crate) attached: bool,
    pub(crate) continuous: bool,
    pub(crate) aligned: bool,
    pub(crate) additive: bool,
    pub(crate) behind: bool,
    pub(crate) premultiplied_alpha: bool,

    // 运行时状态
    slots: Vec<Option<Particle>>,
    active_count: usize,
    anchor: Vec2,
    accumulator: f32,
    delay: f32,
    delay_timer: f32,
    pub(crate) duration: f32,
    pub(crate) duration_timer: f32,
    emission: i32,
    emission_diff: i32,
    emission_delta: i32,
    life: i32,
    life_diff: i32,
    life_offset: i32,
    life_offset_diff: i32,
    spawn_width: f32,
    spawn_width_diff: f32,
    spawn_height: f32,
    spawn_height_diff: f32,
    update_flags: u32,
    first_update: bool,
    allow_completion: bool,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleEmitter {
    pub fn new() -> Self {
        let mut emitter = Self {
            name: String::new(),
            image_path: String::new(),
            delay_value: RangedValue::default(),
            duration_value: RangedValue::default(),
            emission_value: ScaledValue::default(),
            life_value: ScaledValue::default(),
            life_offset_value: ScaledValue::default(),
            x_offset_value: ScaledValue::default(),
            y_offset_value: ScaledValue::default(),
            spawn_shape_value: SpawnShapeValue::default(),
            spawn_width_value: ScaledValue::default(),
            spawn_height_value: ScaledValue::default(),
            scale_value: ScaledValue::default(),
            velocity_value: ScaledValue::default(),
            angle_value: ScaledValue::default(),
            rotation_value: ScaledValue::default(),
            wind_value: ScaledValue::default(),
            gravity_value: ScaledValue::default(),
            tint_value: GradientValue::default(),
            transparency_value: ScaledValue::default(),
            min_particle_count: 0,
            max_particle_count: 0,
            attached: false,
            continuous: false,
            aligned: false,
            additive: true,
            behind: false,
            premultiplied_alpha: false,
            slots: Vec::new(),
            active_count: 0,
            anchor: Vec2::ZERO,
            accumulator: 0.0,
            delay: 0.0,
            delay_timer: 0.0,
            duration: 1.0,
            duration_timer: 0.0,
            emission: 0,
            emission_diff: 0,
            emission_delta: 0,
            life: 0,
            life_diff: 0,
            life_offset: 0,
            life_offset_diff: 0,
            spawn_width: 0.0,
            spawn_width_diff: 0.0,
            spawn_height: 0.0,
            spawn_height_diff: 0.0,
            update_flags: 0,
            first_update: false,
            allow_completion: false,
        };
        emitter.duration_value.set_always_active(true);
        emitter.emission_value.set_always_active(true);
        emitter.life_value.set_always_active(true);
        emitter.scale_value.set_always_active(true);
        emitter.transparency_value.set_always_active(true);
        emitter.spawn_shape_value.always_active = true;
        emitter.spawn_width_value.set_always_active(true);
        emitter.spawn_height_value.set_always_active(true);
        emitter
    }

    /// 从当前定义克隆出一个独立的运行时实例
    pub fn instantiate(&self) -> Self {
        let mut emitter = Self::new();
        emitter.name = self.name.clone();
        emitter.image_path = self.image_path.clone();
        emitter.delay_value = self.delay_value.clone();
        emitter.duration_value = self.duration_value.clone();
        emitter.emission_value = self.emission_value.clone();
        emitter.life_value = self.life_value.clone();
        emitter.life_offset_value = self.life_offset_value.clone();
        emitter.x_offset_value = self.x_offset_value.clone();
        emitter.y_offset_value = self.y_offset_value.clone();
        emitter.spawn_shape_value = self.spawn_shape_value.clone();
        emitter.spawn_width_value = self.spawn_width_value.clone();
        emitter.spawn_height_value = self.spawn_height_value.clone();
        emitter.scale_value = self.scale_value.clone();
        emitter.velocity_value = self.velocity_value.clone();
        emitter.angle_value = self.angle_value.clone();
        emitter.rotation_value = self.rotation_value.clone();
        emitter.wind_value = self.wind_value.clone();
        emitter.gravity_value = self.gravity_value.clone();
        emitter.tint_value = self.tint_value.clone();
        emitter.transparency_value = self.transparency_value.clone();
        emitter.min_particle_count = self.min_particle_count;
        emitter.set_max_particle_count(self.max_particle_count);
        emitter.attached = self.attached;
        emitter.continuous = self.continuous;
        emitter.aligned = self.aligned;
        emitter.additive = self.additive;
        emitter.behind = self.behind;
        emitter.premultiplied_alpha = self.premultiplied_alpha;
        emitter
    }

    // ------------------------------------------------------------------
    // 生命周期
    // ------------------------------------------------------------------

    /// 开始播放 (首次激活时会立即生成一个粒子)
    pub fn start(&mut self) {
        self.first_update = true;
        self.allow_completion = false;
        self.restart();
    }

    /// 归还所有存活粒子并重新初始化计时器
    pub fn reset(&mut self, pool: &mut ParticlePool) {
        self.emission_delta = 0;
        self.duration_timer = self.duration;
        for slot in &mut self.slots {
            if let Some(particle) = slot.take() {
                pool.release(particle);
            }
        }
        self.active_count = 0;
        self.start();
    }

    /// 忽略 continuous 设置直到下次 start，让发射器平滑收尾
    pub fn allow_completion(&mut self) {
        self.allow_completion = true;
        self.duration_timer = self.duration;
    }

    /// 按周期重新采样延迟/持续/发射率/寿命/生成尺寸，并重算更新位掩码
    fn restart(&mut self) {
        self.delay = if self.delay_value.is_active() {
            self.delay_value.new_low_value()
        } else {
            0.0
        };
        self.delay_timer = 0.0;

        self.duration_timer -= self.duration;
        self.duration = self.duration_value.new_low_value();

        self.emission = self.emission_value.new_low_value() as i32;
        self.emission_diff = self.emission_value.new_high_value() as i32;
        if !self.emission_value.is_relative() {
            self.emission_diff -= self.emission;
        }

        self.life = self.life_value.new_low_value() as i32;
        self.life_diff = self.life_value.new_high_value() as i32;
        if !self.life_value.is_relative() {
            self.life_diff -= self.life;
        }

        self.life_offset = if self.life_offset_value.is_active() {
            self.life_offset_value.new_low_value() as i32
        } else {
            0
        };
        self.life_offset_diff = self.life_offset_value.new_high_value() as i32;
        if !self.life_offset_value.is_relative() {
            self.life_offset_diff -= self.life_offset;
        }

        self.spawn_width = self.spawn_width_value.new_low_value();
        self.spawn_width_diff = self.spawn_width_value.new_high_value();
        if !self.spawn_width_value.is_relative() {
            self.spawn_width_diff -= self.spawn_width;
        }

        self.spawn_height = self.spawn_height_value.new_low_value();
        self.spawn_height_diff = self.spawn_height_value.new_high_value();
        if !self.spawn_height_value.is_relative() {
            self.spawn_height_diff -= self.spawn_height;
        }

        // 常量曲线不占用逐帧插值位；速度/风/重力只要激活就得逐帧应用
        self.update_flags = 0;
        if self.angle_value.is_active() && self.angle_value.is_time_varying() {
            self.update_flags |= UPDATE_ANGLE;
        }
        if self.velocity_value.is_active() {
            self.update_flags |= UPDATE_VELOCITY;
        }
        if self.scale_value.is_time_varying() {
            self.update_flags |= UPDATE_SCALE;
        }
        if self.rotation_value.is_active() && self.rotation_value.is_time_varying() {
            self.update_flags |= UPDATE_ROTATION;
        }
        if self.wind_value.is_active() {
            self.update_flags |= UPDATE_WIND;
        }
        if self.gravity_value.is_active() {
            self.update_flags |= UPDATE_GRAVITY;
        }
        if self.tint_value.is_time_varying() {
            self.update_flags |= UPDATE_TINT;
        }
    }

    /// 推进模拟
    ///
    /// 帧增量按 1000 倍累积进毫秒累加器；不足 1 毫秒时递延到下一帧，
    /// 小数余量始终保留，与帧率粒度无关。
    pub fn update(&mut self, pool: &mut ParticlePool, delta: f32) {
        self.accumulator += delta * 1000.0;
        if self.accumulator < 1.0 {
            return;
        }
        let delta_millis = self.accumulator as i32;
        self.accumulator -= delta_millis as f32;

        if self.delay_timer < self.delay {
            self.delay_timer += delta_millis as f32;
        } else {
            let mut done = false;
            if self.first_update {
                self.first_update = false;
                self.add_particle(pool);
            }

            if self.duration_timer < self.duration {
                self.duration_timer += delta_millis as f32;
            } else if !self.continuous || self.allow_completion {
                done = true;
            } else {
                self.restart();
            }

            if !done {
                self.emission_delta += delta_millis;
                let mut emission_time = self.emission as f32
                    + self.emission_diff as f32
                        * self
                            .emission_value
                            .get_scale(self.duration_timer / self.duration);
                if emission_time > 0.0 {
                    emission_time = 1000.0 / emission_time;
                    if self.emission_delta as f32 >= emission_time {
                        let mut emit_count = (self.emission_delta as f32 / emission_time) as usize;
                        emit_count = emit_count.min(self.max_particle_count - self.active_count);
                        self.emission_delta -= (emit_count as f32 * emission_time) as i32;
                        self.emission_delta = (self.emission_delta as f32 % emission_time) as i32;
                        self.add_particles(pool, emit_count);
                    }
                }
                if self.active_count < self.min_particle_count {
                    let shortfall = self.min_particle_count - self.active_count;
                    self.add_particles(pool, shortfall);
                }
            }
        }

        // 老化所有活跃槽位，过期记录归还对象池
        let mut slots = std::mem::take(&mut self.slots);
        let mut active_count = self.active_count;
        for slot in &mut slots {
            if let Some(particle) = slot {
                if !self.update_particle(particle, delta, delta_millis) {
                    if let Some(expired) = slot.take() {
                        pool.release(expired);
                    }
                    active_count -= 1;
                }
            }
        }
        self.slots = slots;
        self.active_count = active_count;
    }

    fn add_particle(&mut self, pool: &mut ParticlePool) {
        if self.active_count == self.max_particle_count {
            return;
        }
        let mut slots = std::mem::take(&mut self.slots);
        if let Some(slot) = slots.iter_mut().find(|slot| slot.is_none()) {
            let mut particle = pool.acquire();
            self.activate_particle(&mut particle);
            *slot = Some(particle);
            self.active_count += 1;
        }
        self.slots = slots;
    }

    fn add_particles(&mut self, pool: &mut ParticlePool, count: usize) {
        let count = count.min(self.max_particle_count - self.active_count);
        if count == 0 {
            return;
        }
        let mut slots = std::mem::take(&mut self.slots);
        let mut added = 0;
        for slot in &mut slots {
            if added == count {
                break;
            }
            if slot.is_none() {
                let mut particle = pool.acquire();
                self.activate_particle(&mut particle);
                *slot = Some(particle);
                added += 1;
            }
        }
        self.slots = slots;
        self.active_count += added;
    }

    /// 激活一个粒子：采样寿命/速度/角度/缩放/旋转/风/重力/色调/透明度，
    /// 再按发射区域求初始偏移；抽到正的寿命偏移时快进一次更新
    fn activate_particle(&self, particle: &mut Particle) {
        let percent = self.duration_timer / self.duration;
        let update_flags = self.update_flags;

        particle.life =
            self.life + (self.life_diff as f32 * self.life_value.get_scale(percent)) as i32;
        particle.current_life = particle.life;

        if self.velocity_value.is_active() {
            particle.velocity_base = self.velocity_value.new_low_value();
            particle.velocity_diff = self.velocity_value.new_high_value();
            if !self.velocity_value.is_relative() {
                particle.velocity_diff -= particle.velocity_base;
            }
        }

        particle.angle_base = self.angle_value.new_low_value();
        particle.angle_diff = self.angle_value.new_high_value();
        if !self.angle_value.is_relative() {
            particle.angle_diff -= particle.angle_base;
        }
        let mut angle = 0.0;
        if update_flags & UPDATE_ANGLE == 0 {
            // 角度曲线为常量：方向在激活时定死，缓存 cos/sin
            angle = particle.angle_base + particle.angle_diff * self.angle_value.get_scale(0.0);
            particle.angle_base = angle;
            particle.angle_cos = angle.to_radians().cos();
            particle.angle_sin = angle.to_radians().sin();
        }

        particle.scale_base = self.scale_value.new_low_value();
        particle.scale_diff = self.scale_value.new_high_value();
        if !self.scale_value.is_relative() {
            particle.scale_diff -= particle.scale_base;
        }
        particle.scale = particle.scale_base + particle.scale_diff * self.scale_value.get_scale(0.0);

        if self.rotation_value.is_active() {
            particle.rotation_base = self.rotation_value.new_low_value();
            particle.rotation_diff = self.rotation_value.new_high_value();
            if !self.rotation_value.is_relative() {
                particle.rotation_diff -= particle.rotation_base;
            }
            let mut rotation =
                particle.rotation_base + particle.rotation_diff * self.rotation_value.get_scale(0.0);
            if self.aligned {
                rotation += angle;
            }
            particle.rotation = rotation;
        }

        if self.wind_value.is_active() {
            particle.wind_base = self.wind_value.new_low_value();
            particle.wind_diff = self.wind_value.new_high_value();
            if !self.wind_value.is_relative() {
                particle.wind_diff -= particle.wind_base;
            }
        }

        if self.gravity_value.is_active() {
            particle.gravity_base = self.gravity_value.new_low_value();
            particle.gravity_diff = self.gravity_value.new_high_value();
            if !self.gravity_value.is_relative() {
                particle.gravity_diff -= particle.gravity_base;
            }
        }

        particle.tint = self.tint_value.get_color(0.0);

        particle.transparency_base = self.transparency_value.new_low_value();
        particle.transparency_diff =
            self.transparency_value.new_high_value() - particle.transparency_base;

        // 生成位置
        let mut x = self.anchor.x;
        if self.x_offset_value.is_active() {
            x += self.x_offset_value.new_low_value();
        }
        let mut y = self.anchor.y;
        if self.y_offset_value.is_active() {
            y += self.y_offset_value.new_low_value();
        }
        if self.spawn_shape_value.shape() != SpawnShape::Point {
            let width = self.spawn_width
                + self.spawn_width_diff * self.spawn_width_value.get_scale(percent);
            let height = self.spawn_height
                + self.spawn_height_diff * self.spawn_height_value.get_scale(percent);
            let offset = spawn::sample_offset(&self.spawn_shape_value, width, height);
            x += offset.dx;
            y += offset.dy;
            if let Some(edge) = offset.edge_angle {
                // 边缘采样到的角度兼做初始运动方向
                if update_flags & UPDATE_ANGLE == 0 {
                    particle.angle_base = edge.degrees;
                    particle.angle_cos = edge.cos;
                    particle.angle_sin = edge.sin;
                }
            }
        }
        particle.set_position(x, y);

        let mut offset_time =
            (self.life_offset as f32 + self.life_offset_diff as f32 * self.life_offset_value.get_scale(percent)) as i32;
        if offset_time > 0 {
            // 快进不允许触及寿命末端，否则粒子会在激活帧立即过期
            if offset_time >= particle.current_life {
                offset_time = particle.current_life - 1;
            }
            self.update_particle(particle, offset_time as f32 / 1000.0, offset_time);
        }
    }

    /// 老化单个粒子；返回 false 表示已过期
    fn update_particle(&self, particle: &mut Particle, delta: f32, delta_millis: i32) -> bool {
        let life = particle.current_life - delta_millis;
        if life <= 0 {
            return false;
        }
        particle.current_life = life;

        let percent = 1.0 - particle.current_life as f32 / particle.life as f32;
        let update_flags = self.update_flags;

        if update_flags & UPDATE_SCALE != 0 {
            particle.scale =
                particle.scale_base + particle.scale_diff * self.scale_value.get_scale(percent);
        }

        if update_flags & UPDATE_VELOCITY != 0 {
            let velocity = (particle.velocity_base
                + particle.velocity_diff * self.velocity_value.get_scale(percent))
                * delta;

            let mut velocity_x;
            let mut velocity_y;
            if update_flags & UPDATE_ANGLE != 0 {
                let angle =
                    particle.angle_base + particle.angle_diff * self.angle_value.get_scale(percent);
                velocity_x = velocity * angle.to_radians().cos();
                velocity_y = velocity * angle.to_radians().sin();
                if update_flags & UPDATE_ROTATION != 0 {
                    let mut rotation = particle.rotation_base
                        + particle.rotation_diff * self.rotation_value.get_scale(percent);
                    if self.aligned {
                        rotation += angle;
                    }
                    particle.rotation = rotation;
                }
            } else {
                velocity_x = velocity * particle.angle_cos;
                velocity_y = velocity * particle.angle_sin;
                if self.aligned || update_flags & UPDATE_ROTATION != 0 {
                    let mut rotation = particle.rotation_base
                        + particle.rotation_diff * self.rotation_value.get_scale(percent);
                    if self.aligned {
                        rotation += particle.angle_base;
                    }
                    particle.rotation = rotation;
                }
            }

            if update_flags & UPDATE_WIND != 0 {
                velocity_x += (particle.wind_base
                    + particle.wind_diff * self.wind_value.get_scale(percent))
                    * delta;
            }
            if update_flags & UPDATE_GRAVITY != 0 {
                velocity_y += (particle.gravity_base
                    + particle.gravity_diff * self.gravity_value.get_scale(percent))
                    * delta;
            }
            particle.translate(velocity_x, velocity_y);
        } else if update_flags & UPDATE_ROTATION != 0 {
            particle.rotation = particle.rotation_base
                + particle.rotation_diff * self.rotation_value.get_scale(percent);
        }

        let [red, green, blue] = if update_flags & UPDATE_TINT != 0 {
            self.tint_value.get_color(percent)
        } else {
            particle.tint
        };

        if self.premultiplied_alpha {
            // 加法混合时 alpha 置零，颜色通道仍按透明度预乘
            let alpha_multiplier = if self.additive { 0.0 } else { 1.0 };
            let a = particle.transparency_base
                + particle.transparency_diff * self.transparency_value.get_scale(percent);
            particle.color = [
                (red * a * 255.0) as u8,
                (green * a * 255.0) as u8,
                (blue * a * 255.0) as u8,
            ];
            particle.opacity = (a * alpha_multiplier * 255.0) as u8;
        } else {
            particle.color = [
                (red * 255.0) as u8,
                (green * 255.0) as u8,
                (blue * 255.0) as u8,
            ];
            // 255 只乘进 diff 项：沿用原始的缩放算术，不要"修正"
            particle.opacity = (particle.transparency_base
                + particle.transparency_diff * self.transparency_value.get_scale(percent) * 255.0)
                as u8;
        }
        true
    }

    // ------------------------------------------------------------------
    // 位置与查询
    // ------------------------------------------------------------------

    /// 移动发射锚点；未附着的粒子反向平移，停留在原世界位置
    pub fn set_position(&mut self, x: f32, y: f32) {
        if !self.attached {
            let x_amount = self.anchor.x - x;
            let y_amount = self.anchor.y - y;
            for particle in self.slots.iter_mut().flatten() {
                particle.translate(x_amount, y_amount);
            }
        }
        self.anchor = Vec2::new(x, y);
    }

    /// 相对移动发射锚点
    pub fn translate(&mut self, x: f32, y: f32) {
        if !self.attached {
            for particle in self.slots.iter_mut().flatten() {
                particle.translate(-x, -y);
            }
        }
        self.anchor.x += x;
        self.anchor.y += y;
    }

    pub fn position(&self) -> Vec2 {
        self.anchor
    }

    /// 非连续模式下，持续时间耗尽且无存活粒子时完成
    pub fn is_complete(&self) -> bool {
        if self.continuous {
            return false;
        }
        if self.delay_timer < self.delay {
            return false;
        }
        self.duration_timer >= self.duration && self.active_count == 0
    }

    pub fn percent_complete(&self) -> f32 {
        if self.delay_timer < self.delay {
            return 0.0;
        }
        (self.duration_timer / self.duration).min(1.0)
    }

    /// 渲染交付：遍历所有活跃粒子
    pub fn active_particles(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().flatten()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// 重设槽位上限；被截断的存活记录直接丢弃
    pub fn set_max_particle_count(&mut self, count: usize) {
        self.max_particle_count = count;
        self.slots.resize_with(count, || None);
        self.active_count = self.slots.iter().filter(|slot| slot.is_some()).count();
    }

    /// 垂直翻转：取反角度/重力/风/旋转边界和 y 偏移
    pub fn flip_y(&mut self) {
        let (hmin, hmax) = (self.angle_value.high_min(), self.angle_value.high_max());
        self.angle_value.set_high_range(-hmin, -hmax);
        let (lmin, lmax) = (self.angle_value.low_min(), self.angle_value.low_max());
        self.angle_value.set_low_range(-lmin, -lmax);

        self.gravity_value.scale_high(-1.0);
        self.gravity_value.scale_low(-1.0);
        self.wind_value.scale_high(-1.0);
        self.wind_value.scale_low(-1.0);
        self.rotation_value.scale_high(-1.0);
        self.rotation_value.scale_low(-1.0);
        self.y_offset_value.scale_low(-1.0);
    }

    // ------------------------------------------------------------------
    // 定义访问器
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn set_image_path(&mut self, image_path: impl Into<String>) {
        self.image_path = image_path.into();
    }

    pub fn min_particle_count(&self) -> usize {
        self.min_particle_count
    }

    pub fn set_min_particle_count(&mut self, count: usize) {
        self.min_particle_count = count;
    }

    pub fn max_particle_count(&self) -> usize {
        self.max_particle_count
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn is_aligned(&self) -> bool {
        self.aligned
    }

    pub fn set_aligned(&mut self, aligned: bool) {
        self.aligned = aligned;
    }

    pub fn is_additive(&self) -> bool {
        self.additive
    }

    pub fn set_additive(&mut self, additive: bool) {
        self.additive = additive;
    }

    /// 渲染排序提示
    pub fn is_behind(&self) -> bool {
        self.behind
    }

    pub fn set_behind(&mut self, behind: bool) {
        self.behind = behind;
    }

    pub fn is_premultiplied_alpha(&self) -> bool {
        self.premultiplied_alpha
    }

    pub fn set_premultiplied_alpha(&mut self, premultiplied_alpha: bool) {
        self.premultiplied_alpha = premultiplied_alpha;
    }

    pub fn delay_curve(&mut self) -> &mut RangedValue {
        &mut self.delay_value
    }

    pub fn duration_curve(&mut self) -> &mut RangedValue {
        &mut self.duration_value
    }

    pub fn emission_curve(&mut self) -> &mut ScaledValue {
        &mut self.emission_value
    }

    pub fn life_curve(&mut self) -> &mut ScaledValue {
        &mut self.life_value
    }

    pub fn life_offset_curve(&mut self) -> &mut ScaledValue {
        &mut self.life_offset_value
    }

    pub fn x_offset_curve(&mut self) -> &mut ScaledValue {
        &mut self.x_offset_value
    }

    pub fn y_offset_curve(&mut self) -> &mut ScaledValue {
        &mut self.y_offset_value
    }

    pub fn spawn_shape(&mut self) -> &mut SpawnShapeValue {
        &mut self.spawn_shape_value
    }

    pub fn spawn_width_curve(&mut self) -> &mut ScaledValue {
        &mut self.spawn_width_value
    }

    pub fn spawn_height_curve(&mut self) -> &mut ScaledValue {
        &mut self.spawn_height_value
    }

    pub fn scale_curve(&mut self) -> &mut ScaledValue {
        &mut self.scale_value
    }

    pub fn velocity_curve(&mut self) -> &mut ScaledValue {
        &mut self.velocity_value
    }

    pub fn angle_curve(&mut self) -> &mut ScaledValue {
        &mut self.angle_value
    }

    pub fn rotation_curve(&mut self) -> &mut ScaledValue {
        &mut self.rotation_value
    }

    pub fn wind_curve(&mut self) -> &mut ScaledValue {
        &mut self.wind_value
    }

    pub fn gravity_curve(&mut self) -> &mut ScaledValue {
        &mut self.gravity_value
    }

    pub fn tint_curve(&mut self) -> &mut GradientValue {
        &mut self.tint_value
    }

    pub fn transparency_curve(&mut self) -> &mut ScaledValue {
        &mut self.transparency_value
    }
}

// ============================================================================
// 测试
// ============================================================================
