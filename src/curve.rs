//! 粒子参数曲线
//!
//! 每个发射周期在 low/high 边界之间随机取值，再按粒子生命百分比
//! (percent-of-life) 的分段线性时间轴 (timeline) 进行缩放。
//! 时间轴第一个点必须是 0.0，且单调不减。

use rand::Rng;

/// 在无序区间 [a, b] 内均匀取随机数
pub(crate) fn random_between(a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo >= hi {
        return lo;
    }
    rand::thread_rng().gen_range(lo..=hi)
}

// ============================================================================
// 区间随机值
// ============================================================================

/// 只有 low 边界的随机值 (用于 Delay / Duration)
#[derive(Debug, Clone)]
pub struct RangedValue {
    pub(crate) active: bool,
    pub(crate) always_active: bool,
    pub(crate) low_min: f32,
    pub(crate) low_max: f32,
}

impl Default for RangedValue {
    fn default() -> Self {
        Self {
            active: false,
            always_active: false,
            low_min: 0.0,
            low_max: 0.0,
        }
    }
}

impl RangedValue {
    /// 曲线是否参与随机化
    pub fn is_active(&self) -> bool {
        self.always_active || self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_always_active(&self) -> bool {
        self.always_active
    }

    pub fn set_always_active(&mut self, always_active: bool) {
        self.always_active = always_active;
    }

    /// 在 [low_min, low_max] (无序) 内取一次随机值
    pub fn new_low_value(&self) -> f32 {
        random_between(self.low_min, self.low_max)
    }

    pub fn set_low(&mut self, value: f32) {
        self.low_min = value;
        self.low_max = value;
    }

    pub fn set_low_range(&mut self, min: f32, max: f32) {
        self.low_min = min;
        self.low_max = max;
    }

    pub fn low_min(&self) -> f32 {
        self.low_min
    }

    pub fn low_max(&self) -> f32 {
        self.low_max
    }

    /// 批量变换：low 边界整体乘以系数 (用于整体缩放/翻转)
    pub fn scale_low(&mut self, factor: f32) {
        self.low_min *= factor;
        self.low_max *= factor;
    }
}

// ============================================================================
// 时间轴缩放值
// ============================================================================

/// 带 high 边界和生命时间轴的随机值
///
/// `relative` 为真时 high 采样直接作为 diff，否则 diff = high - low。
#[derive(Debug, Clone)]
pub struct ScaledValue {
    pub(crate) active: bool,
    pub(crate) always_active: bool,
    pub(crate) low_min: f32,
    pub(crate) low_max: f32,
    pub(crate) high_min: f32,
    pub(crate) high_max: f32,
    pub(crate) relative: bool,
    pub(crate) scaling: Vec<f32>,
    pub(crate) timeline: Vec<f32>,
}

impl Default for ScaledValue {
    fn default() -> Self {
        Self {
            active: false,
            always_active: false,
            low_min: 0.0,
            low_max: 0.0,
            high_min: 0.0,
            high_max: 0.0,
            relative: false,
            scaling: vec![1.0],
            timeline: vec![0.0],
        }
    }
}

impl ScaledValue {
    pub fn is_active(&self) -> bool {
        self.always_active || self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_always_active(&self) -> bool {
        self.always_active
    }

    pub fn set_always_active(&mut self, always_active: bool) {
        self.always_active = always_active;
    }

    pub fn new_low_value(&self) -> f32 {
        random_between(self.low_min, self.low_max)
    }

    pub fn new_high_value(&self) -> f32 {
        random_between(self.high_min, self.high_max)
    }

    pub fn set_low(&mut self, value: f32) {
        self.low_min = value;
        self.low_max = value;
    }

    pub fn set_low_range(&mut self, min: f32, max: f32) {
        self.low_min = min;
        self.low_max = max;
    }

    pub fn set_high(&mut self, value: f32) {
        self.high_min = value;
        self.high_max = value;
    }

    pub fn set_high_range(&mut self, min: f32, max: f32) {
        self.high_min = min;
        self.high_max = max;
    }

    pub fn low_min(&self) -> f32 {
        self.low_min
    }

    pub fn low_max(&self) -> f32 {
        self.low_max
    }

    pub fn high_min(&self) -> f32 {
        self.high_min
    }

    pub fn high_max(&self) -> f32 {
        self.high_max
    }

    pub fn scale_low(&mut self, factor: f32) {
        self.low_min *= factor;
        self.low_max *= factor;
    }

    pub fn scale_high(&mut self, factor: f32) {
        self.high_min *= factor;
        self.high_max *= factor;
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    pub fn set_relative(&mut self, relative: bool) {
        self.relative = relative;
    }

    pub fn scaling(&self) -> &[f32] {
        &self.scaling
    }

    pub fn set_scaling(&mut self, scaling: Vec<f32>) {
        self.scaling = scaling;
    }

    pub fn timeline(&self) -> &[f32] {
        &self.timeline
    }

    pub fn set_timeline(&mut self, timeline: Vec<f32>) {
        self.timeline = timeline;
    }

    /// 单点时间轴的曲线是常量，只需在激活时求值一次
    pub fn is_time_varying(&self) -> bool {
        self.timeline.len() > 1
    }

    /// 生命百分比曲线求值
    ///
    /// 找到第一个 timeline[i] > percent 的段终点做线性插值；
    /// percent 超过所有时间点时退化为最后一个 scaling 值。
    pub fn get_scale(&self, percent: f32) -> f32 {
        let n = self.timeline.len();
        let mut end_index = None;
        for i in 1..n {
            if self.timeline[i] > percent {
                end_index = Some(i);
                break;
            }
        }
        let end = match end_index {
            Some(end) if end < self.scaling.len() => end,
            // 段搜索越界时退化为最后一个值，不允许崩溃
            _ => return self.scaling.last().copied().unwrap_or(1.0),
        };
        let start = end - 1;
        let start_value = self.scaling[start];
        let start_time = self.timeline[start];
        start_value
            + (self.scaling[end] - start_value)
                * ((percent - start_time) / (self.timeline[end] - start_time))
    }
}

// ============================================================================
// 颜色渐变
// ============================================================================

/// RGB 颜色随生命百分比的渐变曲线
///
/// `colors` 按时间点平铺存储三元组，`colors.len() == 3 * timeline.len()`。
#[derive(Debug, Clone)]
pub struct GradientValue {
    pub(crate) active: bool,
    pub(crate) always_active: bool,
    pub(crate) colors: Vec<f32>,
    pub(crate) timeline: Vec<f32>,
}

impl Default for GradientValue {
    fn default() -> Self {
        Self {
            active: false,
            always_active: true,
            colors: vec![1.0, 1.0, 1.0],
            timeline: vec![0.0],
        }
    }
}

impl GradientValue {
    pub fn is_active(&self) -> bool {
        self.always_active || self.active
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn set_colors(&mut self, colors: Vec<f32>) {
        self.colors = colors;
    }

    pub fn timeline(&self) -> &[f32] {
        &self.timeline
    }

    pub fn set_timeline(&mut self, timeline: Vec<f32>) {
        self.timeline = timeline;
    }

    /// 多于一个时间点才需要逐帧插值
    pub fn is_time_varying(&self) -> bool {
        self.timeline.len() > 1
    }

    /// 与 [`ScaledValue::get_scale`] 同样的段搜索规则，按三元组插值
    pub fn get_color(&self, percent: f32) -> [f32; 3] {
        if self.colors.len() < 3 {
            return [1.0, 1.0, 1.0];
        }
        let n = self.timeline.len();
        let mut start_index = 0;
        let mut end_index = None;
        for i in 1..n {
            if self.timeline[i] > percent {
                end_index = Some(i);
                break;
            }
            start_index = i;
        }
        let start_time = self.timeline[start_index];
        let s = (start_index * 3).min(self.colors.len() - 3);
        let r1 = self.colors[s];
        let g1 = self.colors[s + 1];
        let b1 = self.colors[s + 2];
        let end = match end_index {
            Some(end) if end * 3 + 2 < self.colors.len() => end,
            _ => return [r1, g1, b1],
        };
        let factor = (percent - start_time) / (self.timeline[end] - start_time);
        let e = end * 3;
        [
            r1 + (self.colors[e] - r1) * factor,
            g1 + (self.colors[e + 1] - g1) * factor,
            b1 + (self.colors[e + 2] - b1) * factor,
        ]
    }
}

// ============================================================================
// 测试
// ============================================================================
