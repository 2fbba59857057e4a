//! 粒子定义文本格式的读写
//!
//! 定义以节头分隔的键值行存储，加载按位置读取：键名只作文档用途，
//! 取值统一是冒号之后的文本。若干节头带一个历史遗留的尾随空格，
//! 序列化必须逐字节保留，否则旧资源对不上号。

use std::fmt::Write as _;

use crate::curve::{GradientValue, RangedValue, ScaledValue};
use crate::effect::ParticleEffect;
use crate::emitter::ParticleEmitter;
use crate::error::FormatError;
use crate::spawn::{EllipseSide, SpawnShape, SpawnShapeValue};

// ============================================================================
// 行读取器
// ============================================================================

/// 带行号的逐行读取器，行号从 1 开始用于错误定位
struct LineReader<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn try_next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some(line)
    }

    fn next_line(&mut self) -> Result<&'a str, FormatError> {
        let line_no = self.line_no + 1;
        self.try_next_line()
            .ok_or(FormatError::UnexpectedEof { line: line_no })
    }

    /// 跳过一行节头
    fn skip_line(&mut self) -> Result<(), FormatError> {
        self.next_line().map(|_| ())
    }

    /// 第一个冒号之后的文本；没有冒号时取整行
    fn read_value(&mut self) -> Result<&'a str, FormatError> {
        let line = self.next_line()?;
        let value = match line.find(':') {
            Some(index) => &line[index + 1..],
            None => line,
        };
        Ok(value.trim())
    }

    fn read_f32(&mut self) -> Result<f32, FormatError> {
        let value = self.read_value()?;
        value.parse().map_err(|_| FormatError::InvalidNumber {
            line: self.line_no,
            value: value.to_string(),
        })
    }

    fn read_usize(&mut self) -> Result<usize, FormatError> {
        let value = self.read_value()?;
        value.parse().map_err(|_| FormatError::InvalidNumber {
            line: self.line_no,
            value: value.to_string(),
        })
    }

    fn read_bool(&mut self) -> Result<bool, FormatError> {
        let value = self.read_value()?;
        parse_bool(value, self.line_no)
    }

    fn read_string(&mut self) -> Result<String, FormatError> {
        Ok(self.read_value()?.to_string())
    }
}

fn parse_bool(value: &str, line: usize) -> Result<bool, FormatError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FormatError::InvalidBool {
            line,
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// 曲线值序列化
// ============================================================================

fn save_active(out: &mut String, active: bool, always_active: bool) {
    if !always_active {
        let _ = writeln!(out, "active: {active}");
    }
}

/// alwaysActive 的值不写 active 行，加载时无条件视为激活
fn load_active(reader: &mut LineReader, active: &mut bool, always_active: bool) -> Result<(), FormatError> {
    if always_active {
        *active = true;
    } else {
        *active = reader.read_bool()?;
    }
    Ok(())
}

fn save_ranged(out: &mut String, value: &RangedValue) {
    save_active(out, value.active, value.always_active);
    if !value.is_active() {
        return;
    }
    let _ = writeln!(out, "lowMin: {}", value.low_min);
    let _ = writeln!(out, "lowMax: {}", value.low_max);
}

fn load_ranged(reader: &mut LineReader, value: &mut RangedValue) -> Result<(), FormatError> {
    load_active(reader, &mut value.active, value.always_active)?;
    if !value.is_active() {
        return Ok(());
    }
    value.low_min = reader.read_f32()?;
    value.low_max = reader.read_f32()?;
    Ok(())
}

fn save_scaled(out: &mut String, value: &ScaledValue) {
    save_active(out, value.active, value.always_active);
    if !value.is_active() {
        return;
    }
    let _ = writeln!(out, "lowMin: {}", value.low_min);
    let _ = writeln!(out, "lowMax: {}", value.low_max);
    let _ = writeln!(out, "highMin: {}", value.high_min);
    let _ = writeln!(out, "highMax: {}", value.high_max);
    let _ = writeln!(out, "relative: {}", value.relative);
    let _ = writeln!(out, "scalingCount: {}", value.scaling.len());
    for (i, scale) in value.scaling.iter().enumerate() {
        let _ = writeln!(out, "scaling{i}: {scale}");
    }
    let _ = writeln!(out, "timelineCount: {}", value.timeline.len());
    for (i, time) in value.timeline.iter().enumerate() {
        let _ = writeln!(out, "timeline{i}: {time}");
    }
}

fn load_scaled(reader: &mut LineReader, value: &mut ScaledValue) -> Result<(), FormatError> {
    load_active(reader, &mut value.active, value.always_active)?;
    if !value.is_active() {
        return Ok(());
    }
    value.low_min = reader.read_f32()?;
    value.low_max = reader.read_f32()?;
    value.high_min = reader.read_f32()?;
    value.high_max = reader.read_f32()?;
    value.relative = reader.read_bool()?;
    let scaling_count = reader.read_usize()?;
    value.scaling.clear();
    for _ in 0..scaling_count {
        value.scaling.push(reader.read_f32()?);
    }
    let timeline_count = reader.read_usize()?;
    value.timeline.clear();
    for _ in 0..timeline_count {
        value.timeline.push(reader.read_f32()?);
    }
    Ok(())
}

fn save_gradient(out: &mut String, value: &GradientValue) {
    save_active(out, value.active, value.always_active);
    if !value.is_active() {
        return;
    }
    let _ = writeln!(out, "colorsCount: {}", value.colors.len());
    for (i, color) in value.colors.iter().enumerate() {
        let _ = writeln!(out, "colors{i}: {color}");
    }
    let _ = writeln!(out, "timelineCount: {}", value.timeline.len());
    for (i, time) in value.timeline.iter().enumerate() {
        let _ = writeln!(out, "timeline{i}: {time}");
    }
}

fn load_gradient(reader: &mut LineReader, value: &mut GradientValue) -> Result<(), FormatError> {
    load_active(reader, &mut value.active, value.always_active)?;
    if !value.is_active() {
        return Ok(());
    }
    let colors_count = reader.read_usize()?;
    value.colors.clear();
    for _ in 0..colors_count {
        value.colors.push(reader.read_f32()?);
    }
    let timeline_count = reader.read_usize()?;
    value.timeline.clear();
    for _ in 0..timeline_count {
        value.timeline.push(reader.read_f32()?);
    }
    Ok(())
}

fn save_spawn_shape(out: &mut String, value: &SpawnShapeValue) {
    save_active(out, value.active, value.always_active);
    if !value.is_active() {
        return;
    }
    let _ = writeln!(out, "shape: {}", value.shape.as_str());
    if value.shape == SpawnShape::Ellipse {
        let _ = writeln!(out, "edges: {}", value.edges);
        let _ = writeln!(out, "side: {}", value.side.as_str());
    }
}

fn load_spawn_shape(reader: &mut LineReader, value: &mut SpawnShapeValue) -> Result<(), FormatError> {
    load_active(reader, &mut value.active, value.always_active)?;
    if !value.is_active() {
        return Ok(());
    }
    let shape = reader.read_string()?;
    value.shape = SpawnShape::parse(&shape).ok_or(FormatError::UnknownShape {
        line: reader.line_no,
        value: shape,
    })?;
    if value.shape == SpawnShape::Ellipse {
        value.edges = reader.read_bool()?;
        let side = reader.read_string()?;
        value.side = EllipseSide::parse(&side).ok_or(FormatError::UnknownSide {
            line: reader.line_no,
            value: side,
        })?;
    }
    Ok(())
}

// ============================================================================
// 发射器
// ============================================================================

impl ParticleEmitter {
    /// 序列化为定义文本
    pub fn save(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        out.push_str("- Delay -\n");
        save_ranged(&mut out, &self.delay_value);
        out.push_str("- Duration - \n");
        save_ranged(&mut out, &self.duration_value);
        out.push_str("- Count - \n");
        let _ = writeln!(out, "min: {}", self.min_particle_count);
        let _ = writeln!(out, "max: {}", self.max_particle_count);
        out.push_str("- Emission - \n");
        save_scaled(&mut out, &self.emission_value);
        out.push_str("- Life - \n");
        save_scaled(&mut out, &self.life_value);
        out.push_str("- Life Offset - \n");
        save_scaled(&mut out, &self.life_offset_value);
        out.push_str("- X Offset - \n");
        save_scaled(&mut out, &self.x_offset_value);
        out.push_str("- Y Offset - \n");
        save_scaled(&mut out, &self.y_offset_value);
        out.push_str("- Spawn Shape - \n");
        save_spawn_shape(&mut out, &self.spawn_shape_value);
        out.push_str("- Spawn Width - \n");
        save_scaled(&mut out, &self.spawn_width_value);
        out.push_str("- Spawn Height - \n");
        save_scaled(&mut out, &self.spawn_height_value);
        out.push_str("- Scale - \n");
        save_scaled(&mut out, &self.scale_value);
        out.push_str("- Velocity - \n");
        save_scaled(&mut out, &self.velocity_value);
        out.push_str("- Angle - \n");
        save_scaled(&mut out, &self.angle_value);
        out.push_str("- Rotation - \n");
        save_scaled(&mut out, &self.rotation_value);
        out.push_str("- Wind - \n");
        save_scaled(&mut out, &self.wind_value);
        out.push_str("- Gravity - \n");
        save_scaled(&mut out, &self.gravity_value);
        out.push_str("- Tint - \n");
        save_gradient(&mut out, &self.tint_value);
        out.push_str("- Transparency - \n");
        save_scaled(&mut out, &self.transparency_value);
        out.push_str("- Options - \n");
        let _ = writeln!(out, "attached: {}", self.attached);
        let _ = writeln!(out, "continuous: {}", self.continuous);
        let _ = writeln!(out, "aligned: {}", self.aligned);
        let _ = writeln!(out, "additive: {}", self.additive);
        let _ = writeln!(out, "behind: {}", self.behind);
        let _ = writeln!(out, "premultipliedAlpha: {}", self.premultiplied_alpha);
        out.push_str("- Image Path -\n");
        out.push_str(&self.image_path);
        out.push('\n');
        out
    }

    /// 从定义文本解析单个发射器
    pub fn load(text: &str) -> Result<Self, FormatError> {
        let mut reader = LineReader::new(text);
        Self::load_from(&mut reader)
    }

    fn load_from(reader: &mut LineReader) -> Result<Self, FormatError> {
        let mut emitter = Self::new();
        emitter.name = reader.read_string()?;
        reader.skip_line()?;
        load_ranged(reader, &mut emitter.delay_value)?;
        reader.skip_line()?;
        load_ranged(reader, &mut emitter.duration_value)?;
        reader.skip_line()?;
        emitter.min_particle_count = reader.read_usize()?;
        let max = reader.read_usize()?;
        emitter.set_max_particle_count(max);
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.emission_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.life_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.life_offset_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.x_offset_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.y_offset_value)?;
        reader.skip_line()?;
        load_spawn_shape(reader, &mut emitter.spawn_shape_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.spawn_width_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.spawn_height_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.scale_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.velocity_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.angle_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.rotation_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.wind_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.gravity_value)?;
        reader.skip_line()?;
        load_gradient(reader, &mut emitter.tint_value)?;
        reader.skip_line()?;
        load_scaled(reader, &mut emitter.transparency_value)?;
        reader.skip_line()?;
        emitter.attached = reader.read_bool()?;
        emitter.continuous = reader.read_bool()?;
        emitter.aligned = reader.read_bool()?;
        emitter.additive = reader.read_bool()?;
        emitter.behind = reader.read_bool()?;

        // 旧版定义没有 premultipliedAlpha 行，下一行直接是图片节头
        let line = reader.next_line()?;
        if line.trim_start().starts_with("premultipliedAlpha") {
            let value = line.find(':').map_or(line, |i| &line[i + 1..]).trim();
            emitter.premultiplied_alpha = parse_bool(value, reader.line_no)?;
            reader.skip_line()?;
        }
        emitter.image_path = reader.next_line()?.trim().to_string();
        Ok(emitter)
    }
}

// ============================================================================
// 特效
// ============================================================================

impl ParticleEffect {
    /// 序列化全部发射器，之间用一个空行分隔
    pub fn save(&self) -> String {
        let mut out = String::new();
        for (index, emitter) in self.emitters().iter().enumerate() {
            if index > 0 {
                out.push_str("\n\n");
            }
            out.push_str(&emitter.save());
        }
        out
    }

    /// 从定义文本解析特效，至少包含一个发射器
    pub fn load(text: &str) -> Result<Self, FormatError> {
        let mut reader = LineReader::new(text);
        let mut effect = Self::new();
        loop {
            let emitter = ParticleEmitter::load_from(&mut reader)?;
            effect.add_emitter(emitter);
            if reader.try_next_line().is_none() {
                break;
            }
            if reader.try_next_line().is_none() {
                break;
            }
        }
        Ok(effect)
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_emitter() -> ParticleEmitter {
        let mut emitter = ParticleEmitter::new();
        emitter.set_name("flame");
        emitter.set_image_path("flame.png");
        emitter.set_min_particle_count(4);
        emitter.set_max_particle_count(32);
        emitter.set_continuous(true);
        emitter.duration_curve().set_low(1500.0);
        emitter.life_curve().set_low_range(400.0, 600.0);
        emitter.life_curve().set_high_range(800.0, 1000.0);
        emitter.emission_curve().set_low(50.0);
        emitter.emission_curve().set_high(80.0);
        emitter.velocity_curve().set_active(true);
        emitter.velocity_curve().set_low_range(10.0, 20.0);
        emitter.velocity_curve().set_high_range(30.0, 60.0);
        emitter.scale_curve().set_low(0.5);
        emitter.scale_curve().set_high(1.5);
        emitter.scale_curve().set_timeline(vec![0.0, 0.5, 1.0]);
        emitter.scale_curve().set_scaling(vec![0.0, 1.0, 0.0]);
        emitter.tint_curve().set_colors(vec![1.0, 0.25, 0.0, 1.0, 1.0, 0.5]);
        emitter.tint_curve().set_timeline(vec![0.0, 1.0]);
        emitter.spawn_shape().set_shape(crate::spawn::SpawnShape::Ellipse);
        emitter.spawn_shape().set_edges(true);
        emitter.spawn_shape().set_side(EllipseSide::Top);
        emitter.spawn_width_curve().set_low(40.0);
        emitter.spawn_width_curve().set_high(40.0);
        emitter.spawn_height_curve().set_low(20.0);
        emitter.spawn_height_curve().set_high(20.0);
        emitter
    }

    #[test]
    fn test_emitter_round_trip_is_byte_identical() {
        let saved = sample_emitter().save();
        let loaded = ParticleEmitter::load(&saved).expect("parse");
        assert_eq!(loaded.save(), saved);
    }

    #[test]
    fn test_loaded_emitter_preserves_definition() {
        let saved = sample_emitter().save();
        let mut emitter = ParticleEmitter::load(&saved).expect("parse");

        assert_eq!(emitter.name(), "flame");
        assert_eq!(emitter.image_path(), "flame.png");
        assert_eq!(emitter.min_particle_count(), 4);
        assert_eq!(emitter.max_particle_count(), 32);
        assert!(emitter.is_continuous());
        assert_eq!(emitter.spawn_shape().shape(), SpawnShape::Ellipse);
        assert!(emitter.spawn_shape().is_edges());
        assert_eq!(emitter.spawn_shape().side(), EllipseSide::Top);
        let mut clone = emitter;
        assert_eq!(clone.scale_curve().timeline(), &[0.0, 0.5, 1.0]);
        assert_eq!(clone.scale_curve().scaling(), &[0.0, 1.0, 0.0]);
        assert_eq!(clone.life_curve().low_min(), 400.0);
        assert_eq!(clone.life_curve().high_max(), 1000.0);
    }

    #[test]
    fn test_effect_round_trip_with_two_emitters() {
        let mut effect = ParticleEffect::new();
        effect.add_emitter(sample_emitter());
        let mut smoke = sample_emitter();
        smoke.set_name("smoke");
        smoke.velocity_curve().set_active(false);
        effect.add_emitter(smoke);

        let saved = effect.save();
        let loaded = ParticleEffect::load(&saved).expect("parse");
        assert_eq!(loaded.emitters().len(), 2);
        assert_eq!(loaded.emitters()[1].name(), "smoke");
        assert_eq!(loaded.save(), saved);
    }

    #[test]
    fn test_inactive_curve_serializes_only_active_line() {
        let mut emitter = ParticleEmitter::new();
        emitter.velocity_curve().set_active(false);
        let saved = emitter.save();
        let velocity_section: Vec<&str> = saved
            .lines()
            .skip_while(|line| *line != "- Velocity - ")
            .take_while(|line| *line != "- Angle - ")
            .collect();
        assert_eq!(velocity_section, vec!["- Velocity - ", "active: false"]);
    }

    #[test]
    fn test_truncated_document_reports_eof() {
        let saved = sample_emitter().save();
        let truncated = &saved[..saved.len() / 2];
        let err = ParticleEmitter::load(truncated).expect_err("must fail");
        assert!(matches!(err, FormatError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_invalid_bool_reports_line() {
        let saved = sample_emitter().save().replace("attached: false", "attached: maybe");
        let err = ParticleEmitter::load(&saved).expect_err("must fail");
        match err {
            FormatError::InvalidBool { value, .. } => assert_eq!(value, "maybe"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let saved = sample_emitter().save().replace("shape: ellipse", "shape: hexagon");
        let err = ParticleEmitter::load(&saved).expect_err("must fail");
        assert!(matches!(err, FormatError::UnknownShape { .. }));
    }

    #[test]
    fn test_legacy_document_without_premultiplied_alpha() {
        let saved = sample_emitter().save().replace("premultipliedAlpha: false\n", "");
        let emitter = ParticleEmitter::load(&saved).expect("parse");
        assert!(!emitter.is_premultiplied_alpha());
        assert_eq!(emitter.image_path(), "flame.png");
    }

    #[test]
    fn test_section_headers_keep_exact_spelling() {
        let saved = ParticleEmitter::new().save();
        assert!(saved.contains("- Delay -\n"));
        assert!(saved.contains("- Duration - \n"));
        assert!(saved.contains("- Image Path -\n"));
    }
}
