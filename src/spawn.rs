//! 生成形状采样
//!
//! 粒子初始偏移从点/线/矩形/椭圆四种发射区域中采样。
//! 采样函数是无状态的，宽高由调用方按当前生命百分比缩放后传入。

use crate::curve::random_between;

/// 发射区域形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnShape {
    #[default]
    Point,
    Line,
    Square,
    Ellipse,
}

impl SpawnShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnShape::Point => "point",
            SpawnShape::Line => "line",
            SpawnShape::Square => "square",
            SpawnShape::Ellipse => "ellipse",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "point" => Some(SpawnShape::Point),
            "line" => Some(SpawnShape::Line),
            "square" => Some(SpawnShape::Square),
            "ellipse" => Some(SpawnShape::Ellipse),
            _ => None,
        }
    }
}

/// 椭圆边缘采样的角度限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EllipseSide {
    #[default]
    Both,
    Top,
    Bottom,
}

impl EllipseSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            EllipseSide::Both => "both",
            EllipseSide::Top => "top",
            EllipseSide::Bottom => "bottom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "both" => Some(EllipseSide::Both),
            "top" => Some(EllipseSide::Top),
            "bottom" => Some(EllipseSide::Bottom),
            _ => None,
        }
    }
}

/// 发射区域配置
///
/// `edges` 和 `side` 只对椭圆有意义。
#[derive(Debug, Clone, Default)]
pub struct SpawnShapeValue {
    pub(crate) active: bool,
    pub(crate) always_active: bool,
    pub(crate) shape: SpawnShape,
    pub(crate) edges: bool,
    pub(crate) side: EllipseSide,
}

impl SpawnShapeValue {
    pub fn is_active(&self) -> bool {
        self.always_active || self.active
    }

    pub fn shape(&self) -> SpawnShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: SpawnShape) {
        self.shape = shape;
    }

    pub fn is_edges(&self) -> bool {
        self.edges
    }

    pub fn set_edges(&mut self, edges: bool) {
        self.edges = edges;
    }

    pub fn side(&self) -> EllipseSide {
        self.side
    }

    pub fn set_side(&mut self, side: EllipseSide) {
        self.side = side;
    }
}

/// 椭圆边缘采样得到的角度，同时兼做粒子初始运动方向
#[derive(Debug, Clone, Copy)]
pub struct EdgeAngle {
    pub degrees: f32,
    pub cos: f32,
    pub sin: f32,
}

/// 相对锚点的采样偏移
#[derive(Debug, Clone, Copy)]
pub struct SpawnOffset {
    pub dx: f32,
    pub dy: f32,
    pub edge_angle: Option<EdgeAngle>,
}

impl SpawnOffset {
    const ZERO: SpawnOffset = SpawnOffset {
        dx: 0.0,
        dy: 0.0,
        edge_angle: None,
    };

    fn at(dx: f32, dy: f32) -> Self {
        SpawnOffset {
            dx,
            dy,
            edge_angle: None,
        }
    }
}

/// 在发射区域内采样一个偏移
///
/// 退化输入 (零尺寸椭圆) 直接回退到锚点，不做除零运算。
pub fn sample_offset(value: &SpawnShapeValue, width: f32, height: f32) -> SpawnOffset {
    match value.shape {
        SpawnShape::Point => SpawnOffset::ZERO,
        SpawnShape::Line => {
            if width != 0.0 {
                let line_x = random_between(0.0, width);
                SpawnOffset::at(line_x, line_x * (height / width))
            } else {
                SpawnOffset::at(0.0, random_between(0.0, height))
            }
        }
        SpawnShape::Square => SpawnOffset::at(
            random_between(0.0, width) - width / 2.0,
            random_between(0.0, height) - height / 2.0,
        ),
        SpawnShape::Ellipse => {
            let radius_x = width / 2.0;
            let radius_y = height / 2.0;
            if radius_x == 0.0 || radius_y == 0.0 {
                return SpawnOffset::ZERO;
            }
            let scale_y = radius_x / radius_y;
            if value.edges {
                // top/bottom 的 179 上界是刻意的开边界
                let degrees = match value.side {
                    EllipseSide::Top => -random_between(0.0, 179.0),
                    EllipseSide::Bottom => random_between(0.0, 179.0),
                    EllipseSide::Both => random_between(0.0, 360.0),
                };
                let (sin, cos) = degrees.to_radians().sin_cos();
                SpawnOffset {
                    dx: cos * radius_x,
                    dy: sin * radius_x / scale_y,
                    edge_angle: Some(EdgeAngle { degrees, cos, sin }),
                }
            } else {
                // 拒绝采样：在包围盒内取点，按 y 轴压缩后落回椭圆
                let radius2 = radius_x * radius_x;
                loop {
                    let px = random_between(0.0, width) - radius_x;
                    let py = random_between(0.0, height) - radius_y;
                    if px * px + py * py <= radius2 {
                        return SpawnOffset::at(px, py / scale_y);
                    }
                }
            }
        }
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ellipse(edges: bool, side: EllipseSide) -> SpawnShapeValue {
        SpawnShapeValue {
            shape: SpawnShape::Ellipse,
            edges,
            side,
            ..Default::default()
        }
    }

    #[test]
    fn test_point_returns_anchor() {
        let value = SpawnShapeValue::default();
        let offset = sample_offset(&value, 100.0, 100.0);
        assert_eq!((offset.dx, offset.dy), (0.0, 0.0));
    }

    #[test]
    fn test_square_within_bounds() {
        let value = SpawnShapeValue {
            shape: SpawnShape::Square,
            ..Default::default()
        };
        for _ in 0..1000 {
            let offset = sample_offset(&value, 20.0, 10.0);
            assert!(offset.dx >= -10.0 && offset.dx <= 10.0);
            assert!(offset.dy >= -5.0 && offset.dy <= 5.0);
        }
    }

    #[test]
    fn test_line_zero_width_falls_back_to_vertical() {
        let value = SpawnShapeValue {
            shape: SpawnShape::Line,
            ..Default::default()
        };
        for _ in 0..100 {
            let offset = sample_offset(&value, 0.0, 50.0);
            assert_eq!(offset.dx, 0.0);
            assert!(offset.dy >= 0.0 && offset.dy <= 50.0);
        }
    }

    #[test]
    fn test_line_follows_slope() {
        let value = SpawnShapeValue {
            shape: SpawnShape::Line,
            ..Default::default()
        };
        for _ in 0..100 {
            let offset = sample_offset(&value, 100.0, 50.0);
            assert!((offset.dy - offset.dx * 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ellipse_fill_inside() {
        let value = ellipse(false, EllipseSide::Both);
        for _ in 0..1000 {
            let offset = sample_offset(&value, 40.0, 20.0);
            let nx = offset.dx / 20.0;
            let ny = offset.dy / 10.0;
            assert!(nx * nx + ny * ny <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_ellipse_edge_top_angle_range() {
        let value = ellipse(true, EllipseSide::Top);
        for _ in 0..1000 {
            let offset = sample_offset(&value, 40.0, 20.0);
            let angle = offset.edge_angle.expect("edge sampling yields an angle");
            assert!(angle.degrees >= -179.0 && angle.degrees <= 0.0);
        }
    }

    #[test]
    fn test_ellipse_edge_bottom_angle_range() {
        let value = ellipse(true, EllipseSide::Bottom);
        for _ in 0..1000 {
            let offset = sample_offset(&value, 40.0, 20.0);
            let angle = offset.edge_angle.expect("edge sampling yields an angle");
            assert!(angle.degrees >= 0.0 && angle.degrees <= 179.0);
        }
    }

    #[test]
    fn test_degenerate_ellipse_returns_anchor() {
        let value = ellipse(true, EllipseSide::Both);
        let offset = sample_offset(&value, 0.0, 20.0);
        assert_eq!((offset.dx, offset.dy), (0.0, 0.0));
        assert!(offset.edge_angle.is_none());

        let value = ellipse(false, EllipseSide::Both);
        let offset = sample_offset(&value, 40.0, 0.0);
        assert_eq!((offset.dx, offset.dy), (0.0, 0.0));
    }
}
