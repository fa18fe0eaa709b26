use crate::color::Color;
use crate::units::{Density, Dp};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum TickKind {
    Normal,
    FiveStep,
    TenStep,
}

impl TickKind {
    pub fn classify(value: i32) -> Self {
        if value % 10 == 0 {
            Self::TenStep
        } else if value % 5 == 0 {
            Self::FiveStep
        } else {
            Self::Normal
        }
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self, Self::TenStep)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleStyle {
    pub scale_width: Dp,
    pub radius: Dp,
    pub ring_color: Color,
    pub shadow_color: Color,
    pub shadow_blur: Dp,
    pub normal_line_color: Color,
    pub five_step_line_color: Color,
    pub ten_step_line_color: Color,
    pub normal_line_length: Dp,
    pub five_step_line_length: Dp,
    pub ten_step_line_length: Dp,
    pub line_width: Dp,
    pub indicator_color: Color,
    pub indicator_length: Dp,
    pub indicator_width: Dp,
    pub label_color: Color,
    pub label_gap: Dp,
    pub text_size: Dp,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        let green = Color::from_rgba8(0x00, 0xff, 0x00, 0xff);
        Self {
            scale_width: Dp::new(150.0),
            radius: Dp::new(550.0),
            ring_color: Color::white(),
            shadow_color: Color::from_rgba8(0, 0, 0, 50),
            shadow_blur: Dp::new(60.0),
            normal_line_color: Color::from_rgba8(0xcc, 0xcc, 0xcc, 0xff),
            five_step_line_color: green,
            ten_step_line_color: Color::black(),
            normal_line_length: Dp::new(15.0),
            five_step_line_length: Dp::new(25.0),
            ten_step_line_length: Dp::new(35.0),
            line_width: Dp::new(1.0),
            indicator_color: green,
            indicator_length: Dp::new(60.0),
            indicator_width: Dp::new(8.0),
            label_color: Color::black(),
            label_gap: Dp::new(5.0),
            text_size: Dp::new(18.0),
        }
    }
}

impl ScaleStyle {
    pub fn line_color(&self, kind: TickKind) -> Color {
        match kind {
            TickKind::Normal => self.normal_line_color,
            TickKind::FiveStep => self.five_step_line_color,
            TickKind::TenStep => self.ten_step_line_color,
        }
    }

    pub fn line_length(&self, kind: TickKind) -> Dp {
        match kind {
            TickKind::Normal => self.normal_line_length,
            TickKind::FiveStep => self.five_step_line_length,
            TickKind::TenStep => self.ten_step_line_length,
        }
    }

    /// Replaces negative or non-finite lengths with zero, logging each one.
    pub fn sanitized(mut self) -> Self {
        let fields: [(&str, &mut Dp); 11] = [
            ("scale_width", &mut self.scale_width),
            ("radius", &mut self.radius),
            ("shadow_blur", &mut self.shadow_blur),
            ("normal_line_length", &mut self.normal_line_length),
            ("five_step_line_length", &mut self.five_step_line_length),
            ("ten_step_line_length", &mut self.ten_step_line_length),
            ("line_width", &mut self.line_width),
            ("indicator_length", &mut self.indicator_length),
            ("indicator_width", &mut self.indicator_width),
            ("label_gap", &mut self.label_gap),
            ("text_size", &mut self.text_size),
        ];
        for (name, length) in fields {
            let clamped = length.clamped();
            if clamped != *length {
                log::warn!("Scale style '{}' is {}, using 0", name, length);
                *length = clamped;
            }
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMetrics {
    pub scale_width: f64,
    pub radius: f64,
    pub shadow_blur: f64,
    pub line_lengths: [f64; 3],
    pub line_width: f64,
    pub indicator_length: f64,
    pub indicator_width: f64,
    pub label_gap: f64,
    pub text_size: f64,
}

impl ScaleMetrics {
    pub fn resolve(style: &ScaleStyle, density: Density) -> Self {
        let px = |dp: Dp| dp.to_px(density);
        Self {
            scale_width: px(style.scale_width),
            radius: px(style.radius),
            shadow_blur: px(style.shadow_blur),
            line_lengths: [
                px(style.normal_line_length),
                px(style.five_step_line_length),
                px(style.ten_step_line_length),
            ],
            line_width: px(style.line_width),
            indicator_length: px(style.indicator_length),
            indicator_width: px(style.indicator_width),
            label_gap: px(style.label_gap),
            text_size: style.text_size.text_to_px(density),
        }
    }

    pub fn line_length(&self, kind: TickKind) -> f64 {
        self.line_lengths[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tick_classification_table() {
        for value in 0..=100 {
            let expected = match value {
                v if v % 10 == 0 => TickKind::TenStep,
                v if v % 5 == 0 => TickKind::FiveStep,
                _ => TickKind::Normal,
            };
            assert_eq!(TickKind::classify(value), expected, "value {value}");
        }

        let counts = TickKind::iter()
            .map(|kind| {
                (0..=100)
                    .filter(|&v| TickKind::classify(v) == kind)
                    .count()
            })
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![80, 10, 11]);
    }

    #[test]
    fn test_negative_values_classify_by_magnitude() {
        assert_eq!(TickKind::classify(-20), TickKind::TenStep);
        assert_eq!(TickKind::classify(-15), TickKind::FiveStep);
        assert_eq!(TickKind::classify(-3), TickKind::Normal);
    }

    #[test]
    fn test_style_deserialization_fills_defaults() {
        let style: ScaleStyle = serde_json::from_str(
            r##"{"radius": 300.0, "ten_step_line_color": "#ff0000", "text_size": 12.0}"##,
        )
        .unwrap();

        assert_eq!(style.radius, Dp::new(300.0));
        assert_eq!(
            style.ten_step_line_color,
            Color::from_rgba8(0xff, 0x00, 0x00, 0xff)
        );
        assert_eq!(style.scale_width, ScaleStyle::default().scale_width);
        assert_eq!(style.line_color(TickKind::Normal), ScaleStyle::default().normal_line_color);
    }

    #[test]
    fn test_sanitized_clamps_negative_lengths() {
        let style = ScaleStyle {
            radius: Dp::new(-10.0),
            text_size: Dp::new(f64::NAN),
            ..ScaleStyle::default()
        }
        .sanitized();

        assert_eq!(style.radius, Dp::new(0.0));
        assert_eq!(style.text_size, Dp::new(0.0));
        assert_eq!(style.scale_width, Dp::new(150.0));
    }

    #[test]
    fn test_metrics_resolve() {
        let metrics = ScaleMetrics::resolve(&ScaleStyle::default(), Density::new(2.0, 1.5));
        assert_eq!(metrics.radius, 1100.0);
        assert_eq!(metrics.line_length(TickKind::Normal), 30.0);
        assert_eq!(metrics.line_length(TickKind::FiveStep), 50.0);
        assert_eq!(metrics.line_length(TickKind::TenStep), 70.0);
        assert_eq!(metrics.text_size, 54.0);
    }
}
