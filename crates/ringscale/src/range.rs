use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const DEFAULT_MIN: i32 = 50;
pub const DEFAULT_MAX: i32 = 300;
pub const DEFAULT_INITIAL: i32 = 68;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Scale minimum {min} is greater than maximum {max}")]
    Inverted { min: i32, max: i32 },
    #[error("Initial value {initial} is outside {min}..={max}")]
    InitialOutOfRange { initial: i32, min: i32, max: i32 },
}

/// The integer values a scale can select, and where it starts.
///
/// Angles are offsets from the initial position in degrees: one degree of rotation is
/// one unit of value, and rotating clockwise lowers the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct ScaleRange {
    min: i32,
    max: i32,
    initial: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRange {
    #[serde(default = "default_min")]
    min: i32,
    #[serde(default = "default_max")]
    max: i32,
    #[serde(default = "default_initial")]
    initial: i32,
}

fn default_min() -> i32 {
    DEFAULT_MIN
}

fn default_max() -> i32 {
    DEFAULT_MAX
}

fn default_initial() -> i32 {
    DEFAULT_INITIAL
}

impl TryFrom<RawRange> for ScaleRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.initial)
    }
}

impl From<ScaleRange> for RawRange {
    fn from(range: ScaleRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            initial: range.initial,
        }
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            initial: DEFAULT_INITIAL,
        }
    }
}

impl ScaleRange {
    pub fn new(min: i32, max: i32, initial: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        if !(min..=max).contains(&initial) {
            return Err(RangeError::InitialOutOfRange { initial, min, max });
        }
        Ok(Self { min, max, initial })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn initial(&self) -> i32 {
        self.initial
    }

    pub fn values(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    pub fn angle_bounds(&self) -> RangeInclusive<f64> {
        let initial = f64::from(self.initial);
        (initial - f64::from(self.max))..=(initial - f64::from(self.min))
    }

    /// Saturates `angle` into [`Self::angle_bounds`]. NaN maps to the initial position.
    pub fn clamp_angle(&self, angle: f64) -> f64 {
        if angle.is_nan() {
            return 0.0;
        }
        let bounds = self.angle_bounds();
        angle.clamp(*bounds.start(), *bounds.end())
    }

    pub fn value_at(&self, angle: f64) -> i32 {
        let angle = self.clamp_angle(angle);
        let value = (f64::from(self.initial) - angle).round();
        // f64 -> i32 `as` saturates; the clamp keeps float noise from leaking out.
        (value as i32).clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(ScaleRange::new(50, 300, 68).is_ok());
        assert!(ScaleRange::new(5, 5, 5).is_ok());
        assert_eq!(
            ScaleRange::new(10, 0, 5),
            Err(RangeError::Inverted { min: 10, max: 0 })
        );
        assert_eq!(
            ScaleRange::new(0, 10, 11),
            Err(RangeError::InitialOutOfRange {
                initial: 11,
                min: 0,
                max: 10
            })
        );
    }

    #[test]
    fn test_default_angle_bounds() {
        let range = ScaleRange::default();
        assert_eq!(range.angle_bounds(), -232.0..=18.0);
    }

    #[test]
    fn test_value_at_rounds_half_away_from_zero() {
        let range = ScaleRange::default();
        let cases = vec![
            (0.0, 68),
            (0.4, 68),
            (0.5, 68),
            (0.6, 67),
            (-0.5, 69),
            (17.5, 51),
            (-20.0, 88),
            (20.0, 50),
            (-500.0, 300),
        ];

        for (angle, expected) in cases {
            assert_eq!(range.value_at(angle), expected, "angle {angle}");
        }
    }

    #[test]
    fn test_negative_values_round_away_from_zero() {
        let range = ScaleRange::new(-10, 10, 0).unwrap();
        assert_eq!(range.value_at(2.5), -3);
        assert_eq!(range.value_at(-2.5), 3);
    }

    #[test]
    fn test_clamp_angle_handles_nan() {
        let range = ScaleRange::default();
        assert_eq!(range.clamp_angle(f64::NAN), 0.0);
        assert_eq!(range.clamp_angle(f64::INFINITY), 18.0);
        assert_eq!(range.clamp_angle(f64::NEG_INFINITY), -232.0);
    }

    #[test]
    fn test_range_deserialization() {
        let range: ScaleRange = serde_json::from_str(r#"{"min": 0, "max": 100}"#).unwrap();
        assert_eq!(range, ScaleRange::new(0, 100, DEFAULT_INITIAL).unwrap());

        let out_of_range = serde_json::from_str::<ScaleRange>(r#"{"min": 0, "max": 10}"#);
        assert!(out_of_range.is_err());
    }
}
