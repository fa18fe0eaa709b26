use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
#[display("{_0}dp")]
pub struct Dp(f64);

impl Dp {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn clamped(self) -> Self {
        if self.0.is_finite() && self.0 > 0.0 {
            self
        } else {
            Self(0.0)
        }
    }

    pub fn to_px(self, density: Density) -> f64 {
        self.clamped().0 * density.scale()
    }

    pub fn text_to_px(self, density: Density) -> f64 {
        self.clamped().0 * density.scale() * density.font_scale()
    }
}

/// Pixels per [`Dp`], resolved by the host once per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Density {
    scale: f64,
    font_scale: f64,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Density {
    pub fn new(scale: f64, font_scale: f64) -> Self {
        Self { scale, font_scale }
    }

    pub fn scale(&self) -> f64 {
        Self::sane(self.scale)
    }

    pub fn font_scale(&self) -> f64 {
        Self::sane(self.font_scale)
    }

    fn sane(factor: f64) -> f64 {
        if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            0.0
        }
    }
}
