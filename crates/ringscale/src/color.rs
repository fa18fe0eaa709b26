use palette::Srgba;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A straight-alpha sRGB color, written as `#rrggbb`, `#rrggbbaa` or a CSS color name.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct Color(Srgba<f64>);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color '{0}': expected #rrggbb, #rrggbbaa or a CSS color name")]
    Invalid(String),
}

impl Color {
    pub fn white() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 1.0)
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        let c = |v: u8| f64::from(v) / 255.0;
        Self::rgba(c(red), c(green), c(blue), c(alpha))
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, u8::MAX)),
            8 => Some(Self::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => palette::named::from_str(&s.to_ascii_lowercase())
                .map(|c| Self::from_rgba8(c.red, c.green, c.blue, u8::MAX)),
        };
        parsed.ok_or_else(|| ColorError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.into_components();
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", c(r), c(g), c(b), c(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        let cases = vec![
            ("#ffffff", Color::white()),
            ("#000000ff", Color::black()),
            ("white", Color::white()),
            ("Black", Color::black()),
            ("  #FFFFFF  ", Color::white()),
            ("#00000032", Color::from_rgba8(0, 0, 0, 50)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Color>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_named_color_table() {
        let green: Color = "green".parse().unwrap();
        assert_eq!(green, Color::from_rgba8(0, 128, 0, 255));
        let gray: Color = "lightgray".parse().unwrap();
        assert_eq!(gray, Color::from_rgba8(211, 211, 211, 255));
    }

    #[test]
    fn test_invalid_colors() {
        for input in ["", "#fff", "#gggggg", "not-a-color", "#ffffff0"] {
            assert!(input.parse::<Color>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_display_is_parseable() {
        let color = Color::from_rgba8(12, 200, 7, 99);
        assert_eq!(color.to_string(), "#0cc80763");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_color_deserialization() {
        let color: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(color, Color::from_rgba8(0, 0, 255, 255));
        assert!(serde_json::from_str::<Color>("\"blurple\"").is_err());
    }
}
