//! # Color Types and Shading
//!
//! [`Rgb`] is the user-facing frame color: an 8-bit RGB value parsed from a
//! `#RRGGBB` hex string. Every highlight, shadow and accent tone in the frame
//! styles is derived from one base color via [`Rgb::shade`], so the user only
//! ever picks a single color.
//!
//! [`Rgba`] is the f32 working color used by the canvas during compositing.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FrameError;

/// 8-bit RGB color, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Derive a lighter (positive percent) or darker (negative percent) tint.
    ///
    /// Adds `round(2.55 * percent)` to each channel and clamps to `[0, 255]`
    /// (sums below 1 clamp to 0). `shade(0.0)` is the identity.
    pub fn shade(self, percent: f32) -> Rgb {
        let amt = (2.55 * percent).round() as i32;
        let adjust = |c: u8| -> u8 {
            let v = c as i32 + amt;
            if v >= 255 {
                255
            } else if v < 1 {
                0
            } else {
                v as u8
            }
        };
        Rgb::new(adjust(self.r), adjust(self.g), adjust(self.b))
    }
}

impl FromStr for Rgb {
    type Err = FrameError;

    /// Parse `#RRGGBB` (the leading `#` is optional, digits case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FrameError::InvalidConfig(format!(
                "malformed color {s:?}, expected #RRGGBB"
            )));
        }
        let num = u32::from_str_radix(hex, 16)
            .map_err(|e| FrameError::InvalidConfig(format!("malformed color {s:?}: {e}")))?;
        Ok(Rgb::new(
            (num >> 16) as u8,
            (num >> 8 & 0xFF) as u8,
            (num & 0xFF) as u8,
        ))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Straight-alpha f32 color used by the canvas, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Black at the given opacity, the workhorse for shadows and vignettes.
    pub const fn black(alpha: f32) -> Self {
        Rgba::new(0.0, 0.0, 0.0, alpha)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Rgba { a, ..self }
    }

    /// Linear interpolation between two colors, per channel.
    pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
        let l = |x: f32, y: f32| x + (y - x) * t;
        Rgba::new(l(a.r, b.r), l(a.g, b.g), l(a.b, b.b), l(a.a, b.a))
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        Rgba::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let c: Rgb = "#8B4513".parse().unwrap();
        assert_eq!(c, Rgb::new(0x8B, 0x45, 0x13));
        assert_eq!(c.to_string(), "#8b4513");
        assert_eq!("8b4513".parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#fff", "#12345", "#gggggg", "#1234567"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_shade_identity_at_zero() {
        for c in [Rgb::new(0, 0, 0), Rgb::new(0x8B, 0x45, 0x13), Rgb::new(255, 255, 255)] {
            assert_eq!(c.shade(0.0), c);
        }
    }

    #[test]
    fn test_shade_clamps() {
        assert_eq!(Rgb::new(250, 250, 250).shade(30.0), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::new(5, 5, 5).shade(-30.0), Rgb::new(0, 0, 0));
        // sums below 1 clamp to 0
        assert_eq!(Rgb::new(77, 77, 77).shade(-30.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_shade_amount() {
        // round(2.55 * 20) = 51
        assert_eq!(Rgb::new(100, 100, 100).shade(20.0), Rgb::new(151, 151, 151));
        assert_eq!(Rgb::new(100, 100, 100).shade(-20.0), Rgb::new(49, 49, 49));
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Rgb::new(0x0F, 0x0F, 0x1E);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#0f0f1e\"");
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), c);
    }
}
