//! # Frame Configuration
//!
//! Value types describing one framing job: style, color, thickness in inches,
//! corner treatment and the frame-only toggle. Configurations are plain data,
//! serializable to JSON, and validated up front so the render pipeline never
//! sees a bad style identifier or a non-positive thickness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{FrameError, Result};

/// Default frame color, a warm saddle brown.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x8B, 0x45, 0x13);

/// Default frame thickness, inches.
pub const DEFAULT_WIDTH_IN: f32 = 1.0;

/// The fourteen frame styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    Classic,
    Modern,
    Ornate,
    Polaroid,
    Shadow,
    Double,
    Neon,
    Vintage,
    Emboss,
    Architectural,
    Minimalist,
    Victorian,
    Classical,
    Metallic,
}

impl FrameStyle {
    /// All styles, in display order.
    pub const ALL: [FrameStyle; 14] = [
        FrameStyle::Classic,
        FrameStyle::Modern,
        FrameStyle::Ornate,
        FrameStyle::Polaroid,
        FrameStyle::Shadow,
        FrameStyle::Double,
        FrameStyle::Neon,
        FrameStyle::Vintage,
        FrameStyle::Emboss,
        FrameStyle::Architectural,
        FrameStyle::Minimalist,
        FrameStyle::Victorian,
        FrameStyle::Classical,
        FrameStyle::Metallic,
    ];

    /// Lowercase style identifier.
    pub fn name(self) -> &'static str {
        match self {
            FrameStyle::Classic => "classic",
            FrameStyle::Modern => "modern",
            FrameStyle::Ornate => "ornate",
            FrameStyle::Polaroid => "polaroid",
            FrameStyle::Shadow => "shadow",
            FrameStyle::Double => "double",
            FrameStyle::Neon => "neon",
            FrameStyle::Vintage => "vintage",
            FrameStyle::Emboss => "emboss",
            FrameStyle::Architectural => "architectural",
            FrameStyle::Minimalist => "minimalist",
            FrameStyle::Victorian => "victorian",
            FrameStyle::Classical => "classical",
            FrameStyle::Metallic => "metallic",
        }
    }
}

impl fmt::Display for FrameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameStyle {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(FrameStyle::Classic),
            "modern" => Ok(FrameStyle::Modern),
            "ornate" => Ok(FrameStyle::Ornate),
            "polaroid" => Ok(FrameStyle::Polaroid),
            "shadow" => Ok(FrameStyle::Shadow),
            "double" => Ok(FrameStyle::Double),
            "neon" => Ok(FrameStyle::Neon),
            "vintage" => Ok(FrameStyle::Vintage),
            "emboss" => Ok(FrameStyle::Emboss),
            "architectural" => Ok(FrameStyle::Architectural),
            "minimalist" => Ok(FrameStyle::Minimalist),
            "victorian" => Ok(FrameStyle::Victorian),
            "classical" => Ok(FrameStyle::Classical),
            "metallic" => Ok(FrameStyle::Metallic),
            other => Err(FrameError::InvalidConfig(format!(
                "unknown frame style {other:?}"
            ))),
        }
    }
}

/// Corner treatment of the finished composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerMode {
    Rounded,
    Square,
}

/// One framing job, caller-owned and passed by value into every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub style: FrameStyle,
    pub color: Rgb,
    /// Frame thickness in inches. Must be positive and finite.
    pub width_in: f32,
    pub corner_mode: CornerMode,
    /// Render the frame around a fixed letter page instead of the image,
    /// for physical print tests.
    pub frame_only: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            style: FrameStyle::Classic,
            color: DEFAULT_COLOR,
            width_in: DEFAULT_WIDTH_IN,
            corner_mode: CornerMode::Rounded,
            frame_only: false,
        }
    }
}

impl FrameConfig {
    /// Reject configurations the painters must never see.
    pub fn validate(&self) -> Result<()> {
        if !self.width_in.is_finite() || self.width_in <= 0.0 {
            return Err(FrameError::InvalidConfig(format!(
                "frame width must be a positive number of inches, got {}",
                self.width_in
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str_round_trip() {
        for style in FrameStyle::ALL {
            assert_eq!(style.name().parse::<FrameStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_style_from_str_rejects_unknown() {
        assert!("baroque".parse::<FrameStyle>().is_err());
        assert!("".parse::<FrameStyle>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.style, FrameStyle::Classic);
        assert_eq!(config.color, Rgb::new(0x8B, 0x45, 0x13));
        assert_eq!(config.width_in, 1.0);
        assert_eq!(config.corner_mode, CornerMode::Rounded);
        assert!(!config.frame_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_width() {
        for bad in [0.0f32, -1.0, f32::NAN, f32::INFINITY] {
            let config = FrameConfig {
                width_in: bad,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "width {bad} should be rejected");
        }
    }

    #[test]
    fn test_config_json() {
        let json = r##"{"style":"neon","color":"#00ffcc","width_in":0.5,"corner_mode":"square"}"##;
        let config: FrameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.style, FrameStyle::Neon);
        assert_eq!(config.corner_mode, CornerMode::Square);
        assert!(!config.frame_only);
        let back = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<FrameConfig>(&back).unwrap(), config);
    }
}
