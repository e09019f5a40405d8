//! # Frame Styles
//!
//! The style renderer registry. Each of the fourteen frame styles is
//! self-contained in its own module with a unit struct implementing the
//! [`StyleRenderer`] trait; only one runs per render and they share no state.
//!
//! ## Adding a New Style
//!
//! 1. Create `src/styles/mystyle.rs` with a struct implementing [`StyleRenderer`]
//! 2. Add `pub mod mystyle;` below
//! 3. Add the variant to [`FrameStyle`] and wire it up in [`FrameStyle::renderer`]
//!
//! Painters receive a [`Layout`] and must derive every geometric quantity
//! from the frame thickness and the content dimensions it carries; physical
//! units never reach a painter. Styles that need extra canvas room (polaroid's
//! caption band) declare it via [`StyleRenderer::extra_bottom`] before any
//! painting happens, so extents are final by the time `paint` runs.

pub mod architectural;
pub mod classic;
pub mod classical;
pub mod double;
pub mod emboss;
pub mod metallic;
pub mod minimalist;
pub mod modern;
pub mod neon;
pub mod ornate;
pub mod polaroid;
pub mod shadow;
pub mod victorian;
pub mod vintage;

use rand::RngCore;

use crate::canvas::{Canvas, Paint};
use crate::color::{Rgb, Rgba};
use crate::config::FrameStyle;

/// Resolved pixel geometry for one render pass.
///
/// `content_w`/`content_h` are the dimensions of the content rectangle (the
/// image, or the letter page in frame-only mode); `width`/`height` are the
/// final canvas extents including the frame on all sides and any style
/// extra space.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Frame thickness in pixels.
    pub frame_px: f32,
    pub content_w: f32,
    pub content_h: f32,
    /// Final canvas width in pixels.
    pub width: f32,
    /// Final canvas height in pixels.
    pub height: f32,
}

/// Trait for frame painters.
pub trait StyleRenderer: Send + Sync {
    /// Style name (lowercase, e.g., "classic").
    fn name(&self) -> &'static str;

    /// Extra canvas height below the content, in pixels. Zero for all styles
    /// except polaroid's caption band.
    fn extra_bottom(&self, _frame_px: f32) -> f32 {
        0.0
    }

    /// Paint the frame onto an already-sized canvas. The content rectangle at
    /// `(frame_px, frame_px)` is composited over the result afterwards.
    fn paint(&self, canvas: &mut Canvas, layout: &Layout, color: Rgb, rng: &mut dyn RngCore);
}

impl FrameStyle {
    /// The painter for this style.
    pub fn renderer(self) -> &'static dyn StyleRenderer {
        match self {
            FrameStyle::Classic => &classic::Classic,
            FrameStyle::Modern => &modern::Modern,
            FrameStyle::Ornate => &ornate::Ornate,
            FrameStyle::Polaroid => &polaroid::Polaroid,
            FrameStyle::Shadow => &shadow::ShadowBox,
            FrameStyle::Double => &double::Double,
            FrameStyle::Neon => &neon::Neon,
            FrameStyle::Vintage => &vintage::Vintage,
            FrameStyle::Emboss => &emboss::Emboss,
            FrameStyle::Architectural => &architectural::Architectural,
            FrameStyle::Minimalist => &minimalist::Minimalist,
            FrameStyle::Victorian => &victorian::Victorian,
            FrameStyle::Classical => &classical::Classical,
            FrameStyle::Metallic => &metallic::Metallic,
        }
    }
}

/// Opaque solid paint from a frame color.
pub(crate) fn solid(color: Rgb) -> Paint {
    Paint::Solid(Rgba::from(color))
}

/// Solid paint from a frame color at reduced opacity.
pub(crate) fn solid_alpha(color: Rgb, alpha: f32) -> Paint {
    Paint::Solid(Rgba::from(color).with_alpha(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_match() {
        for style in FrameStyle::ALL {
            assert_eq!(style.renderer().name(), style.name());
        }
    }

    #[test]
    fn test_only_polaroid_grows_the_canvas() {
        for style in FrameStyle::ALL {
            let extra = style.renderer().extra_bottom(96.0);
            if style == FrameStyle::Polaroid {
                assert_eq!(extra, 240.0);
            } else {
                assert_eq!(extra, 0.0, "{style} should not grow the canvas");
            }
        }
    }
}
