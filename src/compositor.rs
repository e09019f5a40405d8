//! # Frame Compositor
//!
//! The orchestrator: owns the current source image, frame configuration and
//! render surface for one session, and fully regenerates the surface from
//! current state on every [`Compositor::render`] call.
//!
//! The session is a two-state machine: Empty (no image) and Ready. Rendering
//! in the Empty state is a no-op that leaves the surface untouched; loading
//! an image moves to Ready; [`Compositor::reset`] returns to Empty and
//! restores the default configuration.

use std::io::Cursor;

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::canvas::{Canvas, Paint};
use crate::color::Rgba;
use crate::config::FrameConfig;
use crate::error::{FrameError, Result};
use crate::mask;
use crate::styles::Layout;
use crate::units;

/// Immutable handle to decoded pixel data. The compositor only reads it.
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Decode image bytes (PNG, JPEG, ... — any format the `image` crate
    /// recognizes).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self {
            pixels: decoded.to_rgba8(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for SourceImage {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

/// Human-readable physical dimensions of the last render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionReadout {
    /// Content size line, e.g. `Image: 8.33" × 6.25"`.
    pub content: String,
    /// Framed size line, e.g. `With Frame (1.00"): 10.33" × 8.25"`.
    pub frame: String,
}

/// One framing session: current image, configuration and surface.
pub struct Compositor {
    image: Option<SourceImage>,
    config: FrameConfig,
    canvas: Canvas,
    readout: Option<DimensionReadout>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            image: None,
            config: FrameConfig::default(),
            canvas: Canvas::new(0, 0),
            readout: None,
        }
    }

    /// Decode and install a new source image, replacing any previous one.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<()> {
        self.image = Some(SourceImage::decode(bytes)?);
        Ok(())
    }

    /// Install an already-decoded source image.
    pub fn set_image(&mut self, image: SourceImage) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// True once an image is loaded (the Ready state).
    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Replace the configuration. Invalid configurations are rejected here so
    /// the render pipeline never sees one.
    pub fn set_config(&mut self, config: FrameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The render surface as of the last render.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn readout(&self) -> Option<&DimensionReadout> {
        self.readout.as_ref()
    }

    /// Regenerate the surface from current state, drawing randomness from OS
    /// entropy. Returns `Ok(false)` without touching the surface when no
    /// image is loaded.
    pub fn render(&mut self) -> Result<bool> {
        let mut rng = StdRng::from_os_rng();
        self.render_with_rng(&mut rng)
    }

    /// Regenerate the surface using the given random source, so callers can
    /// make the randomized styles (vintage, metallic) reproducible.
    pub fn render_with_rng(&mut self, rng: &mut dyn RngCore) -> Result<bool> {
        let Some(image) = &self.image else {
            return Ok(false);
        };
        self.config.validate()?;
        let config = self.config.clone();

        let (content_w, content_h) = if config.frame_only {
            units::letter_page_px()
        } else {
            (image.width() as f32, image.height() as f32)
        };
        let frame_px = units::to_pixels(config.width_in);

        // Final extents are settled before any painting happens.
        let renderer = config.style.renderer();
        let extra_bottom = renderer.extra_bottom(frame_px);
        let width = (content_w + frame_px * 2.0).round().max(1.0) as u32;
        let height = (content_h + frame_px * 2.0 + extra_bottom).round().max(1.0) as u32;
        let layout = Layout {
            frame_px,
            content_w,
            content_h,
            width: width as f32,
            height: height as f32,
        };

        self.canvas.resize(width, height);
        renderer.paint(&mut self.canvas, &layout, config.color, rng);

        if config.frame_only {
            self.canvas.fill_rect(
                frame_px,
                frame_px,
                content_w,
                content_h,
                &Paint::Solid(Rgba::WHITE),
            );
        } else {
            self.canvas.draw_image(image.pixels(), frame_px, frame_px);
        }

        mask::apply(&mut self.canvas, frame_px, config.corner_mode);

        self.readout = Some(if config.frame_only {
            DimensionReadout {
                content: format!(
                    "Test Area: {}\" × {}\" (Letter Size - Print at 100%)",
                    units::LETTER_WIDTH_IN,
                    units::LETTER_HEIGHT_IN
                ),
                frame: format!(
                    "Frame Thickness: {:.2}\" | Measure printed frame to verify accuracy",
                    config.width_in
                ),
            }
        } else {
            let total_w = units::to_inches(content_w + frame_px * 2.0);
            let total_h = units::to_inches(content_h + frame_px * 2.0);
            DimensionReadout {
                content: format!(
                    "Image: {:.2}\" × {:.2}\"",
                    units::to_inches(content_w),
                    units::to_inches(content_h)
                ),
                frame: format!(
                    "With Frame ({:.2}\"): {total_w:.2}\" × {total_h:.2}\"",
                    config.width_in
                ),
            }
        });
        Ok(true)
    }

    /// Encode the last rendered surface as PNG bytes.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        if self.readout.is_none() {
            return Err(FrameError::Render("no rendered frame to export".into()));
        }
        let snapshot = self.canvas.to_image();
        let mut bytes = Vec::new();
        snapshot
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .map_err(FrameError::Encode)?;
        Ok(bytes)
    }

    /// Clear the loaded image and restore the default configuration.
    /// Returns the restored configuration.
    pub fn reset(&mut self) -> FrameConfig {
        self.image = None;
        self.config = FrameConfig::default();
        self.readout = None;
        self.canvas.resize(0, 0);
        self.config.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameStyle;

    fn test_image(w: u32, h: u32) -> SourceImage {
        SourceImage::from(RgbaImage::from_pixel(w, h, image::Rgba([40, 80, 120, 255])))
    }

    #[test]
    fn test_empty_render_is_noop() {
        let mut compositor = Compositor::new();
        assert!(!compositor.render().unwrap());
        assert_eq!(compositor.canvas().width(), 0);
        assert!(compositor.readout().is_none());
        assert!(compositor.export_png().is_err());
    }

    #[test]
    fn test_ready_after_set_image() {
        let mut compositor = Compositor::new();
        assert!(!compositor.is_ready());
        compositor.set_image(test_image(10, 10));
        assert!(compositor.is_ready());
        assert!(compositor.render().unwrap());
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let mut compositor = Compositor::new();
        let bad = FrameConfig {
            width_in: -0.5,
            ..Default::default()
        };
        assert!(compositor.set_config(bad).is_err());
        // previous config untouched
        assert_eq!(compositor.config(), &FrameConfig::default());
    }

    #[test]
    fn test_content_offset() {
        let mut compositor = Compositor::new();
        compositor.set_image(test_image(50, 40));
        compositor
            .set_config(FrameConfig {
                style: FrameStyle::Classic,
                width_in: 0.5,
                ..Default::default()
            })
            .unwrap();
        compositor.render().unwrap();
        // 48px frame: image pixel (0,0) lands at (48,48)
        let snapshot = compositor.canvas().to_image();
        assert_eq!(snapshot.get_pixel(48 + 25, 48 + 20).0, [40, 80, 120, 255]);
    }
}
