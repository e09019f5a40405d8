//! # Polaroid Frame
//!
//! Cream instant-photo frame. The canvas grows by 2.5x the frame thickness
//! below the content for a caption band, which gets a soft vertical vignette
//! and a thin decorative line above it. The user color is ignored.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, LinearGradient, Paint, Shadow, Stop};
use crate::color::{Rgb, Rgba};

const CREAM: Rgb = Rgb::new(0xF5, 0xE6, 0xD3);

pub struct Polaroid;

impl StyleRenderer for Polaroid {
    fn name(&self) -> &'static str {
        "polaroid"
    }

    fn extra_bottom(&self, frame_px: f32) -> f32 {
        frame_px * 2.5
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, _color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let cream = solid(CREAM);

        canvas.fill_rect(0.0, 0.0, w, h, &cream);

        // Outer shadow pass over the whole card
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.15),
            blur: 8.0,
            dx: 2.0,
            dy: 8.0,
        });
        canvas.fill_rect(0.0, 0.0, w, h, &cream);
        canvas.clear_shadow();

        // Vignette over the caption band
        let band_top = l.content_h + size * 2.0;
        canvas.fill_rect(
            0.0,
            band_top,
            w,
            h - band_top,
            &Paint::Linear(LinearGradient {
                x0: 0.0,
                y0: band_top,
                x1: 0.0,
                y1: h,
                stops: vec![
                    Stop::new(0.0, Rgba::black(0.0)),
                    Stop::new(0.5, Rgba::black(0.02)),
                    Stop::new(1.0, Rgba::black(0.08)),
                ],
            }),
        );

        // Decorative line above the caption band
        canvas.stroke_line(
            size,
            band_top - 2.0,
            w - size,
            band_top - 2.0,
            1.0,
            &Paint::Solid(Rgba::black(0.1)),
        );
    }
}
