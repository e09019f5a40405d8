//! # Metallic Frame
//!
//! Brushed-metal frame on a fixed grayscale palette (the user color is
//! ignored): randomized vertical brush-stroke texture in two passes, a
//! beveled outer line, a thick vertical-gradient main border and a dark
//! inner shadow line. Brush placement re-rolls on every render.

use rand::{Rng, RngCore};

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, LinearGradient, Paint, Stop};
use crate::color::{Rgb, Rgba};

const BASE: Rgb = Rgb::new(0x5A, 0x5A, 0x5A);
const LIGHT: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
const DARK: Rgb = Rgb::new(0x2A, 0x2A, 0x2A);

pub struct Metallic;

impl StyleRenderer for Metallic {
    fn name(&self) -> &'static str {
        "metallic"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, _color: Rgb, rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let (cw, ch) = (l.content_w, l.content_h);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(BASE));

        // Brushed texture, light pass over the whole canvas
        let light_brush = Paint::Solid(Rgba::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 0.15));
        let mut x = 0.0f32;
        while x < w {
            let drift = rng.random::<f32>() * 2.0;
            canvas.stroke_line(x, 0.0, x + drift, h, 0.5, &light_brush);
            x += rng.random::<f32>() * 3.0 + 1.0;
        }

        // Darker pass confined to the content span
        let dark_brush = Paint::Solid(Rgba::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 0.2));
        let mut x = size;
        while x < w - size {
            let drift = rng.random::<f32>();
            canvas.stroke_line(x, size, x + drift, ch + size, 0.5, &dark_brush);
            x += rng.random::<f32>() * 4.0 + 2.0;
        }

        // Beveled outer edge
        canvas.stroke_rect(
            size / 3.0,
            size / 3.0,
            w - size * 2.0 / 3.0,
            h - size * 2.0 / 3.0,
            2.0,
            &solid(LIGHT),
        );

        // Main border, light to dark top-to-bottom
        canvas.stroke_rect(
            size,
            size,
            cw,
            ch,
            size / 2.5,
            &Paint::Linear(LinearGradient {
                x0: size,
                y0: size,
                x1: size,
                y1: size + ch,
                stops: vec![
                    Stop::new(0.0, Rgba::from(LIGHT)),
                    Stop::new(0.5, Rgba::from(BASE)),
                    Stop::new(1.0, Rgba::from(DARK)),
                ],
            }),
        );

        // Inner shadow edge
        canvas.stroke_rect(
            size + size / 3.0,
            size + size / 3.0,
            cw - size * 2.0 / 3.0,
            ch - size * 2.0 / 3.0,
            1.0,
            &solid(DARK),
        );
    }
}
