//! # Vintage Frame
//!
//! Sepia-toned frame with a radial vignette, a triple border and randomly
//! scattered low-opacity specks simulating an aged surface. The palette is
//! fixed; the user color is ignored. Speck placement re-rolls on every
//! render.

use rand::{Rng, RngCore};

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, Paint, RadialGradient, Stop};
use crate::color::{Rgb, Rgba};

const BASE_SEPIA: Rgb = Rgb::new(0xB8, 0x95, 0x6A);
const DARK_SEPIA: Rgb = Rgb::new(0x8B, 0x6F, 0x47);
const LIGHT_SEPIA: Rgb = Rgb::new(0xD4, 0xAF, 0x7F);

/// Number of aging specks scattered per render.
const SPECK_COUNT: usize = 100;

pub struct Vintage;

impl StyleRenderer for Vintage {
    fn name(&self) -> &'static str {
        "vintage"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, _color: Rgb, rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let (cw, ch) = (l.content_w, l.content_h);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(BASE_SEPIA));

        // Radial vignette darkening toward the edges
        canvas.fill_rect(
            0.0,
            0.0,
            w,
            h,
            &Paint::Radial(RadialGradient {
                cx: w / 2.0,
                cy: h / 2.0,
                r0: w.min(h) / 4.0,
                r1: (w * w + h * h).sqrt() / 2.0,
                stops: vec![
                    Stop::new(0.0, Rgba::black(0.0)),
                    Stop::new(0.8, Rgba::black(0.15)),
                    Stop::new(1.0, Rgba::black(0.35)),
                ],
            }),
        );

        // Triple border around the content
        canvas.stroke_rect(
            size - 4.0,
            size - 4.0,
            cw + 8.0,
            ch + 8.0,
            3.0,
            &solid(DARK_SEPIA),
        );
        canvas.stroke_rect(
            size - 1.0,
            size - 1.0,
            cw + 2.0,
            ch + 2.0,
            1.0,
            &solid(LIGHT_SEPIA),
        );
        canvas.stroke_rect(
            size + 2.0,
            size + 2.0,
            cw - 4.0,
            ch - 4.0,
            1.0,
            &solid(DARK_SEPIA),
        );

        // Aged texture overlay
        for _ in 0..SPECK_COUNT {
            let x = rng.random::<f32>() * w;
            let y = rng.random::<f32>() * h;
            let alpha = rng.random::<f32>() * 0.03;
            let sw = rng.random::<f32>() * 3.0;
            let sh = rng.random::<f32>() * 3.0;
            canvas.fill_rect(x, y, sw, sh, &Paint::Solid(Rgba::black(alpha)));
        }
    }
}
