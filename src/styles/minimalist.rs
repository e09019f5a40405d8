//! # Minimalist Frame
//!
//! Near-white frame with a soft overall shadow, one thick accent line inset
//! by half the frame thickness and a hairline accent just inside it.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, Shadow};
use crate::color::{Rgb, Rgba};

const PAPER: Rgb = Rgb::new(0xFA, 0xFA, 0xFA);

pub struct Minimalist;

impl StyleRenderer for Minimalist {
    fn name(&self) -> &'static str {
        "minimalist"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let paper = solid(PAPER);

        canvas.fill_rect(0.0, 0.0, w, h, &paper);

        // Soft shadow over the whole fill
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.08),
            blur: size / 2.0,
            dx: 0.0,
            dy: 2.0,
        });
        canvas.fill_rect(0.0, 0.0, w, h, &paper);
        canvas.clear_shadow();

        // Main border line
        let inset = size / 2.0;
        canvas.stroke_rect(
            inset,
            inset,
            w - inset * 2.0,
            h - inset * 2.0,
            size / 5.0,
            &solid(color),
        );

        // Accent line
        canvas.stroke_rect(
            inset + 2.0,
            inset + 2.0,
            w - inset * 2.0 - 4.0,
            h - inset * 2.0 - 4.0,
            0.5,
            &solid(color.shade(30.0)),
        );
    }
}
