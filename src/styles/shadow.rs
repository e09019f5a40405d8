//! # Shadow Frame
//!
//! No frame area at all: the canvas stays transparent and the content
//! rectangle floats on two layered drop shadows (a soft wide one and a
//! tighter dark one) with a subtle 1px border for definition.

use rand::RngCore;

use super::{Layout, StyleRenderer};
use crate::canvas::{Canvas, Paint, Shadow};
use crate::color::{Rgb, Rgba};

pub struct ShadowBox;

impl StyleRenderer for ShadowBox {
    fn name(&self) -> &'static str {
        "shadow"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, _color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let white = Paint::Solid(Rgba::WHITE);

        // Outer soft shadow
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.15),
            blur: size * 1.5,
            dx: size / 3.0,
            dy: size / 3.0,
        });
        canvas.fill_rect(size, size, l.content_w, l.content_h, &white);

        // Inner shadow, closer and darker
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.25),
            blur: size * 0.75,
            dx: size / 5.0,
            dy: size / 5.0,
        });
        canvas.fill_rect(size, size, l.content_w, l.content_h, &white);
        canvas.clear_shadow();

        // Subtle border for definition
        canvas.stroke_rect(
            size,
            size,
            l.content_w,
            l.content_h,
            1.0,
            &Paint::Solid(Rgba::black(0.1)),
        );
    }
}
