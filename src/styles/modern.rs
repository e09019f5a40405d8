//! # Modern Frame
//!
//! Contemporary gallery-style frame: thick outer line, thin inner line, and a
//! soft drop shadow just inside the frame edge.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, Shadow};
use crate::color::{Rgb, Rgba};

pub struct Modern;

impl StyleRenderer for Modern {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Outer line
        canvas.stroke_rect(
            size / 4.0,
            size / 4.0,
            w - size / 2.0,
            h - size / 2.0,
            size / 8.0,
            &solid(color.shade(-30.0)),
        );

        // Inner line
        let inner = solid(color.shade(25.0));
        canvas.stroke_rect(
            size - 2.0,
            size - 2.0,
            l.content_w + 4.0,
            l.content_h + 4.0,
            1.0,
            &inner,
        );

        // Subtle shadow on the inner edge
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.15),
            blur: size / 4.0,
            dx: 1.0,
            dy: 1.0,
        });
        canvas.stroke_rect(size, size, l.content_w, l.content_h, 1.0, &inner);
        canvas.clear_shadow();
    }
}
