//! # Double Frame
//!
//! Dual-mat gallery frame: a dark outer frame with its own cast shadow, a
//! lighter mat board inset by half the frame thickness, decorative lines, and
//! single-pixel bevel highlights around the mat's inner edge.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::{Canvas, Shadow};
use crate::color::{Rgb, Rgba};

pub struct Double;

impl StyleRenderer for Double {
    fn name(&self) -> &'static str {
        "double"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let dark = color.shade(-50.0);
        let light = color.shade(45.0);
        let mid = color.shade(-25.0);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Outer frame with shadow
        canvas.set_shadow(Shadow {
            color: Rgba::black(0.4),
            blur: 12.0,
            dx: 3.0,
            dy: 3.0,
        });
        canvas.fill_rect(0.0, 0.0, w, h, &solid(dark));
        canvas.clear_shadow();

        // Inner mat board
        let inner_x = size / 2.0;
        let inner_y = size / 2.0;
        let inner_w = w - size;
        let inner_h = h - size;
        canvas.fill_rect(inner_x, inner_y, inner_w, inner_h, &solid(light));

        // Decorative line on the mat
        canvas.stroke_rect(
            inner_x + 4.0,
            inner_y + 4.0,
            inner_w - 8.0,
            inner_h - 8.0,
            1.0,
            &solid(mid),
        );

        // Inner frame detail
        canvas.stroke_rect(size, size, w - size * 2.0, h - size * 2.0, 2.0, &solid(dark));

        // Mat bevel: top/left highlight, bottom/right shadow
        let highlight = solid(light.shade(20.0));
        canvas.stroke_line(inner_x, inner_y, inner_x + inner_w, inner_y, 1.0, &highlight);
        canvas.stroke_line(inner_x, inner_y, inner_x, inner_y + inner_h, 1.0, &highlight);

        let lowlight = solid(light.shade(-20.0));
        canvas.stroke_line(
            inner_x + inner_w,
            inner_y,
            inner_x + inner_w,
            inner_y + inner_h,
            1.0,
            &lowlight,
        );
        canvas.stroke_line(
            inner_x,
            inner_y + inner_h,
            inner_x + inner_w,
            inner_y + inner_h,
            1.0,
            &lowlight,
        );
    }
}
