//! # Classic Frame
//!
//! Traditional wooden frame: a solid fill with two diagonal beveled-edge
//! polygons (lighter top-left, darker bottom-right) simulating 3D depth, plus
//! inner and outer decorative lines.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Classic;

impl StyleRenderer for Classic {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Beveled edge, lighter on the left
        canvas.fill_polygon(
            &[
                (0.0, 0.0),
                (size, size),
                (size, l.content_h + size),
                (0.0, h),
            ],
            &solid(color.shade(30.0)),
        );

        // Darker on the right
        canvas.fill_polygon(
            &[
                (w, 0.0),
                (w - size, size),
                (w - size, l.content_h + size),
                (w, h),
            ],
            &solid(color.shade(-40.0)),
        );

        // Inner decorative line
        canvas.stroke_rect(
            size - 2.0,
            size - 2.0,
            l.content_w + 4.0,
            l.content_h + 4.0,
            2.0,
            &solid(color.shade(-25.0)),
        );

        // Outer decorative line
        canvas.stroke_rect(
            size / 2.0,
            size / 2.0,
            w - size,
            h - size,
            1.0,
            &solid(color.shade(20.0)),
        );
    }
}
