//! # Architectural Frame
//!
//! Geometric gallery frame: three concentric lines at different inset
//! fractions with alternating light/dark shade, and four square corner tiles
//! with an inner accent line.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Architectural;

impl StyleRenderer for Architectural {
    fn name(&self) -> &'static str {
        "architectural"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let dark = color.shade(-45.0);
        let light = color.shade(35.0);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Layered geometric lines
        let layers = [
            (size / 8.0, 2.0, light),
            (size / 3.0, 1.5, dark),
            (size / 1.8, 1.0, light),
        ];
        for (offset, line_width, layer_color) in layers {
            canvas.stroke_rect(
                offset,
                offset,
                w - offset * 2.0,
                h - offset * 2.0,
                line_width,
                &solid(layer_color),
            );
        }

        // Accent corner tiles
        let corner_size = size * 0.3;
        let corners = [
            (0.0, 0.0),
            (w - corner_size, 0.0),
            (0.0, h - corner_size),
            (w - corner_size, h - corner_size),
        ];
        for (x, y) in corners {
            canvas.fill_rect(x, y, corner_size, corner_size, &solid(dark));
            canvas.stroke_rect(
                x + 2.0,
                y + 2.0,
                corner_size - 4.0,
                corner_size - 4.0,
                1.0,
                &solid(light),
            );
        }
    }
}
