//! # Classical Frame
//!
//! Neoclassical gallery frame: solid horizontal bands across top and bottom,
//! a fluted-column tick pattern along both side margins, a triple nested
//! border and four corner rosettes (center circle plus eight radial petals).

use std::f32::consts::PI;

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Classical;

impl StyleRenderer for Classical {
    fn name(&self) -> &'static str {
        "classical"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let dark = solid(color.shade(-45.0));
        let light = solid(color.shade(40.0));

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Horizontal bands
        canvas.fill_rect(0.0, 0.0, w, size / 3.0, &dark);
        canvas.fill_rect(0.0, h - size / 3.0, w, size / 3.0, &dark);

        // Fluted column ticks along both sides
        let flute_count = (l.content_h / (size * 1.5)).floor() as i32;
        for i in 0..flute_count {
            let y = size + i as f32 * size * 1.5;
            canvas.stroke_line(size / 2.0, y, size / 2.0, y + size, 2.0, &dark);
            canvas.stroke_line(w - size / 2.0, y, w - size / 2.0, y + size, 2.0, &dark);
        }

        // Triple-line border
        canvas.stroke_rect(
            size / 4.0,
            size / 4.0,
            w - size / 2.0,
            h - size / 2.0,
            2.0,
            &light,
        );
        canvas.stroke_rect(size / 2.0, size / 2.0, w - size, h - size, 1.0, &dark);
        canvas.stroke_rect(
            size - 1.0,
            size - 1.0,
            l.content_w + 2.0,
            l.content_h + 2.0,
            0.5,
            &light,
        );

        // Corner rosettes
        let corners = [
            (size / 2.0, size / 2.0),
            (w - size / 2.0, size / 2.0),
            (size / 2.0, h - size / 2.0),
            (w - size / 2.0, h - size / 2.0),
        ];
        for (x, y) in corners {
            canvas.fill_circle(x, y, size / 8.0, &dark);

            // Petals rotated to point outward
            for i in 0..8 {
                let angle = i as f32 * PI / 4.0;
                let px = x + angle.cos() * (size / 6.0);
                let py = y + angle.sin() * (size / 6.0);
                canvas.fill_ellipse(px, py, size / 12.0, size / 10.0, angle, &light);
            }
        }
    }
}
