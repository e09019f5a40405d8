//! # Victorian Frame
//!
//! Ornamental frame with a triple nested border, elaborate corner ornaments
//! (two concentric circles plus sixteen radial ray segments) and solid
//! vertical bands flanking the content.

use std::f32::consts::PI;

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Victorian;

impl StyleRenderer for Victorian {
    fn name(&self) -> &'static str {
        "victorian"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let dark = solid(color.shade(-50.0));
        let light = solid(color.shade(40.0));

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Triple-line border
        canvas.stroke_rect(
            size / 8.0,
            size / 8.0,
            w - size / 4.0,
            h - size / 4.0,
            2.0,
            &light,
        );
        canvas.stroke_rect(
            size / 4.0,
            size / 4.0,
            w - size / 2.0,
            h - size / 2.0,
            1.0,
            &dark,
        );
        canvas.stroke_rect(
            size / 2.5,
            size / 2.5,
            w - size / 1.25,
            h - size / 1.25,
            0.5,
            &light,
        );

        // Corner ornaments
        let corners = [
            (size / 2.0, size / 2.0),
            (w - size / 2.0, size / 2.0),
            (size / 2.0, h - size / 2.0),
            (w - size / 2.0, h - size / 2.0),
        ];
        for (x, y) in corners {
            canvas.fill_circle(x, y, size * 0.2, &dark);
            canvas.fill_circle(x, y, size * 0.12, &light);

            // Sixteen ray segments between two radii
            for i in 0..16 {
                let angle = i as f32 * PI / 8.0;
                let (sin, cos) = angle.sin_cos();
                canvas.stroke_line(
                    x + cos * (size * 0.25),
                    y + sin * (size * 0.25),
                    x + cos * (size * 0.35),
                    y + sin * (size * 0.35),
                    1.5,
                    &dark,
                );
            }
        }

        // Side ornamental bands at full content height
        canvas.fill_rect(0.0, size, size / 3.0, l.content_h, &dark);
        canvas.fill_rect(w - size / 3.0, size, size / 3.0, l.content_h, &dark);
    }
}
