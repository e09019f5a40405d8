//! # Emboss Frame
//!
//! Stepped bevel relief: one 1px line per pixel of frame thickness along all
//! four edges, the shade shifting progressively lighter on the top/left and
//! darker on the bottom/right, plus three concentric lines around the
//! content.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Emboss;

impl StyleRenderer for Emboss {
    fn name(&self) -> &'static str {
        "emboss"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let light = color.shade(40.0);
        let dark = color.shade(-40.0);
        let medium = color.shade(-15.0);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        let steps = size.ceil() as i32;

        // Top and left bevel, highlights fading inward
        for i in 0..steps {
            let fi = i as f32;
            let paint = solid(light.shade(-fi * 2.0));
            canvas.fill_rect(fi, fi, w - fi * 2.0, 1.0, &paint);
            canvas.fill_rect(fi, fi, 1.0, h - fi * 2.0, &paint);
        }

        // Bottom and right bevel, shadows fading inward
        for i in 0..steps {
            let fi = i as f32;
            let paint = solid(dark.shade(fi * 1.5));
            canvas.fill_rect(fi, h - 1.0 - fi, w - fi * 2.0, 1.0, &paint);
            canvas.fill_rect(w - 1.0 - fi, fi, 1.0, h - fi * 2.0, &paint);
        }

        // Main border with strong relief
        canvas.stroke_rect(
            size - 1.0,
            size - 1.0,
            l.content_w + 2.0,
            l.content_h + 2.0,
            2.0,
            &solid(medium),
        );

        // Inner highlight line
        canvas.stroke_rect(
            size + 1.0,
            size + 1.0,
            l.content_w - 2.0,
            l.content_h - 2.0,
            1.0,
            &solid(light),
        );

        // Shadow line for relief
        canvas.stroke_rect(
            size + 2.0,
            size + 2.0,
            l.content_w - 4.0,
            l.content_h - 4.0,
            1.0,
            &solid(dark),
        );
    }
}
