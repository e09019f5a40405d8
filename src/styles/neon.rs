//! # Neon Frame
//!
//! Near-black backdrop with an ambient radial glow tinted by the frame color,
//! three concentric glowing strokes around the content, and four glowing
//! corner markers.

use rand::RngCore;

use super::{Layout, StyleRenderer, solid, solid_alpha};
use crate::canvas::{Canvas, Paint, RadialGradient, Shadow, Stop};
use crate::color::{Rgb, Rgba};

const BACKDROP: Rgb = Rgb::new(0x0F, 0x0F, 0x1E);

pub struct Neon;

impl StyleRenderer for Neon {
    fn name(&self) -> &'static str {
        "neon"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let (cw, ch) = (l.content_w, l.content_h);

        canvas.fill_rect(0.0, 0.0, w, h, &solid(BACKDROP));

        // Ambient glow behind everything
        canvas.fill_rect(
            0.0,
            0.0,
            w,
            h,
            &Paint::Radial(RadialGradient {
                cx: w / 2.0,
                cy: h / 2.0,
                r0: 0.0,
                r1: (w * w + h * h).sqrt() / 2.0,
                stops: vec![
                    Stop::new(0.0, Rgba::from(color).with_alpha(0.05)),
                    Stop::new(1.0, Rgba::black(0.2)),
                ],
            }),
        );

        let glow = |blur: f32| Shadow {
            color: Rgba::from(color),
            blur,
            dx: 0.0,
            dy: 0.0,
        };

        // Outer glow, softer and larger
        canvas.set_shadow(glow(25.0));
        canvas.stroke_rect(
            size - 8.0,
            size - 8.0,
            cw + 16.0,
            ch + 16.0,
            2.0,
            &solid_alpha(color, 0.4),
        );

        // Primary neon line
        canvas.set_shadow(glow(15.0));
        canvas.stroke_rect(
            size - 2.0,
            size - 2.0,
            cw + 4.0,
            ch + 4.0,
            3.0,
            &solid_alpha(color, 0.9),
        );

        // Inner detail line
        canvas.set_shadow(glow(8.0));
        canvas.stroke_rect(
            size + 2.0,
            size + 2.0,
            cw - 4.0,
            ch - 4.0,
            1.0,
            &solid_alpha(color, 0.7),
        );

        // Corner markers, each with their own glow
        let corner_size = size / 4.0;
        let inset = size - 4.0;
        let corners = [
            (inset, inset),
            (w - inset, inset),
            (inset, h - inset),
            (w - inset, h - inset),
        ];
        for (x, y) in corners {
            canvas.fill_circle(x, y, corner_size / 2.0, &solid_alpha(color, 0.8));
            canvas.set_shadow(glow(10.0));
            canvas.fill_rect(
                x - corner_size / 4.0,
                y - corner_size / 4.0,
                corner_size / 2.0,
                corner_size / 2.0,
                &solid_alpha(color, 0.8),
            );
        }
        canvas.clear_shadow();
    }
}
