//! # Ornate Frame
//!
//! Elegant frame with accent border bands, concentric decorative lines and
//! four corner ornaments (filled circle with eight radial rays).

use std::f32::consts::PI;

use rand::RngCore;

use super::{Layout, StyleRenderer, solid};
use crate::canvas::Canvas;
use crate::color::Rgb;

pub struct Ornate;

impl StyleRenderer for Ornate {
    fn name(&self) -> &'static str {
        "ornate"
    }

    fn paint(&self, canvas: &mut Canvas, l: &Layout, color: Rgb, _rng: &mut dyn RngCore) {
        let size = l.frame_px;
        let (w, h) = (l.width, l.height);
        let accent = solid(color.shade(-40.0));
        let light = solid(color.shade(35.0));

        canvas.fill_rect(0.0, 0.0, w, h, &solid(color));

        // Accent bands along all four edges
        let band = size / 2.0;
        canvas.fill_rect(0.0, 0.0, w, band, &accent);
        canvas.fill_rect(0.0, h - band, w, band, &accent);
        canvas.fill_rect(0.0, 0.0, band, h, &accent);
        canvas.fill_rect(w - band, 0.0, band, h, &accent);

        // Triple line effect
        canvas.stroke_rect(
            size / 4.0,
            size / 4.0,
            w - size / 2.0,
            h - size / 2.0,
            2.0,
            &accent,
        );
        canvas.stroke_rect(size / 2.0, size / 2.0, w - size, h - size, 1.0, &light);

        // Corner ornaments: circle with decorative rays
        let ornament_radius = size * 0.25;
        let corners = [
            (size / 2.0, size / 2.0),
            (w - size / 2.0, size / 2.0),
            (size / 2.0, h - size / 2.0),
            (w - size / 2.0, h - size / 2.0),
        ];
        for (x, y) in corners {
            canvas.fill_circle(x, y, ornament_radius * 0.5, &accent);
            for i in 0..8 {
                let angle = i as f32 * PI / 4.0;
                canvas.stroke_line(
                    x,
                    y,
                    x + angle.cos() * ornament_radius,
                    y + angle.sin() * ornament_radius,
                    1.5,
                    &accent,
                );
            }
        }

        // Inner frame edge tight to the content
        canvas.stroke_rect(
            size - 1.0,
            size - 1.0,
            l.content_w + 2.0,
            l.content_h + 2.0,
            1.0,
            &accent,
        );
    }
}
