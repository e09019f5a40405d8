//! # Corner Mask
//!
//! Post-processes the fully composited surface, clipping it to a
//! rounded-rectangle silhouette. The radius is never configured directly: it
//! is 0 for square corners and 0.8x the frame thickness for rounded ones.
//! Runs strictly after the content fill, on the final composite.

use crate::canvas::Canvas;
use crate::config::CornerMode;

/// Corner radius in pixels for a given frame thickness and corner mode.
pub fn corner_radius(frame_px: f32, mode: CornerMode) -> f32 {
    match mode {
        CornerMode::Square => 0.0,
        CornerMode::Rounded => frame_px * 0.8,
    }
}

/// Clip the surface to a rounded rectangle covering the whole canvas.
/// Square corners are a no-op.
pub fn apply(canvas: &mut Canvas, frame_px: f32, mode: CornerMode) {
    let radius = corner_radius(frame_px, mode);
    if radius <= 0.0 || canvas.width() == 0 || canvas.height() == 0 {
        return;
    }
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    let radius = radius.min(w / 2.0).min(h / 2.0);
    let cx = w / 2.0;
    let cy = h / 2.0;
    // Half extents of the straight-edge core, corners carved by the radius.
    let hx = cx - radius;
    let hy = cy - radius;
    canvas.map_alpha(|x, y| {
        let qx = (x - cx).abs() - hx;
        let qy = (y - cy).abs() - hy;
        let outside = if qx > 0.0 && qy > 0.0 {
            (qx * qx + qy * qy).sqrt()
        } else {
            qx.max(qy)
        };
        (0.5 - (outside - radius)).clamp(0.0, 1.0)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Paint;
    use crate::color::Rgba;

    fn opaque_canvas(w: u32, h: u32) -> Canvas {
        let mut canvas = Canvas::new(w, h);
        canvas.fill_rect(0.0, 0.0, w as f32, h as f32, &Paint::Solid(Rgba::WHITE));
        canvas
    }

    #[test]
    fn test_radius_rule() {
        assert_eq!(corner_radius(96.0, CornerMode::Square), 0.0);
        assert_eq!(corner_radius(96.0, CornerMode::Rounded), 76.8);
        assert_eq!(corner_radius(48.0, CornerMode::Rounded), 38.4);
    }

    #[test]
    fn test_square_is_noop() {
        let mut canvas = opaque_canvas(50, 50);
        apply(&mut canvas, 96.0, CornerMode::Square);
        assert_eq!(canvas.pixel(0, 0).a, 1.0);
        assert_eq!(canvas.pixel(49, 49).a, 1.0);
    }

    #[test]
    fn test_rounded_clears_corners_keeps_core() {
        let mut canvas = opaque_canvas(200, 200);
        apply(&mut canvas, 50.0, CornerMode::Rounded);
        // radius 40: the extreme corners fall outside the path
        assert_eq!(canvas.pixel(0, 0).a, 0.0);
        assert_eq!(canvas.pixel(199, 0).a, 0.0);
        assert_eq!(canvas.pixel(0, 199).a, 0.0);
        assert_eq!(canvas.pixel(199, 199).a, 0.0);
        // center and edge midpoints survive
        assert_eq!(canvas.pixel(100, 100).a, 1.0);
        assert_eq!(canvas.pixel(100, 0).a, 1.0);
        assert_eq!(canvas.pixel(0, 100).a, 1.0);
    }
}
