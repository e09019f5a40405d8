//! # Render Surface
//!
//! A CPU raster surface the frame painters draw onto: an RGBA f32 buffer
//! (straight alpha) with antialiased primitives, gradient paints, and an
//! optional drop-shadow state.
//!
//! All drawing composites source-over. Shape edges are antialiased with
//! per-pixel coverage: rectangles analytically, circles/ellipses/lines via a
//! signed-distance estimate, polygons via 2x2 supersampling. Strokes are
//! centered on the path, like a 2D canvas context.
//!
//! Drop shadows follow the 2D-canvas model: while a [`Shadow`] is set, every
//! primitive first composites a blurred, offset, tinted copy of its coverage
//! mask beneath itself (gaussian sigma = blur / 2).

use image::RgbaImage;

use crate::color::Rgba;

/// A gradient color stop at `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Stop {
    pub offset: f32,
    pub color: Rgba,
}

impl Stop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient along the segment (x0, y0) → (x1, y1).
#[derive(Debug, Clone)]
pub struct LinearGradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub stops: Vec<Stop>,
}

/// Radial gradient between the circles of radius `r0` and `r1` around
/// (cx, cy).
#[derive(Debug, Clone)]
pub struct RadialGradient {
    pub cx: f32,
    pub cy: f32,
    pub r0: f32,
    pub r1: f32,
    pub stops: Vec<Stop>,
}

/// Paint source for a primitive.
#[derive(Debug, Clone)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Color of this paint at a canvas position.
    fn sample(&self, x: f32, y: f32) -> Rgba {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => {
                let dx = g.x1 - g.x0;
                let dy = g.y1 - g.y0;
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq > 0.0 {
                    ((x - g.x0) * dx + (y - g.y0) * dy) / len_sq
                } else {
                    0.0
                };
                sample_stops(&g.stops, t)
            }
            Paint::Radial(g) => {
                let d = ((x - g.cx).powi(2) + (y - g.cy).powi(2)).sqrt();
                let span = g.r1 - g.r0;
                let t = if span.abs() > f32::EPSILON {
                    (d - g.r0) / span
                } else {
                    1.0
                };
                sample_stops(&g.stops, t)
            }
        }
    }

    /// Representative opacity, used to scale the cast shadow.
    fn opacity(&self) -> f32 {
        match self {
            Paint::Solid(c) => c.a,
            _ => 1.0,
        }
    }
}

/// Interpolate gradient stops at parameter `t`, clamping at the ends.
fn sample_stops(stops: &[Stop], t: f32) -> Rgba {
    match stops {
        [] => Rgba::TRANSPARENT,
        [only] => only.color,
        _ => {
            let first = &stops[0];
            let last = &stops[stops.len() - 1];
            if t <= first.offset {
                return first.color;
            }
            if t >= last.offset {
                return last.color;
            }
            for pair in stops.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                if t <= b.offset {
                    let span = b.offset - a.offset;
                    let local = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                    return Rgba::lerp(a.color, b.color, local);
                }
            }
            last.color
        }
    }
}

/// Drop-shadow parameters, 2D-canvas semantics.
#[derive(Debug, Clone, Copy)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Coverage mask of one rasterized shape over a pixel-aligned region.
#[derive(Clone)]
struct Region {
    x0: i32,
    y0: i32,
    w: usize,
    h: usize,
    cov: Vec<f32>,
}

impl Region {
    fn from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Option<Region> {
        if !(max_x > min_x && max_y > min_y) {
            return None;
        }
        let x0 = min_x.floor() as i32;
        let y0 = min_y.floor() as i32;
        let x1 = max_x.ceil() as i32;
        let y1 = max_y.ceil() as i32;
        let w = (x1 - x0).max(0) as usize;
        let h = (y1 - y0).max(0) as usize;
        if w == 0 || h == 0 {
            return None;
        }
        Some(Region {
            x0,
            y0,
            w,
            h,
            cov: vec![0.0; w * h],
        })
    }
}

/// Overlap length of the unit span `[p, p+1]` with `[lo, hi]`.
#[inline]
fn span_overlap(p: f32, lo: f32, hi: f32) -> f32 {
    (hi.min(p + 1.0) - lo.max(p)).clamp(0.0, 1.0)
}

/// Analytic coverage of an axis-aligned rectangle.
fn rect_region(x: f32, y: f32, w: f32, h: f32) -> Option<Region> {
    let mut region = Region::from_bounds(x, y, x + w, y + h)?;
    for ry in 0..region.h {
        let py = (region.y0 + ry as i32) as f32;
        let cy = span_overlap(py, y, y + h);
        for rx in 0..region.w {
            let px = (region.x0 + rx as i32) as f32;
            region.cov[ry * region.w + rx] = span_overlap(px, x, x + w) * cy;
        }
    }
    Some(region)
}

/// Coverage of a rectangle outline stroked with `line_width` centered on the
/// path: outer rect minus inner rect.
fn stroke_rect_region(x: f32, y: f32, w: f32, h: f32, line_width: f32) -> Option<Region> {
    let half = line_width * 0.5;
    let (ox, oy, ow, oh) = (x - half, y - half, w + line_width, h + line_width);
    let (ix, iy, iw, ih) = (x + half, y + half, w - line_width, h - line_width);
    let mut region = Region::from_bounds(ox, oy, ox + ow, oy + oh)?;
    let hollow = iw > 0.0 && ih > 0.0;
    for ry in 0..region.h {
        let py = (region.y0 + ry as i32) as f32;
        let outer_y = span_overlap(py, oy, oy + oh);
        let inner_y = if hollow { span_overlap(py, iy, iy + ih) } else { 0.0 };
        for rx in 0..region.w {
            let px = (region.x0 + rx as i32) as f32;
            let outer = outer_y * span_overlap(px, ox, ox + ow);
            let inner = if hollow {
                inner_y * span_overlap(px, ix, ix + iw)
            } else {
                0.0
            };
            region.cov[ry * region.w + rx] = (outer - inner).max(0.0);
        }
    }
    Some(region)
}

/// Even-odd point-in-polygon test.
fn point_in_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let n = points.len();
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Supersampled coverage of a closed polygon (2x2 samples per pixel).
fn polygon_region(points: &[(f32, f32)]) -> Option<Region> {
    if points.len() < 3 {
        return None;
    }
    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
    let mut region = Region::from_bounds(min_x, min_y, max_x, max_y)?;
    const OFFSETS: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];
    for ry in 0..region.h {
        let py = (region.y0 + ry as i32) as f32;
        for rx in 0..region.w {
            let px = (region.x0 + rx as i32) as f32;
            let mut hits = 0u8;
            for (ox, oy) in OFFSETS {
                if point_in_polygon(points, px + ox, py + oy) {
                    hits += 1;
                }
            }
            region.cov[ry * region.w + rx] = hits as f32 / 4.0;
        }
    }
    Some(region)
}

/// Distance-based coverage of a filled circle.
fn circle_region(cx: f32, cy: f32, r: f32) -> Option<Region> {
    let pad = r + 1.0;
    let mut region = Region::from_bounds(cx - pad, cy - pad, cx + pad, cy + pad)?;
    for ry in 0..region.h {
        let py = (region.y0 + ry as i32) as f32 + 0.5;
        for rx in 0..region.w {
            let px = (region.x0 + rx as i32) as f32 + 0.5;
            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            region.cov[ry * region.w + rx] = (r - d + 0.5).clamp(0.0, 1.0);
        }
    }
    Some(region)
}

/// Distance-based coverage of a filled, rotated ellipse.
fn ellipse_region(cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32) -> Option<Region> {
    let pad = rx.max(ry) + 1.0;
    let mut region = Region::from_bounds(cx - pad, cy - pad, cx + pad, cy + pad)?;
    let (sin, cos) = rotation.sin_cos();
    let scale = rx.min(ry).max(f32::EPSILON);
    for iy in 0..region.h {
        let py = (region.y0 + iy as i32) as f32 + 0.5;
        for ix in 0..region.w {
            let px = (region.x0 + ix as i32) as f32 + 0.5;
            // Rotate into ellipse-local coordinates.
            let dx = px - cx;
            let dy = py - cy;
            let lx = dx * cos + dy * sin;
            let ly = -dx * sin + dy * cos;
            let norm = ((lx / rx).powi(2) + (ly / ry).powi(2)).sqrt();
            let dist = (norm - 1.0) * scale;
            region.cov[iy * region.w + ix] = (0.5 - dist).clamp(0.0, 1.0);
        }
    }
    Some(region)
}

/// Capsule coverage of a line segment stroked with round caps.
fn line_region(x0: f32, y0: f32, x1: f32, y1: f32, line_width: f32) -> Option<Region> {
    let half = line_width * 0.5;
    let pad = half + 1.0;
    let mut region = Region::from_bounds(
        x0.min(x1) - pad,
        y0.min(y1) - pad,
        x0.max(x1) + pad,
        y0.max(y1) + pad,
    )?;
    let vx = x1 - x0;
    let vy = y1 - y0;
    let len_sq = vx * vx + vy * vy;
    for iy in 0..region.h {
        let py = (region.y0 + iy as i32) as f32 + 0.5;
        for ix in 0..region.w {
            let px = (region.x0 + ix as i32) as f32 + 0.5;
            let t = if len_sq > 0.0 {
                (((px - x0) * vx + (py - y0) * vy) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let dx = px - (x0 + t * vx);
            let dy = py - (y0 + t * vy);
            let d = (dx * dx + dy * dy).sqrt();
            region.cov[iy * region.w + ix] = (half - d + 0.5).clamp(0.0, 1.0);
        }
    }
    Some(region)
}

/// Normalized 1D gaussian kernel for the given sigma.
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 2.5).ceil().max(1.0) as i32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel = Vec::with_capacity((2 * radius + 1) as usize);
    let mut sum = 0.0f32;
    for i in -radius..=radius {
        let w = (-(i * i) as f32 / denom).exp();
        kernel.push(w);
        sum += w;
    }
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Blur a coverage region with a separable gaussian, growing it so the tails
/// are not cut off.
fn blur_region(region: &Region, sigma: f32) -> Region {
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as i32;
    let w = region.w + 2 * radius as usize;
    let h = region.h + 2 * radius as usize;
    let mut padded = vec![0.0f32; w * h];
    for y in 0..region.h {
        for x in 0..region.w {
            padded[(y + radius as usize) * w + x + radius as usize] = region.cov[y * region.w + x];
        }
    }

    // Horizontal pass
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = x as i32 + k as i32 - radius;
                if sx >= 0 && (sx as usize) < w {
                    acc += padded[y * w + sx as usize] * weight;
                }
            }
            tmp[y * w + x] = acc;
        }
    }

    // Vertical pass
    let mut out = vec![0.0f32; w * h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = y as i32 + k as i32 - radius;
                if sy >= 0 && (sy as usize) < h {
                    acc += tmp[sy as usize * w + x] * weight;
                }
            }
            out[y * w + x] = acc;
        }
    }

    Region {
        x0: region.x0 - radius,
        y0: region.y0 - radius,
        w,
        h,
        cov: out,
    }
}

/// Mutable RGBA raster surface (straight alpha, f32 channels).
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<f32>,
    shadow: Option<Shadow>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * 4],
            shadow: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize the surface. Contents and shadow state are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data
            .resize(width as usize * height as usize * 4, 0.0);
        self.shadow = None;
    }

    /// Clear the whole surface to transparent.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Clear a rectangular region to transparent (whole pixels).
    pub fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let x0 = x.floor().max(0.0) as u32;
        let y0 = y.floor().max(0.0) as u32;
        let x1 = ((x + w).ceil() as u32).min(self.width);
        let y1 = ((y + h).ceil() as u32).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = (py as usize * self.width as usize + px as usize) * 4;
                self.data[idx..idx + 4].fill(0.0);
            }
        }
    }

    /// Enable a drop shadow for subsequent primitives.
    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = Some(shadow);
    }

    /// Disable the drop shadow.
    pub fn clear_shadow(&mut self) {
        self.shadow = None;
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        if let Some(region) = rect_region(x, y, w, h) {
            self.emit(&region, paint);
        }
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, line_width: f32, paint: &Paint) {
        if let Some(region) = stroke_rect_region(x, y, w, h, line_width) {
            self.emit(&region, paint);
        }
    }

    pub fn fill_polygon(&mut self, points: &[(f32, f32)], paint: &Paint) {
        if let Some(region) = polygon_region(points) {
            self.emit(&region, paint);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint) {
        if let Some(region) = circle_region(cx, cy, r) {
            self.emit(&region, paint);
        }
    }

    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, paint: &Paint) {
        if let Some(region) = ellipse_region(cx, cy, rx, ry, rotation) {
            self.emit(&region, paint);
        }
    }

    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, line_width: f32, paint: &Paint) {
        if let Some(region) = line_region(x0, y0, x1, y1, line_width) {
            self.emit(&region, paint);
        }
    }

    /// Source-over composite a decoded image at the given offset (rounded to
    /// whole pixels).
    pub fn draw_image(&mut self, img: &RgbaImage, x: f32, y: f32) {
        let ox = x.round() as i32;
        let oy = y.round() as i32;
        for (ix, iy, pixel) in img.enumerate_pixels() {
            let src = Rgba::new(
                pixel.0[0] as f32 / 255.0,
                pixel.0[1] as f32 / 255.0,
                pixel.0[2] as f32 / 255.0,
                pixel.0[3] as f32 / 255.0,
            );
            self.blend(ox + ix as i32, oy + iy as i32, src, 1.0);
        }
    }

    /// Scale each pixel's alpha by `f(center_x, center_y)`. Used by the
    /// corner mask to clip the finished composite.
    pub fn map_alpha(&mut self, f: impl Fn(f32, f32) -> f32) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = (y as usize * self.width as usize + x as usize) * 4;
                let factor = f(x as f32 + 0.5, y as f32 + 0.5).clamp(0.0, 1.0);
                self.data[idx + 3] *= factor;
            }
        }
    }

    /// Read back one pixel (transparent black outside the surface).
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Snapshot the surface as an 8-bit RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width.max(1), self.height.max(1), |x, y| {
            let c = self.pixel(x, y);
            let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            image::Rgba([q(c.r), q(c.g), q(c.b), q(c.a)])
        })
    }

    fn emit(&mut self, region: &Region, paint: &Paint) {
        if let Some(shadow) = self.shadow {
            self.composite_shadow(region, shadow, paint.opacity());
        }
        self.composite(region, paint);
    }

    fn composite(&mut self, region: &Region, paint: &Paint) {
        for ry in 0..region.h {
            let y = region.y0 + ry as i32;
            if y < 0 || y >= self.height as i32 {
                continue;
            }
            for rx in 0..region.w {
                let cov = region.cov[ry * region.w + rx];
                if cov <= 0.0 {
                    continue;
                }
                let x = region.x0 + rx as i32;
                let src = paint.sample(x as f32 + 0.5, y as f32 + 0.5);
                self.blend(x, y, src, cov);
            }
        }
    }

    fn composite_shadow(&mut self, region: &Region, shadow: Shadow, shape_opacity: f32) {
        let sigma = shadow.blur * 0.5;
        let mut cast = if sigma > 0.0 {
            blur_region(region, sigma)
        } else {
            region.clone()
        };
        cast.x0 += shadow.dx.round() as i32;
        cast.y0 += shadow.dy.round() as i32;
        let tint = shadow.color.with_alpha(shadow.color.a * shape_opacity);
        self.composite(&cast, &Paint::Solid(tint));
    }

    /// Source-over blend of `src` (scaled by coverage) into the pixel.
    fn blend(&mut self, x: i32, y: i32, src: Rgba, cov: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let sa = (src.a * cov).clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let da = self.data[idx + 3];
        let out_a = sa + da * (1.0 - sa);
        if out_a > 0.0 {
            for c in 0..3 {
                let sc = [src.r, src.g, src.b][c];
                let dc = self.data[idx + c];
                self.data[idx + c] = (sc * sa + dc * da * (1.0 - sa)) / out_a;
            }
        }
        self.data[idx + 3] = out_a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn solid(r: u8, g: u8, b: u8) -> Paint {
        Paint::Solid(Rgba::from(Rgb::new(r, g, b)))
    }

    #[test]
    fn test_fill_rect_interior_and_exterior() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_rect(5.0, 5.0, 10.0, 10.0, &solid(255, 0, 0));
        assert_eq!(canvas.pixel(10, 10), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(canvas.pixel(1, 1).a, 0.0);
    }

    #[test]
    fn test_fill_rect_fractional_edge_coverage() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(0.0, 0.0, 2.5, 4.0, &solid(0, 0, 0));
        assert_eq!(canvas.pixel(1, 0).a, 1.0);
        assert!((canvas.pixel(2, 0).a - 0.5).abs() < 1e-5);
        assert_eq!(canvas.pixel(3, 0).a, 0.0);
    }

    #[test]
    fn test_stroke_rect_is_hollow() {
        let mut canvas = Canvas::new(30, 30);
        canvas.stroke_rect(5.0, 5.0, 20.0, 20.0, 2.0, &solid(0, 255, 0));
        // on the path
        assert!(canvas.pixel(15, 5).a > 0.9);
        // center untouched
        assert_eq!(canvas.pixel(15, 15).a, 0.0);
    }

    #[test]
    fn test_linear_gradient_endpoints() {
        let g = Paint::Linear(LinearGradient {
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 10.0,
            stops: vec![
                Stop::new(0.0, Rgba::black(0.0)),
                Stop::new(1.0, Rgba::black(1.0)),
            ],
        });
        assert_eq!(g.sample(5.0, 0.0).a, 0.0);
        assert_eq!(g.sample(5.0, 10.0).a, 1.0);
        assert!((g.sample(5.0, 5.0).a - 0.5).abs() < 1e-5);
        // clamped beyond the segment
        assert_eq!(g.sample(5.0, 20.0).a, 1.0);
    }

    #[test]
    fn test_radial_gradient_midpoint() {
        let g = Paint::Radial(RadialGradient {
            cx: 0.0,
            cy: 0.0,
            r0: 0.0,
            r1: 10.0,
            stops: vec![
                Stop::new(0.0, Rgba::black(1.0)),
                Stop::new(1.0, Rgba::black(0.0)),
            ],
        });
        assert!((g.sample(5.0, 0.0).a - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_circle_coverage() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_circle(10.0, 10.0, 5.0, &solid(0, 0, 255));
        assert!(canvas.pixel(10, 10).a > 0.99);
        assert_eq!(canvas.pixel(0, 0).a, 0.0);
        assert_eq!(canvas.pixel(10, 2).a, 0.0);
    }

    #[test]
    fn test_shadow_offsets_beyond_shape() {
        let mut canvas = Canvas::new(40, 40);
        canvas.set_shadow(Shadow {
            color: Rgba::black(1.0),
            blur: 4.0,
            dx: 8.0,
            dy: 0.0,
        });
        canvas.fill_rect(10.0, 10.0, 10.0, 10.0, &solid(255, 255, 255));
        canvas.clear_shadow();
        // shadow leaks past the right edge of the shape
        assert!(canvas.pixel(24, 15).a > 0.1);
        // shape itself is drawn on top
        assert!(canvas.pixel(15, 15).r > 0.9);
        // no paint far away
        assert_eq!(canvas.pixel(35, 35).a, 0.0);
    }

    #[test]
    fn test_resize_clears() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, &solid(255, 0, 0));
        canvas.resize(12, 12);
        assert_eq!(canvas.width(), 12);
        assert_eq!(canvas.pixel(5, 5).a, 0.0);
    }

    #[test]
    fn test_blend_over_opaque() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, &solid(0, 0, 0));
        canvas.fill_rect(0.0, 0.0, 2.0, 2.0, &Paint::Solid(Rgba::new(1.0, 1.0, 1.0, 0.5)));
        let p = canvas.pixel(0, 0);
        assert!((p.r - 0.5).abs() < 1e-5);
        assert_eq!(p.a, 1.0);
    }
}
