//! Clipped raster primitives
//!
//! Shapes take signed coordinates and may extend past any edge of the
//! buffer. Only the part that lands inside `[0, size)` is written.

use super::{Color, PixelBuffer};

/// Inclusive pixel range of `[lo, hi]` that lies inside the buffer
#[inline]
fn clip_range(lo: i32, hi: i32, size: u32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(size as i32 - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Fill the ellipse inscribed in the inclusive bounding box `(x0, y0)-(x1, y1)`
///
/// A degenerate box (zero width or height) still draws a one-pixel line.
pub fn fill_ellipse(buffer: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let (x0, x1) = (x0.min(x1), x0.max(x1));
    let (y0, y1) = (y0.min(y1), y0.max(y1));
    let cx = (x0 + x1) as f32 / 2.0;
    let cy = (y0 + y1) as f32 / 2.0;
    let rx = ((x1 - x0) as f32 / 2.0).max(0.5);
    let ry = ((y1 - y0) as f32 / 2.0).max(0.5);

    let Some((ys, ye)) = clip_range(y0, y1, buffer.size()) else {
        return;
    };
    let Some((xs, xe)) = clip_range(x0, x1, buffer.size()) else {
        return;
    };

    for y in ys..=ye {
        let ny = (y as f32 - cy) / ry;
        for x in xs..=xe {
            let nx = (x as f32 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                buffer.put_clipped(x, y, color);
            }
        }
    }
}

/// Fill an ellipse with semi-axes `rx`, `ry` rotated by `angle` radians
pub fn fill_rotated_ellipse(
    buffer: &mut PixelBuffer,
    center: (f32, f32),
    rx: f32,
    ry: f32,
    angle: f32,
    color: Color,
) {
    let rx = rx.max(0.5);
    let ry = ry.max(0.5);
    let (sin, cos) = angle.sin_cos();
    let (cx, cy) = center;
    let reach = rx.max(ry).ceil() as i32;

    let Some((ys, ye)) = clip_range(cy.round() as i32 - reach, cy.round() as i32 + reach, buffer.size())
    else {
        return;
    };
    let Some((xs, xe)) = clip_range(cx.round() as i32 - reach, cx.round() as i32 + reach, buffer.size())
    else {
        return;
    };

    for y in ys..=ye {
        for x in xs..=xe {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let u = (dx * cos + dy * sin) / rx;
            let v = (-dx * sin + dy * cos) / ry;
            if u * u + v * v <= 1.0 {
                buffer.put_clipped(x, y, color);
            }
        }
    }
}

/// One-pixel circular outline of radius `r` around `(cx, cy)`
pub fn ring(buffer: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Color) {
    let r = r.max(1);
    let outer = r as f32 + 0.5;
    let inner = r as f32 - 0.5;

    let Some((ys, ye)) = clip_range(cy - r, cy + r, buffer.size()) else {
        return;
    };
    let Some((xs, xe)) = clip_range(cx - r, cx + r, buffer.size()) else {
        return;
    };

    for y in ys..=ye {
        for x in xs..=xe {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            if d >= inner && d <= outer {
                buffer.put_clipped(x, y, color);
            }
        }
    }
}

/// Horizontal run of pixels from `x0` to `x1` inclusive on row `y`
pub fn horizontal_span(buffer: &mut PixelBuffer, x0: i32, x1: i32, y: i32, color: Color) {
    if y < 0 || y >= buffer.size() as i32 {
        return;
    }
    let Some((xs, xe)) = clip_range(x0.min(x1), x0.max(x1), buffer.size()) else {
        return;
    };
    for x in xs..=xe {
        buffer.put_clipped(x, y, color);
    }
}

/// Line segment stamped with a square pen `width` pixels wide
pub fn thick_line(
    buffer: &mut PixelBuffer,
    from: (i32, i32),
    to: (i32, i32),
    width: u32,
    color: Color,
) {
    let width = width.max(1) as i32;
    // Pen spans [x - lo, x + hi] on each axis
    let lo = (width - 1) / 2;
    let hi = width / 2;

    let (mut x, mut y) = from;
    let dx = (to.0 - from.0).abs();
    let dy = -(to.1 - from.1).abs();
    let sx = if from.0 < to.0 { 1 } else { -1 };
    let sy = if from.1 < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        for py in (y - lo)..=(y + hi) {
            for px in (x - lo)..=(x + hi) {
                buffer.put_clipped(px, py, color);
            }
        }
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Closed polygon outline
pub fn polygon_outline(buffer: &mut PixelBuffer, points: &[(i32, i32)], width: u32, color: Color) {
    if points.is_empty() {
        return;
    }
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        thick_line(buffer, from, to, width, color);
    }
}

/// Fill a simple polygon using even-odd scanlines sampled at pixel centers
pub fn fill_polygon(buffer: &mut PixelBuffer, points: &[(i32, i32)], color: Color) {
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);
    let Some((ys, ye)) = clip_range(min_y, max_y, buffer.size()) else {
        return;
    };

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in ys..=ye {
        let sy = y as f32 + 0.5;
        crossings.clear();
        for (i, &(ax, ay)) in points.iter().enumerate() {
            let (bx, by) = points[(i + 1) % points.len()];
            let (ayf, byf) = (ay as f32, by as f32);
            if (ayf <= sy && byf > sy) || (byf <= sy && ayf > sy) {
                let t = (sy - ayf) / (byf - ayf);
                crossings.push(ax as f32 + t * (bx - ax) as f32);
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i32;
            let end = (pair[1] - 0.5).floor() as i32;
            if start <= end {
                horizontal_span(buffer, start, end, y, color);
            }
        }
    }
}

/// Soft disc: `color` blended in with `opacity` at the center, fading to
/// nothing at radius `r`
pub fn blend_disc(buffer: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Color, opacity: f32) {
    let r = r.max(1);
    let rf = r as f32;

    let Some((ys, ye)) = clip_range(cy - r, cy + r, buffer.size()) else {
        return;
    };
    let Some((xs, xe)) = clip_range(cx - r, cx + r, buffer.size()) else {
        return;
    };

    for y in ys..=ye {
        for x in xs..=xe {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= rf {
                buffer.blend_clipped(x, y, color, opacity * (1.0 - d / rf));
            }
        }
    }
}
