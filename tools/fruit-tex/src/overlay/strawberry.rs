//! Strawberry: scattered seeds around a clean central highlight

use crate::seed::TextureRng;
use crate::texture::{fill_rotated_ellipse, Color, PixelBuffer};
use rand::Rng;

pub const SEED_COLOR: Color = Color::new(90, 45, 20);
pub const SEED_HIGHLIGHT: Color = Color::new(160, 90, 40);

/// Max seed tilt either way, in degrees
const MAX_TILT_DEG: f32 = 20.0;

/// Radius around the center that stays free of seeds
#[inline]
pub fn guard_radius(size: u32) -> f64 {
    size as f64 * 0.25
}

/// Seed anchors scattered uniformly over the buffer, minus the guard zone
///
/// `(size / 10)^2 / 2` candidates are drawn; those inside the guard radius
/// are dropped rather than redrawn, so the outer ring keeps a constant
/// density.
pub fn seed_anchors(size: u32, rng: &mut TextureRng) -> Vec<(i32, i32)> {
    let per_side = (size / 10) as usize;
    let attempts = per_side * per_side / 2;
    let center = (size / 2) as f64;
    let guard = guard_radius(size);
    let max = size as i32;

    (0..attempts)
        .filter_map(|_| {
            let x = rng.random_range(0..=max);
            let y = rng.random_range(0..=max);
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            ((dx * dx + dy * dy).sqrt() >= guard).then_some((x, y))
        })
        .collect()
}

pub fn draw(buffer: &mut PixelBuffer, _base: Color, rng: &mut TextureRng) {
    for (x, y) in seed_anchors(buffer.size(), rng) {
        let w = rng.random_range(2..=4);
        let h = w + rng.random_range(0..=2);
        let tilt = rng
            .random_range(-MAX_TILT_DEG..=MAX_TILT_DEG)
            .to_radians();
        // Seeds are taller than wide; tilt is measured from vertical
        let angle = std::f32::consts::FRAC_PI_2 + tilt;
        let (x, y) = (x as f32, y as f32);

        fill_rotated_ellipse(buffer, (x, y), h as f32, w as f32, angle, SEED_COLOR);
        fill_rotated_ellipse(
            buffer,
            (x, y - 1.0),
            (h / 2) as f32,
            (w / 2) as f32,
            angle,
            SEED_HIGHLIGHT,
        );
    }
}
