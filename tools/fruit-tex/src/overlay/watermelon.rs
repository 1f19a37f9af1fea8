//! Watermelon: wavy vertical stripes over a linear gradient, with faint
//! lighter rind patches

use super::{jitter, spacing};
use crate::seed::TextureRng;
use crate::texture::{blend_disc, horizontal_span, Color, PixelBuffer};
use rand::Rng;
use std::f64::consts::TAU;

pub const STRIPE_DARKEN: u8 = 100;
pub const PATCH_LIGHTEN: u8 = 30;
const PATCH_OPACITY: f32 = 0.35;

/// Stripe color for a base color
#[inline]
pub fn stripe_color(base: Color) -> Color {
    base.darken(STRIPE_DARKEN)
}

/// Left edges of the undisplaced stripes, extending two stripe widths past
/// both sides so waves never leave a bare margin
pub fn stripe_origins(size: u32) -> Vec<i32> {
    let width = spacing(size, 20);
    let pitch = (width * 3) as usize;
    (-width * 2..size as i32 + width * 2).step_by(pitch).collect()
}

pub fn draw(buffer: &mut PixelBuffer, base: Color, rng: &mut TextureRng) {
    let size = buffer.size();
    let stripe = stripe_color(base);
    let width = spacing(size, 20);
    let amplitude = (size as f64 / 40.0).max(1.0);

    for origin in stripe_origins(size) {
        for y in 0..size as i32 {
            // One full wave per buffer height, phase-shifted per stripe
            let wave = amplitude * (TAU * y as f64 / size as f64 + origin as f64).sin();
            let start = origin + wave as i32 + jitter(rng, 2);
            horizontal_span(buffer, start, start + width, y, stripe);
        }
    }

    let patch = base.lighten(PATCH_LIGHTEN);
    let min_r = spacing(size, 30);
    let max_r = spacing(size, 15).max(min_r);
    for _ in 0..size / 50 {
        let px = rng.random_range(0..=size as i32);
        let py = rng.random_range(0..=size as i32);
        let radius = rng.random_range(min_r..=max_r);
        blend_disc(buffer, px, py, radius, patch, PATCH_OPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{generate, GradientKind};
    use rand::SeedableRng;

    #[test]
    fn test_stripe_origins_cover_buffer() {
        let origins = stripe_origins(256);
        // width 12, pitch 36
        assert_eq!(origins.first(), Some(&-24));
        assert!(origins.windows(2).all(|w| w[1] - w[0] == 36));
        assert!(*origins.last().unwrap() >= 256 - 36);
    }

    #[test]
    fn test_stripes_cross_every_row() {
        let base = Color::new(0, 100, 0);
        let mut tex = generate(256, base, GradientKind::Linear).unwrap();
        let mut rng = TextureRng::seed_from_u64(21);
        draw(&mut tex, base, &mut rng);

        // Patches blend toward lighter green, so stripe pixels stay the
        // darkest thing in the buffer
        let stripe = stripe_color(base);
        assert_eq!(stripe, Color::new(0, 0, 0));
        let rows_with_stripe = (0..256)
            .filter(|&y| (0..256).any(|x| tex.get_pixel(x, y).g < 20))
            .count();
        assert_eq!(rows_with_stripe, 256);
    }

    #[test]
    fn test_small_buffer_does_not_panic() {
        for size in [1, 2, 5, 19, 20] {
            let base = Color::new(0, 100, 0);
            let mut tex = generate(size, base, GradientKind::Linear).unwrap();
            let mut rng = TextureRng::seed_from_u64(size as u64);
            draw(&mut tex, base, &mut rng);
            assert_eq!(tex.size(), size);
        }
    }
}
