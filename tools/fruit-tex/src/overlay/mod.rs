//! Family-specific pattern overlays
//!
//! Each [`PatternFamily`] maps to a [`Recipe`]: which gradient to start
//! from, which overlay draws the detail shapes, and how much noise and blur
//! finish the surface. Adding a family means adding a variant here, and the
//! `match` in [`PatternFamily::recipe`] will not compile until it has one.
//!
//! Macro structure (grid spacing, stripe direction, guard radius) depends
//! only on the buffer size and base color. The random source only moves
//! anchors and varies individual shapes.

pub mod citrus;
pub mod grape;
pub mod pineapple;
pub mod strawberry;
pub mod watermelon;

use crate::seed::TextureRng;
use crate::texture::{Color, GradientKind, PixelBuffer};
use rand::Rng;
use serde::Deserialize;

/// Overlay entry point shared by every family
pub type OverlayFn = fn(&mut PixelBuffer, Color, &mut TextureRng);

/// Selects the overlay algorithm for a fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternFamily {
    /// Plain gradient with light noise
    #[default]
    Default,
    /// Scattered seeds outside a clean center
    Strawberry,
    /// Wavy vertical stripes
    Watermelon,
    /// Diamond lattice with bumps
    Pineapple,
    /// Dimpled peel (dekopon, persimmon)
    CitrusDimple,
    /// Glossy bubbles
    Grape,
}

impl PatternFamily {
    pub const ALL: [PatternFamily; 6] = [
        PatternFamily::Default,
        PatternFamily::Strawberry,
        PatternFamily::Watermelon,
        PatternFamily::Pineapple,
        PatternFamily::CitrusDimple,
        PatternFamily::Grape,
    ];

    /// The synthesis steps for this family
    pub fn recipe(self) -> Recipe {
        match self {
            PatternFamily::Default => Recipe {
                gradient: GradientKind::Radial,
                base_noise: None,
                overlay: no_overlay,
                noise: Some(0.08),
                blur: None,
            },
            PatternFamily::Strawberry => Recipe {
                gradient: GradientKind::Radial,
                base_noise: None,
                overlay: strawberry::draw,
                noise: Some(0.06),
                blur: Some(0.6),
            },
            PatternFamily::Watermelon => Recipe {
                gradient: GradientKind::Linear,
                base_noise: None,
                overlay: watermelon::draw,
                noise: None,
                blur: Some(0.8),
            },
            PatternFamily::Pineapple => Recipe {
                gradient: GradientKind::Radial,
                base_noise: None,
                overlay: pineapple::draw,
                noise: Some(0.05),
                blur: Some(0.4),
            },
            PatternFamily::CitrusDimple => Recipe {
                gradient: GradientKind::Radial,
                base_noise: Some(0.18),
                overlay: citrus::draw,
                noise: None,
                blur: Some(0.5),
            },
            PatternFamily::Grape => Recipe {
                gradient: GradientKind::Radial,
                base_noise: None,
                overlay: grape::draw,
                noise: Some(0.05),
                blur: Some(0.3),
            },
        }
    }
}

impl std::fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternFamily::Default => "default",
            PatternFamily::Strawberry => "strawberry",
            PatternFamily::Watermelon => "watermelon",
            PatternFamily::Pineapple => "pineapple",
            PatternFamily::CitrusDimple => "citrus-dimple",
            PatternFamily::Grape => "grape",
        };
        f.write_str(name)
    }
}

/// Ordered synthesis steps for one family
///
/// Stages run as: gradient, `base_noise`, `overlay`, `noise`, `blur`.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub gradient: GradientKind,
    /// Noise applied to the bare gradient, before any shapes
    pub base_noise: Option<f32>,
    pub overlay: OverlayFn,
    /// Noise applied after the overlay
    pub noise: Option<f32>,
    /// Gaussian sigma of the terminal softening pass
    pub blur: Option<f32>,
}

fn no_overlay(_buffer: &mut PixelBuffer, _base: Color, _rng: &mut TextureRng) {}

/// Grid spacing `size / divisor`, never below one pixel
#[inline]
pub(crate) fn spacing(size: u32, divisor: u32) -> i32 {
    (size / divisor).max(1) as i32
}

/// Uniform offset in `[-bound, bound]`
#[inline]
pub(crate) fn jitter(rng: &mut TextureRng, bound: i32) -> i32 {
    let bound = bound.abs();
    rng.random_range(-bound..=bound)
}

/// Anchors on a regular grid starting half a cell in, each displaced by up
/// to `max_jitter` pixels on both axes
pub(crate) fn jittered_grid(
    size: u32,
    spacing: i32,
    max_jitter: i32,
    rng: &mut TextureRng,
) -> Vec<(i32, i32)> {
    let start = spacing / 2;
    let size = size as i32;
    let mut anchors = Vec::new();
    for x in (start..size).step_by(spacing as usize) {
        for y in (start..size).step_by(spacing as usize) {
            anchors.push((x + jitter(rng, max_jitter), y + jitter(rng, max_jitter)));
        }
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_watermelon_is_the_only_linear_family() {
        for family in PatternFamily::ALL {
            let expected = if family == PatternFamily::Watermelon {
                GradientKind::Linear
            } else {
                GradientKind::Radial
            };
            assert_eq!(family.recipe().gradient, expected, "{family}");
        }
    }

    #[test]
    fn test_only_citrus_uses_base_noise() {
        for family in PatternFamily::ALL {
            let recipe = family.recipe();
            assert_eq!(recipe.base_noise.is_some(), family == PatternFamily::CitrusDimple);
        }
    }

    #[test]
    fn test_spacing_floor() {
        assert_eq!(spacing(512, 20), 25);
        assert_eq!(spacing(8, 20), 1);
        assert_eq!(spacing(1, 14), 1);
    }

    #[test]
    fn test_jittered_grid_bounds() {
        let mut rng = TextureRng::seed_from_u64(5);
        let anchors = jittered_grid(100, 10, 3, &mut rng);
        assert_eq!(anchors.len(), 100);
        for (i, &(x, y)) in anchors.iter().enumerate() {
            let gx = 5 + (i as i32 / 10) * 10;
            let gy = 5 + (i as i32 % 10) * 10;
            assert!((x - gx).abs() <= 3);
            assert!((y - gy).abs() <= 3);
        }
    }

    #[test]
    fn test_jitter_zero_bound() {
        let mut rng = TextureRng::seed_from_u64(6);
        assert_eq!(jitter(&mut rng, 0), 0);
    }

    #[test]
    fn test_family_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            family: PatternFamily,
        }
        let w: Wrapper = toml::from_str("family = \"citrus-dimple\"").unwrap();
        assert_eq!(w.family, PatternFamily::CitrusDimple);
    }
}
