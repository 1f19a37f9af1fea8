//! End-to-end synthesis tests
//!
//! Runs full recipes (gradient -> overlay -> noise -> blur) through the
//! public API and checks the visible result.

use fruit_tex::prelude::*;
use fruit_tex::texture::generate;
use fruit_tex::TextureError;
use rand::SeedableRng;

fn distance_from_center(x: u32, y: u32, size: u32) -> f64 {
    let c = (size / 2) as f64;
    let dx = x as f64 - c;
    let dy = y as f64 - c;
    (dx * dx + dy * dy).sqrt()
}

/// Radial gradient hits its endpoints exactly at center and corner
#[test]
fn test_radial_gradient_bounds() {
    let base = Color::new(139, 0, 0);
    let tex = generate(512, base, GradientKind::Radial).expect("valid size");

    assert_eq!(tex.get_pixel(256, 256), Color::new(199, 60, 60));
    let corner = tex.get_pixel(0, 0);
    let shadow = Color::new(99, 0, 0);
    assert!(corner.r.abs_diff(shadow.r) <= 1);
    assert!(corner.g.abs_diff(shadow.g) <= 1);
    assert!(corner.b.abs_diff(shadow.b) <= 1);
}

/// Watermelon stripes are much darker than anything the gradient produces
#[test]
fn test_watermelon_stripes() {
    let spec = FruitSpec::new("watermelon", Color::new(0, 100, 0), PatternFamily::Watermelon);
    let tex = assemble_seeded(&GenerationRequest::new(&spec, 256), SeedPolicy::Fixed(1))
        .expect("valid size");

    assert_eq!((tex.width(), tex.height()), (256, 256));

    // Gradient green runs 160 -> 60; darken(base, 100) is black
    let striped_rows = (0..256)
        .filter(|&y| (0..256).any(|x| tex.get_pixel(x, y).g < 20))
        .count();
    assert!(striped_rows > 0);
    let gradient_rows = (0..256)
        .filter(|&y| (0..256).any(|x| tex.get_pixel(x, y).g >= 60))
        .count();
    assert!(gradient_rows > 0);
}

/// Grape bubbles leave bright highlights far from the gradient's own glow
#[test]
fn test_grape_highlights() {
    let base = Color::new(128, 0, 128);
    let spec = FruitSpec::new("grape", base, PatternFamily::Grape);
    let tex = assemble_seeded(&GenerationRequest::new(&spec, 128), SeedPolicy::Fixed(2))
        .expect("valid size");

    assert_eq!(tex.size(), 128);

    // Gradient red beyond radius 40 is at most ~144 before noise (+12)
    let highlight = base.lighten(60);
    let mut found = false;
    for y in 0..128 {
        for x in 0..128 {
            let p = tex.get_pixel(x, y);
            if distance_from_center(x, y, 128) > 40.0
                && p.r.abs_diff(highlight.r) <= 16
                && p.b.abs_diff(highlight.b) <= 16
            {
                found = true;
            }
        }
    }
    assert!(found, "no bubble highlight found away from the center");
}

/// Strawberry seeds never land in the guard zone, even after finishing
#[test]
fn test_strawberry_guard_zone_stays_smooth() {
    let base = Color::new(255, 60, 60);
    let spec = FruitSpec::new("strawberry", base, PatternFamily::Strawberry);
    let tex = assemble_seeded(&GenerationRequest::new(&spec, 512), SeedPolicy::Fixed(3))
        .expect("valid size");

    // Seeds are (90,45,20); the guard area only holds the reddish gradient
    // plus noise of at most +-15
    let seed_like = |c: Color| c.r < 150;
    for y in 0..512 {
        for x in 0..512 {
            if distance_from_center(x, y, 512) < 110.0 {
                assert!(!seed_like(tex.get_pixel(x, y)), "seed-like pixel at ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_zero_size_produces_no_buffer() {
    let spec = FruitSpec::new("cherry", Color::new(139, 0, 0), PatternFamily::Default);
    let mut rng = TextureRng::seed_from_u64(0);
    let result = assemble(&GenerationRequest::new(&spec, 0), &mut rng);
    assert!(matches!(result, Err(TextureError::InvalidDimension { size: 0 })));
}

/// Same seed, same bytes; independent entropy, different bytes
#[test]
fn test_seed_policy_selects_determinism() {
    let catalog = Catalog::builtin();
    for spec in &catalog {
        let request = GenerationRequest::new(spec, 96);
        let a = assemble_seeded(&request, SeedPolicy::Fixed(99)).expect("valid size");
        let b = assemble_seeded(&request, SeedPolicy::Fixed(99)).expect("valid size");
        assert_eq!(a.as_bytes(), b.as_bytes(), "{}", spec.name);

        let c = assemble_seeded(&request, SeedPolicy::Entropy).expect("valid size");
        let d = assemble_seeded(&request, SeedPolicy::Entropy).expect("valid size");
        assert_ne!(c.as_bytes(), d.as_bytes(), "{}", spec.name);
    }
}

/// Every family keeps the requested square shape for odd and tiny sizes
#[test]
fn test_shape_invariant_all_families() {
    for family in PatternFamily::ALL {
        let spec = FruitSpec::new("probe", Color::new(250, 250, 5), family);
        for size in [1, 2, 3, 15, 64, 100] {
            let mut rng = TextureRng::seed_from_u64(u64::from(size));
            let tex = assemble(&GenerationRequest::new(&spec, size), &mut rng).expect("valid size");
            assert_eq!((tex.width(), tex.height()), (size, size), "{family} @ {size}");
            assert_eq!(tex.as_bytes().len(), (size * size * 3) as usize);
        }
    }
}
