//! Pineapple: jittered diamond lattice with scattered ring bumps

use super::{jitter, spacing};
use crate::seed::TextureRng;
use crate::texture::{fill_polygon, polygon_outline, ring, Color, PixelBuffer};
use rand::Rng;

pub const OUTLINE_DARKEN: u8 = 50;
pub const FILL_DARKEN: u8 = 30;
pub const BUMP_DARKEN: u8 = 70;

/// Max per-vertex displacement in pixels
const VERTEX_JITTER: i32 = 2;
const OUTLINE_WIDTH: u32 = 2;

/// Diamond inscribed in the cell at `(x, y)`: top, right, bottom, left
fn diamond(x: i32, y: i32, cell: i32, rng: &mut TextureRng) -> [(i32, i32); 4] {
    let half = cell / 2;
    let mut j = || jitter(rng, VERTEX_JITTER);
    [
        (x + half + j(), y + j()),
        (x + cell + j(), y + half + j()),
        (x + half + j(), y + cell + j()),
        (x + j(), y + half + j()),
    ]
}

/// Shrink a quad halfway toward its centroid
fn inset(points: &[(i32, i32); 4]) -> [(i32, i32); 4] {
    let cx = points.iter().map(|p| p.0).sum::<i32>() as f32 / 4.0;
    let cy = points.iter().map(|p| p.1).sum::<i32>() as f32 / 4.0;
    points.map(|(x, y)| {
        (
            (cx + (x as f32 - cx) * 0.5).round() as i32,
            (cy + (y as f32 - cy) * 0.5).round() as i32,
        )
    })
}

pub fn draw(buffer: &mut PixelBuffer, base: Color, rng: &mut TextureRng) {
    let size = buffer.size() as i32;
    let cell = spacing(buffer.size(), 14);
    let outline = base.darken(OUTLINE_DARKEN);
    let fill = base.darken(FILL_DARKEN);

    for x in (-cell..size + cell).step_by(cell as usize) {
        for y in (-cell..size + cell).step_by(cell as usize) {
            let points = diamond(x, y, cell, rng);
            polygon_outline(buffer, &points, OUTLINE_WIDTH, outline);
            fill_polygon(buffer, &inset(&points), fill);
        }
    }

    let bump = base.darken(BUMP_DARKEN);
    for _ in 0..buffer.size() / 30 {
        let bx = rng.random_range(0..=size);
        let by = rng.random_range(0..=size);
        let r = rng.random_range(2..=4);
        ring(buffer, bx, by, r, bump);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{generate, GradientKind};
    use rand::SeedableRng;

    #[test]
    fn test_inset_halves_extent() {
        let quad = [(10, 0), (20, 10), (10, 20), (0, 10)];
        assert_eq!(inset(&quad), [(10, 5), (15, 10), (10, 15), (5, 10)]);
    }

    #[test]
    fn test_diamond_vertices_stay_near_cell() {
        let mut rng = TextureRng::seed_from_u64(31);
        for _ in 0..50 {
            let [top, right, bottom, left] = diamond(100, 200, 36, &mut rng);
            assert!((top.0 - 118).abs() <= 2 && (top.1 - 200).abs() <= 2);
            assert!((right.0 - 136).abs() <= 2 && (right.1 - 218).abs() <= 2);
            assert!((bottom.0 - 118).abs() <= 2 && (bottom.1 - 236).abs() <= 2);
            assert!((left.0 - 100).abs() <= 2 && (left.1 - 218).abs() <= 2);
        }
    }

    #[test]
    fn test_lattice_uses_both_shades() {
        let base = Color::new(255, 215, 0);
        let mut tex = generate(256, base, GradientKind::Radial).unwrap();
        let mut rng = TextureRng::seed_from_u64(32);
        draw(&mut tex, base, &mut rng);

        let outline = base.darken(OUTLINE_DARKEN);
        let fill = base.darken(FILL_DARKEN);
        let mut seen = (0, 0);
        for y in 0..256 {
            for x in 0..256 {
                let p = tex.get_pixel(x, y);
                if p == outline {
                    seen.0 += 1;
                } else if p == fill {
                    seen.1 += 1;
                }
            }
        }
        assert!(seen.0 > 1000, "outline pixels: {}", seen.0);
        assert!(seen.1 > 1000, "fill pixels: {}", seen.1);
    }
}
