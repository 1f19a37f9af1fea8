//! Citrus peel (dekopon, persimmon): a grid of small flattened dimples, each
//! with a bright rim highlight

use super::{jittered_grid, spacing};
use crate::seed::TextureRng;
use crate::texture::{fill_ellipse, Color, PixelBuffer};
use rand::Rng;

pub const DIMPLE_DARKEN: u8 = 60;
pub const HIGHLIGHT_LIGHTEN: u8 = 50;

pub fn draw(buffer: &mut PixelBuffer, base: Color, rng: &mut TextureRng) {
    let cell = spacing(buffer.size(), 20);
    let dimple = base.darken(DIMPLE_DARKEN);
    let highlight = base.lighten(HIGHLIGHT_LIGHTEN);

    for (x, y) in jittered_grid(buffer.size(), cell, cell / 3, rng) {
        let r = rng.random_range(3..=5);
        fill_ellipse(buffer, x - r, y - r / 2, x + r, y + r / 2, dimple);
        fill_ellipse(buffer, x - r / 2, y - r / 3, x + r / 2, y + r / 6, highlight);
    }
}
