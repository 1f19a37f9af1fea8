//! Grape: overlapping dark bubbles, each with a small glossy highlight
//! above its center

use super::{jittered_grid, spacing};
use crate::seed::TextureRng;
use crate::texture::{fill_ellipse, Color, PixelBuffer};
use rand::Rng;

pub const SHADOW_DARKEN: u8 = 50;
pub const HIGHLIGHT_LIGHTEN: u8 = 60;

pub fn draw(buffer: &mut PixelBuffer, base: Color, rng: &mut TextureRng) {
    let cell = spacing(buffer.size(), 20);
    let shadow = base.darken(SHADOW_DARKEN);
    let highlight = base.lighten(HIGHLIGHT_LIGHTEN);

    for (x, y) in jittered_grid(buffer.size(), cell, cell / 3, rng) {
        let r = rng.random_range(5..=8);
        fill_ellipse(buffer, x - r, y - r, x + r, y + r, shadow);

        let hw = r / 2;
        let hh = r / 3;
        fill_ellipse(buffer, x - hw, y - hh * 2, x + hw, y - hh, highlight);
    }
}
