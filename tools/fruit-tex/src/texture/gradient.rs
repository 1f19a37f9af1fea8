//! Base gradient synthesis
//!
//! Every texture starts as a gradient from the base color's highlight to its
//! shadow. The gradient kind only changes how the interpolation ratio is
//! computed for each pixel.

use super::{Color, PixelBuffer};
use crate::error::TextureError;
use serde::Deserialize;

/// How the highlight-to-shadow ratio is computed per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Distance from the center, normalized by the center-to-corner distance
    #[default]
    Radial,
    /// Top to bottom
    Linear,
    /// Top-left to bottom-right
    Diagonal,
}

impl GradientKind {
    /// Interpolation ratio in [0, 1] for pixel (x, y)
    #[inline]
    fn ratio(self, x: u32, y: u32, size: u32) -> f64 {
        let size_f = size as f64;
        let r = match self {
            GradientKind::Radial => {
                let center = (size / 2) as f64;
                let max_dist = (center * center * 2.0).sqrt();
                if max_dist == 0.0 {
                    0.0
                } else {
                    let dx = x as f64 - center;
                    let dy = y as f64 - center;
                    (dx * dx + dy * dy).sqrt() / max_dist
                }
            }
            GradientKind::Linear => y as f64 / size_f,
            GradientKind::Diagonal => (x as f64 + y as f64) / (2.0 * size_f),
        };
        r.clamp(0.0, 1.0)
    }
}

impl std::str::FromStr for GradientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radial" => Ok(GradientKind::Radial),
            "linear" => Ok(GradientKind::Linear),
            "diagonal" => Ok(GradientKind::Diagonal),
            other => Err(format!(
                "unknown gradient '{other}' (expected radial, linear or diagonal)"
            )),
        }
    }
}

/// Generate a `size` x `size` gradient from `base.highlight()` to `base.shadow()`
///
/// Channel values are truncated toward zero after interpolation. Both
/// endpoints are already clamped, so every result stays in range.
///
/// # Errors
/// Returns [`TextureError::InvalidDimension`] when `size` is zero.
pub fn generate(size: u32, base: Color, kind: GradientKind) -> Result<PixelBuffer, TextureError> {
    if size == 0 {
        return Err(TextureError::InvalidDimension { size });
    }

    let highlight = base.highlight();
    let shadow = base.shadow();
    let mut buffer = PixelBuffer::filled(size, highlight);

    for y in 0..size {
        for x in 0..size {
            let t = kind.ratio(x, y, size);
            buffer.set_pixel(x, y, lerp_color(highlight, shadow, t));
        }
    }
    Ok(buffer)
}

/// Linear interpolation between two colors, truncating each channel
#[inline]
fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    Color::new(lerp_u8(a.r, b.r, t), lerp_u8(a.g, b.g, t), lerp_u8(a.b, b.b, t))
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).clamp(0.0, 255.0) as u8
}
