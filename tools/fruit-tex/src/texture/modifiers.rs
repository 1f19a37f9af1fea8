//! Texture modifiers for post-processing
//!
//! Modifiers are deterministic whole-buffer passes. Anything that needs a
//! random source takes it explicitly instead (see [`super::apply_noise`]).

use super::{Color, PixelBuffer};

/// Trait for texture modifiers
pub trait TextureModifier {
    /// Apply the modification to the texture buffer
    fn apply(&self, buffer: &mut PixelBuffer);
}

/// Extension trait for fluent modifier application
pub trait TextureApply {
    /// Apply a modifier and return self for chaining
    fn apply<M: TextureModifier>(&mut self, modifier: M) -> &mut Self;
}

impl TextureApply for PixelBuffer {
    fn apply<M: TextureModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Separable Gaussian blur with edge clamping
#[derive(Debug, Clone, Copy)]
pub struct GaussianBlur {
    /// Standard deviation in pixels
    pub sigma: f32,
}

impl GaussianBlur {
    /// Normalized 1D kernel covering three standard deviations
    fn kernel(&self) -> Vec<f32> {
        let radius = (self.sigma * 3.0).ceil().max(1.0) as i32;
        let denom = 2.0 * self.sigma * self.sigma;
        let mut weights: Vec<f32> = (-radius..=radius)
            .map(|i| (-(i * i) as f32 / denom).exp())
            .collect();
        let sum: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }
        weights
    }
}

impl TextureModifier for GaussianBlur {
    fn apply(&self, buffer: &mut PixelBuffer) {
        if self.sigma <= 0.0 || buffer.size() < 2 {
            return;
        }

        let kernel = self.kernel();
        let radius = (kernel.len() / 2) as i32;
        let size = buffer.size() as i32;

        let sample = |src: &[[f32; 3]], x: i32, y: i32| -> [f32; 3] {
            let x = x.clamp(0, size - 1);
            let y = y.clamp(0, size - 1);
            src[(y * size + x) as usize]
        };

        let source: Vec<[f32; 3]> = buffer
            .as_bytes()
            .chunks_exact(3)
            .map(|p| [p[0] as f32, p[1] as f32, p[2] as f32])
            .collect();

        // Horizontal pass
        let mut horizontal = vec![[0.0f32; 3]; source.len()];
        for y in 0..size {
            for x in 0..size {
                let mut acc = [0.0f32; 3];
                for (k, w) in kernel.iter().enumerate() {
                    let s = sample(&source, x + k as i32 - radius, y);
                    for c in 0..3 {
                        acc[c] += s[c] * w;
                    }
                }
                horizontal[(y * size + x) as usize] = acc;
            }
        }

        // Vertical pass
        for y in 0..size {
            for x in 0..size {
                let mut acc = [0.0f32; 3];
                for (k, w) in kernel.iter().enumerate() {
                    let s = sample(&horizontal, x, y + k as i32 - radius);
                    for c in 0..3 {
                        acc[c] += s[c] * w;
                    }
                }
                let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;
                buffer.set_pixel(
                    x as u32,
                    y as u32,
                    Color::new(to_u8(acc[0]), to_u8(acc[1]), to_u8(acc[2])),
                );
            }
        }
    }
}
