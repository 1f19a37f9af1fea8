//! Texture buffers and the drawing stages that operate on them
//!
//! Every stage works in place on a [`PixelBuffer`]: gradients create it,
//! overlays and noise mutate it, and export hands it off.
//!
//! # Example
//! ```no_run
//! use fruit_tex::texture::*;
//! use fruit_tex::seed::TextureRng;
//! use rand::SeedableRng;
//!
//! let mut rng = TextureRng::seed_from_u64(7);
//! let mut tex = generate(256, Color::new(139, 0, 0), GradientKind::Radial)?;
//! apply_noise(&mut tex, 0.08, &mut rng);
//! tex.apply(GaussianBlur { sigma: 0.5 });
//! # Ok::<(), fruit_tex::TextureError>(())
//! ```

mod color;
mod draw;
mod gradient;
mod modifiers;
mod noise;
#[cfg(feature = "png-export")]
mod export;

pub use self::buffer::PixelBuffer;

pub use color::Color;
pub use draw::{
    blend_disc, fill_ellipse, fill_polygon, fill_rotated_ellipse, horizontal_span,
    polygon_outline, ring, thick_line,
};
pub use gradient::{generate, GradientKind};
pub use modifiers::{GaussianBlur, TextureApply, TextureModifier};
pub use noise::apply_noise;

#[cfg(feature = "png-export")]
pub use export::write_png;

mod buffer {
    use super::Color;

    /// Square RGB pixel buffer
    ///
    /// The side length is fixed at construction; there is no way to resize
    /// or reshape a buffer after the fact.
    #[derive(Clone, PartialEq, Eq)]
    pub struct PixelBuffer {
        size: u32,
        /// RGB pixel data (3 bytes per pixel, row-major order)
        pixels: Vec<u8>,
    }

    impl PixelBuffer {
        /// Create a buffer filled with a solid color
        ///
        /// Callers are expected to have validated `size`; the public entry
        /// point for creating buffers is [`super::generate`].
        pub(crate) fn filled(size: u32, color: Color) -> Self {
            let len = size as usize * size as usize;
            let mut pixels = Vec::with_capacity(len * 3);
            for _ in 0..len {
                pixels.extend_from_slice(&color.to_array());
            }
            Self { size, pixels }
        }

        /// Side length in pixels
        #[inline]
        pub fn size(&self) -> u32 {
            self.size
        }

        /// Width in pixels (always equal to [`Self::size`])
        #[inline]
        pub fn width(&self) -> u32 {
            self.size
        }

        /// Height in pixels (always equal to [`Self::size`])
        #[inline]
        pub fn height(&self) -> u32 {
            self.size
        }

        /// Raw RGB bytes, row-major
        #[inline]
        pub fn as_bytes(&self) -> &[u8] {
            &self.pixels
        }

        #[inline]
        fn index(&self, x: u32, y: u32) -> usize {
            (y as usize * self.size as usize + x as usize) * 3
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> Color {
            let idx = self.index(x, y);
            Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
            let idx = self.index(x, y);
            self.pixels[idx..idx + 3].copy_from_slice(&color.to_array());
        }

        /// Signed coordinates that fall inside the buffer, if any
        #[inline]
        pub fn clip(&self, x: i32, y: i32) -> Option<(u32, u32)> {
            let size = self.size as i64;
            let (x, y) = (x as i64, y as i64);
            if x >= 0 && x < size && y >= 0 && y < size {
                Some((x as u32, y as u32))
            } else {
                None
            }
        }

        /// Set a pixel given signed coordinates, ignoring anything off-buffer
        ///
        /// Returns whether the pixel was written.
        #[inline]
        pub fn put_clipped(&mut self, x: i32, y: i32, color: Color) -> bool {
            match self.clip(x, y) {
                Some((x, y)) => {
                    self.set_pixel(x, y, color);
                    true
                }
                None => false,
            }
        }

        /// Mix `color` over the existing pixel with the given opacity
        #[inline]
        pub fn blend_clipped(&mut self, x: i32, y: i32, color: Color, opacity: f32) {
            if let Some((x, y)) = self.clip(x, y) {
                let base = self.get_pixel(x, y);
                self.set_pixel(x, y, base.mix(color, opacity));
            }
        }

        /// Iterate every pixel as a mutable RGB triple
        pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
            self.pixels.chunks_exact_mut(3)
        }

        /// Consume the buffer, returning its raw RGB bytes
        pub fn into_bytes(self) -> Vec<u8> {
            self.pixels
        }
    }

    impl std::fmt::Debug for PixelBuffer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("PixelBuffer")
                .field("size", &self.size)
                .field("bytes", &self.pixels.len())
                .finish()
        }
    }
}
