//! Per-pixel random perturbation

use super::PixelBuffer;
use super::color::clamp_channel;
use rand::Rng;

/// Add an independent random offset to every channel of every pixel
///
/// Offsets are drawn uniformly from `[-255 * intensity, 255 * intensity]`
/// and the result is clamped. `intensity` is clamped to `[0, 1]`; zero is a
/// no-op that does not touch the random source.
pub fn apply_noise<R: Rng + ?Sized>(buffer: &mut PixelBuffer, intensity: f32, rng: &mut R) {
    let amplitude = (255.0 * intensity.clamp(0.0, 1.0)) as i32;
    if amplitude == 0 {
        return;
    }

    for pixel in buffer.pixels_mut() {
        for channel in pixel.iter_mut() {
            let offset = rng.random_range(-amplitude..=amplitude);
            *channel = clamp_channel(*channel as i32 + offset);
        }
    }
}
