//! Color temperature transform
//!
//! Scales each RGB channel of an 8-bit image by the matching component of a
//! Kelvin table multiplier:
//!
//! ```text
//! R' = clamp(round(R * r / 255.0), 0, 255)
//! ```
//!
//! and likewise for G and B. Transforms never modify their source, so one
//! decoded image can feed every table entry.

mod parallel;

use image::{DynamicImage, RgbImage};

use crate::kelvin::{self, Multiplier};
use parallel::parallel_for_each_chunk_mut;

/// Minimum number of pixels to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Normalize any decoded image to 8-bit RGB.
///
/// Alpha is dropped, grayscale is expanded to three equal channels and
/// higher bit depths are scaled down to 8 bits.
pub fn to_rgb(image: DynamicImage) -> RgbImage {
    image.into_rgb8()
}

/// Scale one channel value by a multiplier component.
///
/// Rounds half away from zero, which for these non-negative values is
/// round-half-up.
#[inline]
pub fn scale_channel(value: u8, component: u8) -> u8 {
    scale_by_gain(value, component as f32 / 255.0)
}

#[inline]
fn scale_by_gain(value: u8, gain: f32) -> u8 {
    (value as f32 * gain).round().clamp(0.0, 255.0) as u8
}

/// Apply a multiplier to every pixel, returning a new image.
pub fn apply_multiplier(source: &RgbImage, multiplier: Multiplier) -> RgbImage {
    let mut output = source.clone();
    if multiplier == Multiplier::IDENTITY {
        return output;
    }

    let [r_gain, g_gain, b_gain] = multiplier.gains();
    let data: &mut [u8] = &mut output;
    parallel_for_each_chunk_mut(data, 3, |pixel| {
        pixel[0] = scale_by_gain(pixel[0], r_gain);
        pixel[1] = scale_by_gain(pixel[1], g_gain);
        pixel[2] = scale_by_gain(pixel[2], b_gain);
    });

    output
}

/// Apply the table multiplier for `temperature`.
///
/// # Panics
/// If `temperature` is not in the Kelvin table.
pub fn apply_temperature(source: &RgbImage, temperature: u32) -> RgbImage {
    apply_multiplier(source, kelvin::lookup(temperature))
}
