//! Faux Gaussian blur built from three passes of a separable filter.
//!
//! Convolving a box (or triangular) kernel with itself three times gives a
//! close approximation of a Gaussian. Each pass is O(width * height), so the
//! composition is too.

use log::trace;

use super::core::{check_dimensions, check_radius};
use super::dispatch::SeparableFilter;
use crate::error::Result;

/// Number of base-filter passes.
pub const GAUSSIAN_PASSES: usize = 3;

/// Approximate a Gaussian blur with three passes of `base` at the same radius.
///
/// Dimensions and radius are validated once, before the first pass.
///
/// # Arguments
/// * `channel` - Planar channel, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Radius used by every pass
/// * `base` - The separable filter to repeat
///
/// # Returns
/// Blurred channel with the same length
pub fn gaussian_blur(
    channel: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    base: SeparableFilter,
) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    check_radius(radius, base.max_radius())?;
    let mut current = channel.to_vec();
    if radius == 0 {
        return Ok(current);
    }

    for pass in 0..GAUSSIAN_PASSES {
        trace!("gaussian pass {} of {} with {}", pass + 1, GAUSSIAN_PASSES, base);
        current = base.apply(&current, width, height, radius)?;
    }
    Ok(current)
}
