//! Box blur filters: naive windowed mean, sliding sum, clamped sliding sum.
//!
//! All filters take one planar 8-bit channel (row-major, `width * height`
//! values) and return a new buffer of the same shape.
//!
//! | Filter | Edges | Cost per pixel |
//! |--------|-------|----------------|
//! | [`box_blur_naive`] | window truncated, divides by in-bounds count | O(r²) |
//! | [`box_blur`] | window truncated, divides by in-bounds count | O(1) |
//! | [`box_blur_clamped`] | edge pixel replicated, fixed count | O(1) |
//!
//! `box_blur` produces exactly the same pixels as `box_blur_naive`.
//! `box_blur_clamped` pulls border pixels toward the border value.

use super::core::{
    check_dimensions, check_radius, div_round, scale_round, separable_exact, separable_u8, MAX_RADIUS,
};
use crate::error::Result;

// ============================================================================
// Windowed Mean
// ============================================================================

/// Box blur by direct summation of the full 2D window.
///
/// Every in-bounds pixel within `radius` rows and columns of the target is
/// summed and divided by the number of contributors. This is the reference
/// result for [`box_blur`]; it is too slow for large radii.
///
/// # Arguments
/// * `channel` - Planar channel, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Half window size
///
/// # Returns
/// Blurred channel with the same length
pub fn box_blur_naive(channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }

    let mut output = Vec::with_capacity(channel.len());
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = y.saturating_add(radius).min(height - 1);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = x.saturating_add(radius).min(width - 1);

            let mut sum = 0u64;
            for sy in y0..=y1 {
                let row = &channel[sy * width..(sy + 1) * width];
                sum += row[x0..=x1].iter().map(|&v| v as u64).sum::<u64>();
            }
            let count = ((y1 - y0 + 1) * (x1 - x0 + 1)) as u128;

            output.push(div_round(sum.into(), count));
        }
    }

    Ok(output)
}

// ============================================================================
// Sliding Sum
// ============================================================================

/// Box blur with running window sums, O(1) per pixel.
///
/// The window is truncated at the image border and the in-bounds count is
/// tracked alongside the sum, so the result matches [`box_blur_naive`]
/// bit for bit.
///
/// # Arguments
/// * `channel` - Planar channel, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Half window size
///
/// # Returns
/// Blurred channel with the same length
pub fn box_blur(channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }
    Ok(separable_exact(channel, width, height, radius, box_line))
}

/// Running sum over a truncated window of `2 * radius + 1` positions.
pub(crate) fn box_line(src: &[u128], radius: usize, sums: &mut [u128], counts: &mut [u128]) {
    let len = src.len();
    if len == 0 {
        return;
    }
    // Any wider window covers the same pixels
    let radius = radius.min(len);

    let mut sum = 0u128;
    let mut count = 0u128;
    for &v in &src[..=radius.min(len - 1)] {
        sum += v;
        count += 1;
    }
    sums[0] = sum;
    counts[0] = count;

    for pos in 1..len {
        if pos > radius {
            sum -= src[pos - radius - 1];
            count -= 1;
        }
        if radius < len - pos {
            sum += src[pos + radius];
            count += 1;
        }
        sums[pos] = sum;
        counts[pos] = count;
    }
}

// ============================================================================
// Clamped Sliding Sum
// ============================================================================

/// Box blur with a fixed window size and replicated border pixels.
///
/// Out-of-bounds neighbours are replaced by the nearest edge pixel, so every
/// window holds exactly `2 * radius + 1` samples and the average is a multiply
/// by a precomputed `1 / (2 * radius + 1)`. Border pixels are biased toward
/// their own value compared to [`box_blur`].
///
/// # Errors
/// [`BlurError::UnsupportedRadius`](crate::error::BlurError::UnsupportedRadius)
/// when `radius > MAX_RADIUS`.
///
/// # Arguments
/// * `channel` - Planar channel, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Half window size
///
/// # Returns
/// Blurred channel with the same length
pub fn box_blur_clamped(channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    check_radius(radius, MAX_RADIUS)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }

    let multiplier = 1.0 / (2 * radius + 1) as f64;
    Ok(separable_u8(channel, width, height, |src, dst| {
        clamped_box_line(src, dst, radius, multiplier)
    }))
}

fn clamped_box_line(src: &[u8], dst: &mut [u8], radius: usize, multiplier: f64) {
    let len = src.len();
    if len == 0 {
        return;
    }
    let first = src[0] as u64;
    let last = src[len - 1] as u64;
    let reach = radius.min(len - 1);

    // Window around position 0: first pixel radius + 1 times, then the right arm
    let mut sum = first * (radius as u64 + 1);
    sum += src[1..=reach].iter().map(|&v| v as u64).sum::<u64>();
    sum += last * (radius - reach) as u64;
    dst[0] = scale_round(sum, multiplier);

    for pos in 1..len {
        let outgoing = if pos > radius + 1 {
            src[pos - radius - 1] as u64
        } else {
            first
        };
        let incoming = if radius < len - pos {
            src[pos + radius] as u64
        } else {
            last
        };
        sum = sum + incoming - outgoing;
        dst[pos] = scale_round(sum, multiplier);
    }
}
