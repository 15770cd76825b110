//! Stack blur filters: a triangular-kernel sliding window.
//!
//! A pixel at offset `k` from the centre contributes with weight
//! `radius - |k| + 1`. The weighted sum is maintained with two running
//! accumulators per line:
//! - `incoming`: pixels whose weight grows by one on the next step
//! - `outgoing`: pixels whose weight shrinks by one on the next step
//!
//! Each step adds `incoming - outgoing` to the sum, so the cost per pixel is
//! constant whatever the radius.
//!
//! Three ways of normalising the sum are provided:
//!
//! | Filter | Edges | Normalisation | Radius |
//! |--------|-------|---------------|--------|
//! | [`stack_blur`] | truncated | exact division by in-bounds weight | ≤ [`MAX_RADIUS`] |
//! | [`stack_blur_table`] | replicated | `(sum * MUL[r]) >> SHG[r]` | ≤ 255 |
//! | [`stack_blur_multiplied`] | replicated | `sum * 1 / (r * (r + 2) + 1)` | ≤ [`MAX_RADIUS`] |

use log::warn;

use super::core::{
    check_dimensions, check_radius, scale_round, separable_exact, separable_u8, MAX_RADIUS,
};
use crate::error::Result;

/// Largest radius covered by [`MUL_TABLE`] and [`SHG_TABLE`].
pub const MAX_TABLE_RADIUS: usize = 255;

/// Stack blur multipliers by radius (Mario Klingemann's tables).
#[rustfmt::skip]
pub static MUL_TABLE: [u16; 256] = [
    512, 512, 512, 456, 328, 456, 335, 512, 405, 328, 271, 456, 388, 335, 292, 512,
    454, 405, 364, 328, 298, 271, 496, 456, 420, 388, 360, 335, 312, 292, 273, 512,
    482, 454, 428, 405, 383, 364, 345, 328, 312, 298, 284, 271, 259, 496, 475, 456,
    437, 420, 404, 388, 374, 360, 347, 335, 323, 312, 302, 292, 282, 273, 265, 512,
    497, 482, 468, 454, 441, 428, 417, 405, 394, 383, 373, 364, 354, 345, 337, 328,
    320, 312, 305, 298, 291, 284, 278, 271, 265, 259, 507, 496, 485, 475, 465, 456,
    446, 437, 428, 420, 412, 404, 396, 388, 381, 374, 367, 360, 354, 347, 341, 335,
    329, 323, 318, 312, 307, 302, 297, 292, 287, 282, 278, 273, 269, 265, 261, 512,
    505, 497, 489, 482, 475, 468, 461, 454, 447, 441, 435, 428, 422, 417, 411, 405,
    399, 394, 389, 383, 378, 373, 368, 364, 359, 354, 350, 345, 341, 337, 332, 328,
    324, 320, 316, 312, 309, 305, 301, 298, 294, 291, 287, 284, 281, 278, 274, 271,
    268, 265, 262, 259, 257, 507, 501, 496, 491, 485, 480, 475, 470, 465, 460, 456,
    451, 446, 442, 437, 433, 428, 424, 420, 416, 412, 408, 404, 400, 396, 392, 388,
    385, 381, 377, 374, 370, 367, 363, 360, 357, 354, 350, 347, 344, 341, 338, 335,
    332, 329, 326, 323, 320, 318, 315, 312, 310, 307, 304, 302, 299, 297, 294, 292,
    289, 287, 285, 282, 280, 278, 275, 273, 271, 269, 267, 265, 263, 261, 259, 257,
];

/// Stack blur right shifts by radius, paired with [`MUL_TABLE`].
#[rustfmt::skip]
pub static SHG_TABLE: [u8; 256] = [
     9, 11, 12, 13, 13, 14, 14, 15, 15, 15, 15, 16, 16, 16, 16, 17,
    17, 17, 17, 17, 17, 17, 18, 18, 18, 18, 18, 18, 18, 18, 18, 19,
    19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 19, 20, 20, 20,
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
    23, 23, 23, 23, 23, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
    24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24, 24,
];

// ============================================================================
// Exact Division
// ============================================================================

/// Stack blur with truncated edges and exact division.
///
/// Near the border only in-bounds pixels contribute and the weight total
/// shrinks with them, exactly like [`box_blur`](super::box_blur::box_blur)
/// shrinks its count. Rounding happens once, after both passes.
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
pub fn stack_blur(channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    check_radius(radius, MAX_RADIUS)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }
    Ok(separable_exact(channel, width, height, radius, stack_line))
}

/// Triangular window over one line, truncated at both ends.
pub(crate) fn stack_line(src: &[u128], radius: usize, sums: &mut [u128], weights: &mut [u128]) {
    let len = src.len();
    if len == 0 {
        return;
    }

    let mut sum = 0u128;
    let mut weight = 0u128;
    let mut incoming = 0u128;
    let mut incoming_count = 0u128;
    let mut outgoing = 0u128;
    let mut outgoing_count = 0u128;

    for (j, &v) in src[..=radius.min(len - 1)].iter().enumerate() {
        let w = (radius - j + 1) as u128;
        incoming += v;
        incoming_count += 1;
        sum += v * w;
        weight += w;
    }
    sums[0] = sum;
    weights[0] = weight;

    for pos in 1..len {
        if pos > radius + 1 {
            outgoing -= src[pos - radius - 2];
            outgoing_count -= 1;
        }
        if radius < len - pos {
            incoming += src[pos + radius];
            incoming_count += 1;
        }

        // The previous centre changes sides
        outgoing += src[pos - 1];
        outgoing_count += 1;
        incoming -= src[pos - 1];
        incoming_count -= 1;

        sum = sum + incoming - outgoing;
        weight = weight + incoming_count - outgoing_count;
        sums[pos] = sum;
        weights[pos] = weight;
    }
}

// ============================================================================
// Fixed-Point Table
// ============================================================================

/// Stack blur normalised with the classic 16-bit multiplier and shift tables.
///
/// Edges are replicated so the weight total is always `(radius + 1)²` and a
/// single table entry normalises the whole image. The tables are not exact:
/// at radius 2 the result is too bright and at radius 3 too dark. That
/// output is kept as is for compatibility.
///
/// # Errors
/// [`BlurError::UnsupportedRadius`](crate::error::BlurError::UnsupportedRadius)
/// when `radius > 255`.
pub fn stack_blur_table(channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    check_radius(radius, MAX_TABLE_RADIUS)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }
    if radius == 2 || radius == 3 {
        warn!("stack blur table is biased at radius {radius}");
    }

    let mul = MUL_TABLE[radius] as u64;
    let shift = SHG_TABLE[radius] as u32;
    Ok(separable_u8(channel, width, height, |src, dst| {
        clamped_stack_line(src, dst, radius, |sum| ((sum * mul) >> shift).min(255) as u8)
    }))
}

// ============================================================================
// Multiplier
// ============================================================================

/// Stack blur normalised by a precomputed `1 / (radius * (radius + 2) + 1)`.
///
/// Same replicated-edge window as [`stack_blur_table`], but the multiplier is
/// computed per call, so radii past the table are accepted up to
/// [`MAX_RADIUS`]. Products landing exactly on `.5` round to even.
///
/// # Arguments
/// * `channel` - Planar channel, length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Half window size
///
/// # Returns
/// Blurred channel with the same length
pub fn stack_blur_multiplied(
    channel: &[u8],
    width: usize,
    height: usize,
    radius: usize,
) -> Result<Vec<u8>> {
    check_dimensions(channel, width, height)?;
    check_radius(radius, MAX_RADIUS)?;
    if radius == 0 {
        return Ok(channel.to_vec());
    }

    let r = radius as u64;
    let multiplier = 1.0 / (r * (r + 2) + 1) as f64;
    Ok(separable_u8(channel, width, height, |src, dst| {
        clamped_stack_line(src, dst, radius, |sum| scale_round(sum, multiplier))
    }))
}

/// Triangular window over one line with the edge pixels replicated.
fn clamped_stack_line<N>(src: &[u8], dst: &mut [u8], radius: usize, normalize: N)
where
    N: Fn(u64) -> u8,
{
    let len = src.len();
    if len == 0 {
        return;
    }
    let r = radius as u64;
    let first = src[0] as u64;
    let last = src[len - 1] as u64;
    let reach = radius.min(len - 1);
    // Right-arm positions beyond the line, all reading the last pixel
    let tail = (radius - reach) as u64;

    // Left arm and centre read the first pixel with weights 1..=radius + 1
    let mut sum = first * (r + 1) * (r + 2) / 2;
    let mut incoming = first;
    let mut outgoing = first * (r + 1);
    for (j, &v) in src.iter().enumerate().take(reach + 1).skip(1) {
        incoming += v as u64;
        sum += v as u64 * (r - j as u64 + 1);
    }
    incoming += last * tail;
    sum += last * tail * (tail + 1) / 2;
    dst[0] = normalize(sum);

    for pos in 1..len {
        outgoing -= if pos > radius + 1 {
            src[pos - radius - 2] as u64
        } else {
            first
        };
        incoming += if radius < len - pos {
            src[pos + radius] as u64
        } else {
            last
        };

        outgoing += src[pos - 1] as u64;
        incoming -= src[pos - 1] as u64;

        sum = sum + incoming - outgoing;
        dst[pos] = normalize(sum);
    }
}
