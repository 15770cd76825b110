//! Core utilities shared by the channel filters.
//!
//! This module provides:
//! - Dimension validation for planar channel buffers
//! - Rounding helpers for the exact-division filters
//! - The two separable drivers (row pass, then column pass)
//!
//! Exact-division filters run through [`separable_exact`]: the row pass keeps
//! unnormalised window sums, the column pass sums those again and divides once
//! by the product of both weight totals. Replicating filters run through
//! [`separable_u8`], which stores an 8-bit intermediate between the passes.
//!
//! The exact driver accumulates in `u128`. With `radius <= MAX_RADIUS` a 2D
//! triangular window sum stays below `255 * (MAX_RADIUS + 1)^4`, far inside
//! that range whatever the image size.

use crate::error::{BlurError, Result};

/// Largest radius accepted by the weighted and replicated-edge filters.
///
/// The truncated box filters accept any radius, since a window wider than the
/// line already covers all of it.
pub const MAX_RADIUS: usize = 65_535;

/// Check that `channel` holds exactly `width * height` pixels.
pub fn check_dimensions(channel: &[u8], width: usize, height: usize) -> Result<()> {
    match width.checked_mul(height) {
        Some(size) if size == channel.len() => Ok(()),
        _ => Err(BlurError::DimensionMismatch {
            len: channel.len(),
            width,
            height,
        }),
    }
}

/// Reject `radius` above `max` for filters with a bounded radius.
pub fn check_radius(radius: usize, max: usize) -> Result<()> {
    if radius > max {
        return Err(BlurError::UnsupportedRadius { radius, max });
    }
    Ok(())
}

/// Divide and round half up, clamped to the pixel range.
#[inline]
pub fn div_round(sum: u128, weight: u128) -> u8 {
    ((2 * sum + weight) / (2 * weight)).min(255) as u8
}

/// Round a scaled sum to the nearest pixel value, ties to even.
///
/// Matches storing the product into a clamped byte array.
#[inline]
pub fn scale_round(sum: u64, multiplier: f64) -> u8 {
    (sum as f64 * multiplier).round_ties_even().clamp(0.0, 255.0) as u8
}

/// A 1D pass that writes the raw window response and the weight total at
/// each position of one line.
pub type ExactLine = fn(src: &[u128], radius: usize, sums: &mut [u128], weights: &mut [u128]);

/// Run an exact-division line filter over rows, then columns.
///
/// Callers validate dimensions first.
pub fn separable_exact(
    channel: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    line: ExactLine,
) -> Vec<u8> {
    let mut output = vec![0u8; channel.len()];
    if channel.is_empty() {
        return output;
    }

    // Horizontal pass: raw sums per pixel, row weights are the same for every row
    let mut row_sums = vec![0u128; channel.len()];
    let mut row_weights = vec![0u128; width];
    let mut src_line = vec![0u128; width];
    for (src_row, sum_row) in channel
        .chunks_exact(width)
        .zip(row_sums.chunks_exact_mut(width))
    {
        for (dst, &px) in src_line.iter_mut().zip(src_row) {
            *dst = px as u128;
        }
        line(&src_line, radius, sum_row, &mut row_weights);
    }

    // Vertical pass over the raw row sums
    let mut column = vec![0u128; height];
    let mut col_sums = vec![0u128; height];
    let mut col_weights = vec![0u128; height];
    for x in 0..width {
        for (y, value) in column.iter_mut().enumerate() {
            *value = row_sums[y * width + x];
        }
        line(&column, radius, &mut col_sums, &mut col_weights);
        for y in 0..height {
            output[y * width + x] = div_round(col_sums[y], col_weights[y] * row_weights[x]);
        }
    }

    output
}

/// Run an 8-bit line filter over rows, then over the columns of the result.
///
/// Callers validate dimensions first.
pub fn separable_u8<F>(channel: &[u8], width: usize, height: usize, mut line: F) -> Vec<u8>
where
    F: FnMut(&[u8], &mut [u8]),
{
    let mut output = vec![0u8; channel.len()];
    if channel.is_empty() {
        return output;
    }

    let mut temp = vec![0u8; channel.len()];
    for (src_row, dst_row) in channel
        .chunks_exact(width)
        .zip(temp.chunks_exact_mut(width))
    {
        line(src_row, dst_row);
    }

    let mut column = vec![0u8; height];
    let mut filtered = vec![0u8; height];
    for x in 0..width {
        for (y, value) in column.iter_mut().enumerate() {
            *value = temp[y * width + x];
        }
        line(&column, &mut filtered);
        for (y, &value) in filtered.iter().enumerate() {
            output[y * width + x] = value;
        }
    }

    output
}
