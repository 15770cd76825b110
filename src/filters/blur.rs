//! Multi-channel blur: run one algorithm over several planar channels.
//!
//! Channels are independent, so each one is filtered on its own rayon task
//! with no synchronisation between them. Within a channel the row pass always
//! finishes before the column pass starts.
//!
//! ## Supported Formats
//!
//! [`blur_image`] accepts interleaved images with 1, 3 or 4 channels:
//! - **Grayscale**: (height, width, 1) - blurs the single channel
//! - **RGB**: (height, width, 3) - blurs all 3 channels
//! - **RGBA**: (height, width, 4) - blurs RGB, preserves alpha

use std::time::Instant;

use log::trace;
use ndarray::{Array3, ArrayView3, Axis};
use rayon::prelude::*;

use super::core::check_dimensions;
use super::dispatch::Algorithm;
use crate::error::{BlurError, Result};

/// Blur several planar channels of the same image concurrently.
///
/// Every channel is validated before any work starts.
///
/// # Arguments
/// * `channels` - Planar channels, each of length `width * height`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `algorithm` - Filter applied to every channel
/// * `radius` - Blur radius
///
/// # Returns
/// One blurred buffer per input channel, in input order
pub fn blur_channels(
    channels: &[&[u8]],
    width: usize,
    height: usize,
    algorithm: Algorithm,
    radius: usize,
) -> Result<Vec<Vec<u8>>> {
    for channel in channels {
        check_dimensions(channel, width, height)?;
    }

    channels
        .par_iter()
        .enumerate()
        .map(|(index, channel)| {
            let start = Instant::now();
            let result = algorithm.apply(channel, width, height, radius);
            trace!("channel {} blurred in {:?}", index, start.elapsed());
            result
        })
        .collect()
}

/// Blur an interleaved image.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `algorithm` - Filter applied to every colour channel
/// * `radius` - Blur radius
///
/// # Returns
/// Blurred image with the same shape; alpha is copied unchanged
pub fn blur_image(input: ArrayView3<u8>, algorithm: Algorithm, radius: usize) -> Result<Array3<u8>> {
    let (height, width, channels) = input.dim();
    let color_channels = match channels {
        1 | 3 => channels,
        4 => 3,
        n => return Err(BlurError::ChannelCount(n)),
    };

    if radius == 0 {
        return Ok(input.to_owned());
    }

    let planes = split_channels(input);
    let views: Vec<&[u8]> = planes[..color_channels].iter().map(Vec::as_slice).collect();
    let mut blurred = blur_channels(&views, width, height, algorithm, radius)?;
    if channels == 4 {
        blurred.push(planes[3].clone());
    }

    merge_channels(&blurred, width, height)
}

/// Split an interleaved image into row-major planar channels.
pub fn split_channels(input: ArrayView3<u8>) -> Vec<Vec<u8>> {
    input
        .axis_iter(Axis(2))
        .map(|plane| plane.iter().copied().collect())
        .collect()
}

/// Interleave planar channels into a (height, width, channels) image.
pub fn merge_channels(planes: &[Vec<u8>], width: usize, height: usize) -> Result<Array3<u8>> {
    for plane in planes {
        check_dimensions(plane, width, height)?;
    }

    let mut output = Array3::<u8>::zeros((height, width, planes.len()));
    for (c, plane) in planes.iter().enumerate() {
        for (dst, &value) in output.index_axis_mut(Axis(2), c).iter_mut().zip(plane) {
            *dst = value;
        }
    }
    Ok(output)
}
