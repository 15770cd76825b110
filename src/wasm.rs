//! WebAssembly exports for the blur filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Buffers are
//! copied in and out; errors are returned as JavaScript exceptions.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::error::BlurError;
use crate::filters::blur::blur_image;
use crate::filters::dispatch::{algorithm_names, resolve};

fn to_js(err: BlurError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Single Channel
// ============================================================================

/// Blur one planar channel.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Blur radius
/// * `algorithm` - Algorithm name, e.g. "stack-multiplied"
///
/// # Returns
/// Blurred channel of the same length
#[wasm_bindgen]
pub fn blur_channel_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    algorithm: &str,
) -> Result<Vec<u8>, JsValue> {
    let algorithm = resolve(algorithm).map_err(to_js)?;
    algorithm.apply(data, width, height, radius).map_err(to_js)
}

// ============================================================================
// RGBA Canvas Data
// ============================================================================

/// Blur canvas `ImageData` bytes; RGB are blurred and alpha is kept.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `radius` - Blur radius
/// * `algorithm` - Algorithm name
///
/// # Returns
/// Flat array of RGBA bytes
#[wasm_bindgen]
pub fn blur_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    algorithm: &str,
) -> Result<Vec<u8>, JsValue> {
    let algorithm = resolve(algorithm).map_err(to_js)?;
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec()).map_err(|_| {
        to_js(BlurError::DimensionMismatch {
            len: data.len(),
            width,
            height,
        })
    })?;

    let result = blur_image(input.view(), algorithm, radius).map_err(to_js)?;
    Ok(result.into_raw_vec_and_offset().0)
}

/// Canonical algorithm names, for building a picker.
#[wasm_bindgen]
pub fn algorithm_names_wasm() -> Vec<String> {
    algorithm_names()
}
