//! bandblur
//!
//! Separable sliding-window blur filters for single 8-bit image channels,
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Channel Format
//! Every filter works on one planar channel: a row-major `&[u8]` of length
//! `width * height`. Callers split colour images into channels and may blur
//! them concurrently; [`filters::blur`] does this for interleaved
//! (height, width, channels) arrays with 1, 3 or 4 channels.
//!
//! ## Algorithms
//! - `box` - naive windowed mean, O(r²) per pixel, reference output
//! - `box-sliding` - running sums, identical output to `box`
//! - `box-clamped` - fixed window with replicated edges, multiplier instead of division
//! - `stack` - triangular kernel, exact division
//! - `stack-table` - triangular kernel, 16-bit fixed-point tables, radius ≤ 255
//! - `stack-multiplied` - triangular kernel, multiplier, radius ≤ 65535
//! - `gaussian` - three passes of a separable filter
//!
//! ```
//! use bandblur::resolve;
//!
//! let algorithm = resolve("box-sliding").unwrap();
//! let blurred = algorithm.apply(&[0, 0, 255, 0, 0], 5, 1, 1).unwrap();
//! assert_eq!(blurred, vec![0, 85, 85, 85, 0]);
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{BlurError, Result};
pub use filters::blur::{blur_channels, blur_image};
pub use filters::box_blur::{box_blur, box_blur_clamped, box_blur_naive};
pub use filters::core::MAX_RADIUS;
pub use filters::dispatch::{algorithm_names, resolve, Algorithm, BlurFn, SeparableFilter};
pub use filters::gaussian::gaussian_blur;
pub use filters::stack_blur::{stack_blur, stack_blur_multiplied, stack_blur_table, MAX_TABLE_RADIUS};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray1, PyArray3, PyReadonlyArray1, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::filters::blur;
    use crate::filters::dispatch::{algorithm_names, resolve};

    /// Blur a single planar u8 channel.
    ///
    /// # Arguments
    /// * `channel` - Flat array of length width * height
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `radius` - Blur radius
    /// * `algorithm` - Algorithm name, e.g. "stack" or "gaussian"
    #[pyfunction]
    #[pyo3(signature = (channel, width, height, radius, algorithm="gaussian"))]
    pub fn blur_channel<'py>(
        py: Python<'py>,
        channel: PyReadonlyArray1<'py, u8>,
        width: usize,
        height: usize,
        radius: usize,
        algorithm: &str,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let algorithm = resolve(algorithm)?;
        let input = channel.as_array().to_vec();
        let result = algorithm.apply(&input, width, height, radius)?;
        Ok(result.into_pyarray(py))
    }

    /// Blur a (height, width, channels) u8 image with 1, 3 or 4 channels.
    ///
    /// Colour channels are blurred in parallel, alpha is preserved.
    #[pyfunction]
    #[pyo3(signature = (image, radius, algorithm="gaussian"))]
    pub fn blur_image<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: usize,
        algorithm: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let algorithm = resolve(algorithm)?;
        let result = blur::blur_image(image.as_array(), algorithm, radius)?;
        Ok(result.into_pyarray(py))
    }

    /// Canonical algorithm names.
    #[pyfunction]
    pub fn algorithms() -> Vec<String> {
        algorithm_names()
    }

    /// bandblur extension module
    #[pymodule]
    pub fn bandblur(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(blur_channel, m)?)?;
        m.add_function(wrap_pyfunction!(blur_image, m)?)?;
        m.add_function(wrap_pyfunction!(algorithms, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::bandblur;
