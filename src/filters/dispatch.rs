//! Algorithm registry: select a blur filter by name.
//!
//! ## Names
//!
//! | Name | Aliases | Filter |
//! |------|---------|--------|
//! | `box` | | [`box_blur_naive`] |
//! | `box-sliding` | `box2`, `box3` | [`box_blur`] |
//! | `box-clamped` | `box4` | [`box_blur_clamped`] |
//! | `stack` | | [`stack_blur`] |
//! | `stack-table` | `stack2` | [`stack_blur_table`] |
//! | `stack-multiplied` | `stack3` | [`stack_blur_multiplied`] |
//! | `gaussian` | | [`gaussian_blur`] over `box-clamped` |
//! | `gaussian:<base>` | | [`gaussian_blur`] over any separable name above |
//!
//! Unknown names are an error; there is no fallback algorithm.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use log::debug;

use super::box_blur::{box_blur, box_blur_clamped, box_blur_naive};
use super::core::MAX_RADIUS;
use super::gaussian::gaussian_blur;
use super::stack_blur::{stack_blur, stack_blur_multiplied, stack_blur_table, MAX_TABLE_RADIUS};
use crate::error::{BlurError, Result};

/// Signature shared by every single-pass channel filter.
pub type BlurFn = fn(&[u8], usize, usize, usize) -> Result<Vec<u8>>;

/// Separable filters with O(1) cost per pixel, usable as a Gaussian base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparableFilter {
    /// Truncated box window, exact division.
    SlidingSum,
    /// Replicated-edge box window, multiplier.
    ClampedSlidingSum,
    /// Truncated triangular window, exact division.
    StackExact,
    /// Replicated-edge triangular window, fixed-point tables.
    StackTable,
    /// Replicated-edge triangular window, multiplier.
    StackMultiplied,
}

impl SeparableFilter {
    /// Every separable filter, in registry order.
    pub const ALL: [SeparableFilter; 5] = [
        SeparableFilter::SlidingSum,
        SeparableFilter::ClampedSlidingSum,
        SeparableFilter::StackExact,
        SeparableFilter::StackTable,
        SeparableFilter::StackMultiplied,
    ];

    /// Canonical registry name.
    pub fn name(self) -> &'static str {
        match self {
            SeparableFilter::SlidingSum => "box-sliding",
            SeparableFilter::ClampedSlidingSum => "box-clamped",
            SeparableFilter::StackExact => "stack",
            SeparableFilter::StackTable => "stack-table",
            SeparableFilter::StackMultiplied => "stack-multiplied",
        }
    }

    /// The filter function behind this variant.
    pub fn filter(self) -> BlurFn {
        match self {
            SeparableFilter::SlidingSum => box_blur,
            SeparableFilter::ClampedSlidingSum => box_blur_clamped,
            SeparableFilter::StackExact => stack_blur,
            SeparableFilter::StackTable => stack_blur_table,
            SeparableFilter::StackMultiplied => stack_blur_multiplied,
        }
    }

    /// Largest radius this filter accepts.
    pub fn max_radius(self) -> usize {
        match self {
            SeparableFilter::SlidingSum => usize::MAX,
            SeparableFilter::StackTable => MAX_TABLE_RADIUS,
            SeparableFilter::ClampedSlidingSum
            | SeparableFilter::StackExact
            | SeparableFilter::StackMultiplied => MAX_RADIUS,
        }
    }

    /// Run one pass of this filter.
    pub fn apply(self, channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
        (self.filter())(channel, width, height, radius)
    }

    fn from_name(name: &str) -> Option<Self> {
        let filter = match name {
            "box-sliding" | "box2" | "box3" => SeparableFilter::SlidingSum,
            "box-clamped" | "box4" => SeparableFilter::ClampedSlidingSum,
            "stack" => SeparableFilter::StackExact,
            "stack-table" | "stack2" => SeparableFilter::StackTable,
            "stack-multiplied" | "stack3" => SeparableFilter::StackMultiplied,
            _ => return None,
        };
        Some(filter)
    }
}

impl fmt::Display for SeparableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A blur algorithm the orchestration layer can select by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Direct 2D window mean, O(r²) per pixel.
    WindowedMean,
    /// One pass of a separable filter.
    Separable(SeparableFilter),
    /// Three passes of a separable filter.
    Gaussian(SeparableFilter),
}

impl Algorithm {
    /// Canonical algorithms, as offered to users.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::WindowedMean,
        Algorithm::Separable(SeparableFilter::SlidingSum),
        Algorithm::Separable(SeparableFilter::ClampedSlidingSum),
        Algorithm::Separable(SeparableFilter::StackExact),
        Algorithm::Separable(SeparableFilter::StackTable),
        Algorithm::Separable(SeparableFilter::StackMultiplied),
        Algorithm::Gaussian(SeparableFilter::ClampedSlidingSum),
    ];

    /// Canonical registry name.
    pub fn name(self) -> Cow<'static, str> {
        match self {
            Algorithm::WindowedMean => Cow::Borrowed("box"),
            Algorithm::Separable(filter) => Cow::Borrowed(filter.name()),
            Algorithm::Gaussian(SeparableFilter::ClampedSlidingSum) => Cow::Borrowed("gaussian"),
            Algorithm::Gaussian(base) => Cow::Owned(format!("gaussian:{}", base.name())),
        }
    }

    /// True when the cost grows with the square of the radius.
    ///
    /// Front ends ask for confirmation before running slow algorithms.
    pub fn is_slow(self) -> bool {
        matches!(self, Algorithm::WindowedMean)
    }

    /// Filter one channel with this algorithm.
    pub fn apply(self, channel: &[u8], width: usize, height: usize, radius: usize) -> Result<Vec<u8>> {
        debug!("{} blur: {}x{} radius {}", self, width, height, radius);
        match self {
            Algorithm::WindowedMean => box_blur_naive(channel, width, height, radius),
            Algorithm::Separable(filter) => filter.apply(channel, width, height, radius),
            Algorithm::Gaussian(base) => gaussian_blur(channel, width, height, radius, base),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Gaussian(base) if *base != SeparableFilter::ClampedSlidingSum => {
                write!(f, "gaussian:{}", base)
            }
            _ => f.write_str(&self.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = BlurError;

    fn from_str(name: &str) -> Result<Self> {
        let unknown = || BlurError::UnknownAlgorithm(name.to_string());
        match name {
            "box" => Ok(Algorithm::WindowedMean),
            "gaussian" => Ok(Algorithm::Gaussian(SeparableFilter::ClampedSlidingSum)),
            _ => match name.strip_prefix("gaussian:") {
                Some(base) => SeparableFilter::from_name(base)
                    .map(Algorithm::Gaussian)
                    .ok_or_else(unknown),
                None => SeparableFilter::from_name(name)
                    .map(Algorithm::Separable)
                    .ok_or_else(unknown),
            },
        }
    }
}

/// Look up an algorithm by name.
///
/// # Errors
/// [`BlurError::UnknownAlgorithm`] for names not in the registry.
pub fn resolve(name: &str) -> Result<Algorithm> {
    let algorithm = name.parse::<Algorithm>()?;
    debug!("resolved algorithm {:?} to {}", name, algorithm);
    Ok(algorithm)
}

/// Canonical names of [`Algorithm::ALL`].
pub fn algorithm_names() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.name().into_owned()).collect()
}
