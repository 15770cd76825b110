//! Blur filters for planar 8-bit channels.
//!
//! ## Channel Format
//!
//! | Item | Description |
//! |------|-------------|
//! | Channel | `&[u8]`, row-major, length `width * height`, values 0-255 |
//! | Radius | Half window size; the window spans `2 * radius + 1` samples |
//! | Output | New `Vec<u8>` with the same length as the input |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Separable** - A row pass followed by a column pass over the row result
//! - **Pure** - The input is never modified and no state survives a call
//! - **Validated up front** - Dimension and radius errors are returned before any allocation
//! - **Radius 0 is a no-op** - Every filter returns a copy of its input
//!
//! ## Filter Families
//!
//! - **Box**: naive windowed mean, sliding sum, clamped sliding sum
//! - **Stack**: triangular window with exact, table or multiplier normalisation
//! - **Gaussian**: three passes of any separable filter
//!
//! [`dispatch`] maps stable names to all of the above and [`blur`] runs one
//! algorithm over several channels in parallel.

pub mod core;
pub mod box_blur;
pub mod stack_blur;
pub mod gaussian;
pub mod dispatch;
pub mod blur;
