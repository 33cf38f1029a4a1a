//! Color types
//!
//! - [`Rgb`]: 8-bit color used for palette entries and output pixels
//! - [`SourcePixel`]: anything a decoded image can hand to the ditherer
//!
//! # Example
//!
//! ```
//! use spectra_dither::{Rgb, SourcePixel};
//!
//! let pixel = Rgb::new(128, 64, 32);
//! assert_eq!(pixel.channels(), [128.0, 64.0, 32.0]);
//! ```

mod rgb;
mod source;

pub use rgb::Rgb;
pub use source::SourcePixel;
