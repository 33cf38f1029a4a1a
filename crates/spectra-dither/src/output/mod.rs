//! Output types for the dithering pipeline.
//!
//! - [`DitheredImage`]: the engine's output buffer of palette colors
//! - [`IndexedImage`]: the same image as palette indices, produced by exact
//!   match against the output palette

mod dithered_image;
mod indexed;

pub use dithered_image::DitheredImage;
pub use indexed::IndexedImage;
