pub mod adjust;
pub mod geometry;
pub mod png_io;

pub use adjust::adjust_brightness_contrast;
pub use geometry::{calculate_resize_dimensions, center_crop, resize_and_crop};
pub use png_io::{decode_png, encode_indexed_png, read_png};
