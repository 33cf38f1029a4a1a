use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("failed to load device profiles: {0}")]
    DeviceCatalog(String),

    #[error("unknown device: {0}")]
    UnknownDevice(String),

    #[error("invalid dithering method: {0} (must be stucki, floyd-steinberg, or atkinson)")]
    InvalidDitherMethod(String),

    #[error("brightness must be between -100 and 100, got {0}")]
    BrightnessOutOfRange(i32),

    #[error("contrast must be between -100 and 100, got {0}")]
    ContrastOutOfRange(i32),

    #[error("target size must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("input file must be a PNG: {}", .0.display())]
    NotPng(PathBuf),

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}
