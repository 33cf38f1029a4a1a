pub mod converter;

pub use converter::{
    default_output_path, ConvertJob, ConvertOptions, ConvertReport, Converter,
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH,
};
