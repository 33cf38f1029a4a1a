use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use spectra_dither::{DitherMethod, Palette, SpectraDitherer};

use crate::error::ConvertError;
use crate::models::DeviceCatalog;
use crate::rendering::{adjust_brightness_contrast, encode_indexed_png, read_png, resize_and_crop};

pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MAX_HEIGHT: u32 = 480;

/// Unvalidated conversion settings, as given on the command line
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub device: Option<String>,
    pub dither: String,
    pub brightness: i32,
    pub contrast: i32,
    pub no_resize: bool,
    pub max_width: u32,
    pub max_height: u32,
    pub preview: bool,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            device: None,
            dither: DitherMethod::default().name().to_string(),
            brightness: 0,
            contrast: 0,
            no_resize: false,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            preview: false,
        }
    }

    /// Check the options and resolve them into a runnable job.
    ///
    /// Checks run in a fixed order: device, dither method, brightness,
    /// contrast, target size, file extension, then file existence. A device
    /// profile replaces `max_width`/`max_height`.
    pub fn validate(&self, catalog: &DeviceCatalog) -> Result<ConvertJob, ConvertError> {
        let (width, height) = match &self.device {
            Some(id) => {
                let device = catalog.get(id)?;
                tracing::info!(
                    device = %device.name,
                    width = device.width,
                    height = device.height,
                    "Using device profile"
                );
                (device.width, device.height)
            }
            None => (self.max_width, self.max_height),
        };

        let method = DitherMethod::parse(&self.dither)
            .ok_or_else(|| ConvertError::InvalidDitherMethod(self.dither.clone()))?;

        if !(-100..=100).contains(&self.brightness) {
            return Err(ConvertError::BrightnessOutOfRange(self.brightness));
        }
        if !(-100..=100).contains(&self.contrast) {
            return Err(ConvertError::ContrastOutOfRange(self.contrast));
        }
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }

        if !has_png_extension(&self.input) {
            return Err(ConvertError::NotPng(self.input.clone()));
        }
        if !self.input.exists() {
            return Err(ConvertError::InputNotFound(self.input.clone()));
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input));

        Ok(ConvertJob {
            input: self.input.clone(),
            output,
            method,
            brightness: self.brightness,
            contrast: self.contrast,
            resize: !self.no_resize,
            width,
            height,
            preview: self.preview,
        })
    }
}

/// Validated conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub method: DitherMethod,
    pub brightness: i32,
    pub contrast: i32,
    pub resize: bool,
    pub width: u32,
    pub height: u32,
    pub preview: bool,
}

/// What a finished conversion did
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub original_size: (u32, u32),
    pub processed_size: (u32, u32),
    pub dither_time: Duration,
    pub output: PathBuf,
    pub bytes_written: usize,
}

/// Runs conversion jobs against one palette
pub struct Converter {
    palette: Palette,
}

impl Converter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Decode, fit, adjust, dither and write one image.
    pub fn run(&self, job: &ConvertJob) -> Result<ConvertReport, ConvertError> {
        let mut img = read_png(&job.input)?;
        let original_size = img.dimensions();
        tracing::info!(width = original_size.0, height = original_size.1, "Loaded image");

        if job.resize && original_size != (job.width, job.height) {
            img = resize_and_crop(img, job.width, job.height);
            tracing::info!(width = img.width(), height = img.height(), "Resized image");
        }

        if job.brightness != 0 || job.contrast != 0 {
            tracing::info!(brightness = job.brightness, contrast = job.contrast, "Adjusting tone");
            adjust_brightness_contrast(&mut img, job.brightness, job.contrast);
        }

        let (width, height) = img.dimensions();
        let pixels: Vec<[u8; 3]> = img.pixels().map(|p| p.0).collect();
        let ditherer = SpectraDitherer::new(self.palette.clone()).method(job.method);

        let start = Instant::now();
        let dithered = ditherer.dither(&pixels, width as usize, height as usize);
        let dither_time = start.elapsed();
        tracing::info!(
            method = %job.method,
            elapsed_ms = dither_time.as_millis() as u64,
            "Dithered image"
        );

        let plte = if job.preview {
            self.palette.reference_colors()
        } else {
            self.palette.output_colors()
        };
        let png_bytes = encode_indexed_png(&dithered.to_indexed(), plte)?;
        std::fs::write(&job.output, &png_bytes)?;
        tracing::info!(path = %job.output.display(), bytes = png_bytes.len(), "Wrote output");

        Ok(ConvertReport {
            original_size,
            processed_size: (width, height),
            dither_time,
            output: job.output.clone(),
            bytes_written: png_bytes.len(),
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Palette::spectra6())
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// `<stem>_dithered.png` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_dithered.png"))
}
