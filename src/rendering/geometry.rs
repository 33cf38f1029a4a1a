//! Resize-to-cover and center crop.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Dimensions that cover `target` while keeping the aspect ratio.
///
/// The scale is the larger of the two axis ratios. Results are truncated,
/// then raised to the target where truncation fell one pixel short, so both
/// are at least the target size.
pub fn calculate_resize_dimensions(
    original_width: u32,
    original_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    let scale_width = target_width as f64 / original_width as f64;
    let scale_height = target_height as f64 / original_height as f64;
    let scale = scale_width.max(scale_height);

    (
        ((original_width as f64 * scale) as u32).max(target_width),
        ((original_height as f64 * scale) as u32).max(target_height),
    )
}

/// Crop `target` from the middle of `img`.
///
/// Offsets round down, so an odd surplus leaves the extra pixel on the
/// right/bottom.
pub fn center_crop(img: &RgbImage, target_width: u32, target_height: u32) -> RgbImage {
    let left = img.width().saturating_sub(target_width) / 2;
    let top = img.height().saturating_sub(target_height) / 2;
    imageops::crop_imm(img, left, top, target_width, target_height).to_image()
}

/// Scale `img` with Lanczos3 to cover the target, then center crop.
///
/// Returns the image unchanged if it already has the target size.
pub fn resize_and_crop(img: RgbImage, target_width: u32, target_height: u32) -> RgbImage {
    if img.dimensions() == (target_width, target_height) {
        return img;
    }

    let (new_width, new_height) =
        calculate_resize_dimensions(img.width(), img.height(), target_width, target_height);
    tracing::debug!(new_width, new_height, "Resizing");
    let resized = imageops::resize(&img, new_width, new_height, FilterType::Lanczos3);

    if (new_width, new_height) != (target_width, target_height) {
        tracing::debug!(target_width, target_height, "Center cropping");
        return center_crop(&resized, target_width, target_height);
    }
    resized
}
