//! Brightness and contrast pre-adjustment.

use image::RgbImage;

/// Apply contrast then brightness to every channel.
///
/// Both values are in `[-100, 100]`. Contrast scales the distance from 128
/// by `(100 + contrast) / 100`, so -100 flattens everything to mid grey and
/// 100 doubles the spread. Brightness is added afterwards. Results are
/// clamped and truncated back to `u8`.
pub fn adjust_brightness_contrast(img: &mut RgbImage, brightness: i32, contrast: i32) {
    if brightness == 0 && contrast == 0 {
        return;
    }

    let factor = (100.0 + contrast as f64) / 100.0;
    let offset = brightness as f64;
    for channel in img.iter_mut() {
        let v = (*channel as f64 - 128.0) * factor + 128.0 + offset;
        *channel = v.clamp(0.0, 255.0) as u8;
    }
}
