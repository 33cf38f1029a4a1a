//! PNG decoding to RGB and indexed PNG encoding.

use std::io::Cursor;
use std::path::Path;

use image::RgbImage;
use spectra_dither::{IndexedImage, Rgb};

use crate::error::ConvertError;

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbImage, ConvertError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Decode PNG bytes into an 8-bit RGB image.
///
/// Palette and low bit depth images are expanded, 16-bit samples are cut to
/// their high byte, grayscale is widened to RGB, and alpha is premultiplied
/// (composited over black).
pub fn decode_png(bytes: &[u8]) -> Result<RgbImage, ConvertError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| ConvertError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| ConvertError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgb: Vec<u8> = match info.color_type {
        png::ColorType::Rgb => data.to_vec(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .flat_map(|p| premultiply(p[0], p[1], p[2], p[3]))
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| premultiply(p[0], p[0], p[0], p[1]))
            .collect(),
        png::ColorType::Indexed => {
            return Err(ConvertError::PngDecode(
                "indexed image was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );

    RgbImage::from_raw(info.width, info.height, rgb)
        .ok_or_else(|| ConvertError::PngDecode("pixel buffer size mismatch".to_string()))
}

/// Premultiply one pixel by its alpha.
///
/// Widens to 16 bits, scales by alpha, then keeps the high byte, so fully
/// transparent pixels come out black.
fn premultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 3] {
    match a {
        255 => [r, g, b],
        0 => [0, 0, 0],
        _ => {
            let a16 = a as u32 * 0x101;
            let scale = |c: u8| ((c as u32 * 0x101 * a16 / 0xffff) >> 8) as u8;
            [scale(r), scale(g), scale(b)]
        }
    }
}

/// Encode palette indices as a 4-bit indexed PNG.
///
/// `plte` supplies the color for each index, normally the output colors,
/// or the measured reference colors for a panel preview. The result is
/// recompressed with oxipng; if that fails the plain encoding is returned.
/// Color type, bit depth and PLTE are left alone so stored values stay the
/// palette indices.
pub fn encode_indexed_png(indexed: &IndexedImage, plte: &[Rgb]) -> Result<Vec<u8>, ConvertError> {
    let width = indexed.width() as u32;
    let height = indexed.height() as u32;
    let plte: Vec<u8> = plte.iter().flat_map(|c| c.to_bytes()).collect();
    let packed = pack_nbits(indexed.indices(), width, 4);

    // Fast settings, oxipng re-compresses afterwards
    let png_bytes = encode_png(width, height, &plte, &packed)?;

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            bit_depth_reduction: false,
            color_type_reduction: false,
            palette_reduction: false,
            grayscale_reduction: false,
            ..Default::default()
        },
    )
    .unwrap_or_else(|e| {
        tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
        png_bytes
    });
    Ok(optimized)
}

/// Encode packed 4-bit palette data as a PNG.
fn encode_png(width: u32, height: u32, plte: &[u8], packed: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Four);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Rows start on a byte boundary; pixels fill each byte MSB first.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectra_dither::{DitheredImage, Palette};

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_pack_4bit_odd_width() {
        // Two rows of three pixels: each row takes two bytes
        let packed = pack_nbits(&[1, 2, 3, 4, 5, 0], 3, 4);
        assert_eq!(packed, vec![0x12, 0x30, 0x45, 0x00]);
    }

    #[test]
    fn test_premultiply() {
        assert_eq!(premultiply(10, 20, 30, 255), [10, 20, 30]);
        assert_eq!(premultiply(10, 20, 30, 0), [0, 0, 0]);
        assert_eq!(premultiply(255, 200, 100, 128), [128, 100, 50]);
    }

    #[test]
    fn test_decode_rgb() {
        let bytes = encode_raw(2, 1, png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let img = decode_png(&bytes).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.as_raw(), &vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_grayscale_alpha() {
        let bytes = encode_raw(2, 1, png::ColorType::GrayscaleAlpha, &[40, 255, 40, 0]);
        let img = decode_png(&bytes).unwrap();
        assert_eq!(img.as_raw(), &vec![40, 40, 40, 0, 0, 0]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_png(b"not a png").unwrap_err();
        assert!(matches!(err, ConvertError::PngDecode(_)));
    }

    #[test]
    fn test_indexed_round_trip_keeps_colors() {
        let palette = Palette::spectra6();
        let pixels: Vec<Rgb> = (0..15).map(|i| palette.color_at(i % 6)).collect();
        let dithered = DitheredImage::new(pixels.clone(), 5, 3, palette.clone());

        let bytes = encode_indexed_png(&dithered.to_indexed(), palette.output_colors()).unwrap();
        let decoded = decode_png(&bytes).unwrap();

        assert_eq!(decoded.dimensions(), (5, 3));
        let decoded: Vec<Rgb> = decoded.pixels().map(|p| Rgb::from_bytes(p.0)).collect();
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn test_indexed_png_keeps_full_palette_and_indices() {
        let palette = Palette::spectra6();
        let pixels: Vec<Rgb> = [5, 4, 1, 1, 5, 4, 1, 5]
            .iter()
            .map(|&i| palette.color_at(i))
            .collect();
        let dithered = DitheredImage::new(pixels, 4, 2, palette.clone());
        let bytes = encode_indexed_png(&dithered.to_indexed(), palette.output_colors()).unwrap();

        let mut decoder = png::Decoder::new(Cursor::new(&bytes));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let plte = reader.info().palette.as_ref().map(|p| p.to_vec());
        let expected_plte: Vec<u8> = palette
            .output_colors()
            .iter()
            .flat_map(|c| c.to_bytes())
            .collect();
        assert_eq!(plte, Some(expected_plte));

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Four);
        // Rows of four 4-bit indices, MSB first
        assert_eq!(&buf[..info.buffer_size()], &[0x54, 0x11, 0x54, 0x15]);
    }

    #[test]
    fn test_preview_palette_uses_reference_colors() {
        let palette = Palette::spectra6();
        let pixels = vec![palette.color_at(1), palette.color_at(4)];
        let dithered = DitheredImage::new(pixels, 2, 1, palette.clone());

        let bytes =
            encode_indexed_png(&dithered.to_indexed(), palette.reference_colors()).unwrap();
        let decoded = decode_png(&bytes).unwrap();
        assert_eq!(
            decoded.as_raw(),
            &vec![0xE8, 0xE8, 0xE8, 0xB2, 0x13, 0x18]
        );
    }
}
