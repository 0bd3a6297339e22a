use std::io::Cursor;

use bayer_dither::IndexedImage;

use crate::error::RenderError;

/// A decoded image as interleaved RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Decode a PNG of any color type into RGBA8.
///
/// 16-bit samples are stripped to 8 bits, palettes and low bit depths are
/// expanded. Images without alpha get an opaque alpha channel.
pub fn decode_rgba(png_bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(png_bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;
    let pixels = width * height;

    let data = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => {
            return Err(RenderError::UnsupportedColorType(format!("{other:?}")));
        }
    };

    if data.len() != pixels * 4 {
        return Err(RenderError::DimensionMismatch {
            width,
            height,
            expected: pixels * 4,
            actual: data.len(),
        });
    }

    Ok(RgbaImage {
        width,
        height,
        data,
    })
}

/// Encode an RGBA8 buffer as a truecolor PNG.
pub fn encode_rgba(rgba: &[u8], width: usize, height: usize) -> Result<Vec<u8>, RenderError> {
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(RenderError::DimensionMismatch {
            width,
            height,
            expected,
            actual: rgba.len(),
        });
    }

    encode_png(
        width,
        height,
        png::ColorType::Rgba,
        png::BitDepth::Eight,
        None,
        rgba,
    )
}

/// Encode an [`IndexedImage`] as a palette PNG.
///
/// The bit depth is the smallest of 1, 2, 4 or 8 that can address every
/// palette entry. A `tRNS` chunk is written only when some entry is not
/// fully opaque.
pub fn encode_indexed(image: &IndexedImage) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (image.width(), image.height());
    let colors = image.palette().colors();

    if image.indices().len() != width * height {
        return Err(RenderError::DimensionMismatch {
            width,
            height,
            expected: width * height,
            actual: image.indices().len(),
        });
    }

    let (depth, bits) = bit_depth_for(colors.len());
    let plte: Vec<u8> = colors.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    let trns = colors
        .iter()
        .any(|c| c[3] < 255)
        .then(|| colors.iter().map(|c| c[3]).collect::<Vec<u8>>());

    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), width, bits)
    };

    encode_png(
        width,
        height,
        png::ColorType::Indexed,
        depth,
        Some(PaletteChunks { plte, trns }),
        &packed,
    )
}

/// Re-compress a PNG with oxipng, keeping the original bytes if it fails.
pub fn optimize(png_bytes: Vec<u8>) -> Vec<u8> {
    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "oxipng failed, keeping unoptimized PNG");
            png_bytes
        }
    }
}

fn bit_depth_for(palette_len: usize) -> (png::BitDepth, u8) {
    match palette_len {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    }
}

struct PaletteChunks {
    plte: Vec<u8>,
    trns: Option<Vec<u8>>,
}

fn encode_png(
    width: usize,
    height: usize,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    palette: Option<PaletteChunks>,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let w = u32::try_from(width).map_err(|e| RenderError::PngEncode(e.to_string()))?;
    let h = u32::try_from(height).map_err(|e| RenderError::PngEncode(e.to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, w, h);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        if let Some(palette) = palette {
            encoder.set_palette(palette.plte);
            if let Some(trns) = palette.trns {
                encoder.set_trns(trns);
            }
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf.into_inner())
}

/// Pack one index per byte into `bits`-wide samples, MSB first, with every
/// row starting on a byte boundary.
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }

    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = width.div_ceil(pixels_per_byte);
    let height = indices.len() / width;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let slot = i % pixels_per_byte;
            let shift = (8 - bits) - slot as u8 * bits;
            byte |= (idx & mask) << shift;

            if slot == pixels_per_byte - 1 || i == row.len() - 1 {
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
    use bayer_dither::{GreenDitherer, Palette};
    use pretty_assertions::assert_eq;

    fn decode_indexed(png_bytes: &[u8]) -> (png::OutputInfo, Vec<u8>, Vec<u8>, Option<Vec<u8>>) {
        let mut decoder = png::Decoder::new(Cursor::new(png_bytes));
        decoder.set_transformations(png::Transformations::IDENTITY);
        let mut reader = decoder.read_info().unwrap();
        let plte = reader.info().palette.as_ref().map(|p| p.to_vec()).unwrap();
        let trns = reader.info().trns.as_ref().map(|t| t.to_vec());
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf, plte, trns)
    }

    #[test]
    fn test_pack_2bit() {
        let indices = [0, 1, 2, 3, 3, 2];
        let packed = pack_nbits(&indices, 6, 2);
        assert_eq!(packed, vec![0b00_01_10_11, 0b11_10_00_00]);
    }

    #[test]
    fn test_pack_1bit_rows_are_byte_aligned() {
        let indices = [1, 0, 1, 1, 1, 1];
        let packed = pack_nbits(&indices, 3, 1);
        assert_eq!(packed, vec![0b1010_0000, 0b1110_0000]);
    }

    #[test]
    fn test_pack_4bit() {
        let indices = [0x0f, 0x01, 0x0a];
        assert_eq!(pack_nbits(&indices, 3, 4), vec![0xf1, 0xa0]);
    }

    #[test]
    fn test_bit_depth_for() {
        assert_eq!(bit_depth_for(2).1, 1);
        assert_eq!(bit_depth_for(4).1, 2);
        assert_eq!(bit_depth_for(5).1, 4);
        assert_eq!(bit_depth_for(16).1, 4);
        assert_eq!(bit_depth_for(17).1, 8);
        assert_eq!(bit_depth_for(256).1, 8);
    }

    #[test]
    fn test_rgba_round_trip() {
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 128, //
            0, 0, 255, 0, 10, 20, 30, 255,
        ];
        let png_bytes = encode_rgba(&rgba, 2, 2).unwrap();
        let decoded = decode_rgba(&png_bytes).unwrap();

        assert_eq!(decoded.width, 2);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.data, rgba);
    }

    #[test]
    fn test_encode_rgba_rejects_wrong_length() {
        let err = encode_rgba(&[0; 12], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            RenderError::DimensionMismatch {
                expected: 16,
                actual: 12,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_grayscale_expands_to_rgba() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, 3, 1);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 128, 255]).unwrap();
        }

        let decoded = decode_rgba(&buf.into_inner()).unwrap();
        assert_eq!(
            decoded.data,
            vec![0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_decode_rgb16_strips_to_8bit() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, 1, 1);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0xff, 0xff, 0x80, 0x00, 0x00, 0x10]).unwrap();
        }

        let decoded = decode_rgba(&buf.into_inner()).unwrap();
        assert_eq!(decoded.data, vec![0xff, 0x80, 0x00, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_rgba(b"not a png").unwrap_err();
        assert!(matches!(err, RenderError::PngDecode(_)));
    }

    #[test]
    fn test_indexed_round_trip() {
        let rgba: Vec<u8> = [0u8, 85, 170, 255, 255]
            .iter()
            .flat_map(|&v| [v, v, v, 255])
            .collect();
        let image = GreenDitherer::new().dither(&rgba, 5, 1).unwrap();
        let png_bytes = encode_indexed(&image).unwrap();

        let (info, packed, plte, trns) = decode_indexed(&png_bytes);
        assert_eq!(info.color_type, png::ColorType::Indexed);
        assert_eq!(info.bit_depth, png::BitDepth::Two);
        assert_eq!(
            plte,
            vec![0, 34, 0, 64, 120, 64, 144, 186, 144, 210, 235, 210]
        );
        assert_eq!(trns, None);
        assert_eq!(packed, pack_nbits(image.indices(), 5, 2));
    }

    #[test]
    fn test_indexed_writes_trns_for_translucent_palette() {
        let palette = Palette::new(&[[0, 0, 0, 0], [255, 255, 255, 255]]).unwrap();
        let image = GreenDitherer::new()
            .tint(None)
            .palette(palette)
            .dither(&[255, 255, 255, 255, 0, 0, 0, 255], 2, 1)
            .unwrap();
        assert_eq!(image.indices(), &[1, 0]);

        let png_bytes = encode_indexed(&image).unwrap();
        let (info, _, _, trns) = decode_indexed(&png_bytes);
        assert_eq!(info.bit_depth, png::BitDepth::One);
        assert_eq!(trns, Some(vec![0, 255]));

        let decoded = decode_rgba(&png_bytes).unwrap();
        assert_eq!(decoded.data, vec![255, 255, 255, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn test_indexed_decodes_to_palette_colors() {
        let rgba: Vec<u8> = (0..64u32)
            .flat_map(|i| {
                let v = (i * 4) as u8;
                [v, v, v, 255]
            })
            .collect();
        let image = GreenDitherer::new().dither(&rgba, 8, 8).unwrap();
        let decoded = decode_rgba(&encode_indexed(&image).unwrap()).unwrap();

        assert_eq!(decoded.data, image.to_rgba());
    }

    #[test]
    fn test_optimize_keeps_pixels() {
        let rgba: Vec<u8> = (0..16 * 16)
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v, 255]
            })
            .collect();
        let image = GreenDitherer::new().dither(&rgba, 16, 16).unwrap();
        let raw = encode_indexed(&image).unwrap();

        let optimized = optimize(raw.clone());
        assert_eq!(
            decode_rgba(&optimized).unwrap().data,
            decode_rgba(&raw).unwrap().data
        );
    }
}
