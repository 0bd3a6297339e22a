//! Assertion helpers for tests.

use std::io::Cursor;
use std::path::Path;

use pretty_assertions::assert_eq;

/// Raw view of an indexed PNG, without palette expansion
pub struct IndexedPng {
    pub width: u32,
    pub height: u32,
    pub bit_depth: png::BitDepth,
    pub palette: Vec<u8>,
    pub trns: Option<Vec<u8>>,
    pub indices: Vec<u8>,
}

/// Assert the file is an indexed PNG and unpack its samples to one index per byte
pub fn read_indexed_png(path: &Path) -> IndexedPng {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(
        &bytes[..8],
        b"\x89PNG\r\n\x1a\n",
        "{} is not a PNG",
        path.display()
    );

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().unwrap();
    let palette = reader
        .info()
        .palette
        .as_ref()
        .map(|p| p.to_vec())
        .expect("indexed PNG must carry a PLTE chunk");
    let trns = reader.info().trns.as_ref().map(|t| t.to_vec());

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Indexed);

    let bits = info.bit_depth as u8;
    let per_byte = 8 / bits as usize;
    let mask = (1u8 << bits) - 1;
    let mut indices = Vec::with_capacity((info.width * info.height) as usize);
    for row in buf[..info.buffer_size()].chunks(info.line_size) {
        for x in 0..info.width as usize {
            let byte = row[x / per_byte];
            let shift = 8 - bits - (x % per_byte) as u8 * bits;
            indices.push((byte >> shift) & mask);
        }
    }

    IndexedPng {
        width: info.width,
        height: info.height,
        bit_depth: info.bit_depth,
        palette,
        trns,
        indices,
    }
}

/// Assert every pixel of an RGBA buffer is opaque gray at one of `levels` values
pub fn assert_gray_levels(rgba: &[u8], levels: &[u8]) {
    for (i, px) in rgba.chunks_exact(4).enumerate() {
        assert_eq!(px[3], 255, "pixel {i} not opaque");
        assert!(
            px[0] == px[1] && px[1] == px[2],
            "pixel {i} not gray: {px:?}"
        );
        assert!(
            levels.contains(&px[0]),
            "pixel {i} value {} not in {levels:?}",
            px[0]
        );
    }
}
