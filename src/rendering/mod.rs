pub mod pipeline;
pub mod png_io;

pub use pipeline::{render_file, render_png, RenderOptions, RenderReport};
pub use png_io::{decode_rgba, encode_indexed, encode_rgba, optimize, RgbaImage};
