//! Output types for the pipeline.
//!
//! [`IndexedImage`] stores palette indices with dimension metadata and an
//! owned [`Palette`](crate::palette::Palette). It offers two views:
//!
//! - **Indexed** ([`IndexedImage::indices`] + [`IndexedImage::palette_table`]):
//!   input for an indexed-color encoder
//! - **RGBA** ([`IndexedImage::to_rgba`]): preview of the final colors

mod indexed_image;

pub use indexed_image::IndexedImage;
