//! File-to-file rendering through the dither pipeline.

use std::path::{Path, PathBuf};

use bayer_dither::{BayerMatrix, GreenDitherer, Tint};

use super::png_io::{decode_rgba, encode_indexed, encode_rgba, optimize};
use crate::error::RenderError;
use crate::models::AppConfig;

/// Settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub levels: usize,
    pub matrix: BayerMatrix,
    pub tint: Option<Tint>,
    pub optimize: bool,
    pub write_stages: bool,
}

impl RenderOptions {
    /// Build options from the application config.
    pub fn from_config(config: &AppConfig) -> Result<Self, RenderError> {
        Ok(Self {
            levels: config.levels,
            matrix: config.matrix()?,
            tint: config.tint.tint(),
            optimize: config.optimize,
            write_stages: config.write_stages,
        })
    }

    fn ditherer(&self) -> GreenDitherer {
        GreenDitherer::new()
            .levels(self.levels)
            .matrix(self.matrix)
            .tint(self.tint)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            levels: bayer_dither::DEFAULT_LEVELS,
            matrix: BayerMatrix::default(),
            tint: Some(Tint::GREEN),
            optimize: false,
            write_stages: false,
        }
    }
}

/// What a render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
    pub bytes: usize,
    /// Stage images written alongside the output, in pipeline order
    pub stages: Vec<PathBuf>,
}

/// Render PNG bytes to indexed PNG bytes in memory.
pub fn render_png(png_bytes: &[u8], options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let image = decode_rgba(png_bytes)?;
    let indexed = options
        .ditherer()
        .dither(&image.data, image.width, image.height)?;
    let encoded = encode_indexed(&indexed)?;
    Ok(if options.optimize {
        optimize(encoded)
    } else {
        encoded
    })
}

/// Render `input` to an indexed PNG at `output`.
///
/// With `write_stages` set, the intermediate images are written next to
/// `output` as `<stem>-gray.png`, `<stem>-dither.png`, `<stem>-green.png`
/// (only when tinting) and `<stem>-green-palette.png`.
pub fn render_file(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<RenderReport, RenderError> {
    let png_bytes = std::fs::read(input)?;
    let image = decode_rgba(&png_bytes)?;
    let (width, height) = (image.width, image.height);
    tracing::info!(
        input = %input.display(),
        width,
        height,
        levels = options.levels,
        matrix = options.matrix.size(),
        "Rendering"
    );

    let ditherer = options.ditherer();
    let mut stages = Vec::new();

    let indexed = if options.write_stages {
        let result = ditherer.dither_stages(&image.data, width, height)?;

        let mut rgba_stages = vec![("gray", &result.gray), ("dither", &result.dithered)];
        if let Some(tinted) = &result.tinted {
            rgba_stages.push(("green", tinted));
        }
        for (suffix, rgba) in rgba_stages {
            let path = stage_path(output, suffix);
            write_png(&path, encode_rgba(rgba, width, height)?, options.optimize)?;
            stages.push(path);
        }

        let preview = encode_rgba(&result.indexed.to_rgba(), width, height)?;
        let path = stage_path(output, "green-palette");
        write_png(&path, preview, options.optimize)?;
        stages.push(path);

        result.indexed
    } else {
        ditherer.dither(&image.data, width, height)?
    };

    let bytes = write_png(output, encode_indexed(&indexed)?, options.optimize)?;
    tracing::info!(
        output = %output.display(),
        bytes,
        stages = stages.len(),
        "Rendered"
    );

    Ok(RenderReport {
        width,
        height,
        output: output.to_path_buf(),
        bytes,
        stages,
    })
}

fn write_png(path: &Path, png_bytes: Vec<u8>, optimize_png: bool) -> Result<usize, RenderError> {
    let png_bytes = if optimize_png {
        optimize(png_bytes)
    } else {
        png_bytes
    };
    std::fs::write(path, &png_bytes)?;
    tracing::debug!(path = %path.display(), bytes = png_bytes.len(), "Wrote PNG");
    Ok(png_bytes.len())
}

/// `dir/out.png` + `gray` -> `dir/out-gray.png`
fn stage_path(output: &Path, suffix: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{stem}-{suffix}.png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient_png(width: usize, height: usize) -> Vec<u8> {
        let rgba: Vec<u8> = (0..width * height)
            .flat_map(|i| {
                let v = ((i % width) * 255 / (width - 1)) as u8;
                [v, v, v, 255]
            })
            .collect();
        encode_rgba(&rgba, width, height).unwrap()
    }

    #[test]
    fn test_stage_path() {
        assert_eq!(
            stage_path(Path::new("/tmp/out/mononoke.png"), "gray"),
            PathBuf::from("/tmp/out/mononoke-gray.png")
        );
        assert_eq!(
            stage_path(Path::new("result"), "green-palette"),
            PathBuf::from("result-green-palette.png")
        );
    }

    #[test]
    fn test_options_from_default_config() {
        let options = RenderOptions::from_config(&AppConfig::default()).unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_options_from_config_rejects_matrix_size() {
        let config = AppConfig {
            matrix_size: 5,
            ..AppConfig::default()
        };
        let err = RenderOptions::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Dither(bayer_dither::DitherError::UnsupportedMatrixSize(5))
        ));
    }

    #[test]
    fn test_render_png_in_memory() {
        let out = render_png(&gradient_png(16, 4), &RenderOptions::default()).unwrap();
        let decoded = decode_rgba(&out).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 4));
    }

    #[test]
    fn test_render_png_invalid_levels() {
        let options = RenderOptions {
            levels: 0,
            ..RenderOptions::default()
        };
        let err = render_png(&gradient_png(4, 4), &options).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Dither(bayer_dither::DitherError::InvalidLevels(0))
        ));
    }

    #[test]
    fn test_render_file_without_stages() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        std::fs::write(&input, gradient_png(8, 8)).unwrap();

        let report = render_file(&input, &output, &RenderOptions::default()).unwrap();

        assert_eq!(report.width, 8);
        assert_eq!(report.height, 8);
        assert!(report.stages.is_empty());
        assert_eq!(report.bytes as u64, std::fs::metadata(&output).unwrap().len());
    }

    #[test]
    fn test_render_file_writes_stages() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("scene.png");
        std::fs::write(&input, gradient_png(8, 8)).unwrap();

        let options = RenderOptions {
            write_stages: true,
            ..RenderOptions::default()
        };
        let report = render_file(&input, &output, &options).unwrap();

        let names: Vec<String> = report
            .stages
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "scene-gray.png",
                "scene-dither.png",
                "scene-green.png",
                "scene-green-palette.png"
            ]
        );
        for path in &report.stages {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn test_render_file_stages_without_tint() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("plain.png");
        std::fs::write(&input, gradient_png(8, 8)).unwrap();

        let options = RenderOptions {
            tint: None,
            write_stages: true,
            ..RenderOptions::default()
        };
        let report = render_file(&input, &output, &options).unwrap();

        assert_eq!(report.stages.len(), 3);
        assert!(!dir.path().join("plain-green.png").exists());
    }

    #[test]
    fn test_render_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_file(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
