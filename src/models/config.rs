use bayer_dither::{BayerMatrix, DitherError, Tint, DEFAULT_LEVELS};
use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Number of gray levels for the ordered dither
    #[serde(default = "default_levels")]
    pub levels: usize,

    /// Bayer matrix side length (2, 4 or 8)
    #[serde(default = "default_matrix_size")]
    pub matrix_size: usize,

    /// Tint pass applied after dithering
    #[serde(default)]
    pub tint: TintConfig,

    /// Re-compress PNG output with oxipng
    #[serde(default)]
    pub optimize: bool,

    /// Also write the gray, dither and tint stage images
    #[serde(default)]
    pub write_stages: bool,
}

fn default_levels() -> usize {
    DEFAULT_LEVELS
}

fn default_matrix_size() -> usize {
    8
}

/// Tint multipliers
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TintConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_red")]
    pub red: f64,

    #[serde(default = "default_green")]
    pub green: f64,

    #[serde(default = "default_blue")]
    pub blue: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_red() -> f64 {
    Tint::GREEN.red
}

fn default_green() -> f64 {
    Tint::GREEN.green
}

fn default_blue() -> f64 {
    Tint::GREEN.blue
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            red: Tint::GREEN.red,
            green: Tint::GREEN.green,
            blue: Tint::GREEN.blue,
        }
    }
}

impl TintConfig {
    /// The configured tint, or `None` when disabled
    pub fn tint(&self) -> Option<Tint> {
        self.enabled
            .then(|| Tint::new(self.red, self.green, self.blue))
    }
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from an optional file path.
    ///
    /// A missing path yields the defaults. A file that cannot be read or
    /// parsed is logged and also yields the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        levels = config.levels,
                        matrix_size = config.matrix_size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the configured matrix size
    pub fn matrix(&self) -> Result<BayerMatrix, DitherError> {
        BayerMatrix::from_size(self.matrix_size)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            matrix_size: 8,
            tint: TintConfig::default(),
            optimize: false,
            write_stages: false,
        }
    }
}
