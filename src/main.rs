use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bayer_dither::{BayerMatrix, Palette};
use greendither::models::AppConfig;
use greendither::rendering::{render_file, RenderOptions};

#[derive(Parser)]
#[command(name = "greendither")]
#[command(about = "Ordered-dither PNG images onto a four-step green palette")]
struct Cli {
    /// YAML configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG into an indexed green-palette PNG
    Render {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Number of gray levels (2-256)
        #[arg(short, long)]
        levels: Option<usize>,

        /// Bayer matrix size: 2, 4 or 8
        #[arg(short, long)]
        matrix: Option<usize>,

        /// Skip the green tint pass
        #[arg(long)]
        no_tint: bool,

        /// Also write the gray, dither and tint stage images
        #[arg(long)]
        stages: bool,

        /// Re-compress output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Print a Bayer matrix and its thresholds
    Matrix {
        /// Matrix size: 2, 4 or 8
        #[arg(short, long, default_value_t = 8)]
        size: usize,
    },
    /// Print the output palette
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greendither=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            levels,
            matrix,
            no_tint,
            stages,
            optimize,
        }) => {
            let mut config = AppConfig::load(config_path.as_deref());
            if let Some(levels) = levels {
                config.levels = levels;
            }
            if let Some(matrix) = matrix {
                config.matrix_size = matrix;
            }
            if no_tint {
                config.tint.enabled = false;
            }
            config.write_stages |= stages;
            config.optimize |= optimize;
            run_render_command(&input, &output, &config)
        }
        Some(Commands::Matrix { size }) => run_matrix_command(size),
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Render a PNG file to an indexed PNG
fn run_render_command(input: &Path, output: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let options = RenderOptions::from_config(config)?;
    let report = render_file(input, output, &options)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    println!(
        "Rendered {} ({}x{}, {} bytes)",
        report.output.display(),
        report.width,
        report.height,
        report.bytes
    );
    for stage in &report.stages {
        println!("  stage {}", stage.display());
    }

    Ok(())
}

fn run_matrix_command(size: usize) -> anyhow::Result<()> {
    let matrix = BayerMatrix::from_size(size)?;
    let cells = matrix.cells();
    let width = (cells - 1).to_string().len();

    println!("Bayer {size}x{size}:");
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        println!("  {}", line.join(" "));
    }

    println!("\nThresholds (M + 0.5) / {cells}:");
    for y in 0..size {
        let line: Vec<String> = (0..size)
            .map(|x| format!("{:.4}", matrix.threshold(x, y)))
            .collect();
        println!("  {}", line.join(" "));
    }

    Ok(())
}

fn run_palette_command() {
    let palette = Palette::green_ramp();
    println!("Palette ({} entries):", palette.len());
    for (i, [r, g, b, a]) in palette.colors().iter().enumerate() {
        println!("  {i}: #{r:02x}{g:02x}{b:02x}  rgba({r}, {g}, {b}, {a})");
    }
}

/// Show version, environment and available commands
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("greendither v{VERSION}");
    println!("Ordered dithering onto a four-step green palette\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .as_deref()
            .unwrap_or("greendither=info (default)")
    );

    let config_source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_path);

    println!("\nConfiguration:");
    println!("  Source:     {config_source}");
    println!("  Levels:     {}", config.levels);
    println!("  Matrix:     {0}x{0}", config.matrix_size);
    println!(
        "  Tint:       {}",
        if config.tint.enabled { "on" } else { "off" }
    );
    println!("  Optimize:   {}", config.optimize);
    println!("  Stages:     {}", config.write_stages);

    println!("\nCommands:");
    println!("  greendither render    Dither a PNG to an indexed PNG");
    println!("  greendither matrix    Print a Bayer matrix");
    println!("  greendither palette   Print the output palette");
    println!("\nRun 'greendither --help' for more details.");
}
