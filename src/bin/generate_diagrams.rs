use anyhow::{Context, Result};
use clap::Parser;
use qubes_claw_media::assets::ensure_directory_exists;
use qubes_claw_media::{Config, Theme, diagrams};
use std::path::PathBuf;

const USAGE: &str = "Usage: generate-diagrams <output-dir>";

#[derive(Parser, Debug)]
#[command(name = "generate-diagrams")]
#[command(version, about = "Render the qubes-claw architecture diagrams as PNG")]
struct Cli {
    /// Directory the PNG files are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    _ignored: Vec<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(output_dir) = cli.output_dir else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let config = Config::load(cli.config.as_deref())?;
    let theme = Theme::from_config(&config);

    let output_dir = ensure_directory_exists(&output_dir)
        .with_context(|| format!("Cannot use output directory {}", output_dir.display()))?;

    println!("Generating diagrams...");
    let written = diagrams::render_all(&output_dir, &theme).context("Failed to render diagrams")?;
    log::info!("Wrote {} diagrams to {}", written.len(), output_dir.display());
    println!("Done.");

    Ok(())
}
