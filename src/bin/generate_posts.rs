use anyhow::{Context, Result};
use clap::Parser;
use qubes_claw_media::assets::ensure_directory_exists;
use qubes_claw_media::posts::{self, PostDirs, Selection};
use qubes_claw_media::{Config, Theme};
use std::path::PathBuf;

const USAGE: &str =
    "Usage: generate-posts <diagrams-dir> <screenshots-dir> <output-dir> [1|2|3|all]";

#[derive(Parser, Debug)]
#[command(name = "generate-posts")]
#[command(version, about = "Compose branded qubes-claw post images for social media")]
struct Cli {
    /// Directory holding architecture.png from generate-diagrams
    #[arg(value_name = "DIAGRAMS_DIR")]
    diagrams_dir: Option<PathBuf>,

    /// Directory holding demo screenshots and 04-health-checks.txt
    #[arg(value_name = "SCREENSHOTS_DIR")]
    screenshots_dir: Option<PathBuf>,

    /// Directory the post-N.png files are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Which post to generate: 1, 2, 3 or all
    #[arg(value_name = "WHICH")]
    which: Option<String>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    _ignored: Vec<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn usage_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (Some(diagrams), Some(screenshots), Some(output)) =
        (cli.diagrams_dir, cli.screenshots_dir, cli.output_dir)
    else {
        usage_exit();
    };

    let selection = match cli.which.as_deref() {
        None => Selection::All,
        Some(which) => match which.parse::<Selection>() {
            Ok(selection) => selection,
            Err(e) => {
                eprintln!("error: {e}");
                usage_exit();
            }
        },
    };

    let config = Config::load(cli.config.as_deref())?;
    let theme = Theme::from_config(&config);

    let output = ensure_directory_exists(&output)
        .with_context(|| format!("Cannot use output directory {}", output.display()))?;
    let dirs = PostDirs {
        diagrams,
        screenshots,
        output,
    };
    log::debug!("Post selection: {selection}, dirs: {dirs:?}");

    println!("Generating X post images...");
    let written = posts::render_selected(selection, &dirs, &theme)
        .context("Failed to render post images")?;
    log::info!(
        "Wrote {} post images to {}",
        written.len(),
        dirs.output.display()
    );
    println!("Done.");

    Ok(())
}
