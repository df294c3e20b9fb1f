use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nonogen::models::GeneratorConfig;
use nonogen::services::{ImageSource, PuzzlePipeline};

#[derive(Parser)]
#[command(name = "nonogen")]
#[command(about = "Turn a raster image into a playable nonogram puzzle")]
struct Cli {
    /// Optional YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long, global = true, default_value = "puzzle.html")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle from a local image file
    FromFile {
        /// Source image (PNG, JPEG, GIF, BMP, WebP)
        image: PathBuf,
    },
    /// Fetch an image from a listing page and generate a puzzle from it
    FromWeb {
        /// Listing page to scrape for the first image link
        /// (default: configured listing URL)
        #[arg(long)]
        listing: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nonogen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::load(cli.config.as_deref());

    let fetched = match &cli.command {
        Commands::FromFile { image } => ImageSource::from_file(image)?,
        Commands::FromWeb { listing } => {
            let source = ImageSource::new(&config.fetch)?;
            source.from_listing(listing.as_deref())?
        }
    };

    let mut pipeline = PuzzlePipeline::new(&config);
    let generated = pipeline.generate(&fetched)?;

    std::fs::write(&cli.output, &generated.html)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        output = %cli.output.display(),
        width = generated.puzzle.width,
        height = generated.puzzle.height,
        percent = generated.puzzle.final_percent,
        "Puzzle written"
    );
    Ok(())
}
