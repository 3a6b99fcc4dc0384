//! CLI tool to generate a storyboard from a campaign.
//!
//! Usage:
//!   storyboard --brand "Volt" --product "Sprint Shoe" --description "..." [OPTIONS]
//!   storyboard --input campaign.json [--format json] [--output board.json]
//!   storyboard --input campaign.json --render-dir frames/ [--pace-ms 300]

mod input;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use storyboardpro::{CampaignInput, Storyboard};

use input::{collect_images, read_campaign_file, CampaignOverrides};
use output::{render, render_moods, render_placeholders, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "storyboard",
    about = "Plan a branded video storyboard with image-generation prompts",
    version
)]
struct Args {
    /// Campaign JSON file (a campaign object, or `{campaign, images}`)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Brand name
    #[arg(short, long)]
    brand: Option<String>,

    /// Product or service name
    #[arg(short, long)]
    product: Option<String>,

    /// Campaign description
    #[arg(short, long)]
    description: Option<String>,

    /// Video length in seconds
    #[arg(long)]
    duration: Option<u32>,

    /// Mood preset id (see --list-moods)
    #[arg(short, long)]
    mood: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Key message used in narration
    #[arg(short, long)]
    key_message: Option<String>,

    /// Reference image file names, in slot order
    #[arg(long = "image")]
    images: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write one SVG placeholder per scene into this directory
    #[arg(long)]
    render_dir: Option<PathBuf>,

    /// Pause between placeholder frames, in milliseconds
    #[arg(long, default_value_t = 300)]
    pace_ms: u64,

    /// Print the mood catalog and exit
    #[arg(long)]
    list_moods: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> CampaignOverrides {
        CampaignOverrides {
            brand: self.brand.clone(),
            product: self.product.clone(),
            description: self.description.clone(),
            duration: self.duration,
            mood: self.mood.clone(),
            audience: self.audience.clone(),
            key_message: self.key_message.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list_moods {
        print!("{}", render_moods());
        return Ok(());
    }

    // 1. Resolve the campaign
    let (base, file_images) = match &args.input {
        Some(path) => read_campaign_file(path)?,
        None => (CampaignInput::default(), Vec::new()),
    };
    let campaign = args.overrides().apply(base);
    let images = collect_images(file_images, &args.images);

    // 2. Generate
    let board = Storyboard::generate(&campaign, &images).context("Failed to generate storyboard")?;

    // 3. Emit
    let rendered = render(&board, args.format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).context("Failed to write output file")?;
            eprintln!("Storyboard written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    // 4. Optional placeholder frames
    if let Some(dir) = &args.render_dir {
        let written = render_placeholders(&board, dir, Duration::from_millis(args.pace_ms))?;
        eprintln!("Rendered {} placeholder frames into {}", written.len(), dir.display());
    }

    Ok(())
}
