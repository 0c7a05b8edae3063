//! photos - save one image from an Imgur page or direct image link

use anyhow::Result;
use clap::Parser;
use snapgrab::cli;
use snapgrab::photos::ImageFetcher;
use snapgrab::utils::{prepare_output_dir, AppSettings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photos", about = "Download a single image from Imgur")]
struct Args {
    /// Image URL; asked for on the terminal when omitted
    url: Option<String>,

    /// Folder the image is saved into
    #[arg(long, default_value = "Photos")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging();

    let settings = AppSettings {
        photos_dir: args.output_dir,
        ..Default::default()
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(args.url, settings))
}

async fn run(url: Option<String>, settings: AppSettings) -> Result<()> {
    // Folder problems are not part of the reported-and-ignored failures.
    prepare_output_dir(&settings.photos_dir).await?;
    let fetcher = ImageFetcher::new(&settings)?;

    let source_url = match url {
        Some(url) => url,
        None => cli::prompt("Podaj URL obrazu z Imgur (np. https://imgur.com/fZA6P5X):\n")?,
    };

    // Failures were already reported; the tool still exits cleanly.
    let _ = fetcher.download_and_report(&source_url, &settings).await;
    Ok(())
}
