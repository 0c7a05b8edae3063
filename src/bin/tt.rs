//! tt - save one TikTok (or any yt-dlp supported) video

use anyhow::Result;
use clap::Parser;
use snapgrab::cli;
use snapgrab::extractor::YtDlp;
use snapgrab::utils::AppSettings;
use snapgrab::video::VideoFetcher;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "tt", about = "Download a single video with yt-dlp")]
struct Args {
    /// Video URL; asked for on the terminal when omitted
    url: Option<String>,

    /// Base file name; the video title is used when empty
    #[arg(long)]
    name: Option<String>,

    /// Folder the video is saved into
    #[arg(long, default_value = "edits")]
    output_dir: PathBuf,

    /// yt-dlp executable to use instead of searching for one
    #[arg(long)]
    yt_dlp: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging();

    let settings = AppSettings {
        videos_dir: args.output_dir,
        ..Default::default()
    };

    let engine = match args.yt_dlp {
        Some(path) => YtDlp::with_path(path),
        None => YtDlp::new()?,
    };
    tracing::debug!("Using yt-dlp at {}", engine.ytdlp_path().display());

    let (url, name) = match args.url {
        Some(url) => (url, args.name),
        None => {
            let url = cli::prompt("Podaj URL wideo z TikToka: ")?;
            let name = match args.name {
                Some(name) => Some(name),
                None => Some(cli::prompt("Podaj nazwę pliku (Enter = tytuł wideo): ")?),
            };
            (url, name)
        }
    };

    let fetcher = VideoFetcher::new(Arc::new(engine), settings);

    let rt = tokio::runtime::Runtime::new()?;
    let spec = rt.block_on(fetcher.download_tiktok_video(&url, name.as_deref()))?;

    tracing::info!("Saved under {:?}", spec.output_template());
    Ok(())
}
