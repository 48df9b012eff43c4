//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reelgood_core::url::BASE_URL;
use reelgood_core::{ClientConfig, Region, ScrapeMode};

/// Look up where a movie or show is streaming, using Reelgood title pages
#[derive(Parser, Debug)]
#[command(name = "reelgood")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site root to fetch title pages from
    #[arg(long, global = true, env = "REELGOOD_BASE_URL", default_value = BASE_URL, value_name = "URL")]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECS")]
    pub timeout: u64,

    /// Enable info-level logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// HTTP client settings derived from the global flags
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
            ..ClientConfig::default()
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape a single title page
    Scrape(ScrapeArgs),
    /// Scrape several title pages one after another
    Batch(BatchArgs),
}

/// Region selection shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct RegionArgs {
    /// Region to report (all, us, uk, ca, au, nz)
    #[arg(long, value_name = "CODE", conflicts_with = "all_regions")]
    pub region: Option<Region>,

    /// Scrape every individual region
    #[arg(long, visible_alias = "all")]
    pub all_regions: bool,
}

impl RegionArgs {
    pub fn mode(&self) -> ScrapeMode {
        if self.all_regions {
            ScrapeMode::AllRegions
        } else {
            ScrapeMode::Single(self.region)
        }
    }
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Reelgood URL of a movie or show
    #[arg(value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub region: RegionArgs,

    /// Print only JSON
    #[arg(long)]
    pub json: bool,

    /// Print the raw JSON after the summary
    #[arg(short, long)]
    pub debug: bool,

    /// Read the page from a saved HTML file instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "all_regions")]
    pub html: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Reelgood URLs to scrape
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line (# starts a comment)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Seconds to wait between requests
    #[arg(long, default_value = "2", value_name = "SECS", value_parser = parse_delay)]
    pub delay: Duration,

    #[command(flatten)]
    pub region: RegionArgs,

    /// Write the combined report to a file (JSON if --json or a .json name)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of text summaries
    #[arg(long)]
    pub json: bool,
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid delay: {}. Expected a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|e| format!("Invalid delay: {}. Must be zero or more seconds ({})", s, e))
}
