//! Subcommand handlers

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use reelgood_core::{
    BatchOptions, BatchProgress, ClientConfig, ReelgoodScraper, ScrapeOutcome, read_url_list,
    report, run_batch,
};
use tracing::info;

use crate::cli::{BatchArgs, ScrapeArgs};

/// Scrape one title and print its summary or JSON
///
/// Exits with failure when the scrape itself failed.
pub async fn scrape(args: ScrapeArgs, config: ClientConfig) -> anyhow::Result<ExitCode> {
    if !args.json {
        println!("Scraping: {}\n", args.url);
    }

    let outcome = match &args.html {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("Failed to read HTML file: {}", path.display()))?;
            info!(file = %path.display(), bytes = html.len(), "Parsing saved page");
            ScrapeOutcome::Single(ReelgoodScraper::scrape_html(
                &html,
                &args.url,
                args.region.region,
            ))
        }
        None => {
            let scraper =
                ReelgoodScraper::with_config(config).context("Failed to create HTTP client")?;
            scraper.scrape_outcome(&args.url, args.region.mode()).await
        }
    };

    if args.json {
        println!("{}", report::to_json(&outcome)?);
    } else {
        println!("{}", report::summary(&outcome));
        if args.debug {
            println!("\nRaw data (debug mode):");
            println!("{}", report::to_json(&outcome)?);
        }
    }

    Ok(if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Scrape every URL from the arguments and/or a URL file
pub async fn batch(args: BatchArgs, config: ClientConfig) -> anyhow::Result<ExitCode> {
    let mut urls = args.urls;

    if let Some(file) = &args.file {
        let text = fs::read_to_string(file)
            .with_context(|| format!("Failed to read URL file: {}", file.display()))?;
        let loaded = read_url_list(&text);
        if !args.json {
            println!("Loaded {} URLs from {}", loaded.len(), file.display());
        }
        urls.extend(loaded);
    }

    if urls.is_empty() {
        bail!("No URLs to process");
    }

    let scraper = ReelgoodScraper::with_config(config).context("Failed to create HTTP client")?;
    let options = BatchOptions {
        delay: args.delay,
        mode: args.region.mode(),
    };

    if !args.json {
        println!("\nStarting batch processing of {} URL(s)...", urls.len());
    }

    let rule = report::rule();
    let quiet = args.json;
    let outcomes = run_batch(&scraper, &urls, options, |progress| {
        if quiet {
            return;
        }
        match progress {
            BatchProgress::Started { index, total, url } => {
                println!("\n{rule}");
                println!("Processing {}/{}: {}", index, total, url);
                println!("{rule}");
            }
            BatchProgress::Finished {
                index,
                total,
                outcome,
            } => {
                println!("{}", report::summary(outcome));
                if index < total && !options.delay.is_zero() {
                    println!(
                        "\nWaiting {} seconds before next request...",
                        options.delay.as_secs_f64()
                    );
                }
            }
        }
    })
    .await;

    if let Some(path) = &args.output {
        write_report(path, &outcomes, args.json)?;
        if !args.json {
            println!("\nResults written to {}", path.display());
        }
    }

    if args.json {
        println!("{}", report::batch_json(&outcomes)?);
    } else {
        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        println!("\n{rule}");
        println!(
            "Completed! Processed {} URL(s), {} failed",
            outcomes.len(),
            failed
        );
        println!("{rule}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes the combined batch report, as JSON or text
fn write_report(path: &Path, outcomes: &[ScrapeOutcome], json: bool) -> anyhow::Result<()> {
    let as_json = json
        || path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let contents = if as_json {
        report::batch_json(outcomes)?
    } else {
        report::batch_text(outcomes)
    };

    fs::write(path, contents)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    info!(file = %path.display(), json = as_json, "Wrote batch report");
    Ok(())
}
