//! Text and JSON reports
//!
//! The text summary is the human-readable form printed by the CLI and
//! written to combined batch files.

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::types::{AllRegionsAvailability, Platforms, ScrapeFailure, ScrapeOutcome, TitleAvailability};

/// Horizontal rule separating report sections
pub fn rule() -> String {
    "=".repeat(60)
}

/// Human-readable summary of one scrape outcome
pub fn summary(outcome: &ScrapeOutcome) -> String {
    match outcome {
        ScrapeOutcome::Single(result) => single_summary(result),
        ScrapeOutcome::AllRegions(result) => all_regions_summary(result),
        ScrapeOutcome::Failed(failure) => failure_summary(failure),
    }
}

/// Combined text report for a batch, one section per URL
pub fn batch_text(outcomes: &[ScrapeOutcome]) -> String {
    let rule = rule();
    let total = outcomes.len();
    let mut out = String::new();

    for (i, outcome) in outcomes.iter().enumerate() {
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Result {}/{}: {}", i + 1, total, outcome.url());
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{}", summary(outcome));
    }
    out
}

/// Pretty-printed JSON with two-space indentation
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Combined JSON report for a batch: an array of outcomes in input order
pub fn batch_json(outcomes: &[ScrapeOutcome]) -> Result<String> {
    to_json(outcomes)
}

fn header(title: &str) -> String {
    format!("STREAMING AVAILABILITY SUMMARY\n{}\n\nTitle: {}\n", rule(), title)
}

fn footer(url: &str) -> String {
    format!("\n{}\nSource: {}\n", rule(), url)
}

fn single_summary(result: &TitleAvailability) -> String {
    let mut out = header(&result.title);
    let _ = writeln!(out, "Region: {}", result.region);
    let _ = writeln!(out, "Platforms Found: {}\n", result.platform_count);

    if result.platforms.is_empty() {
        out.push_str("No streaming platforms detected.\n");
    } else {
        out.push_str("Available on:\n");
        push_platform_lists(&mut out, &result.platforms);
    }

    out.push_str(&footer(&result.url));
    out
}

fn all_regions_summary(result: &AllRegionsAvailability) -> String {
    let mut out = header(&result.title);
    let _ = writeln!(out, "\n{}", rule());

    for region in &result.regions {
        let _ = writeln!(out, "\n{} ({} platforms):", region.region, region.platform_count);
        if region.platforms.is_empty() {
            out.push_str("  (No streaming platforms available)\n");
        } else {
            push_platform_lists(&mut out, &region.platforms);
        }
    }

    out.push_str(&footer(&result.url));
    out
}

fn failure_summary(failure: &ScrapeFailure) -> String {
    format!(
        "Error: {}\n\nNote: Make sure you have internet connectivity and the URL is valid.",
        failure.error
    )
}

fn push_platform_lists(out: &mut String, platforms: &Platforms) {
    push_list(out, "Subscription", &platforms.subscription);
    push_list(out, "Free", &platforms.free);
}

fn push_list(out: &mut String, label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}:", label);
    for name in names {
        let _ = writeln!(out, "    - {}", name);
    }
}
