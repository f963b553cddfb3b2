//! One-shot analysis command.
//!
//! Terminal rendition of the client form flow: submit text to a running
//! relay, wait with a spinner, render the label and confidence.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Default relay base URL.
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Base URL of the relay service
    #[arg(long, env = "SENTI_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    if args.text.trim().is_empty() {
        println!("{}", "Please enter some text to analyze.".yellow());
        return Ok(());
    }

    let url = format!(
        "{}/analyze-sentiment",
        args.backend_url.trim_end_matches('/')
    );
    debug!(url = %url, "Submitting text to relay");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Analyzing text...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let response = reqwest::Client::new()
        .post(&url)
        .json(&serde_json::json!({ "text": args.text }))
        .send()
        .await;

    spinner.finish_and_clear();

    let response = response.context("Could not reach the relay service")?;
    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("Relay returned an unreadable body")?;

    if !status.is_success() {
        let detail = body["detail"].as_str().unwrap_or("unknown error");
        bail!("Error during analysis ({}): {}", status, detail);
    }

    let label = body["label"].as_str().unwrap_or("unknown");
    let label_colored = if label == "Positive" {
        label.green().bold()
    } else {
        label.red().bold()
    };

    println!();
    println!("  {}   {}", "Sentiment".bold(), label_colored);
    match body["confidence"].as_f64() {
        Some(c) => println!("  {}  {:.4}", "Confidence".bold(), c),
        None => println!("  {}  {}", "Confidence".bold(), "n/a".dimmed()),
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
