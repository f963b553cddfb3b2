//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use senti_core::RelayService;
use senti_upstream::SpaceClient;
use senti_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Base URL of the external sentiment API
    #[arg(long, env = "SENTI_UPSTREAM_URL", default_value = senti_upstream::DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Append logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = Arc::new(SpaceClient::new(&args.upstream_url));
    let state = AppState::new(RelayService::new(client));

    println!();
    println!("  {} {}", "Senti".cyan().bold(), "Sentiment Relay".bold());
    println!();
    println!(
        "  {}      http://{}:{}",
        "Form".green(),
        args.host,
        args.port
    );
    println!(
        "  {}   http://{}:{}/analyze-sentiment",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Upstream".green(), args.upstream_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
