mod report;
mod run;

use anyhow::Context;
use clap::Parser;
use millcheck_scraper::HttpRenderer;
use tracing_subscriber::EnvFilter;

/// Report which Central Milling flours can currently be bought in 5lb and
/// 25lb bags.
#[derive(Debug, Parser)]
#[command(name = "millcheck", version)]
#[command(about = "Check Central Milling bag-size availability")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = millcheck_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "loaded configuration");

    let renderer = HttpRenderer::new(&config.user_agent).context("failed to start page renderer")?;
    let outcome = run::run_check(&renderer, &config).await;
    drop(renderer);

    match outcome {
        Ok(check) => report::print_report(&check),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "availability check failed");
            Err(e)
        }
    }
}
