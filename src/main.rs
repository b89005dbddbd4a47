use clap::Parser;
use org_repo_stats::app::{self, RunOutcome};
use org_repo_stats::cli::Cli;
use org_repo_stats::github::GitHubClient;
use org_repo_stats::reporter;
use org_repo_stats::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr, stdout carries the prompt and the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = GitHubClient::new(cli.client_config())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = app::run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &client,
        &cli.fetch_settings(),
    )
    .await?;

    if let RunOutcome::Analyzed(summary) = outcome {
        reporter::display(&summary)?;
        info!(
            repositories = summary.total_repositories,
            stars = summary.total_stars,
            "Report complete"
        );
    }

    Ok(())
}
