use crate::fetcher::{FetchSettings, DEFAULT_RATE_LIMIT_PAUSE};
use crate::github::{ClientConfig, DEFAULT_API_URL};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "org-repo-stats")]
#[command(about = "Summarizes the repositories of a GitHub organization: count, stars, top language and top 5 by stars")]
#[command(version)]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, env = "GITHUB_PAT", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds to wait before retrying a rate-limited page
    #[arg(
        long,
        env = "RATE_LIMIT_PAUSE_SECS",
        default_value_t = DEFAULT_RATE_LIMIT_PAUSE.as_secs()
    )]
    pub rate_limit_pause_secs: u64,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone().filter(|token| !token.is_empty()),
        }
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            rate_limit_pause: Duration::from_secs(self.rate_limit_pause_secs),
        }
    }
}
