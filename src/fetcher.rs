use crate::error::Result;
use crate::github::{PageResponse, PageSource};
use crate::types::RepositoryRecord;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

pub const PER_PAGE: u32 = 100;
pub const DEFAULT_RATE_LIMIT_PAUSE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// How long to wait before retrying a page that hit the rate limit
    pub rate_limit_pause: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            rate_limit_pause: DEFAULT_RATE_LIMIT_PAUSE,
        }
    }
}

/// Collect every repository of `organization`, page by page.
///
/// The listing ends at the first page shorter than [`PER_PAGE`]. A rate-limited
/// page is retried after `settings.rate_limit_pause` without advancing. A
/// forbidden response ends the loop early and returns what was collected so
/// far. Any other failure is returned as an error.
pub async fn fetch_all<S>(
    source: &S,
    organization: &str,
    settings: &FetchSettings,
) -> Result<Vec<RepositoryRecord>>
where
    S: PageSource + ?Sized,
{
    let mut repos = Vec::new();
    let mut page = 1;
    let mut pages_received = 0u32;

    loop {
        match source.fetch_page(organization, page, PER_PAGE).await? {
            PageResponse::Page(records) => {
                pages_received += 1;
                let received = records.len();
                repos.extend(records);

                if received < PER_PAGE as usize {
                    break;
                }
                page += 1;
            }
            PageResponse::RateLimited => {
                warn!(
                    page,
                    "Rate limit exceeded. Retrying after {} seconds...",
                    settings.rate_limit_pause.as_secs()
                );
                sleep(settings.rate_limit_pause).await;
            }
            PageResponse::Forbidden(message) => {
                error!(page, %message, "Forbidden request. Check API token.");
                break;
            }
        }
    }

    info!(
        organization,
        pages = pages_received,
        repositories = repos.len(),
        "Finished fetching repositories"
    );
    Ok(repos)
}
