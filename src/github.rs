use crate::error::{RepoStatsError, Result};
use crate::types::RepositoryRecord;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::{debug, error};
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("org-repo-stats/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

/// Outcome of a single page request that the fetch loop knows how to handle
#[derive(Debug)]
pub enum PageResponse {
    Page(Vec<RepositoryRecord>),
    RateLimited,
    Forbidden(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    RateLimited,
    Forbidden,
    Failed(StatusCode),
}

/// Sort a response into the categories the fetch loop reacts to.
///
/// GitHub reports an exhausted quota as a 403 whose message mentions the rate
/// limit, so the body has to be inspected to tell it apart from a bad token.
pub fn classify_status(status: StatusCode, body: &str) -> StatusClass {
    match status {
        StatusCode::OK => StatusClass::Success,
        StatusCode::FORBIDDEN => {
            if body.to_lowercase().contains("rate limit") {
                StatusClass::RateLimited
            } else {
                StatusClass::Forbidden
            }
        }
        status => StatusClass::Failed(status),
    }
}

/// A paginated listing of an organization's repositories
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        organization: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PageResponse>;
}

pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_url = Url::parse(&config.api_url)?;
        if api_url.cannot_be_a_base() {
            return Err(RepoStatsError::InvalidUrl(config.api_url));
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(GitHubClient {
            client,
            api_url,
            token: config.token,
        })
    }

    /// `{api_url}/orgs/{organization}/repos?page={page}&per_page={per_page}`
    pub fn repos_url(&self, organization: &str, page: u32, per_page: u32) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepoStatsError::InvalidUrl(self.api_url.to_string()))?
            .pop_if_empty()
            .extend(["orgs", organization, "repos"]);
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }
}

#[async_trait]
impl PageSource for GitHubClient {
    async fn fetch_page(
        &self,
        organization: &str,
        page: u32,
        per_page: u32,
    ) -> Result<PageResponse> {
        let url = self.repos_url(organization, page, per_page)?;
        debug!(%url, page, "Requesting repository page");

        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match classify_status(status, &body) {
            StatusClass::Success => {
                let records: Vec<RepositoryRecord> = serde_json::from_str(&body)?;
                Ok(PageResponse::Page(records))
            }
            StatusClass::RateLimited => Ok(PageResponse::RateLimited),
            StatusClass::Forbidden => Ok(PageResponse::Forbidden(api_message(&body))),
            StatusClass::Failed(status) => {
                error!(status = status.as_u16(), %url, "Failed to retrieve data");
                Err(RepoStatsError::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
        }
    }
}

/// The `message` field of a GitHub error body, or the raw body.
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
