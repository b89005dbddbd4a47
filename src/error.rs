use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoStatsError {
    #[error("GitHub API returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("No repository declares a primary language")]
    NoLanguageData,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<url::ParseError> for RepoStatsError {
    fn from(err: url::ParseError) -> Self {
        RepoStatsError::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepoStatsError>;
