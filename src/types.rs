use serde::Deserialize;

const PLACEHOLDER: &str = "N/A";

/// One element of the `GET /orgs/{org}/repos` response.
///
/// Every field the analysis consumes may be missing or `null`; the accessors
/// apply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RepositoryRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub language: Option<String>,
}

impl RepositoryRecord {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    /// Declared primary language, `None` when absent, `null` or empty.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| !lang.is_empty())
    }
}
