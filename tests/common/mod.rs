#![allow(dead_code)]

use async_trait::async_trait;
use org_repo_stats::error::{RepoStatsError, Result};
use org_repo_stats::github::{PageResponse, PageSource};
use org_repo_stats::types::RepositoryRecord;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One canned reply of a [`ScriptedSource`]
pub enum Reply {
    Page(Vec<RepositoryRecord>),
    RateLimited,
    Forbidden,
    Status(u16),
}

/// Page source that replays a fixed script and records every page requested
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    requested: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Page numbers in the order they were requested
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(
        &self,
        organization: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<PageResponse> {
        self.requested.lock().unwrap().push(page);

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for page {}", page));

        match reply {
            Reply::Page(records) => Ok(PageResponse::Page(records)),
            Reply::RateLimited => Ok(PageResponse::RateLimited),
            Reply::Forbidden => Ok(PageResponse::Forbidden("Bad credentials".to_string())),
            Reply::Status(status) => Err(RepoStatsError::HttpStatus {
                status,
                url: format!("https://api.github.com/orgs/{}/repos?page={}", organization, page),
            }),
        }
    }
}

pub fn repo(name: &str, stars: u64, language: Option<&str>) -> RepositoryRecord {
    RepositoryRecord {
        name: Some(name.to_string()),
        description: None,
        stargazers_count: Some(stars),
        forks_count: Some(0),
        language: language.map(str::to_string),
    }
}

/// `count` records named `{prefix}-{i}` with one star each
pub fn page_of(prefix: &str, count: usize) -> Vec<RepositoryRecord> {
    (0..count)
        .map(|i| repo(&format!("{}-{}", prefix, i), 1, Some("Rust")))
        .collect()
}
