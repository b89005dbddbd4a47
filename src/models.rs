use serde::Serialize;

/// Aggregate statistics for one organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total_repositories: usize,
    pub total_stars: u64,
    pub most_popular_language: String,
    pub top_5_repositories: Vec<TopRepository>,
}

/// Entry of the star ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopRepository {
    pub name: String,
    pub stars: u64,
}
