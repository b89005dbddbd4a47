use crate::error::{RepoStatsError, Result};
use crate::models::{AnalysisSummary, TopRepository};
use crate::types::RepositoryRecord;
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

const TOP_REPOSITORIES: usize = 5;

/// Reduce the fetched records into an [`AnalysisSummary`].
///
/// Fails with [`RepoStatsError::NoLanguageData`] when no record declares a
/// language.
pub fn analyze(records: &[RepositoryRecord]) -> Result<AnalysisSummary> {
    let mut total_stars = 0u64;

    for repo in records {
        debug!(
            name = repo.name(),
            description = repo.description(),
            stars = repo.stars(),
            forks = repo.forks(),
            language = repo.language(),
            "Analyzing repository"
        );
        total_stars += repo.stars();
    }

    let most_popular_language = most_popular_language(records)
        .ok_or(RepoStatsError::NoLanguageData)?
        .to_string();

    Ok(AnalysisSummary {
        total_repositories: records.len(),
        total_stars,
        most_popular_language,
        top_5_repositories: top_repositories(records, TOP_REPOSITORIES),
    })
}

/// Most frequent declared language; ties go to the one seen first.
fn most_popular_language(records: &[RepositoryRecord]) -> Option<&str> {
    // language -> (count, index of first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, language) in records.iter().filter_map(|r| r.language()).enumerate() {
        counts.entry(language).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_seen))| (count, Reverse(first_seen)))
        .map(|(language, _)| language)
}

fn top_repositories(records: &[RepositoryRecord], limit: usize) -> Vec<TopRepository> {
    let mut ranked: Vec<&RepositoryRecord> = records.iter().collect();
    // sort_by_key is stable, equal star counts keep their input order
    ranked.sort_by_key(|repo| Reverse(repo.stars()));

    ranked
        .into_iter()
        .take(limit)
        .map(|repo| TopRepository {
            name: repo.name().to_string(),
            stars: repo.stars(),
        })
        .collect()
}
