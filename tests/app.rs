mod common;

use common::{repo, Reply, ScriptedSource};
use org_repo_stats::app::{read_organization, run, RunOutcome, EMPTY_ORGANIZATION_MESSAGE, PROMPT};
use org_repo_stats::error::RepoStatsError;
use org_repo_stats::fetcher::FetchSettings;
use std::io::Cursor;
use tokio_test::{assert_err, assert_ok};

#[test]
fn test_read_organization_trims_input() {
    let mut input = Cursor::new("  rust-lang \n");
    let mut output = Vec::new();

    let organization = assert_ok!(read_organization(&mut input, &mut output));

    assert_eq!(organization.as_deref(), Some("rust-lang"));
    assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
}

#[test]
fn test_read_organization_blank_line() {
    let mut output = Vec::new();

    for blank in ["\n", "   \t\n", ""] {
        let mut input = Cursor::new(blank);
        let organization = assert_ok!(read_organization(&mut input, &mut output));
        assert_eq!(organization, None);
    }
}

#[tokio::test]
async fn test_empty_organization_makes_no_request() {
    let source = ScriptedSource::new(Vec::new());
    let mut input = Cursor::new("   \n");
    let mut output = Vec::new();

    let outcome =
        assert_ok!(run(&mut input, &mut output, &source, &FetchSettings::default()).await);

    assert_eq!(outcome, RunOutcome::EmptyOrganization);
    assert_eq!(source.calls(), 0);
    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains(EMPTY_ORGANIZATION_MESSAGE));
}

#[tokio::test]
async fn test_run_returns_summary_without_printing_it() {
    let source = ScriptedSource::new(vec![Reply::Page(vec![
        repo("A", 10, Some("Go")),
        repo("B", 30, Some("Go")),
        repo("C", 20, Some("Rust")),
    ])]);
    let mut input = Cursor::new("acme\n");
    let mut output = Vec::new();

    let outcome =
        assert_ok!(run(&mut input, &mut output, &source, &FetchSettings::default()).await);

    let summary = match outcome {
        RunOutcome::Analyzed(summary) => summary,
        other => panic!("Expected a summary, got: {:?}", other),
    };
    assert_eq!(summary.total_repositories, 3);
    assert_eq!(summary.total_stars, 60);
    assert_eq!(source.requested_pages(), vec![1]);

    let printed = String::from_utf8(output).unwrap();
    assert!(printed.contains("Retrieving repositories for organization:"));
    assert!(printed.contains("acme"));
    assert!(!printed.contains("total_repositories"));
}

#[tokio::test]
async fn test_run_propagates_fatal_status() {
    let source = ScriptedSource::new(vec![Reply::Status(404)]);
    let mut input = Cursor::new("missing-org\n");
    let mut output = Vec::new();

    let err = assert_err!(run(&mut input, &mut output, &source, &FetchSettings::default()).await);

    assert!(matches!(err, RepoStatsError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_run_without_languages_fails() {
    let source = ScriptedSource::new(vec![Reply::Page(vec![repo("docs", 2, None)])]);
    let mut input = Cursor::new("acme\n");
    let mut output = Vec::new();

    let err = assert_err!(run(&mut input, &mut output, &source, &FetchSettings::default()).await);

    assert!(matches!(err, RepoStatsError::NoLanguageData));
}
