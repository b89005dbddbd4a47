use crate::analyzer::analyze;
use crate::error::Result;
use crate::fetcher::{fetch_all, FetchSettings};
use crate::github::PageSource;
use crate::models::AnalysisSummary;
use colored::*;
use std::io::{BufRead, Write};
use tracing::info;

pub const PROMPT: &str = "Enter the GitHub organization name: ";
pub const EMPTY_ORGANIZATION_MESSAGE: &str = "Organization name cannot be empty.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input was blank, nothing was fetched
    EmptyOrganization,
    Analyzed(AnalysisSummary),
}

/// Prompt for an organization name and read one line of input.
///
/// Returns `None` when the trimmed line is empty.
pub fn read_organization<R, W>(input: &mut R, output: &mut W) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let organization = line.trim();
    if organization.is_empty() {
        Ok(None)
    } else {
        Ok(Some(organization.to_string()))
    }
}

/// Prompt for an organization, then fetch and analyze its repositories
pub async fn run<R, W, S>(
    input: &mut R,
    output: &mut W,
    source: &S,
    settings: &FetchSettings,
) -> Result<RunOutcome>
where
    R: BufRead,
    W: Write,
    S: PageSource + ?Sized,
{
    let Some(organization) = read_organization(input, output)? else {
        writeln!(output, "{}", EMPTY_ORGANIZATION_MESSAGE.red())?;
        return Ok(RunOutcome::EmptyOrganization);
    };

    writeln!(
        output,
        "{} {}",
        "Retrieving repositories for organization:".green(),
        organization.bold()
    )?;

    let repos = fetch_all(source, &organization, settings).await?;
    info!(organization = %organization, count = repos.len(), "Analyzing repositories");

    let summary = analyze(&repos)?;

    Ok(RunOutcome::Analyzed(summary))
}
