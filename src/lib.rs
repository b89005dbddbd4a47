pub mod analyzer;
pub mod app;
pub mod cli;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod models;
pub mod reporter;
pub mod types;

pub use error::{RepoStatsError, Result};
