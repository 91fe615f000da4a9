// src/github/fetch.rs
// =============================================================================
// This module fetches every repository a GitHub user owns.
//
// Strategy:
// - Call GET /users/{user}/repos one page at a time (100 repos per page)
// - Ask for owned repos only, most recently pushed first
// - Stop at an empty page or a page shorter than 100 (that's the last one)
// - Sleep half a second between pages so we don't hammer the API
//
// Failure policy:
// - A failed page (network error, non-2xx status, bad JSON) is logged and
//   ends pagination, but everything fetched so far is still returned
// - The caller decides what to do with an empty result
//
// Rust concepts:
// - async functions: For network I/O
// - loop/break: Pagination without knowing the page count up front
// - Result: For the per-page error that we catch and log
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, error, info};

use super::types::RepositoryRecord;
use crate::config::Config;

// Creates the HTTP client used for every page request
//
// GitHub rejects requests without a User-Agent, so we always send one.
pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("gh-projects/", env!("CARGO_PKG_VERSION")))
        .timeout(config.request_timeout)
        .build()
        .context("Failed to create HTTP client")
}

// Fetches all pages of the user's repository listing
//
// Returns: Vec<RepositoryRecord> in API order (page 1 first)
//   This never fails: on a request error it returns what it already has.
pub async fn fetch_all_repos(client: &Client, config: &Config) -> Vec<RepositoryRecord> {
    let mut repos = Vec::new();
    let mut page: u32 = 1;

    info!("Fetching repositories for {}...", config.username);

    loop {
        let batch = match fetch_page(client, config, page).await {
            Ok(batch) => batch,
            Err(e) => {
                error!("Error fetching repos: {:#}", e);
                break;
            }
        };

        if batch.is_empty() {
            break;
        }

        let count = batch.len();
        repos.extend(batch);

        info!("Fetched page {} ({} repos)", page, count);

        // A short page means there is nothing after it
        if count < config.per_page {
            break;
        }

        page += 1;
        tokio::time::sleep(config.page_delay).await;
    }

    repos
}

// Fetches a single page of the listing
async fn fetch_page(client: &Client, config: &Config, page: u32) -> Result<Vec<RepositoryRecord>> {
    let url = config.repos_url();
    debug!("GET {} (page {})", url, page);

    let response = client
        .get(&url)
        .header(ACCEPT, "application/vnd.github+json")
        .query(&[
            ("page", page.to_string()),
            ("per_page", config.per_page.to_string()),
            ("type", "owner".to_string()),
            ("sort", "pushed".to_string()),
            ("direction", "desc".to_string()),
        ])
        .send()
        .await
        .with_context(|| format!("Request for page {} failed", page))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to fetch {}: HTTP {}",
            response.url(),
            response.status()
        ));
    }

    let repos = response
        .json::<Vec<RepositoryRecord>>()
        .await
        .with_context(|| format!("Could not decode page {} as a repository list", page))?;

    Ok(repos)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Vec instead of Result<Vec>?
//    - A failed page is an expected situation here, not a bug
//    - We log it and keep the repos we already have
//    - main.rs only fails the run if the whole Vec is empty
//
// 2. What does .query(&[...]) do?
//    - reqwest URL-encodes the pairs and appends them: ?page=1&per_page=100...
//    - Every value must be the same type, hence the .to_string() calls
//
// 3. What is {:#} in error!()?
//    - The "alternate" Display of anyhow::Error
//    - Prints the whole context chain on one line: "outer: inner: cause"
//
// 4. Why tokio::time::sleep and not std::thread::sleep?
//    - We're inside async code; std's sleep would block the runtime thread
//    - tokio's sleep yields until the timer fires
// -----------------------------------------------------------------------------
