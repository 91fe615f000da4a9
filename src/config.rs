// src/config.rs
// =============================================================================
// Runtime configuration for one run of the pipeline.
//
// Where values come from:
// - username: the CLI positional argument (see cli.rs)
// - api_base_url: the GITHUB_API_URL environment variable, falling back to
//   the public GitHub API
// - everything else: fixed constants
//
// The struct is built once in main.rs and passed by reference from then on.
// =============================================================================

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const API_BASE_URL_ENV: &str = "GITHUB_API_URL";

// How many repositories we ask for per page (GitHub's maximum)
pub const PER_PAGE: usize = 100;

// Pause between page requests to stay friendly with rate limits
pub const PAGE_DELAY: Duration = Duration::from_millis(500);

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Account whose repositories are listed
    pub username: String,
    /// API root without a trailing slash, e.g. "https://api.github.com"
    pub api_base_url: String,
    pub per_page: usize,
    pub page_delay: Duration,
    pub request_timeout: Duration,
}

impl Config {
    // Builds the configuration from parsed CLI arguments plus the environment
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base_url = std::env::var(API_BASE_URL_ENV).ok();
        Self::new(&cli.username, api_base_url.as_deref())
    }

    pub fn new(username: &str, api_base_url: Option<&str>) -> Result<Self> {
        let api_base_url = match api_base_url.map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Url::parse(raw)
                    .with_context(|| format!("Invalid {} value '{}'", API_BASE_URL_ENV, raw))?;
                raw.trim_end_matches('/').to_string()
            }
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        Ok(Self {
            username: username.to_string(),
            api_base_url,
            per_page: PER_PAGE,
            page_delay: PAGE_DELAY,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    // The listing endpoint for this account (query parameters are added per page)
    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base_url, self.username)
    }
}
