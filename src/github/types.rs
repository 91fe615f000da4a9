// src/github/types.rs
// =============================================================================
// The shape of one repository as returned by GET /users/{user}/repos.
//
// GitHub sends around 80 fields per repository; serde ignores every field we
// don't declare, so this struct only lists what the filter and the TOML
// renderer actually read.
//
// Nullable vs. missing:
// - GitHub sends `null` for an unset description/language/homepage
// - Option<T> covers both `null` and an absent key
// - #[serde(default)] lets older or trimmed-down payloads omit a field
// =============================================================================

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name, unique per owner
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 timestamps, e.g. "2024-01-15T10:00:00Z"
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    /// Free-form project website; users often leave it blank or as spaces
    #[serde(default)]
    pub homepage: Option<String>,
    /// Link to the repository on github.com
    pub html_url: String,
    #[serde(default)]
    pub fork: Option<bool>,
    #[serde(default)]
    pub archived: Option<bool>,
}

impl RepositoryRecord {
    pub fn is_fork(&self) -> bool {
        self.fork.unwrap_or(false)
    }

    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    // Missing timestamps compare as "", which puts them last in a descending sort
    pub fn pushed_at_key(&self) -> &str {
        self.pushed_at.as_deref().unwrap_or("")
    }
}
