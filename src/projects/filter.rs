// src/projects/filter.rs
// =============================================================================
// Decides which repositories are worth showing.
//
// A repository is kept only if ALL of these hold:
// - it is not a fork
// - it has a non-empty description
// - it is not archived
//
// Dropped repositories are not reported individually; main.rs logs the
// before/after counts instead.
// =============================================================================

use crate::github::RepositoryRecord;

// Returns true if the repository should appear in the output
pub fn should_include(repo: &RepositoryRecord) -> bool {
    if repo.is_fork() {
        return false;
    }

    // Whitespace-only descriptions are kept, only "" and null are dropped
    if repo.description.as_deref().map_or(true, str::is_empty) {
        return false;
    }

    if repo.is_archived() {
        return false;
    }

    true
}

// Keeps the repositories that pass should_include, in their original order
pub fn filter_repos(repos: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    repos.into_iter().filter(should_include).collect()
}
