// src/projects/mod.rs
// =============================================================================
// This module turns the raw repository listing into the list of projects we
// actually print.
//
// Submodules:
// - filter: Drops forks, archived repos and repos without a description
// - sort: Orders what's left by last push, newest first
// =============================================================================

mod filter;
mod sort;

use filter::filter_repos;
use sort::sort_by_pushed_desc;

use crate::github::RepositoryRecord;

// Filter, then sort. This is the whole "select" stage of the pipeline.
pub fn select_projects(repos: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    let mut projects = filter_repos(repos);
    sort_by_pushed_desc(&mut projects);
    projects
}
