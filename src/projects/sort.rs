// src/projects/sort.rs
// Orders repositories by their last push, newest first.

use crate::github::RepositoryRecord;

// Sorts in place by `pushed_at`, descending.
//
// ISO-8601 timestamps in the same format sort chronologically as plain
// strings, so no parsing is needed. `sort_by` is stable: repos pushed at the
// same instant keep the order they had before sorting. A missing `pushed_at`
// compares as "" and therefore ends up last.
pub fn sort_by_pushed_desc(repos: &mut [RepositoryRecord]) {
    repos.sort_by(|a, b| b.pushed_at_key().cmp(a.pushed_at_key()));
}
