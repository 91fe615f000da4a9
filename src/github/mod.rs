// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The RepositoryRecord type (the fields we read from each repo)
// - Paginated listing of a user's owned repositories
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod types;

// Re-export the public API from the submodules
pub use fetch::{build_client, fetch_all_repos};
pub use types::RepositoryRecord;
