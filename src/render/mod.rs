// src/render/mod.rs
// =============================================================================
// This module produces the TOML document we print to stdout.
//
// Submodules:
// - date: "2024-01-15T10:00:00Z" -> "Jan 2024"
// - entry: One [[project]] block per repository
//
// Document layout:
//   # GitHub Projects
//   # Generated on 2024-01-15 10:00:00
//   # Total projects: 2
//   <blank line>
//   [[project]] ...
//   <blank line>
//   [[project]] ...
//   <blank line>
// =============================================================================

mod date;
mod entry;

pub use entry::format_entry;

use chrono::NaiveDateTime;

use crate::github::RepositoryRecord;

// Renders the header comments followed by every project block
//
// `generated_at` is the local wall-clock time stamped into the header;
// main.rs passes Local::now() so tests can pin it.
pub fn render_document(projects: &[RepositoryRecord], generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    out.push_str("# GitHub Projects\n");
    out.push_str(&format!(
        "# Generated on {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("# Total projects: {}\n", projects.len()));
    out.push('\n');

    for project in projects {
        out.push_str(&format_entry(project));
        out.push_str("\n\n");
    }

    out
}
