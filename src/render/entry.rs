// src/render/entry.rs
// =============================================================================
// Renders one repository as a [[project]] TOML block.
//
// Field order is fixed so the output is stable from run to run:
//   name, description, created, pushed, stars, language, links
//
// Optional fields:
// - created / pushed: only if the timestamp parses
// - stars: only above STAR_THRESHOLD
// - language: only if GitHub detected one
// - Homepage link: only if the homepage isn't blank
// =============================================================================

use super::date::format_month_year;
use crate::github::RepositoryRecord;

// Star counts at or below this are left out of the output
pub const STAR_THRESHOLD: u64 = 10;

// Escapes double quotes so the description fits inside a TOML basic string
pub fn escape_description(description: &str) -> String {
    description.replace('"', "\\\"")
}

// Builds the TOML block for a single repository (no trailing newline)
pub fn format_entry(repo: &RepositoryRecord) -> String {
    let mut lines = Vec::new();
    lines.push("[[project]]".to_string());
    lines.push(format!("name = \"{}\"", repo.name));

    let description = escape_description(repo.description.as_deref().unwrap_or(""));
    lines.push(format!("description = \"{}\"", description));

    let created = format_month_year(repo.created_at.as_deref().unwrap_or(""));
    if !created.is_empty() {
        lines.push(format!("created = \"{}\"", created));
    }

    let pushed = format_month_year(repo.pushed_at.as_deref().unwrap_or(""));
    if !pushed.is_empty() {
        lines.push(format!("pushed = \"{}\"", pushed));
    }

    // Bare integer, not a string
    if repo.stars() > STAR_THRESHOLD {
        lines.push(format!("stars = {}", repo.stars()));
    }

    if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("language = \"{}\"", language));
    }

    lines.push("links = [".to_string());

    if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.trim().is_empty()) {
        lines.push(format!("  {{ name = \"Homepage\", url = \"{}\" }},", homepage));
    }

    lines.push(format!("  {{ name = \"GitHub\", url = \"{}\" }},", repo.html_url));
    lines.push("]".to_string());

    lines.join("\n")
}
