// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch every repository the user owns from the GitHub API
// 3. Drop forks/archived/undescribed repos, sort newest first
// 4. Print the TOML document to stdout
// 5. Exit with proper code (0 = success, 1 = nothing fetched or error)
//
// stdout carries ONLY the TOML document. Progress and errors are logged to
// stderr through `tracing`, so `gh-projects > projects.toml` stays clean.
//
// Rust concepts used:
// - async/await: For the HTTP requests and the delay between pages
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - runtime settings
mod github;        // src/github/ - GitHub API access
mod projects;      // src/projects/ - filtering and sorting
mod render;        // src/render/ - TOML output

use clap::Parser;  // Parser trait enables the parse() method
use cli::Cli;
use config::Config;

use anyhow::{Context, Result};
use std::io::{ErrorKind, IsTerminal, Write};
use chrono::Local;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected failure (bad GITHUB_API_URL, client setup, ...)
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Sends log output to stderr, at `info` unless RUST_LOG says otherwise
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = document printed (possibly with zero projects)
//   Ok(1) = the API returned no repositories at all
//   Err = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let client = github::build_client(&config)?;
    let repos = github::fetch_all_repos(&client, &config).await;

    // Nothing fetched means a typo'd username or a dead API; don't print
    // an empty document that could overwrite a good one
    if repos.is_empty() {
        error!("No repositories found");
        return Ok(1);
    }

    let total = repos.len();
    let projects = projects::select_projects(repos);

    info!(
        "Found {} total repos, including {} non-fork repos",
        total,
        projects.len()
    );
    debug!(
        "Dropped {} forked, archived or undescribed repos",
        total - projects.len()
    );

    let document = render::render_document(&projects, Local::now().naive_local());
    write_document(&mut std::io::stdout().lock(), &document)?;

    Ok(0)
}

// Writes the document to `out`
//
// A reader that goes away early (`gh-projects | head -1`) is not an error:
// whatever it wanted has already been written.
fn write_document<W: Write>(out: &mut W, document: &str) -> Result<()> {
    match out.write_all(document.as_bytes()).and_then(|_| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result.context("Failed to write to stdout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // Accepts `limit` bytes, then fails like a pipe whose reader exited
    struct ClosedPipe {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                return Err(io::Error::new(ErrorKind::BrokenPipe, "reader closed"));
            }
            let n = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_document_full_output() {
        let mut out = Vec::new();
        write_document(&mut out, "# GitHub Projects\n").unwrap();
        assert_eq!(out, b"# GitHub Projects\n");
    }

    #[test]
    fn test_write_document_closed_pipe_is_ok() {
        let mut pipe = ClosedPipe {
            written: Vec::new(),
            limit: 8,
        };
        assert!(write_document(&mut pipe, "# GitHub Projects\n# Total projects: 0\n").is_ok());
        assert_eq!(pipe.written, b"# GitHub");
    }

    #[test]
    fn test_write_document_other_errors_propagate() {
        let err = write_document(&mut FullDisk, "anything").unwrap_err();
        assert!(format!("{:#}", err).contains("no space left on device"));
    }
}
