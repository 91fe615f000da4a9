// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is deliberately tiny: one optional positional argument
// (the GitHub username) and nothing else. clap still gives us --help and
// --version for free.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// The account we list when no username is given on the command line
pub const DEFAULT_USERNAME: &str = "mr-karan";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-projects",
    version,
    about = "List a GitHub user's repositories as TOML project entries",
    long_about = "gh-projects fetches every repository owned by a GitHub user, drops forks, \
                  archived repos and repos without a description, and prints the rest as \
                  [[project]] TOML blocks, most recently pushed first."
)]
pub struct Cli {
    /// GitHub username whose repositories should be listed
    ///
    /// This is an optional positional argument (no flag needed)
    #[arg(default_value = DEFAULT_USERNAME)]
    pub username: String,
}
