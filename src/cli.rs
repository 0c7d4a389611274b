//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::models::MutationMode;

#[derive(Parser, Debug)]
#[command(name = "gmail-sweep")]
#[command(version)]
#[command(about = "Search Gmail and bulk-trash or delete the matches", long_about = None)]
pub struct Cli {
    /// Search criteria in Gmail query syntax, repeatable for multiple passes
    #[arg(short = 's', long = "search", required = true)]
    pub search: Vec<String>,

    /// Permanently delete matched messages instead of trashing them
    #[arg(short = 'd', long)]
    pub delete: bool,

    /// Path to OAuth2 credentials file
    #[arg(long = "credentials-file", default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Path to token cache file
    #[arg(long, default_value = "token.json")]
    pub token_cache: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The mode applied uniformly to every matched message.
    pub fn mutation_mode(&self) -> MutationMode {
        if self.delete {
            MutationMode::Delete
        } else {
            MutationMode::Trash
        }
    }
}
