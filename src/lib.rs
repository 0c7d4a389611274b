//! Gmail sweep
//!
//! A command-line utility that searches a Gmail mailbox with one or more
//! queries and, after the operator confirms, trashes or permanently
//! deletes every match.
//!
//! # Overview
//!
//! - **Authentication**: OAuth2 with an on-disk token cache; the first run
//!   walks through an interactive authorization-code exchange at the
//!   console
//! - **Search**: paginated listing per query with a detail fetch per
//!   message, reporting subject and date as matches are found
//! - **Confirmation**: explicit yes/no gate before anything is touched
//! - **Mutation**: one trash or delete call per confirmed match, in
//!   encounter order, stopping at the first failure
//!
//! # Module Organization
//!
//! - [`auth`] - OAuth2 authentication and Gmail API initialization
//! - [`cli`] - Command-line interface
//! - [`client`] - Gmail API client behind the [`client::MailClient`] trait
//! - [`confirm`] - Confirmation gate
//! - [`error`] - Error types and result alias
//! - [`models`] - Core data structures
//! - [`mutation`] - Bulk trash/delete execution
//! - [`search`] - Paginated search and collection
//! - [`token_store`] - Token cache file handling

pub mod auth;
pub mod cli;
pub mod client;
pub mod confirm;
pub mod error;
pub mod models;
pub mod mutation;
pub mod search;
pub mod token_store;

// Re-export commonly used types for convenience
pub use error::{Result, SweepError};

// Core data models
pub use models::{MessageDetail, MessageHeader, MessagePage, MessageRecord, MutationMode};

// Client trait and production implementation
pub use client::{GmailApiClient, MailClient};

// Pipeline stages
pub use mutation::MutationExecutor;
pub use search::SearchEngine;

// Token cache
pub use token_store::{CacheState, TokenStore};

// CLI types (for binary usage)
pub use cli::Cli;
