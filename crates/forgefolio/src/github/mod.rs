//! GitHub REST API provider.
//!
//! Resolves a username with a single call to `GET /users/{username}`, lists
//! repositories from the `repos_url` returned inside the profile response,
//! and fetches commit messages from each repository's `commits_url` after
//! dropping its `{/sha}` URI-template placeholder.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`types`] - Response data structures
//! - [`client`] - Client creation and the [`Provider`](crate::platform::Provider) implementation
//! - [`convert`] - Mapping into the normalized model

mod client;
mod convert;
mod error;
mod types;

pub use client::{GITHUB_API_HOST, GitHubClient};
pub use error::GitHubError;
pub use types::{GitHubCommit, GitHubRepo, GitHubUser};
