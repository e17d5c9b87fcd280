//! GitLab API (v4) provider.
//!
//! GitLab needs an intermediate identifier lookup: a username-filtered user
//! search yields a numeric id, which then keys the profile, project, and
//! commit endpoints. The project listing and per-project commit endpoints
//! are synthesized from the id rather than taken from API responses, and
//! commit messages come from each commit's `title` field.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitLab API operations
//! - [`types`] - Response data structures
//! - [`client`] - Client creation and the [`Provider`](crate::platform::Provider) implementation
//! - [`convert`] - Mapping into the normalized model

mod client;
mod convert;
mod error;
mod types;

pub use client::{GITLAB_HOST, GitLabClient};
pub use error::GitLabError;
pub use types::{GitLabCommit, GitLabProject, GitLabUser, GitLabUserRef};
