//! Bitbucket API (2.0) provider.
//!
//! Identity resolution goes through the workspace endpoint: the username is
//! treated as a workspace slug whose `uuid` then keys the user profile
//! lookup. List responses nest their entries under a `values` array (unlike
//! GitHub and GitLab, which return bare arrays), and both the repository and
//! commit endpoints come from `links` in the responses. The API exposes no
//! bio, so that profile field is always empty.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for Bitbucket API operations
//! - [`types`] - Response data structures
//! - [`client`] - Client creation and the [`Provider`](crate::platform::Provider) implementation
//! - [`convert`] - Mapping into the normalized model

mod client;
mod convert;
mod error;
mod types;

pub use client::{BITBUCKET_API_HOST, BitbucketClient};
pub use error::BitbucketError;
pub use types::{BitbucketCommit, BitbucketRepo, BitbucketUser, BitbucketWorkspace, Page};
