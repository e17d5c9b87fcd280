//! Forgefolio - a multi-forge profile aggregator.
//!
//! This library resolves a single username against three independent code
//! hosting platforms (GitHub, GitLab, Bitbucket) and normalizes each
//! platform's answer into a common shape: a profile, up to five repositories,
//! and up to five recent commit messages per repository.
//!
//! # Features
//!
//! - `github`, `gitlab`, `bitbucket` - Enable the corresponding provider
//!   module. All three are enabled by default; the [`aggregate`] module
//!   requires all of them.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use forgefolio::aggregate::Aggregator;
//!
//! let aggregator = Aggregator::new(Duration::from_secs(10))?;
//! let result = aggregator.aggregate("octocat").await;
//!
//! // The wire shape is a fixed three-element array: [github, gitlab, bitbucket]
//! let body = serde_json::to_string(&result)?;
//! ```

pub mod http;
pub mod platform;

#[cfg(feature = "github")]
pub mod github;

#[cfg(feature = "gitlab")]
pub mod gitlab;

#[cfg(feature = "bitbucket")]
pub mod bitbucket;

#[cfg(all(feature = "github", feature = "gitlab", feature = "bitbucket"))]
pub mod aggregate;

pub use http::{HttpError, HttpResponse, HttpTransport};
pub use platform::{
    MAX_COMMITS, MAX_REPOS, Outcome, Profile, Provider, ProviderError, RepoListing, RepoSummary,
    Vcs, null_to_empty, run_provider,
};

#[cfg(all(feature = "github", feature = "gitlab", feature = "bitbucket"))]
pub use aggregate::{AggregateResult, Aggregator};
