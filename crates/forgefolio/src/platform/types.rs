use async_trait::async_trait;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use super::errors::{ProviderError, Result};

/// The supported hosting platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vcs {
    GitHub,
    GitLab,
    Bitbucket,
}

impl Vcs {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Vcs::GitHub => "github",
            Vcs::GitLab => "gitlab",
            Vcs::Bitbucket => "bitbucket",
        }
    }
}

/// A normalized user profile from any platform.
///
/// Every string field defaults to `""` when the upstream value is absent or
/// null, so downstream consumers never see nulls here. `bio` is always empty
/// for Bitbucket - that API does not expose one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name as reported by the platform.
    pub username: String,
    /// Avatar image URL.
    pub avatar: String,
    /// User bio/description.
    pub bio: String,
    /// URL of the user's profile page.
    pub userpage: String,
    /// API endpoint listing the user's repositories.
    pub repolink: String,
    /// Which platform this profile came from.
    pub vcs: Vcs,
}

/// A repository from the listing stage, before commit messages are attached.
///
/// Timestamps are passed through verbatim as strings; nothing in the
/// pipeline parses or reformats them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoListing {
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub last_activity_at: String,
    /// Fully resolved commits endpoint for this repository.
    pub commits_url: String,
}

impl RepoListing {
    /// Attach commit messages, producing the outward repository shape.
    #[must_use]
    pub fn into_summary(self, commit_descriptions: Vec<String>) -> RepoSummary {
        RepoSummary {
            repo_name: self.name,
            repo_description: self.description,
            creation_date: self.created_at,
            last_commit_date: self.last_activity_at,
            commit_descriptions,
        }
    }
}

/// The outward repository shape.
///
/// `repo_description` deliberately stays nullable on the wire; only profile
/// fields are flattened to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub repo_name: String,
    pub repo_description: Option<String>,
    pub creation_date: String,
    pub last_commit_date: String,
    /// Most recent commit messages, source order, at most five.
    pub commit_descriptions: Vec<String>,
}

/// Per-provider result of a full pipeline run.
///
/// `NotFound` and `Failed` are distinguishable in-process (and in logs), but
/// both serialize as `[]` - the wire contract does not tell "user unknown"
/// apart from "platform unreachable".
#[derive(Debug)]
pub enum Outcome {
    /// The user exists; repositories may be empty if the listing stage
    /// degraded after a successful profile lookup.
    Found {
        profile: Profile,
        repos: Vec<RepoSummary>,
    },
    /// The platform reports no such user.
    NotFound,
    /// Identity resolution failed for operational reasons.
    Failed(ProviderError),
}

impl Outcome {
    /// Whether this outcome serializes as an empty array.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !matches!(self, Outcome::Found { .. })
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Outcome::Found { profile, repos } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(profile)?;
                seq.serialize_element(repos)?;
                seq.end()
            }
            Outcome::NotFound | Outcome::Failed(_) => {
                serializer.serialize_seq(Some(0))?.end()
            }
        }
    }
}

/// Trait for hosting platform providers.
///
/// Each provider implements the same three-stage lookup over the shared HTTP
/// transport: resolve a username to a profile, list repositories, and fetch
/// recent commit messages for one repository. The shared driver
/// [`run_provider`](super::run_provider) sequences the stages and enforces
/// the truncation invariants, so implementations only encode their
/// platform's field mappings and endpoint synthesis.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Which platform this provider talks to.
    fn vcs(&self) -> Vcs;

    /// Resolve a username to a normalized profile.
    ///
    /// Platforms that key profiles on an internal identifier (GitLab user
    /// id, Bitbucket workspace UUID) perform the intermediate lookup here.
    async fn fetch_profile(&self, username: &str) -> Result<Profile>;

    /// List the user's repositories (first page, unbounded).
    async fn list_repos(&self, profile: &Profile) -> Result<Vec<RepoListing>>;

    /// Recent commit messages for one repository (first page, unbounded).
    async fn list_commit_messages(&self, repo: &RepoListing) -> Result<Vec<String>>;
}
