//! Bitbucket API data types.

use serde::Deserialize;

/// A paginated Bitbucket listing. Entries live under `values`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub values: Vec<T>,
}

/// Workspace lookup response - only the uuid matters.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketWorkspace {
    pub uuid: String,
}

/// A single hypermedia link.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Bitbucket user profile - fields we need from `GET /2.0/users/{uuid}`.
///
/// There is no bio field; the normalized profile carries `""` for it.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketUser {
    /// Display name.
    pub display_name: Option<String>,
    #[serde(default)]
    pub links: UserLinks,
}

/// Links attached to a user response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLinks {
    pub avatar: Option<Link>,
    pub html: Option<Link>,
    pub repositories: Option<Link>,
}

/// One repository from the workspace's repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketRepo {
    /// Repository name.
    pub name: String,
    /// Repository description.
    pub description: Option<String>,
    /// When the repository was created.
    pub created_on: Option<String>,
    /// When the repository was last updated.
    pub updated_on: Option<String>,
    #[serde(default)]
    pub links: RepoLinks,
}

/// Links attached to a repository response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoLinks {
    pub commits: Option<Link>,
}

/// One entry from a repository's commit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketCommit {
    /// Full commit message.
    pub message: String,
}
