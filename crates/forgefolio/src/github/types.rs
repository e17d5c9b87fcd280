//! GitHub API data types.

use serde::Deserialize;

/// GitHub user profile - fields we need from `GET /users/{username}`.
///
/// Everything is optional: GitHub returns explicit nulls for unset profile
/// fields, and both null and absence normalize to `""` downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    /// Display name (not the login).
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile bio.
    pub bio: Option<String>,
    /// Web profile page.
    pub html_url: Option<String>,
    /// API endpoint listing the user's repositories.
    pub repos_url: Option<String>,
}

/// One repository from the user's repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    /// Repository name.
    pub name: String,
    /// Repository description.
    pub description: Option<String>,
    /// When the repository was created.
    pub created_at: Option<String>,
    /// When code was last pushed.
    pub pushed_at: Option<String>,
    /// Commits endpoint as a URI template ending in `{/sha}`.
    pub commits_url: String,
}

/// One entry from a repository's commit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommit {
    pub commit: GitHubCommitDetail,
}

/// The nested git-level commit data.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommitDetail {
    /// Full commit message.
    pub message: String,
}
