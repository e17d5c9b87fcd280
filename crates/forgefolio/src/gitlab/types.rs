//! GitLab API data types.

use serde::Deserialize;

/// One entry from the username search (`GET /api/v4/users?username=...`).
///
/// Only the id matters; it keys every subsequent call.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabUserRef {
    pub id: u64,
}

/// GitLab user profile - fields we need from `GET /api/v4/users/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabUser {
    /// Display name.
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// User bio.
    pub bio: Option<String>,
    /// Web profile page.
    pub web_url: Option<String>,
}

/// One project from the user's project listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabProject {
    /// Project id, used to synthesize the commits endpoint.
    pub id: u64,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: Option<String>,
    /// When the project was created.
    pub created_at: Option<String>,
    /// When the project was last active.
    pub last_activity_at: Option<String>,
}

/// One entry from a project's commit listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabCommit {
    /// First line of the commit message. The full `message` field exists in
    /// the response but is not what this pipeline reports.
    pub title: String,
}
