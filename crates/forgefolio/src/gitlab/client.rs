//! GitLab API client.

use std::sync::Arc;

use async_trait::async_trait;

use super::convert::{to_listing, to_profile};
use super::error::GitLabError;
use super::types::{GitLabCommit, GitLabProject, GitLabUser, GitLabUserRef};
use crate::http::HttpTransport;
use crate::platform::{Profile, Provider, RepoListing, Result, Vcs};

/// Default GitLab host.
pub const GITLAB_HOST: &str = "https://gitlab.com";

/// GitLab API client implementing the [`Provider`] trait.
#[derive(Clone)]
pub struct GitLabClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
}

impl GitLabClient {
    /// Create a client against gitlab.com.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_host(GITLAB_HOST, transport)
    }

    /// Create a client against a specific host (self-hosted GitLab, tests).
    pub fn with_host(host: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self { transport, host }
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// GET a URL and deserialize the JSON response body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
    ) -> std::result::Result<T, GitLabError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body).to_string();
            return Err(GitLabError::from_status(response.status, &body, resource));
        }

        serde_json::from_slice(&response.body).map_err(|e| GitLabError::Deserialize(e.to_string()))
    }

    /// Resolve a username to its numeric user id.
    ///
    /// An empty search result means the user does not exist on this host.
    async fn resolve_user_id(&self, username: &str) -> std::result::Result<u64, GitLabError> {
        let url = format!("{}/api/v4/users?username={}", self.host, username);
        let matches: Vec<GitLabUserRef> = self.get_json(&url, "user search").await?;
        matches
            .first()
            .map(|user| user.id)
            .ok_or_else(|| GitLabError::UserNotFound(username.to_string()))
    }
}

#[async_trait]
impl Provider for GitLabClient {
    fn vcs(&self) -> Vcs {
        Vcs::GitLab
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let id = self.resolve_user_id(username).await?;

        let url = format!("{}/api/v4/users/{}", self.host, id);
        let user: GitLabUser = self.get_json(&url, &format!("user: {id}")).await?;
        Ok(to_profile(user, &self.host, id))
    }

    async fn list_repos(&self, profile: &Profile) -> Result<Vec<RepoListing>> {
        let projects: Vec<GitLabProject> = self
            .get_json(&profile.repolink, "project listing")
            .await?;
        Ok(projects
            .into_iter()
            .map(|p| to_listing(p, &self.host))
            .collect())
    }

    async fn list_commit_messages(&self, repo: &RepoListing) -> Result<Vec<String>> {
        let commits: Vec<GitLabCommit> = self
            .get_json(&repo.commits_url, &format!("commits: {}", repo.name))
            .await?;
        Ok(commits.into_iter().map(|c| c.title).collect())
    }
}
