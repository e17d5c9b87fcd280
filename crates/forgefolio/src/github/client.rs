//! GitHub API client.

use std::sync::Arc;

use async_trait::async_trait;

use super::convert::{to_listing, to_profile};
use super::error::GitHubError;
use super::types::{GitHubCommit, GitHubRepo, GitHubUser};
use crate::http::HttpTransport;
use crate::platform::{Profile, Provider, RepoListing, Result, Vcs};

/// Default GitHub API host.
pub const GITHUB_API_HOST: &str = "https://api.github.com";

/// GitHub API client implementing the [`Provider`] trait.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_host(GITHUB_API_HOST, transport)
    }

    /// Create a client against a specific host (GitHub Enterprise, tests).
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
    ) -> std::result::Result<T, GitHubError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body).to_string();
            return Err(GitHubError::from_status(response.status, &body, resource));
        }

        serde_json::from_slice(&response.body).map_err(|e| GitHubError::Deserialize(e.to_string()))
    }
}

#[async_trait]
impl Provider for GitHubClient {
    fn vcs(&self) -> Vcs {
        Vcs::GitHub
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let url = format!("{}/users/{}", self.host, username);
        let user: GitHubUser = self
            .get_json(&url, &format!("user: {username}"))
            .await?;
        Ok(to_profile(user))
    }

    async fn list_repos(&self, profile: &Profile) -> Result<Vec<RepoListing>> {
        // The listing endpoint comes from the profile response, not from a
        // synthesized path.
        let repos: Vec<GitHubRepo> = self
            .get_json(&profile.repolink, "repository listing")
            .await?;
        Ok(repos.into_iter().map(to_listing).collect())
    }

    async fn list_commit_messages(&self, repo: &RepoListing) -> Result<Vec<String>> {
        let commits: Vec<GitHubCommit> = self
            .get_json(&repo.commits_url, &format!("commits: {}", repo.name))
            .await?;
        Ok(commits.into_iter().map(|c| c.commit.message).collect())
    }
}
