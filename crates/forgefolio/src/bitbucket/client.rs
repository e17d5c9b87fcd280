//! Bitbucket API client.

use std::sync::Arc;

use async_trait::async_trait;

use super::convert::{to_listing, to_profile};
use super::error::BitbucketError;
use super::types::{BitbucketCommit, BitbucketRepo, BitbucketUser, BitbucketWorkspace, Page};
use crate::http::HttpTransport;
use crate::platform::{Profile, Provider, RepoListing, Result, Vcs};

/// Default Bitbucket API host.
pub const BITBUCKET_API_HOST: &str = "https://api.bitbucket.org";

/// Bitbucket API client implementing the [`Provider`] trait.
#[derive(Clone)]
pub struct BitbucketClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
}

impl BitbucketClient {
    /// Create a client against the public Bitbucket API.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_host(BITBUCKET_API_HOST, transport)
    }

    /// Create a client against a specific host (tests).
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
    ) -> std::result::Result<T, BitbucketError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body).to_string();
            return Err(BitbucketError::from_status(response.status, &body, resource));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| BitbucketError::Deserialize(e.to_string()))
    }

    /// Resolve a username (workspace slug) to the workspace UUID.
    async fn resolve_workspace_uuid(
        &self,
        username: &str,
    ) -> std::result::Result<String, BitbucketError> {
        let url = format!("{}/2.0/workspaces/{}", self.host, username);
        let workspace: BitbucketWorkspace = self
            .get_json(&url, &format!("workspace: {username}"))
            .await?;
        Ok(workspace.uuid)
    }
}

#[async_trait]
impl Provider for BitbucketClient {
    fn vcs(&self) -> Vcs {
        Vcs::Bitbucket
    }

    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        let uuid = self.resolve_workspace_uuid(username).await?;

        let url = format!("{}/2.0/users/{}", self.host, uuid);
        let user: BitbucketUser = self.get_json(&url, &format!("user: {uuid}")).await?;
        Ok(to_profile(user))
    }

    async fn list_repos(&self, profile: &Profile) -> Result<Vec<RepoListing>> {
        let page: Page<BitbucketRepo> = self
            .get_json(&profile.repolink, "repository listing")
            .await?;
        Ok(page.values.into_iter().map(to_listing).collect())
    }

    async fn list_commit_messages(&self, repo: &RepoListing) -> Result<Vec<String>> {
        let page: Page<BitbucketCommit> = self
            .get_json(&repo.commits_url, &format!("commits: {}", repo.name))
            .await?;
        Ok(page.values.into_iter().map(|c| c.message).collect())
    }
}
