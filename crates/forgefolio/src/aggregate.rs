//! Sequential aggregation across the three supported platforms.
//!
//! One [`Aggregator`] owns a client per platform, all sharing a single HTTP
//! transport (one connection pool, one timeout policy). A query runs the
//! GitHub, GitLab, and Bitbucket pipelines strictly one after another and
//! returns the fixed-order result; there is no fan-out and no cross-provider
//! merging.

use std::sync::Arc;
use std::time::Duration;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::bitbucket::BitbucketClient;
use crate::github::GitHubClient;
use crate::gitlab::GitLabClient;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpError, HttpTransport};
use crate::platform::{Outcome, run_provider};

/// Per-provider outcomes in fixed order: GitHub, GitLab, Bitbucket.
///
/// Serializes as a three-element array; each element is either
/// `[profile, repos]` or `[]`.
#[derive(Debug)]
pub struct AggregateResult {
    pub github: Outcome,
    pub gitlab: Outcome,
    pub bitbucket: Outcome,
}

impl AggregateResult {
    /// The outcomes in wire order.
    #[must_use]
    pub fn outcomes(&self) -> [&Outcome; 3] {
        [&self.github, &self.gitlab, &self.bitbucket]
    }
}

impl Serialize for AggregateResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for outcome in self.outcomes() {
            seq.serialize_element(outcome)?;
        }
        seq.end()
    }
}

/// Aggregates profile and repository metadata across the three platforms.
pub struct Aggregator {
    github: GitHubClient,
    gitlab: GitLabClient,
    bitbucket: BitbucketClient,
}

impl Aggregator {
    /// Create an aggregator against the public APIs with a bounded
    /// per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::with_timeout(timeout)?);
        Ok(Self::with_transport(transport))
    }

    /// Create an aggregator over an existing transport, using the default
    /// public hosts.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            github: GitHubClient::new(Arc::clone(&transport)),
            gitlab: GitLabClient::new(Arc::clone(&transport)),
            bitbucket: BitbucketClient::new(transport),
        }
    }

    /// Create an aggregator from preconfigured clients (non-default hosts).
    pub fn with_clients(
        github: GitHubClient,
        gitlab: GitLabClient,
        bitbucket: BitbucketClient,
    ) -> Self {
        Self {
            github,
            gitlab,
            bitbucket,
        }
    }

    /// Look up a username on all three platforms, one after another.
    pub async fn aggregate(&self, username: &str) -> AggregateResult {
        debug!(username, "aggregating");

        let github = run_provider(&self.github, username).await;
        let gitlab = run_provider(&self.gitlab, username).await;
        let bitbucket = run_provider(&self.bitbucket, username).await;

        AggregateResult {
            github,
            gitlab,
            bitbucket,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::http::MockTransport;

    fn aggregator(transport: &MockTransport) -> Aggregator {
        let transport: Arc<dyn HttpTransport> = Arc::new(transport.clone());
        Aggregator::with_clients(
            GitHubClient::with_host("https://gh.test", Arc::clone(&transport)),
            GitLabClient::with_host("https://gl.test", Arc::clone(&transport)),
            BitbucketClient::with_host("https://bb.test", transport),
        )
    }

    #[tokio::test]
    async fn unknown_user_everywhere_serializes_as_three_empty_arrays() {
        let transport = MockTransport::new();
        transport.push_response("https://gh.test/users/ghost", 404, b"{}".to_vec());
        transport.push_json("https://gl.test/api/v4/users?username=ghost", &json!([]));
        transport.push_response("https://bb.test/2.0/workspaces/ghost", 404, b"{}".to_vec());

        let result = aggregator(&transport).aggregate("ghost").await;
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            "[[],[],[]]"
        );
    }

    #[tokio::test]
    async fn providers_run_in_fixed_order() {
        let transport = MockTransport::new();
        transport.push_response("https://gh.test/users/ghost", 404, b"{}".to_vec());
        transport.push_json("https://gl.test/api/v4/users?username=ghost", &json!([]));
        transport.push_response("https://bb.test/2.0/workspaces/ghost", 404, b"{}".to_vec());

        aggregator(&transport).aggregate("ghost").await;
        assert_eq!(
            transport.requests(),
            vec![
                "https://gh.test/users/ghost".to_string(),
                "https://gl.test/api/v4/users?username=ghost".to_string(),
                "https://bb.test/2.0/workspaces/ghost".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn one_platform_down_does_not_affect_the_others() {
        let transport = MockTransport::new();
        // GitHub responds, GitLab is down, Bitbucket has no such workspace.
        transport.push_json(
            "https://gh.test/users/ada",
            &json!({
                "name": "Ada Lovelace",
                "avatar_url": "https://gh.test/a.png",
                "bio": null,
                "html_url": "https://gh.test/ada",
                "repos_url": "https://gh.test/users/ada/repos"
            }),
        );
        transport.push_json("https://gh.test/users/ada/repos", &json!([]));
        transport.push_response(
            "https://gl.test/api/v4/users?username=ada",
            503,
            b"unavailable".to_vec(),
        );
        transport.push_response("https://bb.test/2.0/workspaces/ada", 404, b"{}".to_vec());

        let result = aggregator(&transport).aggregate("ada").await;
        assert!(!result.github.is_empty());
        assert!(matches!(result.gitlab, Outcome::Failed(_)));
        assert!(matches!(result.bitbucket, Outcome::NotFound));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value[0][0]["username"], "Ada Lovelace");
        assert_eq!(value[1], json!([]));
        assert_eq!(value[2], json!([]));
    }
}

