//! Platform-agnostic types for forge profile aggregation.
//!
//! This module defines the [`Provider`] trait that gives the three hosting
//! platforms (GitHub, GitLab, Bitbucket) a unified interface, the normalized
//! data model they all map into, and the shared three-stage pipeline driver.
//!
//! # Example
//!
//! ```ignore
//! use forgefolio::platform::{Provider, run_provider};
//!
//! async fn lookup<P: Provider>(provider: &P, username: &str) {
//!     let outcome = run_provider(provider, username).await;
//!     println!("{}", serde_json::to_string(&outcome).unwrap());
//! }
//! ```

mod convert;
mod errors;
mod pipeline;
mod types;

pub use convert::{null_to_empty, string_or_empty};
pub use errors::{ProviderError, Result, short_error_message};
pub use pipeline::{MAX_COMMITS, MAX_REPOS, run_provider};
pub use types::{Outcome, Profile, Provider, RepoListing, RepoSummary, Vcs};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(vcs: Vcs) -> Profile {
        Profile {
            username: "Ada Lovelace".to_string(),
            avatar: "https://example.com/avatar.png".to_string(),
            bio: String::new(),
            userpage: "https://example.com/ada".to_string(),
            repolink: "https://example.com/ada/repos".to_string(),
            vcs,
        }
    }

    #[test]
    fn provider_error_constructors_render_expected_messages() {
        let err = ProviderError::api(502, "bad gateway");
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));

        let err = ProviderError::not_found("user: ada");
        assert!(err.to_string().contains("user: ada"));

        let err = ProviderError::network("connection refused");
        assert!(err.to_string().contains("connection refused"));

        let err = ProviderError::timeout("deadline elapsed");
        assert!(err.to_string().contains("deadline elapsed"));

        let err = ProviderError::deserialize("missing field `uuid`");
        assert!(err.to_string().contains("missing field `uuid`"));
    }

    #[test]
    fn provider_error_is_not_found() {
        assert!(ProviderError::not_found("x").is_not_found());
        assert!(!ProviderError::api(500, "x").is_not_found());
        assert!(!ProviderError::timeout("x").is_not_found());
    }

    #[test]
    fn vcs_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Vcs::GitHub).unwrap(), "\"github\"");
        assert_eq!(serde_json::to_string(&Vcs::GitLab).unwrap(), "\"gitlab\"");
        assert_eq!(
            serde_json::to_string(&Vcs::Bitbucket).unwrap(),
            "\"bitbucket\""
        );
    }

    #[test]
    fn profile_serializes_with_legacy_field_names() {
        let value = serde_json::to_value(sample_profile(Vcs::GitHub)).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["username", "avatar", "bio", "userpage", "repolink", "vcs"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["vcs"], "github");
    }

    #[test]
    fn repo_summary_serializes_camel_case_and_keeps_null_description() {
        let summary = RepoSummary {
            repo_name: "engine".to_string(),
            repo_description: None,
            creation_date: "2020-01-01T00:00:00Z".to_string(),
            last_commit_date: "2024-06-01T00:00:00Z".to_string(),
            commit_descriptions: vec!["initial".to_string()],
        };
        let value = serde_json::to_value(&summary).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "repoName",
            "repoDescription",
            "creationDate",
            "lastCommitDate",
            "commitDescriptions",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        // Unlike profile fields, a missing description is not flattened to "".
        assert!(obj["repoDescription"].is_null());
    }

    #[test]
    fn found_outcome_serializes_as_profile_repos_pair() {
        let outcome = Outcome::Found {
            profile: sample_profile(Vcs::GitLab),
            repos: Vec::new(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["vcs"], "gitlab");
        assert_eq!(arr[1], serde_json::json!([]));
    }

    #[test]
    fn not_found_and_failed_outcomes_serialize_as_empty_arrays() {
        let not_found = serde_json::to_value(&Outcome::NotFound).unwrap();
        assert_eq!(not_found, serde_json::json!([]));

        let failed =
            serde_json::to_value(&Outcome::Failed(ProviderError::api(500, "boom"))).unwrap();
        assert_eq!(failed, serde_json::json!([]));
    }

    #[test]
    fn outcome_is_empty_reflects_wire_shape() {
        assert!(Outcome::NotFound.is_empty());
        assert!(Outcome::Failed(ProviderError::network("down")).is_empty());
        assert!(
            !Outcome::Found {
                profile: sample_profile(Vcs::Bitbucket),
                repos: Vec::new(),
            }
            .is_empty()
        );
    }

    #[test]
    fn short_error_message_takes_first_line() {
        let err = std::io::Error::other("first line\nsecond line");
        assert_eq!(short_error_message(&err), "first line");
    }
}
