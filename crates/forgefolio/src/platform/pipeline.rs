//! Shared three-stage pipeline driver.
//!
//! All providers run the same sequence: resolve the profile, list
//! repositories, then fetch commit messages one repository at a time. The
//! driver owns stage ordering, truncation, and failure degradation so the
//! three provider implementations cannot drift apart on those rules.

use tracing::{debug, warn};

use super::errors::short_error_message;
use super::types::{Outcome, Provider, RepoSummary};

/// Maximum repositories returned per provider.
pub const MAX_REPOS: usize = 5;

/// Maximum commit messages returned per repository.
pub const MAX_COMMITS: usize = 5;

/// Run the full pipeline for one provider.
///
/// Stages run strictly sequentially, including the per-repository commit
/// fetches. Failure handling is per stage:
///
/// - identity resolution: not-found maps to [`Outcome::NotFound`], any other
///   error to [`Outcome::Failed`] (both serialize as `[]`);
/// - repository listing: a failure degrades to the profile with an empty
///   repository list instead of discarding the profile;
/// - commit fetch: a failure empties only that repository's messages.
pub async fn run_provider<P: Provider + ?Sized>(provider: &P, username: &str) -> Outcome {
    let vcs = provider.vcs().as_str();

    let profile = match provider.fetch_profile(username).await {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            debug!(vcs, username, "user not found");
            return Outcome::NotFound;
        }
        Err(err) => {
            warn!(vcs, username, error = %short_error_message(&err), "profile lookup failed");
            return Outcome::Failed(err);
        }
    };

    let mut listings = match provider.list_repos(&profile).await {
        Ok(listings) => listings,
        Err(err) => {
            warn!(vcs, username, error = %short_error_message(&err), "repository listing failed");
            return Outcome::Found {
                profile,
                repos: Vec::new(),
            };
        }
    };
    listings.truncate(MAX_REPOS);

    let mut repos: Vec<RepoSummary> = Vec::with_capacity(listings.len());
    for listing in listings {
        let mut messages = match provider.list_commit_messages(&listing).await {
            Ok(messages) => messages,
            Err(err) => {
                warn!(
                    vcs,
                    repo = %listing.name,
                    error = %short_error_message(&err),
                    "commit fetch failed"
                );
                Vec::new()
            }
        };
        messages.truncate(MAX_COMMITS);
        repos.push(listing.into_summary(messages));
    }

    Outcome::Found { profile, repos }
}
