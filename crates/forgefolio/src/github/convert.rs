//! Mapping from GitHub API types into the normalized model.

use super::types::{GitHubRepo, GitHubUser};
use crate::platform::{Profile, RepoListing, Vcs, string_or_empty};

/// Convert a GitHub user response to a normalized profile.
pub fn to_profile(user: GitHubUser) -> Profile {
    Profile {
        username: string_or_empty(user.name),
        avatar: string_or_empty(user.avatar_url),
        bio: string_or_empty(user.bio),
        userpage: string_or_empty(user.html_url),
        repolink: string_or_empty(user.repos_url),
        vcs: Vcs::GitHub,
    }
}

/// Convert one repository listing entry.
pub fn to_listing(repo: GitHubRepo) -> RepoListing {
    let commits_url = commits_endpoint(&repo.commits_url);
    RepoListing {
        name: repo.name,
        description: repo.description,
        created_at: string_or_empty(repo.created_at),
        last_activity_at: string_or_empty(repo.pushed_at),
        commits_url,
    }
}

/// Derive the plain commits endpoint from the listing's URI template.
///
/// GitHub returns `.../commits{/sha}`; dropping the placeholder yields the
/// listing endpoint for the default branch.
fn commits_endpoint(commits_url: &str) -> String {
    commits_url
        .strip_suffix("{/sha}")
        .unwrap_or(commits_url)
        .to_string()
}
