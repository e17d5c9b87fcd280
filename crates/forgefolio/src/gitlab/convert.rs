//! Mapping from GitLab API types into the normalized model.

use super::types::{GitLabProject, GitLabUser};
use crate::platform::{Profile, RepoListing, Vcs, string_or_empty};

/// Convert a GitLab user response to a normalized profile.
///
/// `repolink` is synthesized from the user id - the v4 user response does
/// not carry a projects URL.
pub fn to_profile(user: GitLabUser, host: &str, id: u64) -> Profile {
    Profile {
        username: string_or_empty(user.name),
        avatar: string_or_empty(user.avatar_url),
        bio: string_or_empty(user.bio),
        userpage: string_or_empty(user.web_url),
        repolink: format!("{host}/api/v4/users/{id}/projects"),
        vcs: Vcs::GitLab,
    }
}

/// Convert one project listing entry.
///
/// The commits endpoint is synthesized from the project id.
pub fn to_listing(project: GitLabProject, host: &str) -> RepoListing {
    let commits_url = format!("{host}/api/v4/projects/{}/repository/commits", project.id);
    RepoListing {
        name: project.name,
        description: project.description,
        created_at: string_or_empty(project.created_at),
        last_activity_at: string_or_empty(project.last_activity_at),
        commits_url,
    }
}
