//! Mapping from Bitbucket API types into the normalized model.

use super::types::{BitbucketRepo, BitbucketUser};
use crate::platform::{Profile, RepoListing, Vcs, string_or_empty};

/// Convert a Bitbucket user response to a normalized profile.
///
/// The bio is fixed to `""` - the 2.0 API does not expose one.
pub fn to_profile(user: BitbucketUser) -> Profile {
    Profile {
        username: string_or_empty(user.display_name),
        avatar: string_or_empty(user.links.avatar.map(|l| l.href)),
        bio: String::new(),
        userpage: string_or_empty(user.links.html.map(|l| l.href)),
        repolink: string_or_empty(user.links.repositories.map(|l| l.href)),
        vcs: Vcs::Bitbucket,
    }
}

/// Convert one repository listing entry.
///
/// The commits endpoint is taken from the repository's own links, not
/// synthesized. A repository without one gets an empty URL, which fails the
/// commit stage for that repository alone.
pub fn to_listing(repo: BitbucketRepo) -> RepoListing {
    RepoListing {
        name: repo.name,
        description: repo.description,
        created_at: string_or_empty(repo.created_on),
        last_activity_at: string_or_empty(repo.updated_on),
        commits_url: string_or_empty(repo.links.commits.map(|l| l.href)),
    }
}
