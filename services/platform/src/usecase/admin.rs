use std::collections::HashMap;

use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::id::UserId;

use crate::domain::repository::{ContentStore, ProfileRepository, RoleDirectory};
use crate::domain::types::{ContentCounts, Profile, StoredGrant};
use crate::error::PlatformError;

// ── AdminDashboard ───────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct AdminDashboard {
    pub display_name: Option<String>,
    pub counts: ContentCounts,
}

pub struct AdminDashboardUseCase<P, R, T, B>
where
    P: ProfileRepository,
    R: ContentStore,
    T: ContentStore,
    B: ContentStore,
{
    pub profiles: P,
    pub resources: R,
    pub testimonials: T,
    pub bible_studies: B,
}

impl<P, R, T, B> AdminDashboardUseCase<P, R, T, B>
where
    P: ProfileRepository,
    R: ContentStore,
    T: ContentStore,
    B: ContentStore,
{
    pub async fn execute(&self, user_id: UserId) -> Result<AdminDashboard, PlatformError> {
        let display_name = self
            .profiles
            .find(user_id)
            .await?
            .and_then(|p| p.display_name);
        let counts = ContentCounts {
            resources: self.resources.count().await?,
            testimonials: self.testimonials.count().await?,
            bible_studies: self.bible_studies.count().await?,
            profiles: self.profiles.count().await?,
        };
        Ok(AdminDashboard {
            display_name,
            counts,
        })
    }
}

// ── UsersAndRoles ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct MemberWithRole {
    pub profile: Profile,
    pub grant: Option<StoredGrant>,
}

#[derive(Debug)]
pub struct UsersAndRoles {
    pub members: Vec<MemberWithRole>,
    /// Number of grants per role, in rank order.
    pub role_totals: Vec<(AdminRole, usize)>,
}

/// Read-only overview of members and their grants. Grants are managed
/// directly in the database.
pub struct UsersAndRolesUseCase<P: ProfileRepository, D: RoleDirectory> {
    pub profiles: P,
    pub roles: D,
}

impl<P: ProfileRepository, D: RoleDirectory> UsersAndRolesUseCase<P, D> {
    pub async fn execute(&self) -> Result<UsersAndRoles, PlatformError> {
        let profiles = self.profiles.list_newest_first().await?;
        let grants = self.roles.list_grants().await?;

        let role_totals = AdminRole::ALL
            .into_iter()
            .map(|role| (role, grants.iter().filter(|g| g.role == role).count()))
            .collect();

        // Highest grant wins if the one-grant-per-user rule was broken.
        let mut by_user: HashMap<UserId, StoredGrant> = HashMap::new();
        for grant in grants {
            match by_user.get(&grant.user_id) {
                Some(existing) if existing.role >= grant.role => {}
                _ => {
                    by_user.insert(grant.user_id, grant);
                }
            }
        }

        let members = profiles
            .into_iter()
            .map(|profile| MemberWithRole {
                grant: by_user.remove(&profile.id),
                profile,
            })
            .collect();

        Ok(UsersAndRoles {
            members,
            role_totals,
        })
    }
}
