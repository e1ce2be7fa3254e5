use chrono::Utc;

use sanctuary_domain::id::UserId;
use sanctuary_domain::journey::JourneyStage;
use sanctuary_domain::pagination::PageRequest;

use crate::domain::repository::{PostRepository, ProfileRepository};
use crate::domain::types::{DASHBOARD_RECENT_POSTS, PostWithStats, Profile, ProfileUpdate};
use crate::error::PlatformError;
use crate::usecase::content::optional_text;

// ── GetOwnProfile ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct OwnProfile {
    pub profile: Profile,
    pub posts_count: u64,
}

pub struct GetOwnProfileUseCase<P: ProfileRepository, R: PostRepository> {
    pub profiles: P,
    pub posts: R,
}

impl<P: ProfileRepository, R: PostRepository> GetOwnProfileUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId) -> Result<OwnProfile, PlatformError> {
        let profile = self
            .profiles
            .find(user_id)
            .await?
            .ok_or(PlatformError::ProfileNotFound)?;
        let posts_count = self.posts.count_by_author(user_id).await?;
        Ok(OwnProfile {
            profile,
            posts_count,
        })
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub journey_stage: Option<String>,
    pub location: Option<String>,
    pub interests: Option<String>,
}

pub struct UpdateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateProfileUseCase<P> {
    pub async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<Profile, PlatformError> {
        let journey_stage = optional_text(input.journey_stage)
            .map(|s| s.parse::<JourneyStage>())
            .transpose()?;
        let update = ProfileUpdate {
            display_name: optional_text(input.display_name),
            bio: optional_text(input.bio),
            journey_stage,
            location: optional_text(input.location),
            interests: optional_text(input.interests),
        };
        if !self.profiles.update(user_id, &update, Utc::now()).await? {
            return Err(PlatformError::ProfileNotFound);
        }
        self.profiles
            .find(user_id)
            .await?
            .ok_or(PlatformError::ProfileNotFound)
    }
}

// ── MemberDashboard ──────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct MemberDashboard {
    /// `None` until the sign-up hook has created the profile row.
    pub profile: Option<Profile>,
    pub recent_posts: Vec<PostWithStats>,
}

pub struct MemberDashboardUseCase<P: ProfileRepository, R: PostRepository> {
    pub profiles: P,
    pub posts: R,
}

impl<P: ProfileRepository, R: PostRepository> MemberDashboardUseCase<P, R> {
    pub async fn execute(&self, user_id: UserId) -> Result<MemberDashboard, PlatformError> {
        let profile = self.profiles.find(user_id).await?;
        let recent_posts = self
            .posts
            .feed(PageRequest {
                per_page: DASHBOARD_RECENT_POSTS,
                page: 1,
            })
            .await?;
        Ok(MemberDashboard {
            profile,
            recent_posts,
        })
    }
}
