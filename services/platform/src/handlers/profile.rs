use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use sanctuary_auth_types::session::{MaybeSession, RequireSession};

use crate::error::PlatformError;
use crate::handlers::page::{PageError, admit_member};
use crate::handlers::view::{PostResponse, ProfileResponse};
use crate::state::AppState;
use crate::usecase::profile::{
    GetOwnProfileUseCase, MemberDashboardUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

// ── GET /profile ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OwnProfileResponse {
    pub email: Option<String>,
    pub profile: ProfileResponse,
    pub posts_count: u64,
}

pub async fn own_profile(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<OwnProfileResponse>, PageError> {
    let session = admit_member(session)?;
    let uc = GetOwnProfileUseCase {
        profiles: state.profile_repo(),
        posts: state.post_repo(),
    };
    let own = uc.execute(session.user_id).await?;
    Ok(Json(OwnProfileResponse {
        email: session.email,
        profile: own.profile.into(),
        posts_count: own.posts_count,
    }))
}

// ── PUT /profile ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub journey_stage: Option<String>,
    pub location: Option<String>,
    pub interests: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, PlatformError> {
    let uc = UpdateProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = uc
        .execute(
            session.user_id,
            UpdateProfileInput {
                display_name: body.display_name,
                bio: body.bio,
                journey_stage: body.journey_stage,
                location: body.location,
                interests: body.interests,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── GET /dashboard ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MemberDashboardResponse {
    pub email: Option<String>,
    pub profile: Option<ProfileResponse>,
    pub recent_posts: Vec<PostResponse>,
}

pub async fn member_dashboard(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<MemberDashboardResponse>, PageError> {
    let session = admit_member(session)?;
    let uc = MemberDashboardUseCase {
        profiles: state.profile_repo(),
        posts: state.post_repo(),
    };
    let dashboard = uc.execute(session.user_id).await?;
    Ok(Json(MemberDashboardResponse {
        email: session.email,
        profile: dashboard.profile.map(Into::into),
        recent_posts: dashboard.recent_posts.into_iter().map(Into::into).collect(),
    }))
}
