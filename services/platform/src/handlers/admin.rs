//! Admin pages. The dashboard needs any role grant, the content list pages
//! need `content_admin` and the users page needs `super_admin`.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use sanctuary_auth_types::session::MaybeSession;
use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::id::UserId;

use crate::domain::types::{AdminGrant, ContentCounts};
use crate::handlers::page::{PageError, admit_admin};
use crate::handlers::view::{
    AdminRow, BibleStudyResponse, ProfileResponse, ResourceResponse, SectionResponse,
    TestimonialResponse,
};
use crate::state::AppState;
use crate::usecase::admin::{AdminDashboardUseCase, UsersAndRolesUseCase};
use crate::usecase::content::{ListForAdminUseCase, ListSectionsUseCase};

#[derive(Serialize)]
pub struct GrantResponse {
    pub role: AdminRole,
    pub role_label: &'static str,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub granted_at: DateTime<Utc>,
}

impl From<AdminGrant> for GrantResponse {
    fn from(grant: AdminGrant) -> Self {
        Self {
            role: grant.role,
            role_label: grant.role.label(),
            granted_at: grant.granted_at,
        }
    }
}

// ── GET /admin ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminDashboardResponse {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub grant: GrantResponse,
    pub counts: ContentCounts,
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<AdminDashboardResponse>, PageError> {
    let grant = admit_admin(&state, session.as_ref(), None).await?;

    let uc = AdminDashboardUseCase {
        profiles: state.profile_repo(),
        resources: state.resource_repo(),
        testimonials: state.testimonial_repo(),
        bible_studies: state.bible_study_repo(),
    };
    let dashboard = uc.execute(grant.user_id).await?;

    Ok(Json(AdminDashboardResponse {
        user_id: grant.user_id,
        display_name: dashboard.display_name,
        grant: grant.into(),
        counts: dashboard.counts,
    }))
}

// ── GET /admin/resources ─────────────────────────────────────────────────────

pub async fn admin_resources(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<Vec<AdminRow<ResourceResponse>>>, PageError> {
    admit_admin(&state, session.as_ref(), Some(AdminRole::ContentAdmin)).await?;
    let uc = ListForAdminUseCase {
        store: state.resource_repo(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(AdminRow::from_listed).collect()))
}

// ── GET /admin/testimonials ──────────────────────────────────────────────────

pub async fn admin_testimonials(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<Vec<AdminRow<TestimonialResponse>>>, PageError> {
    admit_admin(&state, session.as_ref(), Some(AdminRole::ContentAdmin)).await?;
    let uc = ListForAdminUseCase {
        store: state.testimonial_repo(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(AdminRow::from_listed).collect()))
}

// ── GET /admin/bible-studies ─────────────────────────────────────────────────

pub async fn admin_bible_studies(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<Vec<AdminRow<BibleStudyResponse>>>, PageError> {
    admit_admin(&state, session.as_ref(), Some(AdminRole::ContentAdmin)).await?;
    let uc = ListForAdminUseCase {
        store: state.bible_study_repo(),
    };
    let rows = uc.execute().await?;
    Ok(Json(rows.into_iter().map(AdminRow::from_listed).collect()))
}

// ── GET /admin/content ───────────────────────────────────────────────────────

pub async fn admin_sections(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<Vec<SectionResponse>>, PageError> {
    admit_admin(&state, session.as_ref(), Some(AdminRole::ContentAdmin)).await?;
    let uc = ListSectionsUseCase {
        repo: state.website_content_repo(),
    };
    let sections = uc.execute().await?;
    Ok(Json(sections.into_iter().map(Into::into).collect()))
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MemberRoleResponse {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub role: Option<AdminRole>,
    pub role_label: Option<&'static str>,
    #[serde(serialize_with = "serialize_optional_timestamp")]
    pub granted_at: Option<DateTime<Utc>>,
}

fn serialize_optional_timestamp<S>(at: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match at {
        Some(at) => sanctuary_core::serde::to_rfc3339_ms(at, s),
        None => s.serialize_none(),
    }
}

#[derive(Serialize)]
pub struct RoleTotalResponse {
    pub role: AdminRole,
    pub role_label: &'static str,
    pub count: usize,
}

#[derive(Serialize)]
pub struct UsersAndRolesResponse {
    pub members: Vec<MemberRoleResponse>,
    pub role_totals: Vec<RoleTotalResponse>,
}

pub async fn admin_users(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<UsersAndRolesResponse>, PageError> {
    admit_admin(&state, session.as_ref(), Some(AdminRole::SuperAdmin)).await?;

    let uc = UsersAndRolesUseCase {
        profiles: state.profile_repo(),
        roles: state.role_repo(),
    };
    let overview = uc.execute().await?;

    let members = overview
        .members
        .into_iter()
        .map(|m| MemberRoleResponse {
            role: m.grant.as_ref().map(|g| g.role),
            role_label: m.grant.as_ref().map(|g| g.role.label()),
            granted_at: m.grant.as_ref().map(|g| g.granted_at),
            profile: m.profile.into(),
        })
        .collect();
    let role_totals = overview
        .role_totals
        .into_iter()
        .map(|(role, count)| RoleTotalResponse {
            role,
            role_label: role.label(),
            count,
        })
        .collect();

    Ok(Json(UsersAndRolesResponse {
        members,
        role_totals,
    }))
}
