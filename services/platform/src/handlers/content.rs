//! Admin content writes. These are called from editor dialogs, so gate
//! failures are returned as `{kind, message}` errors rather than redirects.

use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use sanctuary_auth_types::session::MaybeSession;
use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::content::{DifficultyLevel, ResourceCategory};

use crate::domain::types::{
    AdminGrant, BibleStudyDraft, ResourceDraft, StoredFile, TestimonialDraft,
};
use crate::error::{AccessError, PlatformError};
use crate::handlers::view::{
    BibleStudyResponse, ResourceResponse, SectionResponse, TestimonialResponse,
};
use crate::session::AccessToken;
use crate::state::AppState;
use crate::usecase::content::{
    SubmitContentUseCase, SubmitMode, UpdateSectionUseCase, UploadInput,
    UploadResourceFileUseCase, clean_references, optional_text, optional_whole_number,
    section_content_from_input,
};

async fn admit_editor(
    state: &AppState,
    session: MaybeSession,
) -> Result<AdminGrant, PlatformError> {
    let grant = state
        .access_gate()
        .require_access(session.0.as_ref(), Some(AdminRole::ContentAdmin))
        .await?;
    Ok(grant)
}

fn default_true() -> bool {
    true
}

/// Blank selections fall back to the enum default.
fn parse_or_default<T>(value: Option<String>) -> Result<T, PlatformError>
where
    T: std::str::FromStr + Default,
    PlatformError: From<T::Err>,
{
    match optional_text(value) {
        Some(v) => Ok(v.parse()?),
        None => Ok(T::default()),
    }
}

fn status_for(mode: SubmitMode) -> StatusCode {
    match mode {
        SubmitMode::Insert => StatusCode::CREATED,
        SubmitMode::Update(_) => StatusCode::OK,
    }
}

// ── POST /admin/resources ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResourceForm {
    #[serde(default)]
    pub is_editing: bool,
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
}

pub async fn submit_resource(
    State(state): State<AppState>,
    session: MaybeSession,
    Json(form): Json<ResourceForm>,
) -> Result<(StatusCode, Json<ResourceResponse>), PlatformError> {
    let grant = admit_editor(&state, session).await?;
    let mode = SubmitMode::from_form(form.is_editing, form.id)?;

    let draft = ResourceDraft {
        title: form.title.trim().to_owned(),
        description: optional_text(form.description),
        category: parse_or_default::<ResourceCategory>(form.category)?,
        is_featured: form.is_featured,
        is_published: form.is_published,
        file_url: optional_text(form.file_url),
        file_name: optional_text(form.file_name),
        file_size: form.file_size,
        file_type: optional_text(form.file_type),
    };

    let uc = SubmitContentUseCase {
        store: state.resource_repo(),
    };
    let resource = uc.execute(&grant, mode, draft).await?;
    Ok((status_for(mode), Json(resource.into())))
}

// ── POST /admin/testimonials ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TestimonialForm {
    #[serde(default)]
    pub is_editing: bool,
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    pub image_url: Option<String>,
}

pub async fn submit_testimonial(
    State(state): State<AppState>,
    session: MaybeSession,
    Json(form): Json<TestimonialForm>,
) -> Result<(StatusCode, Json<TestimonialResponse>), PlatformError> {
    let grant = admit_editor(&state, session).await?;
    let mode = SubmitMode::from_form(form.is_editing, form.id)?;

    let draft = TestimonialDraft {
        title: form.title.trim().to_owned(),
        content: form.content.trim().to_owned(),
        author_name: optional_text(form.author_name),
        author_location: optional_text(form.author_location),
        is_anonymous: form.is_anonymous,
        is_featured: form.is_featured,
        is_published: form.is_published,
        image_url: optional_text(form.image_url),
    };

    let uc = SubmitContentUseCase {
        store: state.testimonial_repo(),
    };
    let testimonial = uc.execute(&grant, mode, draft).await?;
    Ok((status_for(mode), Json(testimonial.into())))
}

// ── POST /admin/bible-studies ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BibleStudyForm {
    #[serde(default)]
    pub is_editing: bool,
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub scripture_references: Vec<String>,
    /// Raw editor input: number, numeric string, blank or null.
    pub lesson_number: Option<serde_json::Value>,
    pub series_name: Option<String>,
    pub difficulty_level: Option<String>,
    pub estimated_duration: Option<serde_json::Value>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

pub async fn submit_bible_study(
    State(state): State<AppState>,
    session: MaybeSession,
    Json(form): Json<BibleStudyForm>,
) -> Result<(StatusCode, Json<BibleStudyResponse>), PlatformError> {
    let grant = admit_editor(&state, session).await?;
    let mode = SubmitMode::from_form(form.is_editing, form.id)?;

    let draft = BibleStudyDraft {
        title: form.title.trim().to_owned(),
        description: optional_text(form.description),
        content: optional_text(form.content),
        scripture_references: clean_references(form.scripture_references),
        lesson_number: optional_whole_number("lesson_number", form.lesson_number.as_ref())?,
        series_name: optional_text(form.series_name),
        difficulty_level: parse_or_default::<DifficultyLevel>(form.difficulty_level)?,
        estimated_duration: optional_whole_number(
            "estimated_duration",
            form.estimated_duration.as_ref(),
        )?,
        is_published: form.is_published,
    };

    let uc = SubmitContentUseCase {
        store: state.bible_study_repo(),
    };
    let study = uc.execute(&grant, mode, draft).await?;
    Ok((status_for(mode), Json(study.into())))
}

// ── PUT /admin/content/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SectionForm {
    /// Editor text; stored as JSON when it parses, else as a JSON string.
    pub content: String,
}

pub async fn update_section(
    State(state): State<AppState>,
    session: MaybeSession,
    Path(id): Path<Uuid>,
    Json(form): Json<SectionForm>,
) -> Result<Json<SectionResponse>, PlatformError> {
    let grant = admit_editor(&state, session).await?;
    let uc = UpdateSectionUseCase {
        repo: state.website_content_repo(),
    };
    let section = uc
        .execute(&grant, id, section_content_from_input(&form.content))
        .await?;
    Ok(Json(section.into()))
}

// ── POST /admin/resources/upload ─────────────────────────────────────────────

pub async fn upload_resource_file(
    State(state): State<AppState>,
    session: MaybeSession,
    Extension(AccessToken(access_token)): Extension<AccessToken>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<StoredFile>), PlatformError> {
    admit_editor(&state, session).await?;
    let access_token = access_token.ok_or(AccessError::AuthenticationRequired)?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| PlatformError::InvalidValue(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| PlatformError::InvalidValue(e.body_text()))?;
        upload = Some(UploadInput {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }
    let upload = upload.ok_or(PlatformError::MissingField("file"))?;

    let uc = UploadResourceFileUseCase {
        storage: state.backend.clone(),
    };
    let stored = uc.execute(upload, &access_token).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
