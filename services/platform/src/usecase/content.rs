use chrono::{DateTime, Utc};
use uuid::Uuid;

use sanctuary_domain::content::ResourceCategory;

use crate::domain::repository::{ContentStore, ObjectStorage, WebsiteContentRepository};
use crate::domain::types::{
    AdminGrant, Audit, BibleStudyDraft, Listed, RESOURCES_BUCKET, Resource, ResourceDraft,
    StoredFile, TestimonialDraft, WebsiteSection,
};
use crate::error::PlatformError;

// ── Field parsing ────────────────────────────────────────────────────────────

/// Trimmed text, or `MissingField` when blank.
pub fn required_text(field: &'static str, value: &str) -> Result<String, PlatformError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Trimmed text, with blank mapped to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an optional whole-number form field.
///
/// Absent, `null` and blank strings are `None`. Numbers and numeric strings
/// must fit an `i32`; anything else is `InvalidNumber`.
pub fn optional_whole_number(
    field: &'static str,
    raw: Option<&serde_json::Value>,
) -> Result<Option<i32>, PlatformError> {
    use serde_json::Value;

    let invalid = || PlatformError::InvalidNumber(field);
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Drop blank scripture references and trim the rest.
pub fn clean_references(references: Vec<String>) -> Vec<String> {
    references
        .into_iter()
        .map(|r| r.trim().to_owned())
        .filter(|r| !r.is_empty())
        .collect()
}

/// Editor input for a website section: stored as JSON when it parses as
/// JSON, otherwise as a JSON string.
pub fn section_content_from_input(input: &str) -> serde_json::Value {
    serde_json::from_str(input).unwrap_or_else(|_| serde_json::Value::String(input.to_owned()))
}

/// Presence checks run before any write.
pub trait RequiredFields {
    fn check_required(&self) -> Result<(), PlatformError>;
}

impl RequiredFields for ResourceDraft {
    fn check_required(&self) -> Result<(), PlatformError> {
        required_text("title", &self.title).map(drop)
    }
}

impl RequiredFields for TestimonialDraft {
    fn check_required(&self) -> Result<(), PlatformError> {
        required_text("title", &self.title)?;
        required_text("content", &self.content).map(drop)
    }
}

impl RequiredFields for BibleStudyDraft {
    fn check_required(&self) -> Result<(), PlatformError> {
        required_text("title", &self.title).map(drop)
    }
}

// ── SubmitContent ────────────────────────────────────────────────────────────

/// Which write a form submission performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Insert,
    Update(Uuid),
}

impl SubmitMode {
    /// Map the form's editing flag and record id to a mode.
    pub fn from_form(is_editing: bool, id: Option<Uuid>) -> Result<Self, PlatformError> {
        match (is_editing, id) {
            (false, _) => Ok(Self::Insert),
            (true, Some(id)) => Ok(Self::Update(id)),
            (true, None) => Err(PlatformError::MissingField("id")),
        }
    }
}

/// Insert or update one content record on behalf of an admitted admin.
pub struct SubmitContentUseCase<S: ContentStore> {
    pub store: S,
}

impl<S> SubmitContentUseCase<S>
where
    S: ContentStore,
    S::Draft: RequiredFields,
{
    pub async fn execute(
        &self,
        grant: &AdminGrant,
        mode: SubmitMode,
        draft: S::Draft,
    ) -> Result<S::Record, PlatformError> {
        draft.check_required()?;
        let now = Utc::now();
        match mode {
            SubmitMode::Insert => {
                self.store
                    .insert(Uuid::new_v4(), &draft, Audit::created(grant.user_id, now))
                    .await
            }
            SubmitMode::Update(id) => self
                .store
                .update(id, &draft, grant.user_id, now)
                .await?
                .ok_or(PlatformError::ContentNotFound),
        }
    }
}

// ── Listings ─────────────────────────────────────────────────────────────────

pub struct ListForAdminUseCase<S: ContentStore> {
    pub store: S,
}

impl<S: ContentStore> ListForAdminUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<Listed<S::Record>>, PlatformError> {
        self.store.list_for_admin().await
    }
}

pub struct ListPublishedUseCase<S: ContentStore> {
    pub store: S,
}

impl<S: ContentStore> ListPublishedUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<S::Record>, PlatformError> {
        self.store.list_published().await
    }
}

/// Published resources, optionally narrowed to one category.
pub struct ListPublishedResourcesUseCase<S> {
    pub store: S,
}

impl<S> ListPublishedResourcesUseCase<S>
where
    S: ContentStore<Record = Resource>,
{
    pub async fn execute(
        &self,
        category: Option<ResourceCategory>,
    ) -> Result<Vec<Resource>, PlatformError> {
        let resources = self.store.list_published().await?;
        Ok(match category {
            Some(category) => resources
                .into_iter()
                .filter(|r| r.draft.category == category)
                .collect(),
            None => resources,
        })
    }
}

// ── Website content ──────────────────────────────────────────────────────────

pub struct ListSectionsUseCase<R: WebsiteContentRepository> {
    pub repo: R,
}

impl<R: WebsiteContentRepository> ListSectionsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<WebsiteSection>, PlatformError> {
        self.repo.list_sections().await
    }
}

/// Update-only: sections are seeded, never created here.
pub struct UpdateSectionUseCase<R: WebsiteContentRepository> {
    pub repo: R,
}

impl<R: WebsiteContentRepository> UpdateSectionUseCase<R> {
    pub async fn execute(
        &self,
        grant: &AdminGrant,
        id: Uuid,
        content: serde_json::Value,
    ) -> Result<WebsiteSection, PlatformError> {
        self.repo
            .update_content(id, &content, grant.user_id, Utc::now())
            .await?
            .ok_or(PlatformError::ContentNotFound)
    }
}

// ── UploadResourceFile ───────────────────────────────────────────────────────

pub struct UploadInput {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Object path for an upload: `resources/<unix-millis>.<ext>`.
pub fn upload_path(file_name: &str, at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("resources/{millis}.{ext}"),
        _ => format!("resources/{millis}"),
    }
}

pub struct UploadResourceFileUseCase<O: ObjectStorage> {
    pub storage: O,
}

impl<O: ObjectStorage> UploadResourceFileUseCase<O> {
    pub async fn execute(
        &self,
        input: UploadInput,
        access_token: &str,
    ) -> Result<StoredFile, PlatformError> {
        if input.bytes.is_empty() {
            return Err(PlatformError::MissingField("file"));
        }
        let path = upload_path(&input.file_name, Utc::now());
        let file_type = input
            .content_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "application/octet-stream".to_owned());
        let file_size = i64::try_from(input.bytes.len())
            .map_err(|_| PlatformError::InvalidValue("file too large".to_owned()))?;

        let file_url = self
            .storage
            .upload(RESOURCES_BUCKET, &path, input.bytes, &file_type, access_token)
            .await?;

        Ok(StoredFile {
            file_url,
            file_name: input.file_name,
            file_size,
            file_type,
        })
    }
}
