use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::content::{DifficultyLevel, PostType, ResourceCategory};
use sanctuary_domain::id::UserId;
use sanctuary_domain::journey::JourneyStage;

// ── Roles ────────────────────────────────────────────────────────────────────

/// A role row returned by `check_user_admin_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGrant {
    pub role: AdminRole,
    pub granted_at: DateTime<Utc>,
}

/// Result of one role lookup. `Failed` is denied like `NoGrant` but is
/// reported separately so infrastructure faults stay visible in logs.
#[derive(Debug)]
pub enum RoleLookupOutcome {
    Granted(RoleGrant),
    NoGrant,
    Failed(anyhow::Error),
}

/// Proof that the access gate admitted a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminGrant {
    pub user_id: UserId,
    pub role: AdminRole,
    pub granted_at: DateTime<Utc>,
}

/// A stored role grant, as listed on the users-and-roles page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGrant {
    pub user_id: UserId,
    pub role: AdminRole,
    pub granted_by: Option<UserId>,
    pub granted_at: DateTime<Utc>,
}

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    /// `None` when unset or when the stored value is not a known stage.
    pub journey_stage: Option<JourneyStage>,
    pub is_mentor: bool,
    pub location: Option<String>,
    pub interests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id,
            display_name: self.display_name.clone(),
            journey_stage: self.journey_stage,
            is_mentor: self.is_mentor,
        }
    }
}

/// The profile fields shown next to authored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub id: UserId,
    pub display_name: Option<String>,
    pub journey_stage: Option<JourneyStage>,
    pub is_mentor: bool,
}

/// Member-editable profile fields. The mentor flag is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub journey_stage: Option<JourneyStage>,
    pub location: Option<String>,
    pub interests: Option<String>,
}

// ── Content records ──────────────────────────────────────────────────────────

/// Who created and last touched a content record, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Audit {
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Audit {
    /// Audit stamp of a freshly inserted record.
    pub fn created(by: UserId, at: DateTime<Utc>) -> Self {
        Self {
            created_by: Some(by),
            updated_by: Some(by),
            created_at: at,
            updated_at: at,
        }
    }
}

/// Editable fields of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub title: String,
    pub description: Option<String>,
    pub category: ResourceCategory,
    pub is_featured: bool,
    pub is_published: bool,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: Uuid,
    pub draft: ResourceDraft,
    pub audit: Audit,
}

/// Editable fields of a testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialDraft {
    pub title: String,
    pub content: String,
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    pub is_anonymous: bool,
    pub is_featured: bool,
    pub is_published: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: Uuid,
    pub draft: TestimonialDraft,
    pub audit: Audit,
}

/// Editable fields of a bible study.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibleStudyDraft {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub scripture_references: Vec<String>,
    pub lesson_number: Option<i32>,
    pub series_name: Option<String>,
    pub difficulty_level: DifficultyLevel,
    /// Minutes.
    pub estimated_duration: Option<i32>,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibleStudy {
    pub id: Uuid,
    pub draft: BibleStudyDraft,
    pub audit: Audit,
}

/// A seeded website section. Only its JSON content is editable.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteSection {
    pub id: Uuid,
    pub page_section: String,
    pub content: serde_json::Value,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A content record paired with its creator's display name, for admin lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listed<T> {
    pub record: T,
    pub creator_name: Option<String>,
}

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub resources: u64,
    pub testimonials: u64,
    pub bible_studies: u64,
    pub profiles: u64,
}

// ── Community ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: UserId,
    pub title: Option<String>,
    pub content: String,
    pub post_type: PostType,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

/// A post joined with its author's profile and engagement counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithStats {
    pub post: Post,
    pub author: Option<ProfileSummary>,
    pub like_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: Option<ProfileSummary>,
}

// ── Messaging ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The participant that is not `me`. For a message to oneself, `me`.
    pub fn counterpart(&self, me: UserId) -> UserId {
        if self.sender_id == me {
            self.receiver_id
        } else {
            self.sender_id
        }
    }
}

// ── Hosted auth + storage ────────────────────────────────────────────────────

/// Session tokens issued by the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Sign-up request forwarded to the hosted auth service. The profile fields
/// travel as user metadata; the service's sign-up hook creates the profile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub journey_stage: JourneyStage,
    pub email_redirect_to: Option<String>,
}

/// An object stored in the file bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFile {
    pub file_url: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
}

/// Bucket that holds uploaded resource files.
pub const RESOURCES_BUCKET: &str = "resources";

/// Display name shown for anonymous posts and testimonials.
pub const ANONYMOUS: &str = "Anonymous";

/// Community feed page size.
pub const FEED_PAGE_SIZE: u32 = 20;

/// Number of recent posts on the member dashboard.
pub const DASHBOARD_RECENT_POSTS: u32 = 5;

/// Minimum sign-up password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;
