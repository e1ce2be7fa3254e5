//! JSON view models shared by several pages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use sanctuary_domain::content::{DifficultyLevel, PostType, ResourceCategory};
use sanctuary_domain::id::UserId;
use sanctuary_domain::journey::JourneyStage;

use crate::domain::types::{
    ANONYMOUS, BibleStudy, CommentWithAuthor, Listed, Message, PostWithStats, Profile,
    ProfileSummary, Resource, Testimonial, WebsiteSection,
};

/// Shown for a named author whose profile has no display name.
pub const UNNAMED_MEMBER: &str = "Member";

// ── Profiles ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub journey_stage: Option<JourneyStage>,
    pub is_mentor: bool,
    pub location: Option<String>,
    pub interests: Option<String>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            display_name: p.display_name,
            bio: p.bio,
            journey_stage: p.journey_stage,
            is_mentor: p.is_mentor,
            location: p.location,
            interests: p.interests,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct MemberResponse {
    pub id: UserId,
    pub display_name: String,
    pub journey_stage: Option<JourneyStage>,
    pub is_mentor: bool,
}

impl MemberResponse {
    /// `id` is kept even when the profile row is missing.
    pub fn new(id: UserId, summary: Option<ProfileSummary>) -> Self {
        match summary {
            Some(s) => Self {
                id,
                display_name: s.display_name.unwrap_or_else(|| UNNAMED_MEMBER.to_owned()),
                journey_stage: s.journey_stage,
                is_mentor: s.is_mentor,
            },
            None => Self {
                id,
                display_name: UNNAMED_MEMBER.to_owned(),
                journey_stage: None,
                is_mentor: false,
            },
        }
    }
}

// ── Posts ────────────────────────────────────────────────────────────────────

/// Author block of a post. Anonymous posts reveal neither id nor stage.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AuthorResponse {
    pub id: Option<UserId>,
    pub display_name: String,
    pub journey_stage: Option<JourneyStage>,
    pub is_mentor: bool,
}

impl AuthorResponse {
    pub fn for_post(
        author_id: UserId,
        is_anonymous: bool,
        author: Option<ProfileSummary>,
    ) -> Self {
        if is_anonymous {
            return Self {
                id: None,
                display_name: ANONYMOUS.to_owned(),
                journey_stage: None,
                is_mentor: false,
            };
        }
        let member = MemberResponse::new(author_id, author);
        Self {
            id: Some(member.id),
            display_name: member.display_name,
            journey_stage: member.journey_stage,
            is_mentor: member.is_mentor,
        }
    }
}

#[derive(Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub post_type: PostType,
    pub is_anonymous: bool,
    pub author: AuthorResponse,
    pub like_count: u64,
    pub comment_count: u64,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<PostWithStats> for PostResponse {
    fn from(item: PostWithStats) -> Self {
        let post = item.post;
        Self {
            id: post.id,
            author: AuthorResponse::for_post(post.author_id, post.is_anonymous, item.author),
            title: post.title,
            content: post.content,
            post_type: post.post_type,
            is_anonymous: post.is_anonymous,
            like_count: item.like_count,
            comment_count: item.comment_count,
            created_at: post.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub author: MemberResponse,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(c: CommentWithAuthor) -> Self {
        Self {
            id: c.comment.id,
            author: MemberResponse::new(c.comment.author_id, c.author),
            content: c.comment.content,
            created_at: c.comment.created_at,
        }
    }
}

// ── Messages ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            sender_id: m.sender_id,
            receiver_id: m.receiver_id,
            content: m.content,
            created_at: m.created_at,
        }
    }
}

// ── Content records ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ResourceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: ResourceCategory,
    pub is_featured: bool,
    pub is_published: bool,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_type: Option<String>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponse {
    fn from(r: Resource) -> Self {
        let d = r.draft;
        Self {
            id: r.id,
            title: d.title,
            description: d.description,
            category: d.category,
            is_featured: d.is_featured,
            is_published: d.is_published,
            file_url: d.file_url,
            file_name: d.file_name,
            file_size: d.file_size,
            file_type: d.file_type,
            created_at: r.audit.created_at,
            updated_at: r.audit.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct TestimonialResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_name: Option<String>,
    pub author_location: Option<String>,
    pub is_anonymous: bool,
    pub is_featured: bool,
    pub is_published: bool,
    pub image_url: Option<String>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        let d = t.draft;
        Self {
            id: t.id,
            title: d.title,
            content: d.content,
            author_name: d.author_name,
            author_location: d.author_location,
            is_anonymous: d.is_anonymous,
            is_featured: d.is_featured,
            is_published: d.is_published,
            image_url: d.image_url,
            created_at: t.audit.created_at,
            updated_at: t.audit.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct BibleStudyResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub scripture_references: Vec<String>,
    pub lesson_number: Option<i32>,
    pub series_name: Option<String>,
    pub difficulty_level: DifficultyLevel,
    pub estimated_duration: Option<i32>,
    pub is_published: bool,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "sanctuary_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<BibleStudy> for BibleStudyResponse {
    fn from(b: BibleStudy) -> Self {
        let d = b.draft;
        Self {
            id: b.id,
            title: d.title,
            description: d.description,
            content: d.content,
            scripture_references: d.scripture_references,
            lesson_number: d.lesson_number,
            series_name: d.series_name,
            difficulty_level: d.difficulty_level,
            estimated_duration: d.estimated_duration,
            is_published: d.is_published,
            created_at: b.audit.created_at,
            updated_at: b.audit.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct SectionResponse {
    pub id: Uuid,
    pub page_section: String,
    pub content: serde_json::Value,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<WebsiteSection> for SectionResponse {
    fn from(s: WebsiteSection) -> Self {
        Self {
            id: s.id,
            page_section: s.page_section,
            content: s.content,
            updated_by: s.updated_by,
            updated_at: s.updated_at,
        }
    }
}

/// An admin list row: the record plus its creator's display name.
#[derive(Serialize)]
pub struct AdminRow<T> {
    #[serde(flatten)]
    pub record: T,
    pub creator_name: Option<String>,
}

impl<T> AdminRow<T> {
    pub fn from_listed<R>(listed: Listed<R>) -> Self
    where
        T: From<R>,
    {
        Self {
            record: listed.record.into(),
            creator_name: listed.creator_name,
        }
    }
}
