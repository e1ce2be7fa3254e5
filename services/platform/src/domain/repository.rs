#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use sanctuary_domain::id::UserId;
use sanctuary_domain::pagination::PageRequest;

use crate::domain::types::{
    Audit, Comment, CommentWithAuthor, Listed, Message, Post, PostWithStats, Profile,
    ProfileSummary, ProfileUpdate, RoleLookupOutcome, SignUp, StoredGrant, TokenPair,
    WebsiteSection,
};
use crate::error::PlatformError;

/// Resolves a user's administrative role. One remote call, no cache, no retry.
pub trait RoleLookup: Send + Sync {
    async fn lookup(&self, user_id: UserId) -> RoleLookupOutcome;
}

/// Read access to every stored role grant.
pub trait RoleDirectory: Send + Sync {
    async fn list_grants(&self) -> Result<Vec<StoredGrant>, PlatformError>;
}

pub trait ProfileRepository: Send + Sync {
    async fn find(&self, id: UserId) -> Result<Option<Profile>, PlatformError>;

    /// Summaries for the given ids; unknown ids are omitted.
    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<ProfileSummary>, PlatformError>;

    /// Apply a member edit and stamp `updated_at`. Returns `false` if no row matched.
    async fn update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, PlatformError>;

    async fn list_newest_first(&self) -> Result<Vec<Profile>, PlatformError>;

    async fn count(&self) -> Result<u64, PlatformError>;
}

/// Storage for one kind of admin-edited content record.
pub trait ContentStore: Send + Sync {
    type Draft: Send + Sync;
    type Record: Send;

    /// Insert a new row. Never touches an existing row.
    async fn insert(
        &self,
        id: Uuid,
        draft: &Self::Draft,
        audit: Audit,
    ) -> Result<Self::Record, PlatformError>;

    /// Overwrite the editable fields of `id`, stamping the editor and time.
    /// `created_by`/`created_at` are left alone. `None` if no row matched.
    async fn update(
        &self,
        id: Uuid,
        draft: &Self::Draft,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Self::Record>, PlatformError>;

    /// Every record, newest first, with the creator's display name.
    async fn list_for_admin(&self) -> Result<Vec<Listed<Self::Record>>, PlatformError>;

    /// Published records in public display order.
    async fn list_published(&self) -> Result<Vec<Self::Record>, PlatformError>;

    async fn count(&self) -> Result<u64, PlatformError>;
}

pub trait WebsiteContentRepository: Send + Sync {
    /// All sections ordered by `page_section`.
    async fn list_sections(&self) -> Result<Vec<WebsiteSection>, PlatformError>;

    async fn update_content(
        &self,
        id: Uuid,
        content: &serde_json::Value,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<WebsiteSection>, PlatformError>;
}

pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &Post) -> Result<(), PlatformError>;

    async fn find(&self, id: Uuid) -> Result<Option<(Post, Option<ProfileSummary>)>, PlatformError>;

    /// Newest first, with author summaries and like/comment counts.
    async fn feed(&self, page: PageRequest) -> Result<Vec<PostWithStats>, PlatformError>;

    async fn count_by_author(&self, author_id: UserId) -> Result<u64, PlatformError>;
}

pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &Comment) -> Result<(), PlatformError>;

    /// Oldest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, PlatformError>;
}

pub trait LikeRepository: Send + Sync {
    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PlatformError>;

    /// Insert the like row; a concurrent duplicate is silently ignored.
    async fn like(
        &self,
        post_id: Uuid,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), PlatformError>;

    async fn unlike(&self, post_id: Uuid, user_id: UserId) -> Result<(), PlatformError>;

    async fn count(&self, post_id: Uuid) -> Result<u64, PlatformError>;
}

pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &Message) -> Result<(), PlatformError>;

    /// Messages in both directions between `a` and `b`, oldest first.
    async fn thread(&self, a: UserId, b: UserId) -> Result<Vec<Message>, PlatformError>;

    /// Every message sent or received by `user_id`, newest first.
    async fn involving(&self, user_id: UserId) -> Result<Vec<Message>, PlatformError>;
}

/// Port to the hosted auth service.
pub trait AuthServicePort: Send + Sync {
    async fn sign_up(&self, request: &SignUp) -> Result<(), PlatformError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, PlatformError>;

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, PlatformError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), PlatformError>;
}

/// Port to the hosted object storage.
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` at `bucket/path` and return the object's public URL.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access_token: &str,
    ) -> Result<String, PlatformError>;
}
