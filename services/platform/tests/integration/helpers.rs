use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use sanctuary_domain::admin_role::AdminRole;
use sanctuary_domain::content::{DifficultyLevel, PostType, ResourceCategory};
use sanctuary_domain::id::UserId;
use sanctuary_domain::journey::JourneyStage;
use sanctuary_domain::pagination::PageRequest;
use sanctuary_platform::domain::repository::{
    AuthServicePort, CommentRepository, ContentStore, LikeRepository, MessageRepository,
    ObjectStorage, PostRepository, ProfileRepository, RoleDirectory, WebsiteContentRepository,
};
use sanctuary_platform::domain::types::{
    AdminGrant, Audit, BibleStudy, BibleStudyDraft, Comment, CommentWithAuthor, Listed, Message,
    Post, PostWithStats, Profile, ProfileSummary, ProfileUpdate, Resource, ResourceDraft, SignUp,
    StoredGrant, Testimonial, TestimonialDraft, TokenPair, WebsiteSection,
};
use sanctuary_platform::error::PlatformError;

pub fn shared<T>(value: T) -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(value))
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn user() -> UserId {
    UserId(Uuid::new_v4())
}

pub fn test_profile(id: UserId, display_name: &str) -> Profile {
    let at = Utc::now() - Duration::days(30);
    Profile {
        id,
        display_name: Some(display_name.to_owned()),
        bio: None,
        journey_stage: Some(JourneyStage::EarlyJourney),
        is_mentor: false,
        location: None,
        interests: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn grant(user_id: UserId, role: AdminRole) -> AdminGrant {
    AdminGrant {
        user_id,
        role,
        granted_at: Utc::now() - Duration::days(7),
    }
}

pub fn stored_grant(user_id: UserId, role: AdminRole) -> StoredGrant {
    StoredGrant {
        user_id,
        role,
        granted_by: None,
        granted_at: Utc::now() - Duration::days(7),
    }
}

pub fn resource_draft(title: &str) -> ResourceDraft {
    ResourceDraft {
        title: title.to_owned(),
        description: None,
        category: ResourceCategory::Guide,
        is_featured: false,
        is_published: true,
        file_url: None,
        file_name: None,
        file_size: None,
        file_type: None,
    }
}

pub fn testimonial_draft(title: &str, content: &str) -> TestimonialDraft {
    TestimonialDraft {
        title: title.to_owned(),
        content: content.to_owned(),
        author_name: None,
        author_location: None,
        is_anonymous: false,
        is_featured: false,
        is_published: true,
        image_url: None,
    }
}

pub fn bible_study_draft(title: &str) -> BibleStudyDraft {
    BibleStudyDraft {
        title: title.to_owned(),
        description: None,
        content: None,
        scripture_references: vec![],
        lesson_number: None,
        series_name: None,
        difficulty_level: DifficultyLevel::Beginner,
        estimated_duration: None,
        is_published: true,
    }
}

pub fn test_post(author_id: UserId, content: &str, created_at: DateTime<Utc>) -> Post {
    Post {
        id: Uuid::new_v4(),
        author_id,
        title: None,
        content: content.to_owned(),
        post_type: PostType::Encouragement,
        is_anonymous: false,
        created_at,
    }
}

pub fn test_message(from: UserId, to: UserId, content: &str, created_at: DateTime<Utc>) -> Message {
    Message {
        id: Uuid::new_v4(),
        sender_id: from,
        receiver_id: to,
        content: content.to_owned(),
        created_at,
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: shared(profiles),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find(&self, id: UserId) -> Result<Option<Profile>, PlatformError> {
        Ok(self.profiles.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<ProfileSummary>, PlatformError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(Profile::summary)
            .collect())
    }

    async fn update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, PlatformError> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(p) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        p.display_name = update.display_name.clone();
        p.bio = update.bio.clone();
        p.journey_stage = update.journey_stage;
        p.location = update.location.clone();
        p.interests = update.interests.clone();
        p.updated_at = updated_at;
        Ok(true)
    }

    async fn list_newest_first(&self) -> Result<Vec<Profile>, PlatformError> {
        let mut profiles = self.profiles.lock().unwrap().clone();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        Ok(self.profiles.lock().unwrap().len() as u64)
    }
}

// ── MockRoleDirectory ────────────────────────────────────────────────────────

pub struct MockRoleDirectory {
    pub grants: Vec<StoredGrant>,
}

impl RoleDirectory for MockRoleDirectory {
    async fn list_grants(&self) -> Result<Vec<StoredGrant>, PlatformError> {
        Ok(self.grants.clone())
    }
}

// ── MockStore (content records) ──────────────────────────────────────────────

/// The parts of a content record the mock store needs to touch.
pub trait StoredRecord: Clone + Send + Sync {
    type Draft: Clone + Send + Sync;

    fn assemble(id: Uuid, draft: Self::Draft, audit: Audit) -> Self;
    fn id(&self) -> Uuid;
    fn is_published(&self) -> bool;
    fn set_draft(&mut self, draft: Self::Draft);
    fn audit_mut(&mut self) -> &mut Audit;
}

macro_rules! stored_record {
    ($record:ty, $draft:ty) => {
        impl StoredRecord for $record {
            type Draft = $draft;

            fn assemble(id: Uuid, draft: $draft, audit: Audit) -> Self {
                Self { id, draft, audit }
            }

            fn id(&self) -> Uuid {
                self.id
            }

            fn is_published(&self) -> bool {
                self.draft.is_published
            }

            fn set_draft(&mut self, draft: $draft) {
                self.draft = draft;
            }

            fn audit_mut(&mut self) -> &mut Audit {
                &mut self.audit
            }
        }
    };
}

stored_record!(Resource, ResourceDraft);
stored_record!(Testimonial, TestimonialDraft);
stored_record!(BibleStudy, BibleStudyDraft);

#[derive(Clone)]
pub struct MockStore<R: StoredRecord> {
    pub records: Arc<Mutex<Vec<R>>>,
}

impl<R: StoredRecord> MockStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: shared(records),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl<R: StoredRecord> ContentStore for MockStore<R> {
    type Draft = R::Draft;
    type Record = R;

    async fn insert(&self, id: Uuid, draft: &R::Draft, audit: Audit) -> Result<R, PlatformError> {
        let record = R::assemble(id, draft.clone(), audit);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &R::Draft,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<R>, PlatformError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        record.set_draft(draft.clone());
        let audit = record.audit_mut();
        audit.updated_by = Some(updated_by);
        audit.updated_at = updated_at;
        Ok(Some(record.clone()))
    }

    async fn list_for_admin(&self) -> Result<Vec<Listed<R>>, PlatformError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(|record| Listed {
                record,
                creator_name: None,
            })
            .collect())
    }

    async fn list_published(&self) -> Result<Vec<R>, PlatformError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_published())
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}

// ── MockWebsiteContentRepo ───────────────────────────────────────────────────

pub struct MockWebsiteContentRepo {
    pub sections: Arc<Mutex<Vec<WebsiteSection>>>,
}

impl WebsiteContentRepository for MockWebsiteContentRepo {
    async fn list_sections(&self) -> Result<Vec<WebsiteSection>, PlatformError> {
        Ok(self.sections.lock().unwrap().clone())
    }

    async fn update_content(
        &self,
        id: Uuid,
        content: &serde_json::Value,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<WebsiteSection>, PlatformError> {
        let mut sections = self.sections.lock().unwrap();
        let Some(section) = sections.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        section.content = content.clone();
        section.updated_by = Some(updated_by);
        section.updated_at = Some(updated_at);
        Ok(Some(section.clone()))
    }
}

// ── MockPostRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPostRepo {
    pub posts: Arc<Mutex<Vec<Post>>>,
    pub authors: Vec<ProfileSummary>,
}

impl MockPostRepo {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: shared(posts),
            authors: vec![],
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    fn author_of(&self, post: &Post) -> Option<ProfileSummary> {
        self.authors.iter().find(|a| a.id == post.author_id).cloned()
    }
}

impl PostRepository for MockPostRepo {
    async fn create(&self, post: &Post) -> Result<(), PlatformError> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<(Post, Option<ProfileSummary>)>, PlatformError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p.clone(), self.author_of(p))))
    }

    async fn feed(&self, page: PageRequest) -> Result<Vec<PostWithStats>, PlatformError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|post| PostWithStats {
                author: self.author_of(&post),
                post,
                like_count: 0,
                comment_count: 0,
            })
            .collect())
    }

    async fn count_by_author(&self, author_id: UserId) -> Result<u64, PlatformError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == author_id)
            .count() as u64)
    }
}

// ── MockCommentRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockCommentRepo {
    pub comments: Arc<Mutex<Vec<Comment>>>,
}

impl MockCommentRepo {
    pub fn empty() -> Self {
        Self {
            comments: shared(vec![]),
        }
    }
}

impl CommentRepository for MockCommentRepo {
    async fn create(&self, comment: &Comment) -> Result<(), PlatformError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, PlatformError> {
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments
            .into_iter()
            .map(|comment| CommentWithAuthor {
                comment,
                author: None,
            })
            .collect())
    }
}

// ── MockLikeRepo ─────────────────────────────────────────────────────────────

/// Keyed like the `(post_id, user_id)` primary key: a second like is a no-op.
#[derive(Clone)]
pub struct MockLikeRepo {
    pub likes: Arc<Mutex<HashSet<(Uuid, UserId)>>>,
}

impl MockLikeRepo {
    pub fn empty() -> Self {
        Self {
            likes: shared(HashSet::new()),
        }
    }
}

impl LikeRepository for MockLikeRepo {
    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PlatformError> {
        Ok(self.likes.lock().unwrap().contains(&(post_id, user_id)))
    }

    async fn like(
        &self,
        post_id: Uuid,
        user_id: UserId,
        _at: DateTime<Utc>,
    ) -> Result<(), PlatformError> {
        self.likes.lock().unwrap().insert((post_id, user_id));
        Ok(())
    }

    async fn unlike(&self, post_id: Uuid, user_id: UserId) -> Result<(), PlatformError> {
        self.likes.lock().unwrap().remove(&(post_id, user_id));
        Ok(())
    }

    async fn count(&self, post_id: Uuid) -> Result<u64, PlatformError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| *p == post_id)
            .count() as u64)
    }
}

// ── MockMessageRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockMessageRepo {
    pub messages: Arc<Mutex<Vec<Message>>>,
}

impl MockMessageRepo {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: shared(messages),
        }
    }
}

impl MessageRepository for MockMessageRepo {
    async fn create(&self, message: &Message) -> Result<(), PlatformError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn thread(&self, a: UserId, b: UserId) -> Result<Vec<Message>, PlatformError> {
        let mut thread: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| {
                (m.sender_id == a && m.receiver_id == b) || (m.sender_id == b && m.receiver_id == a)
            })
            .cloned()
            .collect();
        thread.sort_by(|x, y| x.created_at.cmp(&y.created_at));
        Ok(thread)
    }

    async fn involving(&self, user_id: UserId) -> Result<Vec<Message>, PlatformError> {
        let mut involving: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.sender_id == user_id || m.receiver_id == user_id)
            .cloned()
            .collect();
        involving.sort_by(|x, y| y.created_at.cmp(&x.created_at));
        Ok(involving)
    }
}

// ── MockAuthService ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAuthService {
    pub sign_ups: Arc<Mutex<Vec<SignUp>>>,
    pub sign_outs: Arc<Mutex<Vec<String>>>,
    /// Accepted `(email, password)`; anything else is rejected.
    pub account: Option<(String, String)>,
    pub fail_sign_out: bool,
}

impl AuthServicePort for MockAuthService {
    async fn sign_up(&self, request: &SignUp) -> Result<(), PlatformError> {
        self.sign_ups.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, PlatformError> {
        match &self.account {
            Some((e, p)) if e == email && p == password => Ok(TokenPair {
                access_token: "access".to_owned(),
                refresh_token: "refresh".to_owned(),
            }),
            _ => Err(PlatformError::InvalidCredentials),
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<TokenPair, PlatformError> {
        Err(PlatformError::Internal(anyhow::anyhow!("not used")))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), PlatformError> {
        self.sign_outs.lock().unwrap().push(access_token.to_owned());
        if self.fail_sign_out {
            return Err(PlatformError::Internal(anyhow::anyhow!("logout unavailable")));
        }
        Ok(())
    }
}

// ── MockStorage ──────────────────────────────────────────────────────────────

pub struct Upload {
    pub bucket: String,
    pub path: String,
    pub size: usize,
    pub content_type: String,
    pub access_token: String,
}

#[derive(Clone, Default)]
pub struct MockStorage {
    pub uploads: Arc<Mutex<Vec<Upload>>>,
}

impl ObjectStorage for MockStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        access_token: &str,
    ) -> Result<String, PlatformError> {
        self.uploads.lock().unwrap().push(Upload {
            bucket: bucket.to_owned(),
            path: path.to_owned(),
            size: bytes.len(),
            content_type: content_type.to_owned(),
            access_token: access_token.to_owned(),
        });
        Ok(format!("https://storage.example.com/{bucket}/{path}"))
    }
}
