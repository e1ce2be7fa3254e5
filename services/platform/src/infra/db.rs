use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use sanctuary_domain::content::{DifficultyLevel, PostType, ResourceCategory};
use sanctuary_domain::id::UserId;
use sanctuary_domain::pagination::PageRequest;
use sanctuary_platform_schema::{
    bible_studies, messages, post_comments, post_likes, posts, profiles, resources, testimonials,
    website_content,
};

use crate::domain::repository::{
    CommentRepository, ContentStore, LikeRepository, MessageRepository, PostRepository,
    ProfileRepository, WebsiteContentRepository,
};
use crate::domain::types::{
    Audit, BibleStudy, BibleStudyDraft, Comment, CommentWithAuthor, Listed, Message, Post,
    PostWithStats, Profile, ProfileSummary, ProfileUpdate, Resource, ResourceDraft, Testimonial,
    TestimonialDraft, WebsiteSection,
};
use crate::error::PlatformError;

/// `update()` on a missing primary key surfaces as `RecordNotUpdated`.
fn none_if_missing<T>(result: Result<T, DbErr>) -> Result<Option<T>, DbErr> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e),
    }
}

fn user_id(id: Option<Uuid>) -> Option<UserId> {
    id.map(UserId)
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProfileRepository for DbProfileRepository {
    async fn find(&self, id: UserId) -> Result<Option<Profile>, PlatformError> {
        let model = profiles::Entity::find_by_id(id.0)
            .one(self.db.as_ref())
            .await
            .context("find profile")?;
        Ok(model.map(profile_from_model))
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<ProfileSummary>, PlatformError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = profiles::Entity::find()
            .filter(profiles::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(self.db.as_ref())
            .await
            .context("find profile summaries")?;
        Ok(models.into_iter().map(summary_from_model).collect())
    }

    async fn update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, PlatformError> {
        let result = profiles::ActiveModel {
            id: Set(id.0),
            display_name: Set(update.display_name.clone()),
            bio: Set(update.bio.clone()),
            journey_stage: Set(update.journey_stage.map(|s| s.as_str().to_owned())),
            location: Set(update.location.clone()),
            interests: Set(update.interests.clone()),
            updated_at: Set(updated_at),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await;
        let updated = none_if_missing(result).context("update profile")?;
        Ok(updated.is_some())
    }

    async fn list_newest_first(&self) -> Result<Vec<Profile>, PlatformError> {
        let models = profiles::Entity::find()
            .order_by_desc(profiles::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list profiles")?;
        Ok(models.into_iter().map(profile_from_model).collect())
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        let count = profiles::Entity::find()
            .count(self.db.as_ref())
            .await
            .context("count profiles")?;
        Ok(count)
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: UserId(model.id),
        display_name: model.display_name,
        bio: model.bio,
        journey_stage: model.journey_stage.as_deref().and_then(|s| s.parse().ok()),
        is_mentor: model.is_mentor,
        location: model.location,
        interests: model.interests,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn summary_from_model(model: profiles::Model) -> ProfileSummary {
    ProfileSummary {
        id: UserId(model.id),
        display_name: model.display_name,
        journey_stage: model.journey_stage.as_deref().and_then(|s| s.parse().ok()),
        is_mentor: model.is_mentor,
    }
}

fn listed<T>(record: T, creator: Option<profiles::Model>) -> Listed<T> {
    Listed {
        record,
        creator_name: creator.and_then(|p| p.display_name),
    }
}

// ── Resource repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResourceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ContentStore for DbResourceRepository {
    type Draft = ResourceDraft;
    type Record = Resource;

    async fn insert(
        &self,
        id: Uuid,
        draft: &ResourceDraft,
        audit: Audit,
    ) -> Result<Resource, PlatformError> {
        let mut model = resource_active_model(draft);
        model.id = Set(id);
        model.created_by = Set(audit.created_by.map(|u| u.0));
        model.updated_by = Set(audit.updated_by.map(|u| u.0));
        model.created_at = Set(audit.created_at);
        model.updated_at = Set(audit.updated_at);
        let model = model.insert(self.db.as_ref()).await.context("insert resource")?;
        Ok(resource_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &ResourceDraft,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Resource>, PlatformError> {
        let mut model = resource_active_model(draft);
        model.id = Set(id);
        model.updated_by = Set(Some(updated_by.0));
        model.updated_at = Set(updated_at);
        let updated = none_if_missing(model.update(self.db.as_ref()).await).context("update resource")?;
        Ok(updated.map(resource_from_model))
    }

    async fn list_for_admin(&self) -> Result<Vec<Listed<Resource>>, PlatformError> {
        let rows = resources::Entity::find()
            .find_also_related(profiles::Entity)
            .order_by_desc(resources::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list resources for admin")?;
        Ok(rows
            .into_iter()
            .map(|(model, creator)| listed(resource_from_model(model), creator))
            .collect())
    }

    async fn list_published(&self) -> Result<Vec<Resource>, PlatformError> {
        let models = resources::Entity::find()
            .filter(resources::Column::IsPublished.eq(true))
            .order_by_desc(resources::Column::IsFeatured)
            .order_by_desc(resources::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list published resources")?;
        Ok(models.into_iter().map(resource_from_model).collect())
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        let count = resources::Entity::find()
            .count(self.db.as_ref())
            .await
            .context("count resources")?;
        Ok(count)
    }
}

/// Editable columns only; audit columns stay `NotSet`.
fn resource_active_model(draft: &ResourceDraft) -> resources::ActiveModel {
    resources::ActiveModel {
        title: Set(draft.title.clone()),
        description: Set(draft.description.clone()),
        category: Set(draft.category.as_str().to_owned()),
        file_url: Set(draft.file_url.clone()),
        file_name: Set(draft.file_name.clone()),
        file_size: Set(draft.file_size),
        file_type: Set(draft.file_type.clone()),
        is_featured: Set(draft.is_featured),
        is_published: Set(draft.is_published),
        ..Default::default()
    }
}

fn resource_from_model(model: resources::Model) -> Resource {
    Resource {
        id: model.id,
        draft: ResourceDraft {
            title: model.title,
            description: model.description,
            category: model.category.parse().unwrap_or(ResourceCategory::Other),
            is_featured: model.is_featured,
            is_published: model.is_published,
            file_url: model.file_url,
            file_name: model.file_name,
            file_size: model.file_size,
            file_type: model.file_type,
        },
        audit: Audit {
            created_by: user_id(model.created_by),
            updated_by: user_id(model.updated_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        },
    }
}

// ── Testimonial repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTestimonialRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ContentStore for DbTestimonialRepository {
    type Draft = TestimonialDraft;
    type Record = Testimonial;

    async fn insert(
        &self,
        id: Uuid,
        draft: &TestimonialDraft,
        audit: Audit,
    ) -> Result<Testimonial, PlatformError> {
        let mut model = testimonial_active_model(draft);
        model.id = Set(id);
        model.created_by = Set(audit.created_by.map(|u| u.0));
        model.updated_by = Set(audit.updated_by.map(|u| u.0));
        model.created_at = Set(audit.created_at);
        model.updated_at = Set(audit.updated_at);
        let model = model.insert(self.db.as_ref()).await.context("insert testimonial")?;
        Ok(testimonial_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &TestimonialDraft,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Testimonial>, PlatformError> {
        let mut model = testimonial_active_model(draft);
        model.id = Set(id);
        model.updated_by = Set(Some(updated_by.0));
        model.updated_at = Set(updated_at);
        let updated =
            none_if_missing(model.update(self.db.as_ref()).await).context("update testimonial")?;
        Ok(updated.map(testimonial_from_model))
    }

    async fn list_for_admin(&self) -> Result<Vec<Listed<Testimonial>>, PlatformError> {
        let rows = testimonials::Entity::find()
            .find_also_related(profiles::Entity)
            .order_by_desc(testimonials::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list testimonials for admin")?;
        Ok(rows
            .into_iter()
            .map(|(model, creator)| listed(testimonial_from_model(model), creator))
            .collect())
    }

    async fn list_published(&self) -> Result<Vec<Testimonial>, PlatformError> {
        let models = testimonials::Entity::find()
            .filter(testimonials::Column::IsPublished.eq(true))
            .order_by_desc(testimonials::Column::IsFeatured)
            .order_by_desc(testimonials::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list published testimonials")?;
        Ok(models.into_iter().map(testimonial_from_model).collect())
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        let count = testimonials::Entity::find()
            .count(self.db.as_ref())
            .await
            .context("count testimonials")?;
        Ok(count)
    }
}

fn testimonial_active_model(draft: &TestimonialDraft) -> testimonials::ActiveModel {
    testimonials::ActiveModel {
        title: Set(draft.title.clone()),
        content: Set(draft.content.clone()),
        author_name: Set(draft.author_name.clone()),
        author_location: Set(draft.author_location.clone()),
        is_anonymous: Set(draft.is_anonymous),
        is_featured: Set(draft.is_featured),
        is_published: Set(draft.is_published),
        image_url: Set(draft.image_url.clone()),
        ..Default::default()
    }
}

fn testimonial_from_model(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        draft: TestimonialDraft {
            title: model.title,
            content: model.content,
            author_name: model.author_name,
            author_location: model.author_location,
            is_anonymous: model.is_anonymous,
            is_featured: model.is_featured,
            is_published: model.is_published,
            image_url: model.image_url,
        },
        audit: Audit {
            created_by: user_id(model.created_by),
            updated_by: user_id(model.updated_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        },
    }
}

// ── Bible study repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBibleStudyRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ContentStore for DbBibleStudyRepository {
    type Draft = BibleStudyDraft;
    type Record = BibleStudy;

    async fn insert(
        &self,
        id: Uuid,
        draft: &BibleStudyDraft,
        audit: Audit,
    ) -> Result<BibleStudy, PlatformError> {
        let mut model = bible_study_active_model(draft);
        model.id = Set(id);
        model.created_by = Set(audit.created_by.map(|u| u.0));
        model.updated_by = Set(audit.updated_by.map(|u| u.0));
        model.created_at = Set(audit.created_at);
        model.updated_at = Set(audit.updated_at);
        let model = model.insert(self.db.as_ref()).await.context("insert bible study")?;
        Ok(bible_study_from_model(model))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &BibleStudyDraft,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<BibleStudy>, PlatformError> {
        let mut model = bible_study_active_model(draft);
        model.id = Set(id);
        model.updated_by = Set(Some(updated_by.0));
        model.updated_at = Set(updated_at);
        let updated =
            none_if_missing(model.update(self.db.as_ref()).await).context("update bible study")?;
        Ok(updated.map(bible_study_from_model))
    }

    async fn list_for_admin(&self) -> Result<Vec<Listed<BibleStudy>>, PlatformError> {
        let rows = bible_studies::Entity::find()
            .find_also_related(profiles::Entity)
            .order_by_desc(bible_studies::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list bible studies for admin")?;
        Ok(rows
            .into_iter()
            .map(|(model, creator)| listed(bible_study_from_model(model), creator))
            .collect())
    }

    async fn list_published(&self) -> Result<Vec<BibleStudy>, PlatformError> {
        let models = bible_studies::Entity::find()
            .filter(bible_studies::Column::IsPublished.eq(true))
            .order_by_asc(bible_studies::Column::SeriesName)
            .order_by_asc(bible_studies::Column::LessonNumber)
            .all(self.db.as_ref())
            .await
            .context("list published bible studies")?;
        Ok(models.into_iter().map(bible_study_from_model).collect())
    }

    async fn count(&self) -> Result<u64, PlatformError> {
        let count = bible_studies::Entity::find()
            .count(self.db.as_ref())
            .await
            .context("count bible studies")?;
        Ok(count)
    }
}

fn bible_study_active_model(draft: &BibleStudyDraft) -> bible_studies::ActiveModel {
    bible_studies::ActiveModel {
        title: Set(draft.title.clone()),
        description: Set(draft.description.clone()),
        content: Set(draft.content.clone()),
        scripture_references: Set(serde_json::Value::from(draft.scripture_references.clone())),
        lesson_number: Set(draft.lesson_number),
        series_name: Set(draft.series_name.clone()),
        difficulty_level: Set(draft.difficulty_level.as_str().to_owned()),
        estimated_duration: Set(draft.estimated_duration),
        is_published: Set(draft.is_published),
        ..Default::default()
    }
}

fn bible_study_from_model(model: bible_studies::Model) -> BibleStudy {
    let scripture_references = model
        .scripture_references
        .as_array()
        .map(|refs| {
            refs.iter()
                .filter_map(|r| r.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default();
    BibleStudy {
        id: model.id,
        draft: BibleStudyDraft {
            title: model.title,
            description: model.description,
            content: model.content,
            scripture_references,
            lesson_number: model.lesson_number,
            series_name: model.series_name,
            difficulty_level: model
                .difficulty_level
                .parse()
                .unwrap_or(DifficultyLevel::Beginner),
            estimated_duration: model.estimated_duration,
            is_published: model.is_published,
        },
        audit: Audit {
            created_by: user_id(model.created_by),
            updated_by: user_id(model.updated_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        },
    }
}

// ── Website content repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWebsiteContentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl WebsiteContentRepository for DbWebsiteContentRepository {
    async fn list_sections(&self) -> Result<Vec<WebsiteSection>, PlatformError> {
        let models = website_content::Entity::find()
            .order_by_asc(website_content::Column::PageSection)
            .all(self.db.as_ref())
            .await
            .context("list website sections")?;
        Ok(models.into_iter().map(section_from_model).collect())
    }

    async fn update_content(
        &self,
        id: Uuid,
        content: &serde_json::Value,
        updated_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<WebsiteSection>, PlatformError> {
        let result = website_content::ActiveModel {
            id: Set(id),
            content: Set(content.clone()),
            updated_by: Set(Some(updated_by.0)),
            updated_at: Set(Some(updated_at)),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await;
        let updated = none_if_missing(result).context("update website section")?;
        Ok(updated.map(section_from_model))
    }
}

fn section_from_model(model: website_content::Model) -> WebsiteSection {
    WebsiteSection {
        id: model.id,
        page_section: model.page_section,
        content: model.content,
        updated_by: user_id(model.updated_by),
        updated_at: model.updated_at,
    }
}

// ── Post repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPostRepository {
    pub db: Arc<DatabaseConnection>,
}

impl DbPostRepository {
    /// Like and comment counts for the given posts, keyed by post id.
    async fn engagement(
        &self,
        post_ids: &[Uuid],
    ) -> Result<(HashMap<Uuid, u64>, HashMap<Uuid, u64>), PlatformError> {
        if post_ids.is_empty() {
            return Ok((HashMap::new(), HashMap::new()));
        }
        let likes: Vec<(Uuid, i64)> = post_likes::Entity::find()
            .select_only()
            .column(post_likes::Column::PostId)
            .column_as(Expr::col(post_likes::Column::UserId).count(), "count")
            .filter(post_likes::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(post_likes::Column::PostId)
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .context("count likes per post")?;
        let comments: Vec<(Uuid, i64)> = post_comments::Entity::find()
            .select_only()
            .column(post_comments::Column::PostId)
            .column_as(Expr::col(post_comments::Column::Id).count(), "count")
            .filter(post_comments::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(post_comments::Column::PostId)
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .context("count comments per post")?;
        let to_map = |rows: Vec<(Uuid, i64)>| {
            rows.into_iter()
                .map(|(id, n)| (id, u64::try_from(n).unwrap_or(0)))
                .collect::<HashMap<_, _>>()
        };
        Ok((to_map(likes), to_map(comments)))
    }
}

impl PostRepository for DbPostRepository {
    async fn create(&self, post: &Post) -> Result<(), PlatformError> {
        posts::ActiveModel {
            id: Set(post.id),
            author_id: Set(post.author_id.0),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            post_type: Set(post.post_type.as_str().to_owned()),
            is_anonymous: Set(post.is_anonymous),
            created_at: Set(post.created_at),
            updated_at: Set(post.created_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("insert post")?;
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<(Post, Option<ProfileSummary>)>, PlatformError> {
        let row = posts::Entity::find_by_id(id)
            .find_also_related(profiles::Entity)
            .one(self.db.as_ref())
            .await
            .context("find post")?;
        row.map(|(post, author)| Ok((post_from_model(post)?, author.map(summary_from_model))))
            .transpose()
    }

    async fn feed(&self, page: PageRequest) -> Result<Vec<PostWithStats>, PlatformError> {
        let rows = posts::Entity::find()
            .find_also_related(profiles::Entity)
            .order_by_desc(posts::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(self.db.as_ref())
            .await
            .context("list feed posts")?;

        let ids: Vec<Uuid> = rows.iter().map(|(post, _)| post.id).collect();
        let (likes, comments) = self.engagement(&ids).await?;

        rows.into_iter()
            .map(|(post, author)| {
                let id = post.id;
                Ok(PostWithStats {
                    post: post_from_model(post)?,
                    author: author.map(summary_from_model),
                    like_count: likes.get(&id).copied().unwrap_or(0),
                    comment_count: comments.get(&id).copied().unwrap_or(0),
                })
            })
            .collect()
    }

    async fn count_by_author(&self, author_id: UserId) -> Result<u64, PlatformError> {
        let count = posts::Entity::find()
            .filter(posts::Column::AuthorId.eq(author_id.0))
            .count(self.db.as_ref())
            .await
            .context("count posts by author")?;
        Ok(count)
    }
}

fn post_from_model(model: posts::Model) -> Result<Post, PlatformError> {
    let post_type: PostType = model
        .post_type
        .parse()
        .with_context(|| format!("post {} has unreadable post_type", model.id))?;
    Ok(Post {
        id: model.id,
        author_id: UserId(model.author_id),
        title: model.title,
        content: model.content,
        post_type,
        is_anonymous: model.is_anonymous,
        created_at: model.created_at,
    })
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl CommentRepository for DbCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<(), PlatformError> {
        post_comments::ActiveModel {
            id: Set(comment.id),
            post_id: Set(comment.post_id),
            author_id: Set(comment.author_id.0),
            content: Set(comment.content.clone()),
            created_at: Set(comment.created_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("insert comment")?;
        Ok(())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, PlatformError> {
        let rows = post_comments::Entity::find()
            .filter(post_comments::Column::PostId.eq(post_id))
            .find_also_related(profiles::Entity)
            .order_by_asc(post_comments::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list comments")?;
        Ok(rows
            .into_iter()
            .map(|(model, author)| CommentWithAuthor {
                comment: Comment {
                    id: model.id,
                    post_id: model.post_id,
                    author_id: UserId(model.author_id),
                    content: model.content,
                    created_at: model.created_at,
                },
                author: author.map(summary_from_model),
            })
            .collect())
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLikeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl LikeRepository for DbLikeRepository {
    async fn has_liked(&self, post_id: Uuid, user_id: UserId) -> Result<bool, PlatformError> {
        let model = post_likes::Entity::find_by_id((post_id, user_id.0))
            .one(self.db.as_ref())
            .await
            .context("find like")?;
        Ok(model.is_some())
    }

    async fn like(
        &self,
        post_id: Uuid,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), PlatformError> {
        let like = post_likes::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id.0),
            created_at: Set(at),
        };
        post_likes::Entity::insert(like)
            .on_conflict(
                OnConflict::columns([post_likes::Column::PostId, post_likes::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .context("insert like")?;
        Ok(())
    }

    async fn unlike(&self, post_id: Uuid, user_id: UserId) -> Result<(), PlatformError> {
        post_likes::Entity::delete_many()
            .filter(post_likes::Column::PostId.eq(post_id))
            .filter(post_likes::Column::UserId.eq(user_id.0))
            .exec(self.db.as_ref())
            .await
            .context("delete like")?;
        Ok(())
    }

    async fn count(&self, post_id: Uuid) -> Result<u64, PlatformError> {
        let count = post_likes::Entity::find()
            .filter(post_likes::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .context("count likes")?;
        Ok(count)
    }
}

// ── Message repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMessageRepository {
    pub db: Arc<DatabaseConnection>,
}

impl MessageRepository for DbMessageRepository {
    async fn create(&self, message: &Message) -> Result<(), PlatformError> {
        messages::ActiveModel {
            id: Set(message.id),
            sender_id: Set(message.sender_id.0),
            receiver_id: Set(message.receiver_id.0),
            content: Set(message.content.clone()),
            created_at: Set(message.created_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("insert message")?;
        Ok(())
    }

    async fn thread(&self, a: UserId, b: UserId) -> Result<Vec<Message>, PlatformError> {
        let direction = |from: UserId, to: UserId| {
            Condition::all()
                .add(messages::Column::SenderId.eq(from.0))
                .add(messages::Column::ReceiverId.eq(to.0))
        };
        let models = messages::Entity::find()
            .filter(Condition::any().add(direction(a, b)).add(direction(b, a)))
            .order_by_asc(messages::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list message thread")?;
        Ok(models.into_iter().map(message_from_model).collect())
    }

    async fn involving(&self, user_id: UserId) -> Result<Vec<Message>, PlatformError> {
        let models = messages::Entity::find()
            .filter(
                Condition::any()
                    .add(messages::Column::SenderId.eq(user_id.0))
                    .add(messages::Column::ReceiverId.eq(user_id.0)),
            )
            .order_by_desc(messages::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list messages involving user")?;
        Ok(models.into_iter().map(message_from_model).collect())
    }
}

fn message_from_model(model: messages::Model) -> Message {
    Message {
        id: model.id,
        sender_id: UserId(model.sender_id),
        receiver_id: UserId(model.receiver_id),
        content: model.content,
        created_at: model.created_at,
    }
}
