use chrono::Utc;
use uuid::Uuid;

use sanctuary_domain::content::PostType;
use sanctuary_domain::id::UserId;
use sanctuary_domain::pagination::PageRequest;

use crate::domain::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::domain::types::{Comment, CommentWithAuthor, Post, PostWithStats, ProfileSummary};
use crate::error::PlatformError;
use crate::usecase::content::{optional_text, required_text};

// ── CreatePost ───────────────────────────────────────────────────────────────

pub struct CreatePostInput {
    pub title: Option<String>,
    pub content: String,
    pub post_type: PostType,
    pub is_anonymous: bool,
}

pub struct CreatePostUseCase<R: PostRepository> {
    pub posts: R,
}

impl<R: PostRepository> CreatePostUseCase<R> {
    /// The real author id is always stored, anonymous or not.
    pub async fn execute(&self, author_id: UserId, input: CreatePostInput) -> Result<Post, PlatformError> {
        let post = Post {
            id: Uuid::new_v4(),
            author_id,
            title: optional_text(input.title),
            content: required_text("content", &input.content)?,
            post_type: input.post_type,
            is_anonymous: input.is_anonymous,
            created_at: Utc::now(),
        };
        self.posts.create(&post).await?;
        Ok(post)
    }
}

// ── Feed ─────────────────────────────────────────────────────────────────────

pub struct FeedUseCase<R: PostRepository> {
    pub posts: R,
}

impl<R: PostRepository> FeedUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<PostWithStats>, PlatformError> {
        self.posts.feed(page.clamped()).await
    }
}

// ── PostDetail ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct PostDetail {
    pub post: Post,
    pub author: Option<ProfileSummary>,
    pub like_count: u64,
    pub comment_count: u64,
    pub user_liked: bool,
    pub comments: Vec<CommentWithAuthor>,
}

pub struct PostDetailUseCase<P, C, L>
where
    P: PostRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub posts: P,
    pub comments: C,
    pub likes: L,
}

impl<P, C, L> PostDetailUseCase<P, C, L>
where
    P: PostRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub async fn execute(&self, viewer: UserId, post_id: Uuid) -> Result<PostDetail, PlatformError> {
        let (post, author) = self
            .posts
            .find(post_id)
            .await?
            .ok_or(PlatformError::PostNotFound)?;
        let comments = self.comments.list_for_post(post_id).await?;
        let like_count = self.likes.count(post_id).await?;
        let user_liked = self.likes.has_liked(post_id, viewer).await?;
        Ok(PostDetail {
            post,
            author,
            like_count,
            comment_count: u64::try_from(comments.len()).unwrap_or(u64::MAX),
            user_liked,
            comments,
        })
    }
}

// ── AddComment ───────────────────────────────────────────────────────────────

pub struct AddCommentUseCase<P: PostRepository, C: CommentRepository> {
    pub posts: P,
    pub comments: C,
}

impl<P: PostRepository, C: CommentRepository> AddCommentUseCase<P, C> {
    pub async fn execute(
        &self,
        author_id: UserId,
        post_id: Uuid,
        content: &str,
    ) -> Result<Comment, PlatformError> {
        let content = required_text("content", content)?;
        if self.posts.find(post_id).await?.is_none() {
            return Err(PlatformError::PostNotFound);
        }
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        };
        self.comments.create(&comment).await?;
        Ok(comment)
    }
}

// ── ToggleLike ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u64,
}

/// Read-then-write toggle. Concurrent likes from one user collapse into a
/// single row at the store; a stale read can still double-toggle.
pub struct ToggleLikeUseCase<P: PostRepository, L: LikeRepository> {
    pub posts: P,
    pub likes: L,
}

impl<P: PostRepository, L: LikeRepository> ToggleLikeUseCase<P, L> {
    pub async fn execute(&self, user_id: UserId, post_id: Uuid) -> Result<LikeState, PlatformError> {
        if self.posts.find(post_id).await?.is_none() {
            return Err(PlatformError::PostNotFound);
        }
        let liked = self.likes.has_liked(post_id, user_id).await?;
        if liked {
            self.likes.unlike(post_id, user_id).await?;
        } else {
            self.likes.like(post_id, user_id, Utc::now()).await?;
        }
        let like_count = self.likes.count(post_id).await?;
        Ok(LikeState {
            liked: !liked,
            like_count,
        })
    }
}
