use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sanctuary_auth_types::session::{MaybeSession, RequireSession, Session};
use sanctuary_domain::content::PostType;
use sanctuary_domain::pagination::PageRequest;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{FEED_PAGE_SIZE, PostWithStats, ProfileSummary};
use crate::error::PlatformError;
use crate::handlers::page::{PageError, admit_member};
use crate::handlers::view::{CommentResponse, MemberResponse, PostResponse};
use crate::state::AppState;
use crate::usecase::community::{
    AddCommentUseCase, CreatePostInput, CreatePostUseCase, FeedUseCase, PostDetailUseCase,
    ToggleLikeUseCase,
};

async fn own_summary(
    state: &AppState,
    session: &Session,
) -> Result<Option<ProfileSummary>, PlatformError> {
    let summaries = state.profile_repo().find_summaries(&[session.user_id]).await?;
    Ok(summaries.into_iter().next())
}

// ── GET /community ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeedQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn feed(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<PostResponse>>, PageError> {
    admit_member(session)?;
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(FEED_PAGE_SIZE),
        page: query.page.unwrap_or(1),
    };
    let uc = FeedUseCase {
        posts: state.post_repo(),
    };
    let posts = uc.execute(page).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

// ── POST /community/posts ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    pub post_type: PostType,
    #[serde(default)]
    pub is_anonymous: bool,
}

pub async fn create_post(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), PlatformError> {
    let uc = CreatePostUseCase {
        posts: state.post_repo(),
    };
    let post = uc
        .execute(
            session.user_id,
            CreatePostInput {
                title: body.title,
                content: body.content,
                post_type: body.post_type,
                is_anonymous: body.is_anonymous,
            },
        )
        .await?;
    let author = own_summary(&state, &session).await?;
    let view = PostWithStats {
        post,
        author,
        like_count: 0,
        comment_count: 0,
    };
    Ok((StatusCode::CREATED, Json(view.into())))
}

// ── GET /community/posts/{id} ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub user_liked: bool,
    pub comments: Vec<CommentResponse>,
}

pub async fn post_detail(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, PageError> {
    let session = admit_member(session)?;
    let uc = PostDetailUseCase {
        posts: state.post_repo(),
        comments: state.comment_repo(),
        likes: state.like_repo(),
    };
    let detail = uc.execute(session.user_id, post_id).await?;
    let post = PostWithStats {
        post: detail.post,
        author: detail.author,
        like_count: detail.like_count,
        comment_count: detail.comment_count,
    };
    Ok(Json(PostDetailResponse {
        post: post.into(),
        user_liked: detail.user_liked,
        comments: detail.comments.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /community/posts/{id}/comments ──────────────────────────────────────

#[derive(Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn add_comment(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(post_id): Path<Uuid>,
    Json(body): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), PlatformError> {
    let uc = AddCommentUseCase {
        posts: state.post_repo(),
        comments: state.comment_repo(),
    };
    let comment = uc
        .execute(session.user_id, post_id, &body.content)
        .await?;
    let author = own_summary(&state, &session).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            id: comment.id,
            content: comment.content,
            author: MemberResponse::new(comment.author_id, author),
            created_at: comment.created_at,
        }),
    ))
}

// ── POST /community/posts/{id}/like ──────────────────────────────────────────

#[derive(Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

pub async fn toggle_like(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(post_id): Path<Uuid>,
) -> Result<Json<LikeResponse>, PlatformError> {
    let uc = ToggleLikeUseCase {
        posts: state.post_repo(),
        likes: state.like_repo(),
    };
    let like = uc.execute(session.user_id, post_id).await?;
    Ok(Json(LikeResponse {
        liked: like.liked,
        like_count: like.like_count,
    }))
}
