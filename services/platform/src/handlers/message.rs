use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use sanctuary_auth_types::session::{MaybeSession, RequireSession};
use sanctuary_domain::id::UserId;

use crate::error::PlatformError;
use crate::handlers::page::{PageError, admit_member};
use crate::handlers::view::{MemberResponse, MessageResponse, ProfileResponse};
use crate::state::AppState;
use crate::usecase::message::{ConversationsUseCase, SendMessageUseCase, ThreadUseCase};

// ── GET /messages ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ConversationResponse {
    pub counterpart: MemberResponse,
    pub last_message: MessageResponse,
}

pub async fn list_conversations(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Result<Json<Vec<ConversationResponse>>, PageError> {
    let session = admit_member(session)?;
    let uc = ConversationsUseCase {
        messages: state.message_repo(),
        profiles: state.profile_repo(),
    };
    let conversations = uc.execute(session.user_id).await?;
    Ok(Json(
        conversations
            .into_iter()
            .map(|c| ConversationResponse {
                counterpart: MemberResponse::new(c.counterpart_id, c.counterpart),
                last_message: c.last_message.into(),
            })
            .collect(),
    ))
}

// ── GET /messages/{user_id} ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ThreadResponse {
    pub other: ProfileResponse,
    pub messages: Vec<MessageResponse>,
}

pub async fn thread(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Path(other_id): Path<UserId>,
) -> Result<Json<ThreadResponse>, PageError> {
    let session = admit_member(session)?;
    let uc = ThreadUseCase {
        messages: state.message_repo(),
        profiles: state.profile_repo(),
    };
    let thread = uc.execute(session.user_id, other_id).await?;
    Ok(Json(ThreadResponse {
        other: thread.other.into(),
        messages: thread.messages.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /messages/{user_id} ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn send_message(
    State(state): State<AppState>,
    RequireSession(session): RequireSession,
    Path(receiver_id): Path<UserId>,
    Json(body): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), PlatformError> {
    let uc = SendMessageUseCase {
        messages: state.message_repo(),
        profiles: state.profile_repo(),
    };
    let message = uc
        .execute(session.user_id, receiver_id, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}
