use std::collections::{HashMap, HashSet};

use chrono::Utc;
use uuid::Uuid;

use sanctuary_domain::id::UserId;

use crate::domain::repository::{MessageRepository, ProfileRepository};
use crate::domain::types::{Message, Profile, ProfileSummary};
use crate::error::PlatformError;
use crate::usecase::content::required_text;

// ── SendMessage ──────────────────────────────────────────────────────────────

pub struct SendMessageUseCase<M: MessageRepository, P: ProfileRepository> {
    pub messages: M,
    pub profiles: P,
}

impl<M: MessageRepository, P: ProfileRepository> SendMessageUseCase<M, P> {
    pub async fn execute(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: &str,
    ) -> Result<Message, PlatformError> {
        let content = required_text("content", content)?;
        if self.profiles.find(receiver_id).await?.is_none() {
            return Err(PlatformError::ProfileNotFound);
        }
        let message = Message {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            content,
            created_at: Utc::now(),
        };
        self.messages.create(&message).await?;
        Ok(message)
    }
}

// ── Thread ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Thread {
    pub other: Profile,
    pub messages: Vec<Message>,
}

pub struct ThreadUseCase<M: MessageRepository, P: ProfileRepository> {
    pub messages: M,
    pub profiles: P,
}

impl<M: MessageRepository, P: ProfileRepository> ThreadUseCase<M, P> {
    pub async fn execute(&self, me: UserId, other_id: UserId) -> Result<Thread, PlatformError> {
        let other = self
            .profiles
            .find(other_id)
            .await?
            .ok_or(PlatformError::ProfileNotFound)?;
        let messages = self.messages.thread(me, other_id).await?;
        Ok(Thread { other, messages })
    }
}

// ── Conversations ────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Conversation {
    pub counterpart_id: UserId,
    pub counterpart: Option<ProfileSummary>,
    pub last_message: Message,
}

pub struct ConversationsUseCase<M: MessageRepository, P: ProfileRepository> {
    pub messages: M,
    pub profiles: P,
}

impl<M: MessageRepository, P: ProfileRepository> ConversationsUseCase<M, P> {
    /// One entry per counterpart, ordered by latest message, newest first.
    pub async fn execute(&self, me: UserId) -> Result<Vec<Conversation>, PlatformError> {
        let messages = self.messages.involving(me).await?;

        let mut seen = HashSet::new();
        let latest: Vec<Message> = messages
            .into_iter()
            .filter(|m| seen.insert(m.counterpart(me)))
            .collect();

        let ids: Vec<UserId> = latest.iter().map(|m| m.counterpart(me)).collect();
        let mut summaries: HashMap<UserId, ProfileSummary> = self
            .profiles
            .find_summaries(&ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(latest
            .into_iter()
            .map(|last_message| {
                let counterpart_id = last_message.counterpart(me);
                Conversation {
                    counterpart_id,
                    counterpart: summaries.remove(&counterpart_id),
                    last_message,
                }
            })
            .collect())
    }
}
