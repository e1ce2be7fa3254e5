//! Enumerated fields of content records and community posts.
//!
//! Each enum is stored as its snake_case name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a stored or submitted value is not a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

/// Category of a downloadable resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    BibleStudy,
    Testimony,
    #[default]
    Guide,
    Book,
    Audio,
    Video,
    Other,
}

impl ResourceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BibleStudy => "bible_study",
            Self::Testimony => "testimony",
            Self::Guide => "guide",
            Self::Book => "book",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

impl FromStr for ResourceCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bible_study" => Ok(Self::BibleStudy),
            "testimony" => Ok(Self::Testimony),
            "guide" => Ok(Self::Guide),
            "book" => Ok(Self::Book),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "other" => Ok(Self::Other),
            other => Err(UnknownVariant {
                field: "category",
                value: other.to_owned(),
            }),
        }
    }
}

/// Difficulty of a bible study.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(UnknownVariant {
                field: "difficulty_level",
                value: other.to_owned(),
            }),
        }
    }
}

/// Kind of a community post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Testimony,
    PrayerRequest,
    Encouragement,
    Question,
    Resource,
}

impl PostType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Testimony => "testimony",
            Self::PrayerRequest => "prayer_request",
            Self::Encouragement => "encouragement",
            Self::Question => "question",
            Self::Resource => "resource",
        }
    }
}

impl FromStr for PostType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "testimony" => Ok(Self::Testimony),
            "prayer_request" => Ok(Self::PrayerRequest),
            "encouragement" => Ok(Self::Encouragement),
            "question" => Ok(Self::Question),
            "resource" => Ok(Self::Resource),
            other => Err(UnknownVariant {
                field: "post_type",
                value: other.to_owned(),
            }),
        }
    }
}
