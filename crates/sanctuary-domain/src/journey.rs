//! Journey stage: a member's self-described progress, used for display and badging.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStage {
    Questioning,
    #[serde(alias = "beginning")]
    EarlyJourney,
    #[serde(alias = "progressing")]
    ActiveTransition,
    #[serde(alias = "established")]
    EstablishedFaith,
    Mentor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown journey stage: {0}")]
pub struct UnknownJourneyStage(pub String);

impl JourneyStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Questioning => "questioning",
            Self::EarlyJourney => "early_journey",
            Self::ActiveTransition => "active_transition",
            Self::EstablishedFaith => "established_faith",
            Self::Mentor => "mentor",
        }
    }
}

impl fmt::Display for JourneyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical names and the sign-up form spellings
/// (`beginning`, `progressing`, `established`).
impl FromStr for JourneyStage {
    type Err = UnknownJourneyStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "questioning" => Ok(Self::Questioning),
            "early_journey" | "beginning" => Ok(Self::EarlyJourney),
            "active_transition" | "progressing" => Ok(Self::ActiveTransition),
            "established_faith" | "established" => Ok(Self::EstablishedFaith),
            "mentor" => Ok(Self::Mentor),
            other => Err(UnknownJourneyStage(other.to_owned())),
        }
    }
}
