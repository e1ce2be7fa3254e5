//! Administrative roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrative role held by a user.
///
/// Roles form a single linear hierarchy: every role implies every capability
/// of the roles ranked below it. Variant order is the rank order, so the
/// derived `Ord` is the hierarchy.
///
/// Wire/storage format: snake_case string (`"moderator"`, `"content_admin"`,
/// `"super_admin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Moderator = 1,
    ContentAdmin = 2,
    SuperAdmin = 3,
}

/// Returned when a string is not one of the known role names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin role: {0}")]
pub struct UnknownAdminRole(pub String);

impl AdminRole {
    pub const ALL: [AdminRole; 3] = [Self::Moderator, Self::ContentAdmin, Self::SuperAdmin];

    /// Numeric rank: moderator 1, content_admin 2, super_admin 3.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// `true` if this role is at least as privileged as `minimum`.
    pub fn satisfies(self, minimum: AdminRole) -> bool {
        self >= minimum
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Moderator => "moderator",
            Self::ContentAdmin => "content_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Human-readable label, e.g. "Content Admin".
    pub fn label(self) -> &'static str {
        match self {
            Self::Moderator => "Moderator",
            Self::ContentAdmin => "Content Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = UnknownAdminRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moderator" => Ok(Self::Moderator),
            "content_admin" => Ok(Self::ContentAdmin),
            "super_admin" => Ok(Self::SuperAdmin),
            other => Err(UnknownAdminRole(other.to_owned())),
        }
    }
}
