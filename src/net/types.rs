//! Wire DTOs for the session endpoints.
//!
//! DESIGN
//! ======
//! The identity server emits provider-flavored field names (`kakao_id`,
//! `nickname`, `profile_image`); serde aliases accept those alongside the
//! neutral names so the rest of the client never sees provider vocabulary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Label shown when a profile carries neither a display name nor an email.
pub const FALLBACK_USER_LABEL: &str = "User";

/// The signed-in user as returned by the current-user endpoint.
///
/// Immutable once built; a changed profile replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Opaque internal identifier.
    pub id: String,
    /// Numeric identifier issued by the identity provider.
    #[serde(alias = "kakao_id")]
    pub external_id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "nickname")]
    pub display_name: Option<String>,
    #[serde(default, alias = "profile_image")]
    pub avatar_url: Option<String>,
    /// Informational only.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Informational only.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Name to show in the header: display name, then email, then a generic label.
    #[must_use]
    pub fn display_label(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.email.as_deref()))
            .unwrap_or(FALLBACK_USER_LABEL)
    }

    /// Avatar URL, ignoring empty strings.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        non_empty(self.avatar_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Success envelope: `{ "data": ... }`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Failure envelope: `{ "error": "..." }`. Only ever logged.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
