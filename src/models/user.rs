use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder returned in place of the stored password digest on every read.
pub const REDACTED_PASSWORD: &str = "***";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Unspecified,
    User,
    Admin,
}

impl Role {
    /// Name under which the role is stored in the `user_role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unspecified => "UNSPECIFIED",
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Reverse of [`Role::as_str`]. Unknown names map to `Unspecified`.
    pub fn from_name(name: &str) -> Role {
        match name {
            "USER" => Role::User,
            "ADMIN" => Role::Admin,
            _ => Role::Unspecified,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
