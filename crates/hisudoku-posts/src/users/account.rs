use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Principal, Role, UserId};

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: UserId,
    /// Unique display name.
    pub username: String,
    /// Permission level.
    pub role: Role,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Time of the last username or role change.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns the principal this account acts as.
    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.id,
            role: self.role,
        }
    }
}
