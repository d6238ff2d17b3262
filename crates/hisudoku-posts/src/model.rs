//! Sudoku post records and caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a sudoku post.
///
/// Identifiers grow with creation order, so a larger id means a newer post.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PostId(u64);

impl PostId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Identifier of a user account, as issued by the account service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Permission level of an account.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular account; may only manage its own posts.
    #[default]
    User,
    /// An administrator; may manage any post and any account.
    Admin,
    /// A banned account; may not manage any post, not even its own.
    Banned,
}

/// The authenticated caller of a post operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account performing the operation.
    pub user_id: UserId,
    /// Permission level of that account.
    pub role: Role,
}

impl Principal {
    /// Creates a principal for a regular account.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::User,
        }
    }

    /// Creates a principal for an administrator.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Admin,
        }
    }

    /// Returns `true` if this caller may update or remove a post by `author`.
    #[must_use]
    pub fn can_manage(&self, author: UserId) -> bool {
        match self.role {
            Role::Admin => true,
            Role::User => self.user_id == author,
            Role::Banned => false,
        }
    }
}

/// A shared sudoku board.
///
/// `content` holds the board text exactly as submitted; it is parsed only
/// while being validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuPost {
    /// Post identifier.
    pub id: PostId,
    /// Account that created the post.
    pub author: UserId,
    /// Board text in the canonical encoding.
    pub content: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time of the last content change.
    pub updated_at: DateTime<Utc>,
    /// Number of accounts that favorited the post; always `favorited_by.len()`.
    pub favorite_count: usize,
    /// Accounts that favorited the post, in favoriting order.
    pub favorited_by: Vec<UserId>,
}

impl SudokuPost {
    /// Returns `true` if `user` has favorited this post.
    #[must_use]
    pub fn is_favorited_by(&self, user: UserId) -> bool {
        self.favorited_by.contains(&user)
    }

    /// Adds `user` to the favorites, or removes them if already present.
    ///
    /// Returns `true` if the post is favorited by `user` afterwards.
    pub fn toggle_favorite(&mut self, user: UserId) -> bool {
        let favorited = if let Some(i) = self.favorited_by.iter().position(|u| *u == user) {
            self.favorited_by.remove(i);
            false
        } else {
            self.favorited_by.push(user);
            true
        };
        self.favorite_count = self.favorited_by.len();
        favorited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> SudokuPost {
        let now = Utc::now();
        SudokuPost {
            id: PostId::new(1),
            author: UserId::new(10),
            content: "000.000.000;".repeat(9),
            created_at: now,
            updated_at: now,
            favorite_count: 0,
            favorited_by: vec![],
        }
    }

    #[test]
    fn test_can_manage() {
        let author = UserId::new(10);
        assert!(Principal::user(author).can_manage(author));
        assert!(!Principal::user(UserId::new(11)).can_manage(author));
        assert!(Principal::admin(UserId::new(11)).can_manage(author));

        let banned = Principal {
            user_id: author,
            role: Role::Banned,
        };
        assert!(!banned.can_manage(author));
    }

    #[test]
    fn test_toggle_favorite() {
        let mut post = post();
        let alice = UserId::new(1);
        let bob = UserId::new(2);

        assert!(post.toggle_favorite(alice));
        assert!(post.toggle_favorite(bob));
        assert_eq!(post.favorite_count, 2);
        assert_eq!(post.favorited_by, [alice, bob]);

        assert!(!post.toggle_favorite(alice));
        assert_eq!(post.favorite_count, 1);
        assert!(!post.is_favorited_by(alice));
        assert!(post.is_favorited_by(bob));
    }

    #[test]
    fn test_display_ids() {
        assert_eq!(PostId::new(42).to_string(), "42");
        assert_eq!(UserId::from(7).to_string(), "7");
    }
}
