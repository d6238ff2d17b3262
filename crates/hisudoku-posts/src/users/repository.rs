use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{Role, UserId, users::User};

/// Storage backend for user accounts.
///
/// Like [`PostRepository`], implementations assign ids in insertion order.
/// They do not enforce unique usernames; [`UserService`] checks that before
/// writing.
///
/// [`PostRepository`]: crate::PostRepository
/// [`UserService`]: crate::users::UserService
pub trait UserRepository {
    /// Stores a new account and returns it.
    fn insert(&mut self, username: String, role: Role, now: DateTime<Utc>) -> User;

    /// Returns the account with the given id.
    fn get(&self, id: UserId) -> Option<User>;

    /// Returns the account with the given username.
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// Renames an account and returns the updated account.
    fn update_username(
        &mut self,
        id: UserId,
        username: String,
        now: DateTime<Utc>,
    ) -> Option<User>;

    /// Changes the role of an account and returns the updated account.
    fn update_role(&mut self, id: UserId, role: Role, now: DateTime<Utc>) -> Option<User>;

    /// Deletes an account and returns it.
    fn remove(&mut self, id: UserId) -> Option<User>;

    /// Returns up to `limit` accounts, newest first.
    fn latest(&self, limit: usize) -> Vec<User>;
}

/// A [`UserRepository`] that keeps accounts in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: BTreeMap<UserId, User>,
    next_id: u64,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if no account is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn modify(
        &mut self,
        id: UserId,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut User),
    ) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        f(user);
        user.updated_at = now;
        Some(user.clone())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&mut self, username: String, role: Role, now: DateTime<Utc>) -> User {
        self.next_id += 1;
        let user = User {
            id: UserId::new(self.next_id),
            username,
            role,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(user.id, user.clone());
        user
    }

    fn get(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    fn update_username(
        &mut self,
        id: UserId,
        username: String,
        now: DateTime<Utc>,
    ) -> Option<User> {
        self.modify(id, now, |user| user.username = username)
    }

    fn update_role(&mut self, id: UserId, role: Role, now: DateTime<Utc>) -> Option<User> {
        self.modify(id, now, |user| user.role = role)
    }

    fn remove(&mut self, id: UserId) -> Option<User> {
        self.users.remove(&id)
    }

    fn latest(&self, limit: usize) -> Vec<User> {
        self.users.values().rev().take(limit).cloned().collect()
    }
}
