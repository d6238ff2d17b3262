use chrono::Utc;

use crate::{
    Principal, Role, SudokuPost, UserError, UserId,
    users::{User, UserRepository},
};

/// Settings for [`UserService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Shortest accepted username, in characters.
    pub min_username_len: usize,
    /// Upper bound on the number of accounts a single feed call returns.
    pub max_feed_limit: usize,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            min_username_len: 5,
            max_feed_limit: 50,
        }
    }
}

/// Looks up, lists, renames, and administers user accounts.
///
/// Account owners may rename or remove their own account. Renaming, promoting,
/// banning, or removing someone else's account requires an administrator.
///
/// # Examples
///
/// ```
/// use hisudoku_posts::{
///     UserError,
///     users::{InMemoryUserRepository, UserService},
/// };
///
/// let mut service = UserService::new(InMemoryUserRepository::new());
/// let alice = service.register("alice")?;
/// let bobby = service.register("bobby")?;
///
/// assert_eq!(service.find_by_username("alice")?, alice);
/// assert!(service.register("alice").unwrap_err().is_username_taken());
///
/// let err = service.grant_admin(&alice.principal(), bobby.id).unwrap_err();
/// assert!(err.is_forbidden());
/// # Ok::<(), UserError>(())
/// ```
#[derive(Debug)]
pub struct UserService<R> {
    repository: R,
    config: UserServiceConfig,
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, UserServiceConfig::default())
    }

    /// Creates a service with the given configuration.
    #[must_use]
    pub fn with_config(repository: R, config: UserServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &UserServiceConfig {
        &self.config
    }

    /// Returns the underlying repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates a regular account with the given username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UsernameTooShort`] or [`UserError::UsernameTaken`]
    /// if the username is rejected.
    pub fn register(&mut self, username: impl Into<String>) -> Result<User, UserError> {
        let username = username.into();
        self.check_username(None, &username)?;
        let user = self.repository.insert(username, Role::User, Utc::now());
        log::info!("registered user {} as {:?}", user.id, user.username);
        Ok(user)
    }

    /// Returns an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no such account exists.
    pub fn find_by_id(&self, id: UserId) -> Result<User, UserError> {
        self.repository.get(id).ok_or(UserError::NotFound(id))
    }

    /// Returns an account by username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UsernameNotFound`] if no account has that name.
    pub fn find_by_username(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .ok_or_else(|| UserError::UsernameNotFound(username.to_owned()))
    }

    /// Returns the caller's own account.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if the account no longer exists.
    pub fn find_me(&self, principal: &Principal) -> Result<User, UserError> {
        self.find_by_id(principal.user_id)
    }

    /// Returns the account that created `post`.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if the author's account no longer exists.
    pub fn find_author(&self, post: &SudokuPost) -> Result<User, UserError> {
        self.find_by_id(post.author)
    }

    /// Returns the newest accounts, at most `limit` and never more than
    /// [`UserServiceConfig::max_feed_limit`].
    #[must_use]
    pub fn feed(&self, limit: usize) -> Vec<User> {
        self.repository.latest(limit.min(self.config.max_feed_limit))
    }

    /// Renames the caller's own account.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Forbidden`] if the caller is banned,
    /// [`UserError::NotFound`] if the account no longer exists, and
    /// [`UserError::UsernameTooShort`] or [`UserError::UsernameTaken`] if the
    /// username is rejected.
    pub fn update_my_username(
        &mut self,
        principal: &Principal,
        username: impl Into<String>,
    ) -> Result<User, UserError> {
        if principal.role.is_banned() {
            return Err(Self::forbidden(principal, principal.user_id));
        }
        self.rename(principal, principal.user_id, username.into())
    }

    /// Renames any account. Administrators only.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Forbidden`] unless the caller is an administrator,
    /// [`UserError::NotFound`] if no such account exists, and
    /// [`UserError::UsernameTooShort`] or [`UserError::UsernameTaken`] if the
    /// username is rejected.
    pub fn update_username(
        &mut self,
        principal: &Principal,
        target: UserId,
        username: impl Into<String>,
    ) -> Result<User, UserError> {
        Self::require_admin(principal, target)?;
        self.rename(principal, target, username.into())
    }

    /// Makes an account an administrator. Administrators only.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Forbidden`] unless the caller is an administrator
    /// and [`UserError::NotFound`] if no such account exists.
    pub fn grant_admin(
        &mut self,
        principal: &Principal,
        target: UserId,
    ) -> Result<User, UserError> {
        self.set_role(principal, target, Role::Admin)
    }

    /// Bans an account. Administrators only.
    ///
    /// A banned account can no longer update or remove posts.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Forbidden`] unless the caller is an administrator
    /// and [`UserError::NotFound`] if no such account exists.
    pub fn ban(&mut self, principal: &Principal, target: UserId) -> Result<User, UserError> {
        self.set_role(principal, target, Role::Banned)
    }

    /// Deletes any account and returns it. Administrators only.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::Forbidden`] unless the caller is an administrator
    /// and [`UserError::NotFound`] if no such account exists.
    pub fn remove(&mut self, principal: &Principal, target: UserId) -> Result<User, UserError> {
        Self::require_admin(principal, target)?;
        self.delete(principal, target)
    }

    /// Deletes the caller's own account and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if the account no longer exists.
    pub fn remove_my_account(&mut self, principal: &Principal) -> Result<User, UserError> {
        self.delete(principal, principal.user_id)
    }

    fn rename(
        &mut self,
        principal: &Principal,
        target: UserId,
        username: String,
    ) -> Result<User, UserError> {
        self.find_by_id(target)?;
        self.check_username(Some(target), &username)?;
        let user = self
            .repository
            .update_username(target, username, Utc::now())
            .ok_or(UserError::NotFound(target))?;
        log::info!(
            "user {} renamed user {target} to {:?}",
            principal.user_id,
            user.username
        );
        Ok(user)
    }

    fn set_role(
        &mut self,
        principal: &Principal,
        target: UserId,
        role: Role,
    ) -> Result<User, UserError> {
        Self::require_admin(principal, target)?;
        let user = self
            .repository
            .update_role(target, role, Utc::now())
            .ok_or(UserError::NotFound(target))?;
        log::info!("user {} set role of user {target} to {role:?}", principal.user_id);
        Ok(user)
    }

    fn delete(&mut self, principal: &Principal, target: UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .remove(target)
            .ok_or(UserError::NotFound(target))?;
        log::info!("user {} removed user {target}", principal.user_id);
        Ok(user)
    }

    fn require_admin(principal: &Principal, target: UserId) -> Result<(), UserError> {
        if principal.role.is_admin() {
            Ok(())
        } else {
            Err(Self::forbidden(principal, target))
        }
    }

    fn forbidden(principal: &Principal, target: UserId) -> UserError {
        log::warn!("user {} denied access to user {target}", principal.user_id);
        UserError::Forbidden {
            user: principal.user_id,
            target,
        }
    }

    /// Checks length and uniqueness; `owner` may keep its current name.
    fn check_username(&self, owner: Option<UserId>, username: &str) -> Result<(), UserError> {
        let min_len = self.config.min_username_len;
        if username.chars().count() < min_len {
            return Err(UserError::UsernameTooShort {
                username: username.to_owned(),
                min_len,
            });
        }
        match self.repository.find_by_username(username) {
            Some(holder) if Some(holder.id) != owner => {
                Err(UserError::UsernameTaken(username.to_owned()))
            }
            _ => Ok(()),
        }
    }
}
