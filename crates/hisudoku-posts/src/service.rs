//! Post operations performed on behalf of an authenticated caller.

use chrono::Utc;

use crate::{ContentPolicy, PostError, PostId, PostRepository, Principal, SudokuPost, UserId};

/// Settings for [`PostService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostServiceConfig {
    /// Checks applied to content on create and update.
    pub content_policy: ContentPolicy,
    /// Upper bound on the number of posts a single feed call returns.
    pub max_feed_limit: usize,
}

impl Default for PostServiceConfig {
    fn default() -> Self {
        Self {
            content_policy: ContentPolicy::default(),
            max_feed_limit: 50,
        }
    }
}

/// Creates, edits, removes, favorites, and lists sudoku posts.
///
/// Callers are identified by a [`Principal`]; only the author of a post or an
/// administrator may update or remove it. Board content is checked against
/// the configured [`ContentPolicy`] before it is stored.
///
/// # Examples
///
/// ```
/// use hisudoku_posts::{InMemoryPostRepository, PostError, PostService, Principal, UserId};
///
/// let mut service = PostService::new(InMemoryPostRepository::new());
/// let alice = Principal::user(UserId::new(1));
/// let bob = Principal::user(UserId::new(2));
///
/// let post = service.create(&alice, "000.000.000;".repeat(9))?;
/// let post = service.toggle_favorite(&bob, post.id)?;
/// assert_eq!(post.favorite_count, 1);
///
/// assert!(service.remove(&bob, post.id).unwrap_err().is_forbidden());
/// # Ok::<(), PostError>(())
/// ```
#[derive(Debug)]
pub struct PostService<R> {
    repository: R,
    config: PostServiceConfig,
}

impl<R> PostService<R>
where
    R: PostRepository,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, PostServiceConfig::default())
    }

    /// Creates a service with the given configuration.
    #[must_use]
    pub fn with_config(repository: R, config: PostServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &PostServiceConfig {
        &self.config
    }

    /// Returns the underlying repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Stores a new post authored by `principal`.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::MalformedContent`] or [`PostError::InvalidBoard`]
    /// if the content is rejected by the content policy.
    pub fn create(
        &mut self,
        principal: &Principal,
        content: impl Into<String>,
    ) -> Result<SudokuPost, PostError> {
        let content = content.into();
        self.check_content(principal, &content)?;
        let post = self
            .repository
            .insert(principal.user_id, content, Utc::now());
        log::info!("user {} created sudoku {}", principal.user_id, post.id);
        Ok(post)
    }

    /// Returns a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists.
    pub fn find_one(&self, id: PostId) -> Result<SudokuPost, PostError> {
        self.repository.get(id).ok_or(PostError::NotFound(id))
    }

    /// Returns the author of a post.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists.
    pub fn find_author(&self, id: PostId) -> Result<UserId, PostError> {
        Ok(self.find_one(id)?.author)
    }

    /// Returns the accounts that favorited a post, in favoriting order.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists.
    pub fn favorited_by(&self, id: PostId) -> Result<Vec<UserId>, PostError> {
        Ok(self.find_one(id)?.favorited_by)
    }

    /// Replaces the board of a post.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists,
    /// [`PostError::Forbidden`] if `principal` may not manage it, and
    /// [`PostError::MalformedContent`] or [`PostError::InvalidBoard`] if the
    /// new content is rejected.
    pub fn update_content(
        &mut self,
        principal: &Principal,
        id: PostId,
        content: impl Into<String>,
    ) -> Result<SudokuPost, PostError> {
        self.verify_author(principal, id)?;
        let content = content.into();
        self.check_content(principal, &content)?;
        let post = self
            .repository
            .update_content(id, content, Utc::now())
            .ok_or(PostError::NotFound(id))?;
        log::info!("user {} updated sudoku {id}", principal.user_id);
        Ok(post)
    }

    /// Deletes a post and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists and
    /// [`PostError::Forbidden`] if `principal` may not manage it.
    pub fn remove(&mut self, principal: &Principal, id: PostId) -> Result<SudokuPost, PostError> {
        self.verify_author(principal, id)?;
        let post = self.repository.remove(id).ok_or(PostError::NotFound(id))?;
        log::info!("user {} removed sudoku {id}", principal.user_id);
        Ok(post)
    }

    /// Favorites a post for `principal`, or removes the favorite if it is already set.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no such post exists.
    pub fn toggle_favorite(
        &mut self,
        principal: &Principal,
        id: PostId,
    ) -> Result<SudokuPost, PostError> {
        let post = self
            .repository
            .toggle_favorite(id, principal.user_id)
            .ok_or(PostError::NotFound(id))?;
        log::debug!(
            "user {} toggled favorite on sudoku {id}, favorited={}",
            principal.user_id,
            post.is_favorited_by(principal.user_id)
        );
        Ok(post)
    }

    /// Returns the newest posts, at most `limit` and never more than
    /// [`PostServiceConfig::max_feed_limit`].
    #[must_use]
    pub fn feed(&self, limit: usize) -> Vec<SudokuPost> {
        self.repository.latest(self.clamp_limit(limit))
    }

    /// Returns the newest posts by `author`, limited like [`PostService::feed`].
    #[must_use]
    pub fn feed_by_author(&self, author: UserId, limit: usize) -> Vec<SudokuPost> {
        self.repository.by_author(author, self.clamp_limit(limit))
    }

    fn clamp_limit(&self, limit: usize) -> usize {
        limit.min(self.config.max_feed_limit)
    }

    fn verify_author(&self, principal: &Principal, id: PostId) -> Result<(), PostError> {
        let author = self.find_author(id)?;
        if !principal.can_manage(author) {
            log::warn!(
                "user {} denied access to sudoku {id} owned by {author}",
                principal.user_id
            );
            return Err(PostError::Forbidden {
                user: principal.user_id,
                post: id,
            });
        }
        Ok(())
    }

    fn check_content(&self, principal: &Principal, content: &str) -> Result<(), PostError> {
        self.config.content_policy.check(content).inspect_err(|err| {
            log::warn!("rejected content from user {}: {err}", principal.user_id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryPostRepository, Role};

    const PUZZLE: &str = "530.070.000;600.195.000;098.000.060;\
                          800.060.003;400.803.001;700.020.006;\
                          060.000.280;000.419.005;000.080.079;";
    const EMPTY: &str = "000.000.000;000.000.000;000.000.000;\
                         000.000.000;000.000.000;000.000.000;\
                         000.000.000;000.000.000;000.000.000;";

    const ALICE: Principal = Principal::user(UserId::new(1));
    const BOB: Principal = Principal::user(UserId::new(2));
    const ADMIN: Principal = Principal::admin(UserId::new(99));

    fn service() -> PostService<InMemoryPostRepository> {
        PostService::new(InMemoryPostRepository::new())
    }

    #[test]
    fn test_create_and_find() {
        let mut service = service();
        let post = service.create(&ALICE, PUZZLE).unwrap();
        assert_eq!(post.author, ALICE.user_id);
        assert_eq!(post.content, PUZZLE);
        assert_eq!(post.favorite_count, 0);
        assert_eq!(post.created_at, post.updated_at);

        assert_eq!(service.find_one(post.id), Ok(post.clone()));
        assert_eq!(service.find_author(post.id), Ok(ALICE.user_id));
    }

    #[test]
    fn test_create_rejects_bad_content() {
        let mut service = service();
        let err = service.create(&ALICE, "123.456.78;").unwrap_err();
        assert_eq!(err, PostError::MalformedContent);
        assert!(err.is_input_error());

        let err = service.create(&ALICE, "123.456.789;".repeat(9)).unwrap_err();
        assert_eq!(err, PostError::InvalidBoard);
        assert!(err.is_input_error());

        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_permissive_policy_stores_anything() {
        let config = PostServiceConfig {
            content_policy: ContentPolicy::PERMISSIVE,
            ..PostServiceConfig::default()
        };
        let mut service = PostService::with_config(InMemoryPostRepository::new(), config);
        let post = service.create(&ALICE, "not a board").unwrap();
        assert_eq!(post.content, "not a board");
    }

    #[test]
    fn test_find_missing() {
        let service = service();
        let id = PostId::new(404);
        assert_eq!(service.find_one(id), Err(PostError::NotFound(id)));
        assert_eq!(service.favorited_by(id), Err(PostError::NotFound(id)));
        assert_eq!(
            PostError::NotFound(id).to_string(),
            "sudoku 404 not found"
        );
    }

    #[test]
    fn test_update_by_author() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();
        let updated = service.update_content(&ALICE, post.id, PUZZLE).unwrap();
        assert_eq!(updated.content, PUZZLE);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(service.find_one(post.id).unwrap().content, PUZZLE);
    }

    #[test]
    fn test_update_checks_permission_before_content() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();

        let err = service
            .update_content(&BOB, post.id, "garbage")
            .unwrap_err();
        assert_eq!(
            err,
            PostError::Forbidden {
                user: BOB.user_id,
                post: post.id
            }
        );

        let err = service
            .update_content(&ALICE, post.id, "garbage")
            .unwrap_err();
        assert_eq!(err, PostError::MalformedContent);
        assert_eq!(service.find_one(post.id).unwrap().content, EMPTY);
    }

    #[test]
    fn test_admin_may_update_and_remove() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();
        service.update_content(&ADMIN, post.id, PUZZLE).unwrap();
        let removed = service.remove(&ADMIN, post.id).unwrap();
        assert_eq!(removed.content, PUZZLE);
        assert!(service.find_one(post.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();
        assert!(service.remove(&BOB, post.id).unwrap_err().is_forbidden());
        assert_eq!(service.remove(&ALICE, post.id), Ok(post.clone()));
        assert_eq!(
            service.remove(&ALICE, post.id),
            Err(PostError::NotFound(post.id))
        );
    }

    #[test]
    fn test_banned_author_cannot_remove() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();
        let banned = Principal {
            role: Role::Banned,
            ..ALICE
        };
        assert!(service.remove(&banned, post.id).unwrap_err().is_forbidden());
        assert!(service.find_one(post.id).is_ok());
    }

    #[test]
    fn test_toggle_favorite_twice() {
        let mut service = service();
        let post = service.create(&ALICE, EMPTY).unwrap();

        let post = service.toggle_favorite(&BOB, post.id).unwrap();
        assert_eq!(post.favorite_count, 1);
        assert_eq!(service.favorited_by(post.id), Ok(vec![BOB.user_id]));

        let post = service.toggle_favorite(&ALICE, post.id).unwrap();
        assert_eq!(post.favorited_by, [BOB.user_id, ALICE.user_id]);

        service.toggle_favorite(&BOB, post.id).unwrap();
        let post = service.toggle_favorite(&ALICE, post.id).unwrap();
        assert_eq!(post.favorite_count, 0);
        assert!(post.favorited_by.is_empty());
    }

    #[test]
    fn test_feeds() {
        let config = PostServiceConfig {
            max_feed_limit: 2,
            ..PostServiceConfig::default()
        };
        let mut service = PostService::with_config(InMemoryPostRepository::new(), config);
        let first = service.create(&ALICE, EMPTY).unwrap();
        let second = service.create(&BOB, EMPTY).unwrap();
        let third = service.create(&ALICE, PUZZLE).unwrap();

        let feed = service.feed(10);
        assert_eq!(feed, [third.clone(), second]);
        assert_eq!(service.feed(1), [third.clone()]);
        assert!(service.feed(0).is_empty());

        let by_alice = service.feed_by_author(ALICE.user_id, 10);
        assert_eq!(by_alice, [third, first]);
    }
}
