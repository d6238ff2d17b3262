//! Storage for sudoku posts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{PostId, SudokuPost, UserId};

/// Storage backend for sudoku posts.
///
/// Implementations own id assignment: ids must grow with insertion order so
/// that "newest first" listings can sort by id.
pub trait PostRepository {
    /// Stores a new post and returns it.
    fn insert(&mut self, author: UserId, content: String, now: DateTime<Utc>) -> SudokuPost;

    /// Returns the post with the given id.
    fn get(&self, id: PostId) -> Option<SudokuPost>;

    /// Replaces the content of a post and returns the updated post.
    fn update_content(
        &mut self,
        id: PostId,
        content: String,
        now: DateTime<Utc>,
    ) -> Option<SudokuPost>;

    /// Deletes a post and returns it.
    fn remove(&mut self, id: PostId) -> Option<SudokuPost>;

    /// Adds or removes `user` from the favorites of a post and returns the updated post.
    fn toggle_favorite(&mut self, id: PostId, user: UserId) -> Option<SudokuPost>;

    /// Returns up to `limit` posts, newest first.
    fn latest(&self, limit: usize) -> Vec<SudokuPost>;

    /// Returns up to `limit` posts by `author`, newest first.
    fn by_author(&self, author: UserId, limit: usize) -> Vec<SudokuPost>;
}

/// A [`PostRepository`] that keeps posts in memory.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use hisudoku_posts::{InMemoryPostRepository, PostRepository as _, UserId};
///
/// let mut repository = InMemoryPostRepository::new();
/// let post = repository.insert(UserId::new(1), "board".to_owned(), Utc::now());
/// assert_eq!(repository.get(post.id), Some(post));
/// assert_eq!(repository.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostRepository {
    posts: BTreeMap<PostId, SudokuPost>,
    next_id: u64,
}

impl InMemoryPostRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if no post is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostRepository for InMemoryPostRepository {
    fn insert(&mut self, author: UserId, content: String, now: DateTime<Utc>) -> SudokuPost {
        self.next_id += 1;
        let post = SudokuPost {
            id: PostId::new(self.next_id),
            author,
            content,
            created_at: now,
            updated_at: now,
            favorite_count: 0,
            favorited_by: vec![],
        };
        self.posts.insert(post.id, post.clone());
        post
    }

    fn get(&self, id: PostId) -> Option<SudokuPost> {
        self.posts.get(&id).cloned()
    }

    fn update_content(
        &mut self,
        id: PostId,
        content: String,
        now: DateTime<Utc>,
    ) -> Option<SudokuPost> {
        let post = self.posts.get_mut(&id)?;
        post.content = content;
        post.updated_at = now;
        Some(post.clone())
    }

    fn remove(&mut self, id: PostId) -> Option<SudokuPost> {
        self.posts.remove(&id)
    }

    fn toggle_favorite(&mut self, id: PostId, user: UserId) -> Option<SudokuPost> {
        let post = self.posts.get_mut(&id)?;
        post.toggle_favorite(user);
        Some(post.clone())
    }

    fn latest(&self, limit: usize) -> Vec<SudokuPost> {
        self.posts.values().rev().take(limit).cloned().collect()
    }

    fn by_author(&self, author: UserId, limit: usize) -> Vec<SudokuPost> {
        self.posts
            .values()
            .rev()
            .filter(|post| post.author == author)
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[SudokuPost]) -> Vec<u64> {
        posts.iter().map(|post| post.id.get()).collect()
    }

    #[test]
    fn test_ids_grow() {
        let mut repository = InMemoryPostRepository::new();
        let first = repository.insert(UserId::new(1), String::new(), Utc::now());
        let second = repository.insert(UserId::new(1), String::new(), Utc::now());
        assert!(second.id > first.id);

        // Ids are not reused after removal.
        repository.remove(second.id);
        let third = repository.insert(UserId::new(1), String::new(), Utc::now());
        assert!(third.id > second.id);
    }

    #[test]
    fn test_listing_order_and_limit() {
        let mut repository = InMemoryPostRepository::new();
        for author in [1, 2, 1, 2, 1] {
            repository.insert(UserId::new(author), String::new(), Utc::now());
        }
        assert_eq!(ids(&repository.latest(3)), [5, 4, 3]);
        assert_eq!(ids(&repository.latest(10)), [5, 4, 3, 2, 1]);
        assert_eq!(ids(&repository.by_author(UserId::new(1), 10)), [5, 3, 1]);
        assert_eq!(ids(&repository.by_author(UserId::new(2), 1)), [4]);
        assert!(repository.by_author(UserId::new(3), 10).is_empty());
    }

    #[test]
    fn test_missing_post() {
        let mut repository = InMemoryPostRepository::new();
        let id = PostId::new(7);
        assert_eq!(repository.get(id), None);
        assert_eq!(repository.update_content(id, String::new(), Utc::now()), None);
        assert_eq!(repository.toggle_favorite(id, UserId::new(1)), None);
        assert_eq!(repository.remove(id), None);
        assert!(repository.is_empty());
    }

    #[test]
    fn test_update_keeps_favorites() {
        let mut repository = InMemoryPostRepository::new();
        let post = repository.insert(UserId::new(1), "old".to_owned(), Utc::now());
        repository.toggle_favorite(post.id, UserId::new(2));
        let updated = repository
            .update_content(post.id, "new".to_owned(), Utc::now())
            .unwrap();
        assert_eq!(updated.content, "new");
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
        assert_eq!(updated.favorited_by, [UserId::new(2)]);
    }
}
