//! Sudoku posts and the accounts behind them.
//!
//! The crate is split the way a request flows through it:
//!
//! - [`model`]: post records ([`SudokuPost`]) and caller identity ([`Principal`])
//! - [`content`]: the board checks run on submitted content ([`ContentPolicy`])
//! - [`repository`]: the storage seam ([`PostRepository`]) and an in-memory store
//! - [`service`]: the operations themselves ([`PostService`])
//! - [`users`]: accounts, their lookup, and administration ([`UserService`])
//!
//! Authentication is not handled here: callers arrive as an already verified
//! [`Principal`].
//!
//! # Examples
//!
//! ```
//! use hisudoku_posts::{InMemoryPostRepository, PostError, PostService, Principal, UserId};
//!
//! let mut service = PostService::new(InMemoryPostRepository::new());
//! let author = Principal::user(UserId::new(1));
//!
//! let err = service.create(&author, "not a board").unwrap_err();
//! assert!(err.is_input_error());
//!
//! let post = service.create(&author, "000.000.000;".repeat(9)).unwrap();
//! assert_eq!(service.feed(10), [post]);
//! ```

pub mod content;
mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod users;

pub use self::{
    content::ContentPolicy,
    error::{PostError, UserError},
    model::{PostId, Principal, Role, SudokuPost, UserId},
    repository::{InMemoryPostRepository, PostRepository},
    service::{PostService, PostServiceConfig},
    users::{InMemoryUserRepository, User, UserRepository, UserService, UserServiceConfig},
};
