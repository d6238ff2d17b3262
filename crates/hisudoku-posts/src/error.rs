use crate::{PostId, UserId};

/// Errors returned by post operations.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PostError {
    /// The board text does not follow the canonical encoding.
    #[display("board content is not nine `ddd.ddd.ddd;` groups")]
    MalformedContent,
    /// The board repeats a digit inside a row, column, or box.
    #[display("board content repeats a digit in a row, column, or box")]
    InvalidBoard,
    /// No post has the requested id.
    #[display("sudoku {_0} not found")]
    NotFound(#[error(not(source))] PostId),
    /// The caller is neither the author nor an administrator.
    #[display("user {user} may not modify sudoku {post}")]
    Forbidden {
        /// The caller.
        user: UserId,
        /// The post the caller tried to modify.
        post: PostId,
    },
}

impl PostError {
    /// Returns `true` if the error was caused by the submitted board text.
    ///
    /// Such errors should be reported to the client as bad input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedContent | Self::InvalidBoard)
    }
}

/// Errors returned by account operations.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum UserError {
    /// No account has the requested id.
    #[display("user {_0} not found")]
    NotFound(#[error(not(source))] UserId),
    /// No account has the requested username.
    #[display("user named {_0:?} not found")]
    UsernameNotFound(#[error(not(source))] String),
    /// Another account already uses the username.
    #[display("username {_0:?} is already taken")]
    UsernameTaken(#[error(not(source))] String),
    /// The username is shorter than the configured minimum.
    #[display("username {username:?} is shorter than {min_len} characters")]
    UsernameTooShort {
        /// The rejected username.
        username: String,
        /// Minimum number of characters.
        min_len: usize,
    },
    /// The caller is not allowed to act on the account.
    #[display("user {user} may not modify user {target}")]
    Forbidden {
        /// The caller.
        user: UserId,
        /// The account the caller tried to modify.
        target: UserId,
    },
}

impl UserError {
    /// Returns `true` if the error was caused by the submitted username.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UsernameTaken(_) | Self::UsernameTooShort { .. })
    }
}
