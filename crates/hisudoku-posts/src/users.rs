//! User accounts: lookup, listing, renaming, and administration.
//!
//! Accounts mirror the post side of the crate: a [`User`] record, a storage
//! seam ([`UserRepository`]) with an in-memory store, and a [`UserService`]
//! that enforces who may change what. Passwords and sign-in are handled by
//! the host; an account here is just an id, a unique username, and a [`Role`].
//!
//! [`Role`]: crate::Role

pub use self::{
    account::User,
    repository::{InMemoryUserRepository, UserRepository},
    service::{UserService, UserServiceConfig},
};

mod account;
mod repository;
mod service;
