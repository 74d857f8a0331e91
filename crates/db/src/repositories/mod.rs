//! Zero-sized repository structs, one per table group.
//!
//! Methods take a `&PgPool` (or an open transaction for the multi-row
//! writes) and return raw `sqlx::Error`s; mapping to store and HTTP errors
//! happens further up.

pub mod password_reset_repo;
pub mod progress_item_repo;
pub mod progress_repo;
pub mod user_repo;

pub use password_reset_repo::PasswordResetRepo;
pub use progress_item_repo::ProgressItemRepo;
pub use progress_repo::ProgressRepo;
pub use user_repo::UserRepo;

/// An open Postgres transaction.
pub type PgTx<'a> = sqlx::Transaction<'a, sqlx::Postgres>;
