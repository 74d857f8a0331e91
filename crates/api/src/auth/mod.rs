//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access-token generation and validation.
//! - [`reset`] -- one-time password reset codes.

pub mod jwt;
pub mod password;
pub mod reset;
