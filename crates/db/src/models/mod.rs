//! Row structs and DTOs.
//!
//! Each submodule pairs a `FromRow` entity with the input structs its
//! repository accepts.

pub mod password_reset;
pub mod progress;
pub mod progress_item;
pub mod user;
