//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the
//! database row, plus the write-side DTOs the repositories accept.

pub mod comment;
pub mod like;
pub mod profile;
pub mod recipe;
pub mod session;
pub mod user;
