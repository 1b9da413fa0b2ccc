//! Domain rules for the Ladle recipe-sharing service.
//!
//! This crate holds the pure parts: shared type aliases, the core error
//! enum, and the validation/normalization rules for accounts, recipes,
//! profiles, and comments. No I/O happens here; persistence lives in
//! `ladle-db` and HTTP concerns in `ladle-api`.

pub mod account;
pub mod error;
pub mod profile;
pub mod recipe;
pub mod social;
pub mod types;

pub use error::CoreError;
pub use types::{DbId, Timestamp};
