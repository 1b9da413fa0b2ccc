//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod comments;
pub mod likes;
pub mod profiles;
pub mod recipes;
