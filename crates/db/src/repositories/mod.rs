//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod like_repo;
pub mod profile_repo;
pub mod recipe_repo;
pub mod session_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use like_repo::LikeRepo;
pub use profile_repo::ProfileRepo;
pub use recipe_repo::RecipeRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
