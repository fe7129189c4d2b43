//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every write is a single
//! statement so that per-key atomicity comes from Postgres itself.

pub mod bookmark_repo;
pub mod progress_repo;
pub mod user_repo;

pub use bookmark_repo::BookmarkRepo;
pub use progress_repo::ProgressRepo;
pub use user_repo::UserRepo;
