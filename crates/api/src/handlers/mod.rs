pub mod bookmarks;
pub mod progress;
pub mod session;
