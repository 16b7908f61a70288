//! Data models
//!
//! Shared between booking-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod booking;
pub mod bus;
pub mod route;
pub mod schedule;
pub mod stats;
pub mod stop;
pub mod user;

// Re-exports
pub use booking::*;
pub use bus::*;
pub use route::*;
pub use schedule::*;
pub use stats::*;
pub use stop::*;
pub use user::*;
