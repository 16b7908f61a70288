//! Shared types for the campus bus booking platform
//!
//! Data models and wire types used by the booking server and its clients.
//! DB row types derive `sqlx::FromRow` behind the `db` feature so that
//! frontends can depend on this crate without pulling in sqlx.

pub mod models;

pub use models::*;
