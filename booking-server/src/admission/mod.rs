//! Booking Admission
//!
//! - [`policy`] - 容量策略与决策表 (pure)
//! - [`engine`] - 准入流程：快照 → 原子条件插入 → 回读快照

pub mod engine;
pub mod policy;

pub use engine::{AdmissionError, AdmissionOutcome, AdmissionRequest, create_booking};
pub use policy::{AdmissionDecision, CapacityPolicy};
