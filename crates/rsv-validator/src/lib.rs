//! rsv-validator
//!
//! Fault-tolerant monotonic-sequence validation.
//!
//! Rules:
//! - A report is safe when its levels move in ONE direction end-to-end
//!   (strictly increasing or strictly decreasing) and every adjacent gap lies
//!   inside the tolerance band (standard band = [1, 3]).
//! - The dampener may drop exactly one level from an unsafe report; the first
//!   index (left to right) that restores safety wins.
//!
//! Pure deterministic logic. No IO, no logging, no shared state. Callers own
//! ingestion and output.

mod engine;
pub mod summary;
mod types;

pub use engine::{
    count_safe, count_safe_with, evaluate, evaluate_dampened, is_safe, is_safe_with_dampener,
};
pub use summary::{build_safety_summary, Removal, SafetySummary};
pub use types::*;
