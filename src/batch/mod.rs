//! Concurrent fan-out of per-target operations
//!
//! `executor` runs one task per target and collects their outcomes;
//! `result` holds the outcome records and renders them.

pub mod executor;
pub mod result;
