//! Small helpers shared across layers.

pub mod id;
pub mod iso8601;
