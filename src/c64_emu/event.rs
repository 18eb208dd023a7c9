//! Clock type shared by chips that track PHI2 time explicitly.

/// Master-clock tick counter (signed so deltas can be negative).
pub type EventClock = i64;
