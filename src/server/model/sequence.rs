//! Sequence allocation types.

/// Sequence backing booking IDs.
pub const BOOKING_SEQUENCE: &str = "bookingCounter";
/// Prefix of formatted booking IDs.
pub const BOOKING_PREFIX: &str = "log";
/// Minimum digit count of formatted booking IDs.
pub const BOOKING_WIDTH: usize = 3;

/// Result of creating a counter record that may already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another caller created the record first.
    AlreadyExists,
}

/// Value handed out by the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub value: i64,
    /// Set when the value came from the count fallback and may collide with
    /// a concurrently issued one.
    pub degraded: bool,
}

/// Formats `value` as `prefix` followed by the number zero-padded to at least `width`
/// digits. Wider numbers are never truncated.
pub fn format_identifier(prefix: &str, value: i64, width: usize) -> String {
    format!("{prefix}{value:0width$}")
}
