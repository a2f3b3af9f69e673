pub use kurbo::{Point, Rect};

/// A point in animation time, in milliseconds since the owning clock started.
///
/// The engine never reads a wall clock; every `TimeMs` comes from a [`crate::Scheduler`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// The clock origin.
    pub const ZERO: Self = Self(0);

    /// Add a duration, saturating at `u64::MAX`.
    pub fn saturating_add(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is in the future).
    pub fn since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
