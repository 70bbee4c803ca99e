use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a player, allocated by the league
///
/// # Invariants
/// - Allocated monotonically starting at 1
/// - Never reused, even conceptually (players are never deleted)
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Creates a player id from its raw numeric value
    ///
    /// # Example
    /// ```
    /// use sportsleague::domain::player::PlayerId;
    ///
    /// let id = PlayerId::new(1);
    /// assert_eq!(id.value(), 1);
    /// ```
    pub const fn new(value: u32) -> Self {
        PlayerId(value)
    }

    /// Returns the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_display() {
        assert_eq!(PlayerId::new(42).to_string(), "42");
    }

    #[test]
    fn player_id_ordering_follows_allocation_order() {
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }

    #[test]
    fn player_id_round_trips_through_value() {
        let id = PlayerId::new(7);
        assert_eq!(PlayerId::new(id.value()), id);
    }
}
