use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a team, allocated by the league
///
/// # Invariants
/// - Allocated monotonically starting at 1
/// - A failed registration does not consume an id
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(u32);

impl TeamId {
    /// Creates a team id from its raw numeric value
    ///
    /// # Example
    /// ```
    /// use sportsleague::domain::team::TeamId;
    ///
    /// let id = TeamId::new(1);
    /// assert_eq!(id.to_string(), "1");
    /// ```
    pub const fn new(value: u32) -> Self {
        TeamId(value)
    }

    /// Returns the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
