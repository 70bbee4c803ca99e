use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::TeamId;
use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::{Player, PlayerId};

/// Team aggregate root
///
/// A team in the league with a bounded roster. The roster holds player ids
/// in assignment order; the full player records are owned by the league and
/// resolved through it. Enforces the capacity and double-assignment rules,
/// and keeps the player's own team reference in step with the roster.
///
/// # Invariants
/// - The roster never exceeds [`Team::CAPACITY`] players
/// - Every id on the roster belongs to a player whose `team_id` is this team
/// - No id appears on the roster twice
///
/// # Example
/// ```
/// use sportsleague::domain::league::League;
///
/// let mut league = League::new();
/// let (team, _event) = league.register_team("Hornets", "Charlotte").expect("unique name");
///
/// assert_eq!(team.name(), "Hornets");
/// assert!(!team.is_full());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    city: String,
    roster: Vec<PlayerId>,
    registered_at: DateTime<Utc>,
}

impl Team {
    /// Maximum number of players on a roster
    pub const CAPACITY: usize = 15;

    /// Creates a new team with an empty roster
    ///
    /// Only the league constructs teams, after it has checked the name for
    /// uniqueness and allocated the id.
    pub(crate) fn new(id: TeamId, name: String, city: String) -> Self {
        Self {
            id,
            name,
            city,
            roster: Vec::new(),
            registered_at: Utc::now(),
        }
    }

    /// Adds a player to the roster and records the team on the player
    ///
    /// Both sides of the relationship change in one step, so no caller can
    /// observe a roster entry without the matching back-reference.
    ///
    /// # Returns
    /// * `Err(LeagueError::RosterFull)` - the roster already holds
    ///   [`Team::CAPACITY`] players; nothing changes
    /// * `Err(LeagueError::PlayerAlreadyAssigned)` - the player belongs to a
    ///   team (this one included); nothing changes
    pub(crate) fn add_player(&mut self, player: &mut Player) -> LeagueResult<()> {
        if self.roster.len() >= Self::CAPACITY {
            return Err(LeagueError::RosterFull(self.id));
        }
        if player.is_assigned() {
            return Err(LeagueError::PlayerAlreadyAssigned(player.id()));
        }

        self.roster.push(player.id());
        player.set_team(Some(self.id));
        Ok(())
    }

    /// Removes a player from the roster and clears the team on the player
    ///
    /// The relative order of the remaining roster entries is preserved.
    ///
    /// # Returns
    /// * `Err(LeagueError::PlayerNotOnRoster)` - the player's id is not on
    ///   this roster; nothing changes
    pub(crate) fn remove_player(&mut self, player: &mut Player) -> LeagueResult<()> {
        let index = self
            .roster
            .iter()
            .position(|id| *id == player.id())
            .ok_or(LeagueError::PlayerNotOnRoster {
                player: player.id(),
                team: self.id,
            })?;

        self.roster.remove(index);
        player.set_team(None);
        Ok(())
    }

    /// Returns true when the given player id is on the roster
    pub fn contains_player(&self, player_id: PlayerId) -> bool {
        self.roster.iter().any(|id| *id == player_id)
    }

    // ===== Getters =====

    /// Returns the team's id
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the city the team plays in
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the roster ids in assignment order
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Returns the number of players currently on the roster
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Returns true when the roster is at capacity
    pub fn is_full(&self) -> bool {
        self.roster.len() >= Self::CAPACITY
    }

    /// Returns the registration timestamp
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team{{id={}, name='{}', city='{}', players={}/{}}}",
            self.id,
            self.name,
            self.city,
            self.roster.len(),
            Self::CAPACITY
        )
    }
}
