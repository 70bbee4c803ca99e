use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::PlayerId;
use crate::domain::team::TeamId;

/// Player entity
///
/// A registered player in the league, carrying a back-reference to the team
/// they currently play for by id only. The reference is mutated exclusively
/// by [`Team`](crate::domain::team::Team)'s add/remove operations, which keep
/// it in step with the team's roster.
///
/// # Invariants
/// - `team_id` is either `None` or names the one team whose roster contains
///   this player's id
/// - The id is immutable and allocated by the league at registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    first_name: String,
    last_name: String,
    position: String,
    team_id: Option<TeamId>,
    registered_at: DateTime<Utc>,
}

impl Player {
    /// Creates a new unassigned player
    ///
    /// Only the league constructs players, so that ids stay unique and
    /// monotonic.
    pub(crate) fn new(
        id: PlayerId,
        first_name: String,
        last_name: String,
        position: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            position,
            team_id: None,
            registered_at: Utc::now(),
        }
    }

    /// Records which team the player belongs to, or `None` for unassigned
    ///
    /// Raw mutation with no validation of its own; the team performs the
    /// capacity and double-assignment checks before calling this.
    pub(crate) fn set_team(&mut self, team_id: Option<TeamId>) {
        self.team_id = team_id;
    }

    /// Returns true when the player currently belongs to a team
    pub fn is_assigned(&self) -> bool {
        self.team_id.is_some()
    }

    // ===== Getters =====

    /// Returns the player's id
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's first name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the player's last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the position the player plays
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the id of the player's current team, if any
    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    /// Returns the registration timestamp
    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player{{id={}, first_name='{}', last_name='{}', position='{}', team=",
            self.id, self.first_name, self.last_name, self.position
        )?;
        match self.team_id {
            Some(team_id) => write!(f, "{}}}", team_id),
            None => write!(f, "unassigned}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player::new(
            PlayerId::new(1),
            "Kyle".to_string(),
            "Lowry".to_string(),
            "Guard".to_string(),
        )
    }

    #[test]
    fn new_player_starts_unassigned() {
        let player = sample_player();

        assert_eq!(player.id(), PlayerId::new(1));
        assert_eq!(player.first_name(), "Kyle");
        assert_eq!(player.last_name(), "Lowry");
        assert_eq!(player.position(), "Guard");
        assert_eq!(player.team_id(), None);
        assert!(!player.is_assigned());
    }

    #[test]
    fn set_team_toggles_assignment() {
        let mut player = sample_player();

        player.set_team(Some(TeamId::new(3)));
        assert!(player.is_assigned());
        assert_eq!(player.team_id(), Some(TeamId::new(3)));

        player.set_team(None);
        assert!(!player.is_assigned());
        assert_eq!(player.team_id(), None);
    }

    #[test]
    fn display_unassigned() {
        let player = sample_player();

        assert_eq!(
            player.to_string(),
            "Player{id=1, first_name='Kyle', last_name='Lowry', position='Guard', team=unassigned}"
        );
    }

    #[test]
    fn display_assigned_shows_team_id() {
        let mut player = sample_player();
        player.set_team(Some(TeamId::new(2)));

        assert_eq!(
            player.to_string(),
            "Player{id=1, first_name='Kyle', last_name='Lowry', position='Guard', team=2}"
        );
    }

    #[test]
    fn serializes_with_named_fields() {
        let player = sample_player();
        let value = serde_json::to_value(&player).expect("serializable");

        assert_eq!(value["id"], 1);
        assert_eq!(value["first_name"], "Kyle");
        assert_eq!(value["last_name"], "Lowry");
        assert_eq!(value["position"], "Guard");
        assert!(value["team_id"].is_null());
    }
}
