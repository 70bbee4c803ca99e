use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;
use crate::domain::team::TeamId;

/// Domain events that occur within the league
///
/// These events represent the business moments of roster management. The
/// mutating league operations return them alongside their results for
/// callers that care; the interactive shell discards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeagueEvent {
    /// Fired when a team is registered
    TeamRegistered {
        /// ID of the newly registered team
        team_id: TeamId,
        /// The team's name
        name: String,
    },
    /// Fired when a player is registered
    PlayerRegistered {
        /// ID of the newly registered player
        player_id: PlayerId,
        /// The player's first name
        first_name: String,
        /// The player's last name
        last_name: String,
    },
    /// Fired when a player joins a team's roster
    PlayerAssigned {
        /// ID of the assigned player
        player_id: PlayerId,
        /// Team the player joined
        team_id: TeamId,
    },
    /// Fired when a player leaves a team's roster
    PlayerRemoved {
        /// ID of the removed player
        player_id: PlayerId,
        /// Team the player left
        team_id: TeamId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_registered_event_carries_name() {
        let event = LeagueEvent::TeamRegistered {
            team_id: TeamId::new(1),
            name: "Hornets".to_string(),
        };

        match event {
            LeagueEvent::TeamRegistered { team_id, name } => {
                assert_eq!(team_id, TeamId::new(1));
                assert_eq!(name, "Hornets");
            }
            _ => panic!("Expected TeamRegistered event"),
        }
    }

    #[test]
    fn event_clone() {
        let event = LeagueEvent::PlayerAssigned {
            player_id: PlayerId::new(1),
            team_id: TeamId::new(2),
        };
        let cloned = event.clone();

        assert!(matches!(
            cloned,
            LeagueEvent::PlayerAssigned { player_id, team_id }
                if player_id == PlayerId::new(1) && team_id == TeamId::new(2)
        ));
    }

    #[test]
    fn event_serializes_with_variant_tag() {
        let event = LeagueEvent::PlayerRemoved {
            player_id: PlayerId::new(3),
            team_id: TeamId::new(1),
        };
        let value = serde_json::to_value(&event).expect("serializable");

        assert_eq!(value["PlayerRemoved"]["player_id"], 3);
        assert_eq!(value["PlayerRemoved"]["team_id"], 1);
    }
}
