use thiserror::Error;

use crate::domain::player::PlayerId;
use crate::domain::team::{Team, TeamId};

/// Errors that can occur in league roster operations
///
/// Every variant is an ordinary negative outcome: the operation that
/// returned it performed no mutation, and all domain invariants still hold.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("team name '{0}' is already registered")]
    DuplicateTeamName(String),

    #[error("no team with id {0}")]
    TeamNotFound(TeamId),

    #[error("no player with id {0}")]
    PlayerNotFound(PlayerId),

    #[error("roster of team {0} is full ({cap} players)", cap = Team::CAPACITY)]
    RosterFull(TeamId),

    #[error("player {0} is already assigned to a team")]
    PlayerAlreadyAssigned(PlayerId),

    #[error("player {0} is not assigned to any team")]
    PlayerNotAssigned(PlayerId),

    /// A player's recorded team does not list them on its roster. This is an
    /// invariant violation, not a normal outcome; it cannot be reached
    /// through the public operations.
    #[error("player {player} is not on the roster of team {team}")]
    PlayerNotOnRoster { player: PlayerId, team: TeamId },
}

pub type LeagueResult<T> = Result<T, LeagueError>;
