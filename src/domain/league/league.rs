use super::events::LeagueEvent;
use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::{Player, PlayerId};
use crate::domain::team::{Team, TeamId};

/// League aggregate root
///
/// Owns every team and player in the league, allocates their identifiers,
/// and enforces the rules that span both entity kinds: team-name
/// uniqueness, roster capacity, and the two-sided consistency between a
/// player's team reference and the team's roster.
///
/// Lookups are linear scans over the entity collections; at league scale
/// there is nothing to index. Both collections keep registration order,
/// which is also the listing order.
///
/// # Invariants
/// - Team ids and player ids are each unique and never reused
/// - No two teams share a name, compared case-insensitively
/// - A player is on at most one roster, and exactly when their `team_id`
///   names that team
///
/// # Example
/// ```
/// use sportsleague::domain::league::League;
///
/// let mut league = League::new();
/// let (team, _event) = league.register_team("Hornets", "Charlotte").expect("unique name");
/// let (player, _event) = league.register_player("Kyle", "Lowry", "Guard");
///
/// league
///     .assign_player_to_team(player.id(), team.id())
///     .expect("open roster");
///
/// assert_eq!(league.assigned_players(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<Team>,
    players: Vec<Player>,
    next_team_id: u32,
    next_player_id: u32,
}

impl Default for League {
    fn default() -> Self {
        Self::new()
    }
}

impl League {
    /// Creates an empty league
    ///
    /// Id allocation for both teams and players starts at 1.
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            players: Vec::new(),
            next_team_id: 1,
            next_player_id: 1,
        }
    }

    /// Registers a new team
    ///
    /// # Returns
    /// * `Ok((Team, LeagueEvent))` - a snapshot of the new team and the
    ///   registration event
    /// * `Err(LeagueError::DuplicateTeamName)` - a team with this name
    ///   already exists, compared case-insensitively; no id is consumed
    pub fn register_team(
        &mut self,
        name: impl Into<String>,
        city: impl Into<String>,
    ) -> LeagueResult<(Team, LeagueEvent)> {
        let name = name.into();
        let city = city.into();

        let lowered = name.to_lowercase();
        if self.teams.iter().any(|t| t.name().to_lowercase() == lowered) {
            return Err(LeagueError::DuplicateTeamName(name));
        }

        let team_id = TeamId::new(self.next_team_id);
        self.next_team_id += 1;

        let team = Team::new(team_id, name, city);
        let event = LeagueEvent::TeamRegistered {
            team_id,
            name: team.name().to_string(),
        };
        self.teams.push(team.clone());

        tracing::debug!(%team_id, name = team.name(), "team registered");
        Ok((team, event))
    }

    /// Registers a new player in the unassigned state
    ///
    /// Player registration has no uniqueness constraint and always
    /// succeeds. Field emptiness is the caller's concern.
    pub fn register_player(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
    ) -> (Player, LeagueEvent) {
        let player_id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;

        let player = Player::new(
            player_id,
            first_name.into(),
            last_name.into(),
            position.into(),
        );
        let event = LeagueEvent::PlayerRegistered {
            player_id,
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
        };
        self.players.push(player.clone());

        tracing::debug!(%player_id, "player registered");
        (player, event)
    }

    /// Puts a player on a team's roster
    ///
    /// Both entities must exist; the roster must have room and the player
    /// must be unassigned. Any failure leaves both entities untouched.
    pub fn assign_player_to_team(
        &mut self,
        player_id: PlayerId,
        team_id: TeamId,
    ) -> LeagueResult<LeagueEvent> {
        let player_index = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(LeagueError::PlayerNotFound(player_id))?;
        let team_index = self
            .teams
            .iter()
            .position(|t| t.id() == team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;

        self.teams[team_index].add_player(&mut self.players[player_index])?;

        tracing::debug!(%player_id, %team_id, "player assigned to team");
        Ok(LeagueEvent::PlayerAssigned { player_id, team_id })
    }

    /// Takes a player off their current team's roster
    ///
    /// The team is resolved through the player's own recorded team id, not
    /// by scanning rosters. If that reference dangles, or the roster does
    /// not actually list the player, the operation fails without mutation;
    /// those cases violate the league invariants and cannot be reached
    /// through the public operations.
    pub fn remove_player_from_team(&mut self, player_id: PlayerId) -> LeagueResult<LeagueEvent> {
        let player_index = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(LeagueError::PlayerNotFound(player_id))?;
        let team_id = self.players[player_index]
            .team_id()
            .ok_or(LeagueError::PlayerNotAssigned(player_id))?;

        let team_index = match self.teams.iter().position(|t| t.id() == team_id) {
            Some(index) => index,
            None => {
                tracing::warn!(%player_id, %team_id, "player references a team that does not exist");
                return Err(LeagueError::TeamNotFound(team_id));
            }
        };

        if let Err(err) = self.teams[team_index].remove_player(&mut self.players[player_index]) {
            tracing::warn!(%player_id, %team_id, "roster out of sync with player record");
            return Err(err);
        }

        tracing::debug!(%player_id, %team_id, "player removed from team");
        Ok(LeagueEvent::PlayerRemoved { player_id, team_id })
    }

    // ===== Queries =====

    /// Finds a team by id
    pub fn find_team_by_id(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == team_id)
    }

    /// Finds a team by name, compared case-insensitively; first match wins
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        let lowered = name.to_lowercase();
        self.teams.iter().find(|t| t.name().to_lowercase() == lowered)
    }

    /// Finds a player by id
    pub fn find_player_by_id(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Searches players by a case-insensitive substring of either name
    ///
    /// A player matches when the term occurs in the first name or the last
    /// name. Results keep registration order; no match is an empty result,
    /// not an error.
    pub fn search_players_by_name(&self, term: &str) -> Vec<&Player> {
        let term = term.to_lowercase();
        self.players
            .iter()
            .filter(|p| {
                p.first_name().to_lowercase().contains(&term)
                    || p.last_name().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Returns every player not currently on a team, in registration order
    pub fn unassigned_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_assigned()).collect()
    }

    /// Resolves a team's roster to player records, in assignment order
    pub fn roster(&self, team_id: TeamId) -> LeagueResult<Vec<&Player>> {
        let team = self
            .find_team_by_id(team_id)
            .ok_or(LeagueError::TeamNotFound(team_id))?;

        Ok(team
            .roster()
            .iter()
            .filter_map(|id| self.players.iter().find(|p| p.id() == *id))
            .collect())
    }

    /// Returns all teams in registration order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Returns all players in registration order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of registered teams
    pub fn total_teams(&self) -> usize {
        self.teams.len()
    }

    /// Returns the number of registered players
    pub fn total_players(&self) -> usize {
        self.players.len()
    }

    /// Returns the number of players currently on a roster
    ///
    /// Recomputed on each call; there is no cached counter to drift.
    pub fn assigned_players(&self) -> usize {
        self.players.iter().filter(|p| p.is_assigned()).count()
    }
}
