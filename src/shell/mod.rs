// Shell layer (interactive console adapter)
// Translates between the user at a terminal and the league operations;
// owns all text I/O, input validation, and menu rendering

pub mod input;

use std::io::{self, BufRead, Write};

use crate::domain::league::League;
use crate::domain::player::{Player, PlayerId};
use crate::domain::team::TeamId;

/// Interactive menu shell over a league
///
/// Generic over its input and output streams so whole sessions can be
/// scripted in tests; production wiring hands it locked stdin/stdout. The
/// league is passed in by the caller, not constructed here.
///
/// Blank-field checks live in this layer: screens trim what the user typed
/// and abort with a message on empty input, so the domain never sees blank
/// names or positions through this surface.
pub struct Shell<R, W> {
    league: League,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a shell over the given league and streams
    pub fn new(league: League, input: R, output: W) -> Self {
        Self {
            league,
            input,
            output,
        }
    }

    /// Returns the league the shell operates on
    pub fn league(&self) -> &League {
        &self.league
    }

    /// Runs the menu loop until the user exits or input closes
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the League Roster Manager!")?;
        writeln!(self.output, "=====================================")?;

        loop {
            self.print_menu()?;
            let choice = match input::prompt_number(
                &mut self.input,
                &mut self.output,
                "Please enter your choice: ",
            ) {
                Ok(choice) => choice,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err),
            };

            match choice {
                1 => self.register_team()?,
                2 => self.register_player()?,
                3 => self.assign_player()?,
                4 => self.remove_player()?,
                5 => self.view_all_teams()?,
                6 => self.view_all_players()?,
                7 => self.view_team_roster()?,
                8 => self.search_players()?,
                9 => self.view_unassigned_players()?,
                10 => self.view_league_stats()?,
                0 => break,
                _ => writeln!(self.output, "Error: Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Thank you for using the League Roster Manager!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(40);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "LEAGUE ROSTER MANAGER - MAIN MENU")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1.  Register Team")?;
        writeln!(self.output, "2.  Register Player")?;
        writeln!(self.output, "3.  Assign Player to Team")?;
        writeln!(self.output, "4.  Remove Player from Team")?;
        writeln!(self.output, "5.  View All Teams")?;
        writeln!(self.output, "6.  View All Players")?;
        writeln!(self.output, "7.  View Team Roster")?;
        writeln!(self.output, "8.  Search Players by Name")?;
        writeln!(self.output, "9.  View Unassigned Players")?;
        writeln!(self.output, "10. View League Statistics")?;
        writeln!(self.output, "0.  Exit")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn register_team(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Register New Team ---")?;

        let name = input::prompt_line(&mut self.input, &mut self.output, "Enter team name: ")?;
        if name.is_empty() {
            writeln!(self.output, "Error: Team name cannot be empty!")?;
            return Ok(());
        }

        let city = input::prompt_line(&mut self.input, &mut self.output, "Enter city: ")?;
        if city.is_empty() {
            writeln!(self.output, "Error: City cannot be empty!")?;
            return Ok(());
        }

        match self.league.register_team(name, city) {
            Ok((team, _event)) => {
                writeln!(self.output, "Team registered successfully!")?;
                writeln!(self.output, "{team}")?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn register_player(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Register New Player ---")?;

        let first_name =
            input::prompt_line(&mut self.input, &mut self.output, "Enter first name: ")?;
        if first_name.is_empty() {
            writeln!(self.output, "Error: First name cannot be empty!")?;
            return Ok(());
        }

        let last_name = input::prompt_line(&mut self.input, &mut self.output, "Enter surname: ")?;
        if last_name.is_empty() {
            writeln!(self.output, "Error: Surname cannot be empty!")?;
            return Ok(());
        }

        let position = input::prompt_line(&mut self.input, &mut self.output, "Enter position: ")?;
        if position.is_empty() {
            writeln!(self.output, "Error: Position cannot be empty!")?;
            return Ok(());
        }

        let (player, _event) = self.league.register_player(first_name, last_name, position);
        writeln!(self.output, "Player registered successfully!")?;
        writeln!(self.output, "{player}")?;
        Ok(())
    }

    fn assign_player(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Assign Player to Team ---")?;

        let unassigned = self.league.unassigned_players();
        if unassigned.is_empty() {
            writeln!(self.output, "No unassigned players available.")?;
            return Ok(());
        }
        writeln!(self.output, "Unassigned Players:")?;
        for player in unassigned {
            writeln!(self.output, "{player}")?;
        }

        let player_id = PlayerId::new(input::prompt_number(
            &mut self.input,
            &mut self.output,
            "Enter player ID: ",
        )?);

        if self.league.teams().is_empty() {
            writeln!(self.output, "No teams available. Please register a team first.")?;
            return Ok(());
        }
        writeln!(self.output, "\nAvailable Teams:")?;
        for team in self.league.teams() {
            writeln!(self.output, "{team}")?;
        }

        let team_id = TeamId::new(input::prompt_number(
            &mut self.input,
            &mut self.output,
            "Enter team ID: ",
        )?);

        match self.league.assign_player_to_team(player_id, team_id) {
            Ok(_event) => writeln!(self.output, "Player assigned to team successfully!")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn remove_player(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Remove Player from Team ---")?;

        let assigned: Vec<String> = self
            .league
            .players()
            .iter()
            .filter(|p| p.is_assigned())
            .map(|p| describe(&self.league, p))
            .collect();
        if assigned.is_empty() {
            writeln!(self.output, "No players are currently assigned to teams.")?;
            return Ok(());
        }
        writeln!(self.output, "Assigned Players:")?;
        for line in &assigned {
            writeln!(self.output, "{line}")?;
        }

        let player_id = PlayerId::new(input::prompt_number(
            &mut self.input,
            &mut self.output,
            "Enter player ID to remove: ",
        )?);

        match self.league.remove_player_from_team(player_id) {
            Ok(_event) => writeln!(self.output, "Player removed from team successfully!")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn view_all_teams(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Teams ---")?;

        if self.league.teams().is_empty() {
            writeln!(self.output, "No teams registered yet.")?;
            return Ok(());
        }
        for team in self.league.teams() {
            writeln!(self.output, "{team}")?;
        }
        Ok(())
    }

    fn view_all_players(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Players ---")?;

        if self.league.players().is_empty() {
            writeln!(self.output, "No players registered yet.")?;
            return Ok(());
        }
        for player in self.league.players() {
            let line = describe(&self.league, player);
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn view_team_roster(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- View Team Roster ---")?;

        if self.league.teams().is_empty() {
            writeln!(self.output, "No teams available.")?;
            return Ok(());
        }
        writeln!(self.output, "Available Teams:")?;
        for team in self.league.teams() {
            writeln!(self.output, "{team}")?;
        }

        let team_id = TeamId::new(input::prompt_number(
            &mut self.input,
            &mut self.output,
            "Enter team ID: ",
        )?);

        let team = match self.league.find_team_by_id(team_id) {
            Some(team) => team,
            None => {
                writeln!(self.output, "Team not found!")?;
                return Ok(());
            }
        };
        writeln!(self.output, "\n--- {} Roster ---", team.name())?;

        match self.league.roster(team_id) {
            Ok(roster) if roster.is_empty() => writeln!(self.output, "No players in this team.")?,
            Ok(roster) => {
                for player in roster {
                    writeln!(self.output, "{player}")?;
                }
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn search_players(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Search Players ---")?;

        let term = input::prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter search term (first name or surname): ",
        )?;
        if term.is_empty() {
            writeln!(self.output, "Search term cannot be empty!")?;
            return Ok(());
        }

        let results = self.league.search_players_by_name(&term);
        if results.is_empty() {
            writeln!(self.output, "No players found matching '{term}'")?;
            return Ok(());
        }

        writeln!(self.output, "Search Results:")?;
        for player in results {
            let line = describe(&self.league, player);
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn view_unassigned_players(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Unassigned Players ---")?;

        let unassigned = self.league.unassigned_players();
        if unassigned.is_empty() {
            writeln!(self.output, "All players are assigned to teams.")?;
            return Ok(());
        }
        for player in unassigned {
            writeln!(self.output, "{player}")?;
        }
        Ok(())
    }

    fn view_league_stats(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- League Statistics ---")?;
        writeln!(self.output, "Total Teams: {}", self.league.total_teams())?;
        writeln!(self.output, "Total Players: {}", self.league.total_players())?;
        writeln!(self.output, "Assigned Players: {}", self.league.assigned_players())?;
        writeln!(
            self.output,
            "Unassigned Players: {}",
            self.league.total_players() - self.league.assigned_players()
        )?;
        Ok(())
    }
}

/// Formats a player with the name of their current team, when they have one
fn describe(league: &League, player: &Player) -> String {
    match player.team_id().and_then(|id| league.find_team_by_id(id)) {
        Some(team) => format!("{player} (Team: {})", team.name()),
        None => format!("{player} (Unassigned)"),
    }
}
