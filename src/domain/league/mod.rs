// League domain module
// Contains the league aggregate root and its domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod league;

// Re-export main types for convenience
pub use events::LeagueEvent;
pub use league::League;
