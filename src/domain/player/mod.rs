// Player domain module
// Contains the player entity and its identifier value object

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

// Re-export main types for convenience
pub use player::Player;
pub use value_objects::PlayerId;
