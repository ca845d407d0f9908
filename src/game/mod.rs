//! Match orchestration.
//!
//! The `MatchController` owns the board and whose turn it is. Players supply
//! coordinates; the controller checks them against the board and applies
//! approved moves. Nothing here decides that a game is won or drawn: a match
//! ends only when a player stops supplying moves or the ply limit is reached.

mod command;
mod controller;
mod options;
mod player;

pub use command::{parse_player_command, PlayerCommand};
pub use controller::{MatchController, MatchEnd, MatchReport, TurnOutcome};
pub use options::{MatchOptions, PlayerKind, PlayerKindError};
pub use player::{Console, ConsolePlayer, Player, RandomPlayer, ScriptedPlayer};
