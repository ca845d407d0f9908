//! A two-player chess rules arbiter.
//!
//! `board` generates theoretical moves for each piece and decides whether a
//! requested move is legal; `game` runs a match between two players on top of
//! it; `render` draws the board as text.

pub mod board;
pub mod game;
pub mod render;

pub use board::{Board, Color, Move, MoveError, Piece, PieceKind, Square};
pub use game::{MatchController, MatchOptions, Player};
