//! Core board types.
//!
//! - `Piece`, `PieceKind` and `Color` - piece identity
//! - `Square` - (row, col) board coordinate
//! - `MoveSequence` - one ray of candidate squares
//! - `Move` - a validated move

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveSequence};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
