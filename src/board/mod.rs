//! Board representation, move generation and move validation.
//!
//! The board is a plain 8x8 grid of optional pieces. Each piece produces its
//! theoretical moves as directional sequences; the validator walks those
//! sequences to resolve blocking and captures.
//!
//! # Example
//! ```
//! use chess_arbiter::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! assert!(board.is_legal(Square(1, 4), Square(3, 4), Color::White));
//! board.apply_move(Square(1, 4), Square(3, 4), Color::White).unwrap();
//! assert!(board.piece_at(Square(3, 4)).is_some());
//! ```

mod builder;
mod error;
mod movegen;
mod rays;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{parse_move_text, MoveError, MoveParseError, SquareError};
pub use state::Board;
pub use types::{Color, Move, MoveSequence, Piece, PieceKind, Square, BOARD_SIZE};
