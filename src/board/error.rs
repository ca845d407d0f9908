//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Why a requested move was rejected.
///
/// Every variant is a local, non-fatal rejection: the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The start square is empty
    NoPieceAtSquare { square: Square },
    /// The start square holds a piece of the other player
    WrongColorPiece {
        square: Square,
        expected: Color,
        found: Color,
    },
    /// The destination is unreachable, blocked, or holds a friendly piece
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongColorPiece {
                square,
                expected,
                found,
            } => {
                write!(f, "Piece on {square} is {found}, but it is {expected}'s turn")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move text such as `e2e4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

impl From<SquareError> for MoveParseError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::InvalidNotation { notation } => MoveParseError::InvalidSquare { notation },
            other => MoveParseError::InvalidSquare {
                notation: other.to_string(),
            },
        }
    }
}

/// Parse a move written as two squares, e.g. `e2e4`.
pub fn parse_move_text(text: &str) -> Result<(Square, Square), MoveParseError> {
    let text = text.trim();
    let len = text.chars().count();
    if len != 4 {
        return Err(MoveParseError::InvalidLength { len });
    }
    if !text.is_ascii() {
        return Err(MoveParseError::InvalidSquare {
            notation: text.to_string(),
        });
    }
    let from = text[0..2].parse::<Square>()?;
    let to = text[2..4].parse::<Square>()?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_no_piece() {
        let err = MoveError::NoPieceAtSquare {
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_color() {
        let err = MoveError::WrongColorPiece {
            square: Square(6, 0),
            expected: Color::White,
            found: Color::Black,
        };
        let text = err.to_string();
        assert!(text.contains("a7"));
        assert!(text.contains("White"));
        assert!(text.contains("Black"));
    }

    #[test]
    fn test_move_error_illegal_destination() {
        let err = MoveError::IllegalDestination {
            from: Square(0, 0),
            to: Square(0, 7),
        };
        let text = err.to_string();
        assert!(text.contains("a1"));
        assert!(text.contains("h1"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_parse_move_text() {
        assert_eq!(parse_move_text("e2e4"), Ok((Square(1, 4), Square(3, 4))));
        assert_eq!(
            parse_move_text("e2e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            parse_move_text("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_move_text_non_ascii() {
        assert_eq!(
            parse_move_text("é2e4"),
            Err(MoveParseError::InvalidSquare {
                notation: "é2e4".to_string()
            })
        );
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::NoPieceAtSquare {
            square: Square(0, 0),
        };
        assert_eq!(err.clone(), err);
    }
}
