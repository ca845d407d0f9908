//! Move validation.
//!
//! A move is checked by walking the one theoretical sequence that contains the
//! destination, nearest square first. Any occupied square before the
//! destination blocks the move; the destination itself must be empty or hold
//! an opposing piece. The same walk covers sliders, knights, kings and pawns.

use log::debug;

use super::{Board, Color, Move, MoveError, MoveSequence, Piece, Square};

impl Board {
    /// The piece on `start`, provided it belongs to `color`.
    pub fn movable_piece(&self, start: Square, color: Color) -> Result<Piece, MoveError> {
        let piece = self
            .piece_at(start)
            .ok_or(MoveError::NoPieceAtSquare { square: start })?;
        if piece.color() != color {
            return Err(MoveError::WrongColorPiece {
                square: start,
                expected: color,
                found: piece.color(),
            });
        }
        Ok(piece)
    }

    /// Decide whether `color` may move the piece on `start` to `end`.
    ///
    /// The board is not modified.
    pub fn validate_move(&self, start: Square, end: Square, color: Color) -> Result<Move, MoveError> {
        let piece = self.movable_piece(start, color)?;
        let sequences = piece.theoretical_moves(start, self);
        let illegal = MoveError::IllegalDestination {
            from: start,
            to: end,
        };

        let Some(sequence) = sequences.iter().find(|seq| seq.contains(end)) else {
            debug!("{piece} on {start}: {end} is not a theoretical move");
            return Err(illegal);
        };

        match self.walk_sequence(sequence, end, color) {
            Some(captured) => {
                debug!("{piece} {start}->{end} approved");
                Ok(Move {
                    from: start,
                    to: end,
                    piece,
                    captured,
                })
            }
            None => {
                debug!("{piece} {start}->{end} rejected: blocked or own piece");
                Err(illegal)
            }
        }
    }

    /// Walk `sequence` up to `end`.
    ///
    /// Returns `Some(captured)` when the move is legal, `None` when the path is
    /// blocked or `end` holds a piece of `color`.
    fn walk_sequence(&self, sequence: &MoveSequence, end: Square, color: Color) -> Option<Option<Piece>> {
        for &sq in sequence {
            let occupant = self.piece_at(sq);
            if sq == end {
                return match occupant {
                    None => Some(None),
                    Some(p) if p.color() != color => Some(Some(p)),
                    Some(_) => None,
                };
            }
            if occupant.is_some() {
                return None;
            }
        }
        None
    }

    #[must_use]
    pub fn is_legal(&self, start: Square, end: Square, color: Color) -> bool {
        self.validate_move(start, end, color).is_ok()
    }

    /// Validate and, if approved, carry out the move.
    ///
    /// On rejection the board is left untouched.
    pub fn apply_move(&mut self, start: Square, end: Square, color: Color) -> Result<Move, MoveError> {
        let mv = self.validate_move(start, end, color)?;
        self.move_piece(mv.from, mv.to);
        Ok(mv)
    }

    /// Every approved move for the piece on `start`, in generation order.
    pub fn legal_destinations(&self, start: Square, color: Color) -> Result<Vec<Move>, MoveError> {
        let piece = self.movable_piece(start, color)?;
        let mut moves = Vec::new();
        for sequence in piece.theoretical_moves(start, self) {
            for &end in &sequence {
                if moves.iter().any(|m: &Move| m.to == end) {
                    continue;
                }
                if let Ok(mv) = self.validate_move(start, end, color) {
                    moves.push(mv);
                }
            }
        }
        Ok(moves)
    }

    /// Every approved move for `color`, a1 first.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces()
            .filter(|(_, p)| p.color() == color)
            .filter_map(|(sq, _)| self.legal_destinations(sq, color).ok())
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};

    #[test]
    fn test_empty_start_square() {
        let board = Board::new();
        assert_eq!(
            board.validate_move(Square(3, 3), Square(4, 3), Color::White),
            Err(MoveError::NoPieceAtSquare {
                square: Square(3, 3)
            })
        );
    }

    #[test]
    fn test_wrong_color() {
        let board = Board::new();
        assert_eq!(
            board.validate_move(Square(6, 0), Square(5, 0), Color::White),
            Err(MoveError::WrongColorPiece {
                square: Square(6, 0),
                expected: Color::White,
                found: Color::Black,
            })
        );
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::new();
        assert!(board.is_legal(Square(1, 4), Square(3, 4), Color::White));
        assert!(board.is_legal(Square(0, 1), Square(2, 2), Color::White));
        assert!(board.is_legal(Square(6, 4), Square(4, 4), Color::Black));
        assert!(!board.is_legal(Square(0, 0), Square(2, 0), Color::White));
        assert!(!board.is_legal(Square(0, 2), Square(2, 4), Color::White));
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves(Color::White).len(), 20);
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_capture_reports_captured_piece() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::White, PieceKind::Rook)
            .piece(Square(5, 0), Color::Black, PieceKind::Knight)
            .build();
        let mv = board
            .validate_move(Square(0, 0), Square(5, 0), Color::White)
            .unwrap();
        assert_eq!(
            mv.captured,
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        assert!(!board.is_legal(Square(0, 0), Square(6, 0), Color::White));
    }

    #[test]
    fn test_apply_move_leaves_board_on_error() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(board
            .apply_move(Square(0, 3), Square(1, 3), Color::White)
            .is_err());
        assert_eq!(board, before);

        let mv = board
            .apply_move(Square(1, 3), Square(3, 3), Color::White)
            .unwrap();
        assert_eq!(mv.to_string(), "d2d4");
        assert!(board.is_empty(Square(1, 3)));
    }

    #[test]
    fn test_legal_destinations_no_duplicates() {
        let board = Board::new();
        let moves = board
            .legal_destinations(Square(1, 4), Color::White)
            .unwrap();
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![Square(2, 4), Square(3, 4)]);
    }
}
