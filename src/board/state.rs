#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, BOARD_SIZE};

/// Back row from the a-file to the h-file, as White sets it up.
/// Black's back row is the same sequence reversed.
const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional occupants.
///
/// The board exclusively owns every piece on it. A cell holds at most one piece
/// and every cell is always addressable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_standard_position();
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Clear the board and place the 32 starting pieces.
    pub fn setup_standard_position(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        let white_row = Color::White.back_row();
        let black_row = Color::Black.back_row();
        for (col, kind) in BACK_ROW.iter().enumerate() {
            self.place(Square(white_row, col), Piece::new(Color::White, *kind));
            self.place(
                Square(black_row, BOARD_SIZE - 1 - col),
                Piece::new(Color::Black, *kind),
            );
            self.place(
                Square(Color::White.pawn_start_row(), col),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            self.place(
                Square(Color::Black.pawn_start_row(), col),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
        }
    }

    /// The piece on `sq`. Squares off the board hold nothing.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells.get(sq.0).and_then(|row| row.get(sq.1)).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Put `piece` on `sq`, returning whatever was there before.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cells[sq.0][sq.1].replace(piece)
    }

    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.0][sq.1].take()
    }

    /// Relocate whatever stands on `from` to `to`, overwriting `to` and clearing `from`.
    ///
    /// No legality checking happens here; callers validate first. Returns the
    /// piece that was overwritten on `to`, if any. Panics if either square is
    /// off the board.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let moving = self.remove(from);
        let overwritten = self.cells[to.0][to.1].take();
        self.cells[to.0][to.1] = moving;
        overwritten
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn piece_count_for(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color() == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
