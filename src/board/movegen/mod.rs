//! Theoretical move generation.
//!
//! A piece's theoretical moves are the squares its movement pattern reaches,
//! grouped into one `MoveSequence` per direction and ordered nearest first.
//! Blocking and captures are resolved later by the validator.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::rays::{DIAGONAL, ORTHOGONAL};
use super::{Board, MoveSequence, Piece, PieceKind, Square};

impl Piece {
    /// Candidate squares from `origin`, grouped by direction.
    ///
    /// Only pawns look at `board`; every other kind depends on `origin` alone.
    /// The origin itself never appears in the result.
    #[must_use]
    pub fn theoretical_moves(self, origin: Square, board: &Board) -> Vec<MoveSequence> {
        let sequences = match self.kind() {
            PieceKind::Pawn => pawns::pawn_sequences(origin, self.color(), board),
            PieceKind::Knight => knights::knight_sequences(origin),
            PieceKind::Bishop => sliders::slider_sequences(origin, DIAGONAL),
            PieceKind::Rook => sliders::slider_sequences(origin, ORTHOGONAL),
            PieceKind::Queen => sliders::slider_sequences(origin, ORTHOGONAL.start..DIAGONAL.end),
            PieceKind::King => kings::king_sequences(origin),
        };
        trace!(
            "{} on {} has {} candidate sequences",
            self,
            origin,
            sequences.len()
        );
        sequences
    }
}
