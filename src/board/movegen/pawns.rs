use super::super::{Board, Color, MoveSequence, Square};

/// Pawn candidates depend on occupancy:
/// - one step forward if that square is empty,
/// - two steps from the starting row if both squares ahead are empty,
/// - a forward diagonal only if an opposing piece stands there.
pub(super) fn pawn_sequences(origin: Square, color: Color, board: &Board) -> Vec<MoveSequence> {
    let mut sequences = Vec::with_capacity(4);
    let dir = color.pawn_direction();

    if let Some(one) = origin.offset(dir, 0) {
        if board.is_empty(one) {
            sequences.push(MoveSequence::single(one));
            if origin.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if board.is_empty(two) {
                        sequences.push(MoveSequence::from(vec![one, two]));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = origin.offset(dir, dc) {
            if board
                .piece_at(target)
                .is_some_and(|p| p.color() != color)
            {
                sequences.push(MoveSequence::single(target));
            }
        }
    }

    sequences
}
