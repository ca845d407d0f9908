use super::super::rays::KNIGHT_OFFSETS;
use super::super::{MoveSequence, Square};

pub(super) fn knight_sequences(origin: Square) -> Vec<MoveSequence> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| origin.offset(dr, dc))
        .map(MoveSequence::single)
        .collect()
}
