use super::super::rays::DIRECTIONS;
use super::super::{MoveSequence, Square};

pub(super) fn king_sequences(origin: Square) -> Vec<MoveSequence> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| origin.offset(dr, dc))
        .map(MoveSequence::single)
        .collect()
}
