use std::ops::Range;

use super::super::rays::ray;
use super::super::{MoveSequence, Square};

/// One sequence per direction in `directions`, each running to the board edge.
/// Directions with no on-board squares are omitted.
pub(super) fn slider_sequences(origin: Square, directions: Range<usize>) -> Vec<MoveSequence> {
    directions
        .map(|dir| ray(origin, dir))
        .filter(|squares| !squares.is_empty())
        .map(|squares| MoveSequence::from(squares.to_vec()))
        .collect()
}
