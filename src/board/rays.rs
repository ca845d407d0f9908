use once_cell::sync::Lazy;

use super::{Square, BOARD_SIZE};

/// (row, col) steps: four orthogonal directions followed by four diagonal ones.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ORTHOGONAL: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL: std::ops::Range<usize> = 4..8;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Squares reachable along each direction from each origin, nearest first,
/// stopping at the board edge. Indexed by `Square::as_index` then direction.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|origin| {
            DIRECTIONS.map(|(dr, dc)| {
                let mut ray = Vec::with_capacity(BOARD_SIZE - 1);
                let mut current = origin;
                while let Some(next) = current.offset(dr, dc) {
                    ray.push(next);
                    current = next;
                }
                ray
            })
        })
        .collect()
});

#[inline]
pub(crate) fn ray(origin: Square, direction: usize) -> &'static [Square] {
    &RAYS[origin.as_index()][direction]
}
