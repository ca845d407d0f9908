//! Move sequences and approved moves.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Piece, Square};

/// One direction of travel from a piece's origin, nearest square first.
///
/// Built fresh for every validation request and never includes the origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSequence(Vec<Square>);

impl MoveSequence {
    #[must_use]
    pub fn single(square: Square) -> Self {
        MoveSequence(vec![square])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        self.0.contains(&square)
    }

    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Square>> for MoveSequence {
    fn from(squares: Vec<Square>) -> Self {
        MoveSequence(squares)
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A move that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece being moved
    pub piece: Piece,
    /// The opposing piece standing on `to`, if this is a capture
    pub captured: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
