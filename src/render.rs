//! Text rendering of the board.

use std::collections::HashMap;
use std::io::{self, Write};

use once_cell::sync::Lazy;

use crate::board::{Board, Color, Move, Piece, PieceKind, Square, BOARD_SIZE};

static GLYPHS: Lazy<HashMap<Piece, char>> = Lazy::new(|| {
    let white = ['\u{2659}', '\u{2658}', '\u{2657}', '\u{2656}', '\u{2655}', '\u{2654}'];
    let black = ['\u{265F}', '\u{265E}', '\u{265D}', '\u{265C}', '\u{265B}', '\u{265A}'];
    let mut table = HashMap::with_capacity(12);
    for kind in PieceKind::ALL {
        table.insert(Piece::new(Color::White, kind), white[kind.index()]);
        table.insert(Piece::new(Color::Black, kind), black[kind.index()]);
    }
    table
});

const EMPTY: char = '*';

/// Unicode chess glyph for a piece.
#[must_use]
pub fn glyph(piece: Piece) -> char {
    GLYPHS.get(&piece).copied().unwrap_or_else(|| piece.to_char())
}

/// Render the board with row 8 at the top and file letters above and below.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let files: String = (0..BOARD_SIZE)
        .map(|c| format!(" {} ", (b'a' + c as u8) as char))
        .collect();
    let mut output = String::new();
    output.push_str(&format!("  {files}\n"));
    for row in (0..BOARD_SIZE).rev() {
        output.push_str(&format!("{} ", row + 1));
        for col in 0..BOARD_SIZE {
            let ch = board.piece_at(Square(row, col)).map_or(EMPTY, glyph);
            output.push_str(&format!(" {ch} "));
        }
        output.push_str(&format!(" {}\n", row + 1));
    }
    output.push_str(&format!("  {files}\n"));
    output
}

/// Writes the board after every executed move, whoever made it.
///
/// A disabled printer writes nothing.
pub struct MovePrinter<W> {
    out: W,
    enabled: bool,
}

impl<W: Write> MovePrinter<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        MovePrinter { out, enabled }
    }

    pub fn print_board(&mut self, board: &Board) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out, "{}", render_board(board))?;
        self.out.flush()
    }

    pub fn print_move(&mut self, board: &Board, mv: &Move) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out, "{} played {mv}", mv.piece.color())?;
        self.print_board(board)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
