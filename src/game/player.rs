use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::command::{parse_player_command, PlayerCommand, HELP_TEXT};
use crate::board::{parse_move_text, Board, Color, Move, MoveError, MoveParseError, Square};
use crate::render::render_board;

/// A source of coordinates for one side.
///
/// Returning `None` from either `choose_*` method withdraws the player and
/// ends the match.
pub trait Player {
    fn color(&self) -> Color;

    /// Square of the piece to move.
    fn choose_start(&mut self, board: &Board) -> Option<Square>;

    /// Destination for the piece on `start`, which is known to be ours.
    fn choose_end(&mut self, board: &Board, start: Square) -> Option<Square>;

    /// The last request was refused; the turn restarts from `choose_start`.
    fn on_rejected(&mut self, _error: &MoveError) {}
}

/// Shared terminal for console players; both sides read the same input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn shared(input: R, output: W) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(input, output)))
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("console read failed: {e}");
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        writeln!(self.output, "{text}").ok();
        self.output.flush().ok();
    }

    fn prompt(&mut self, text: &str) {
        write!(self.output, "{text}").ok();
        self.output.flush().ok();
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// A human typing squares at a terminal.
pub struct ConsolePlayer<R, W> {
    color: Color,
    console: Rc<RefCell<Console<R, W>>>,
    pending_end: Option<Square>,
}

enum Prompted {
    Square(Square),
    Move(Square, Square),
    Withdraw,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(color: Color, console: Rc<RefCell<Console<R, W>>>) -> Self {
        ConsolePlayer {
            color,
            console,
            pending_end: None,
        }
    }

    /// Prompt until the player enters a square, a move, or quits.
    /// `start` is the already chosen piece when asking for a destination.
    fn ask(&mut self, board: &Board, prompt: &str, start: Option<Square>) -> Prompted {
        let mut console = self.console.borrow_mut();
        loop {
            console.prompt(prompt);
            let Some(line) = console.read_line() else {
                return Prompted::Withdraw;
            };
            match parse_player_command(&line) {
                None => continue,
                Some(PlayerCommand::Square(sq)) => return Prompted::Square(sq),
                Some(PlayerCommand::Move(from, to)) => return Prompted::Move(from, to),
                Some(PlayerCommand::Quit) => return Prompted::Withdraw,
                Some(PlayerCommand::Board) => console.say(&render_board(board)),
                Some(PlayerCommand::Help) => console.say(HELP_TEXT),
                Some(PlayerCommand::Moves) => {
                    let moves = match start {
                        Some(sq) => board.legal_destinations(sq, self.color).unwrap_or_default(),
                        None => board.legal_moves(self.color),
                    };
                    let list: Vec<String> = moves.iter().map(Move::to_string).collect();
                    if list.is_empty() {
                        console.say("No legal moves");
                    } else {
                        console.say(&list.join(" "));
                    }
                }
                Some(PlayerCommand::Unknown(text)) => {
                    console.say(&format!("Unrecognized input '{text}' (type 'help')"));
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_start(&mut self, board: &Board) -> Option<Square> {
        self.pending_end = None;
        let prompt = format!("{} to move, start square: ", self.color);
        match self.ask(board, &prompt, None) {
            Prompted::Square(sq) => Some(sq),
            Prompted::Move(from, to) => {
                self.pending_end = Some(to);
                Some(from)
            }
            Prompted::Withdraw => None,
        }
    }

    fn choose_end(&mut self, board: &Board, start: Square) -> Option<Square> {
        if let Some(end) = self.pending_end.take() {
            return Some(end);
        }
        let name = board
            .piece_at(start)
            .map_or("piece", |p| p.kind().name());
        let prompt = format!("Move {name} on {start} where? ");
        loop {
            match self.ask(board, &prompt, Some(start)) {
                Prompted::Square(sq) => return Some(sq),
                Prompted::Move(from, to) if from == start => return Some(to),
                Prompted::Move(from, _) => {
                    // A full move must start from the piece already chosen.
                    let note = format!("{from} is not the chosen piece on {start}; enter a destination");
                    self.console.borrow_mut().say(&note);
                }
                Prompted::Withdraw => return None,
            }
        }
    }

    fn on_rejected(&mut self, error: &MoveError) {
        self.console.borrow_mut().say(&error.to_string());
    }
}

/// Picks uniformly among the legal moves available.
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
    pending: Option<Move>,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(color: Color, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomPlayer {
            color,
            rng,
            pending: None,
        }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_start(&mut self, board: &Board) -> Option<Square> {
        let moves = board.legal_moves(self.color);
        if moves.is_empty() {
            debug!("{} random player has no move to offer", self.color);
            return None;
        }
        let mv = moves[self.rng.gen_range(0..moves.len())];
        self.pending = Some(mv);
        Some(mv.from)
    }

    fn choose_end(&mut self, _board: &Board, start: Square) -> Option<Square> {
        self.pending
            .take()
            .filter(|mv| mv.from == start)
            .map(|mv| mv.to)
    }
}

/// Plays a fixed list of moves, then withdraws.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    color: Color,
    script: VecDeque<(Square, Square)>,
    pending_end: Option<Square>,
    rejections: Vec<MoveError>,
}

impl ScriptedPlayer {
    pub fn new(color: Color, moves: impl IntoIterator<Item = (Square, Square)>) -> Self {
        ScriptedPlayer {
            color,
            script: moves.into_iter().collect(),
            pending_end: None,
            rejections: Vec::new(),
        }
    }

    /// Build from move text such as `["e2e4", "g1f3"]`.
    pub fn from_text<'a>(
        color: Color,
        moves: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, MoveParseError> {
        let parsed = moves
            .into_iter()
            .map(parse_move_text)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(color, parsed))
    }

    /// Rejections received so far, oldest first.
    #[must_use]
    pub fn rejections(&self) -> &[MoveError] {
        &self.rejections
    }
}

impl Player for ScriptedPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_start(&mut self, _board: &Board) -> Option<Square> {
        let (from, to) = self.script.pop_front()?;
        self.pending_end = Some(to);
        Some(from)
    }

    fn choose_end(&mut self, _board: &Board, _start: Square) -> Option<Square> {
        self.pending_end.take()
    }

    fn on_rejected(&mut self, error: &MoveError) {
        self.rejections.push(error.clone());
    }
}
