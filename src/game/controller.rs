use std::fmt;

use log::{info, warn};

use super::options::MatchOptions;
use super::player::Player;
use crate::board::{Board, Color, Move, MoveError, Piece, Square};

/// Result of asking one player for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved(Move),
    /// The player stopped supplying coordinates
    Withdrawn(Color),
}

/// Why a match stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    Withdrawn(Color),
    PlyLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub plies: u32,
    pub captures: u32,
    pub end: MatchEnd,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            MatchEnd::Withdrawn(color) => write!(f, "{color} left the match")?,
            MatchEnd::PlyLimit => write!(f, "Move limit reached")?,
        }
        write!(f, " after {} moves ({} captures)", self.plies, self.captures)
    }
}

/// Owns the board and alternates turns between White and Black.
///
/// The active color changes only after a move is executed.
#[derive(Debug, Clone)]
pub struct MatchController {
    board: Board,
    active: Color,
    plies: u32,
    captures: u32,
    max_plies: Option<u32>,
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchController {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Color::White)
    }

    #[must_use]
    pub fn with_board(board: Board, active: Color) -> Self {
        MatchController {
            board,
            active,
            plies: 0,
            captures: 0,
            max_plies: None,
        }
    }

    #[must_use]
    pub fn from_options(options: &MatchOptions) -> Self {
        let mut controller = Self::new();
        controller.max_plies = options.max_plies;
        controller
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active
    }

    #[must_use]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Check that `start` holds a piece the active player may move.
    pub fn check_start(&self, start: Square) -> Result<Piece, MoveError> {
        self.board.movable_piece(start, self.active)
    }

    /// Validate and execute a move for the active player, then pass the turn.
    ///
    /// On rejection nothing changes and the same player is still to move.
    pub fn submit_move(&mut self, start: Square, end: Square) -> Result<Move, MoveError> {
        let mv = self.board.apply_move(start, end, self.active)?;
        self.plies += 1;
        if let Some(captured) = mv.captured {
            self.captures += 1;
            info!("{} played {mv}, capturing {captured}", self.active);
        } else {
            info!("{} played {mv}", self.active);
        }
        self.active = self.active.opponent();
        Ok(mv)
    }

    /// Ask `player` for coordinates until it supplies an approved move or withdraws.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> TurnOutcome {
        let color = self.active;
        loop {
            let Some(start) = player.choose_start(&self.board) else {
                return TurnOutcome::Withdrawn(color);
            };
            if let Err(e) = self.check_start(start) {
                warn!("{color}: {e}");
                player.on_rejected(&e);
                continue;
            }
            let Some(end) = player.choose_end(&self.board, start) else {
                return TurnOutcome::Withdrawn(color);
            };
            match self.submit_move(start, end) {
                Ok(mv) => return TurnOutcome::Moved(mv),
                Err(e) => {
                    warn!("{color}: {e}");
                    player.on_rejected(&e);
                }
            }
        }
    }

    /// Alternate turns until a player withdraws or the ply limit is reached.
    pub fn run(&mut self, white: &mut dyn Player, black: &mut dyn Player) -> MatchReport {
        self.run_with(white, black, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_move` with the updated board after
    /// every executed move of either side.
    pub fn run_with(
        &mut self,
        white: &mut dyn Player,
        black: &mut dyn Player,
        mut on_move: impl FnMut(&Board, &Move),
    ) -> MatchReport {
        let end = loop {
            if self.max_plies.is_some_and(|max| self.plies >= max) {
                break MatchEnd::PlyLimit;
            }
            let outcome = match self.active {
                Color::White => self.play_turn(white),
                Color::Black => self.play_turn(black),
            };
            match outcome {
                TurnOutcome::Moved(mv) => on_move(&self.board, &mv),
                TurnOutcome::Withdrawn(color) => break MatchEnd::Withdrawn(color),
            }
        };

        let report = MatchReport {
            plies: self.plies,
            captures: self.captures,
            end,
        };
        info!("{report}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::game::{RandomPlayer, ScriptedPlayer};

    #[test]
    fn test_turns_alternate_only_on_success() {
        let mut controller = MatchController::new();
        assert_eq!(controller.active_color(), Color::White);
        assert!(controller.submit_move(Square(6, 4), Square(4, 4)).is_err());
        assert_eq!(controller.active_color(), Color::White);
        controller.submit_move(Square(1, 4), Square(3, 4)).unwrap();
        assert_eq!(controller.active_color(), Color::Black);
        assert_eq!(controller.plies(), 1);
    }

    #[test]
    fn test_check_start() {
        let controller = MatchController::new();
        assert!(matches!(
            controller.check_start(Square(4, 4)),
            Err(MoveError::NoPieceAtSquare { .. })
        ));
        assert!(matches!(
            controller.check_start(Square(7, 0)),
            Err(MoveError::WrongColorPiece { .. })
        ));
        assert_eq!(
            controller.check_start(Square(0, 0)).map(Piece::kind),
            Ok(PieceKind::Rook)
        );
    }

    #[test]
    fn test_rejected_move_reprompts_same_player() {
        let mut controller = MatchController::new();
        let mut white = ScriptedPlayer::from_text(Color::White, ["a1a3", "e4e5", "e2e4"]).unwrap();
        let outcome = controller.play_turn(&mut white);
        assert!(matches!(outcome, TurnOutcome::Moved(mv) if mv.to == Square(3, 4)));
        assert_eq!(white.rejections().len(), 2);
        assert!(matches!(
            white.rejections()[0],
            MoveError::IllegalDestination { .. }
        ));
        assert!(matches!(
            white.rejections()[1],
            MoveError::NoPieceAtSquare { .. }
        ));
    }

    #[test]
    fn test_run_until_script_ends() {
        let mut controller = MatchController::new();
        let mut white = ScriptedPlayer::from_text(Color::White, ["e2e4", "e4d5"]).unwrap();
        let mut black = ScriptedPlayer::from_text(Color::Black, ["d7d5"]).unwrap();
        let report = controller.run(&mut white, &mut black);
        assert_eq!(report.plies, 3);
        assert_eq!(report.captures, 1);
        assert_eq!(report.end, MatchEnd::Withdrawn(Color::Black));
        assert_eq!(controller.board().piece_count(), 31);
    }

    #[test]
    fn test_ply_limit() {
        let options = MatchOptions {
            max_plies: Some(10),
            ..MatchOptions::default()
        };
        let mut controller = MatchController::from_options(&options);
        let mut white = RandomPlayer::new(Color::White, Some(3));
        let mut black = RandomPlayer::new(Color::Black, Some(4));
        let report = controller.run(&mut white, &mut black);
        assert_eq!(report.end, MatchEnd::PlyLimit);
        assert_eq!(report.plies, 10);
        assert_eq!(controller.active_color(), Color::White);
        assert!(report.to_string().contains("10 moves"));
    }

    #[test]
    fn test_run_with_sees_every_move() {
        let options = MatchOptions {
            max_plies: Some(6),
            ..MatchOptions::default()
        };
        let mut controller = MatchController::from_options(&options);
        let mut white = RandomPlayer::new(Color::White, Some(8));
        let mut black = RandomPlayer::new(Color::Black, Some(9));
        let mut seen = Vec::new();
        let report = controller.run_with(&mut white, &mut black, |board, mv| {
            assert_eq!(board.piece_at(mv.to), Some(mv.piece));
            seen.push(mv.piece.color());
        });
        assert_eq!(report.plies, 6);
        assert_eq!(
            seen,
            [Color::White, Color::Black].repeat(3)
        );
    }
}
