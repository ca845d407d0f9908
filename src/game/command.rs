use crate::board::{parse_move_text, Square};

/// A line typed by a console player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// A single square such as `e2`
    Square(Square),
    /// A whole move such as `e2e4`
    Move(Square, Square),
    Board,
    Moves,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Enter a square (e2) to pick a piece, then its destination (e4),
or a whole move at once (e2e4).
Commands: board, moves, help, quit";

pub fn parse_player_command(line: &str) -> Option<PlayerCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let word = trimmed.to_ascii_lowercase();

    let cmd = match word.as_str() {
        "board" | "b" => PlayerCommand::Board,
        "moves" | "m" => PlayerCommand::Moves,
        "help" | "h" | "?" => PlayerCommand::Help,
        "quit" | "q" | "exit" => PlayerCommand::Quit,
        _ => {
            if let Ok(sq) = word.parse::<Square>() {
                PlayerCommand::Square(sq)
            } else if let Ok((from, to)) = parse_move_text(&word) {
                PlayerCommand::Move(from, to)
            } else {
                PlayerCommand::Unknown(trimmed.to_string())
            }
        }
    };

    Some(cmd)
}
