use std::fmt;
use std::str::FromStr;

/// Who supplies the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves typed at the console
    Human,
    /// Uniformly random legal moves
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerKindError {
    pub found: String,
}

impl fmt::Display for PlayerKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown player kind '{}', expected 'human' or 'random'",
            self.found
        )
    }
}

impl std::error::Error for PlayerKindError {}

impl FromStr for PlayerKind {
    type Err = PlayerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" | "computer" => Ok(PlayerKind::Random),
            _ => Err(PlayerKindError {
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

/// Match configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for random players; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Stop after this many executed moves
    pub max_plies: Option<u32>,
    /// Print the board after every executed move
    pub show_board: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            white: PlayerKind::Human,
            black: PlayerKind::Human,
            seed: None,
            max_plies: None,
            show_board: true,
        }
    }
}

impl MatchOptions {
    /// Seed for the random player of `color_index`, so both sides differ.
    #[must_use]
    pub fn seed_for(&self, color_index: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(color_index as u64))
    }
}
