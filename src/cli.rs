use clap::Parser;

use chess_arbiter::game::{MatchOptions, PlayerKind};

#[derive(Parser, Debug)]
#[command(name = "chess_arbiter", version, about = "Play chess between two players in the terminal")]
pub struct Cli {
    /// Who plays White: human or random
    #[arg(long, default_value_t = PlayerKind::Human)]
    pub white: PlayerKind,

    /// Who plays Black: human or random
    #[arg(long, default_value_t = PlayerKind::Human)]
    pub black: PlayerKind,

    /// Seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many moves
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Do not print the board after every move
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            white: self.white,
            black: self.black,
            seed: self.seed,
            max_plies: self.max_plies,
            show_board: !self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "chess_arbiter",
            "--white",
            "random",
            "--seed",
            "9",
            "--max-plies",
            "20",
            "--quiet",
        ])
        .unwrap();
        let options = cli.options();
        assert_eq!(options.white, PlayerKind::Random);
        assert_eq!(options.black, PlayerKind::Human);
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.max_plies, Some(20));
        assert!(!options.show_board);
    }

    #[test]
    fn test_rejects_unknown_player() {
        assert!(Cli::try_parse_from(["chess_arbiter", "--black", "robot"]).is_err());
    }
}
