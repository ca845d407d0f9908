mod cli;

use std::cell::RefCell;
use std::io::{self, StdinLock, Stdout};
use std::rc::Rc;

use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use chess_arbiter::board::Color;
use chess_arbiter::game::{
    Console, ConsolePlayer, MatchController, MatchOptions, Player, PlayerKind, RandomPlayer,
};
use chess_arbiter::render::MovePrinter;

type TerminalConsole = Rc<RefCell<Console<StdinLock<'static>, Stdout>>>;

fn build_player(
    color: Color,
    kind: PlayerKind,
    options: &MatchOptions,
    console: &TerminalConsole,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(ConsolePlayer::new(color, Rc::clone(console))),
        PlayerKind::Random => Box::new(RandomPlayer::new(color, options.seed_for(color.index()))),
    }
}

fn main() {
    let env = Env::default().filter_or("CHESS_ARBITER_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let options = cli::Cli::parse().options();
    info!("starting match: {} vs {}", options.white, options.black);

    let console: TerminalConsole = Console::shared(io::stdin().lock(), io::stdout());
    let mut white = build_player(Color::White, options.white, &options, &console);
    let mut black = build_player(Color::Black, options.black, &options, &console);

    let mut controller = MatchController::from_options(&options);
    let mut printer = MovePrinter::new(io::stdout(), options.show_board);
    if let Err(e) = printer.print_board(controller.board()) {
        warn!("could not print board: {e}");
    }
    let report = controller.run_with(white.as_mut(), black.as_mut(), |board, mv| {
        if let Err(e) = printer.print_move(board, mv) {
            warn!("could not print board: {e}");
        }
    });
    println!("{report}");
}
