use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::game::Game;

#[derive(Parser)]
#[command(name = "quizzer")]
#[command(about = "Terminal trivia quiz with a persistent leaderboard", long_about = None)]
pub struct Cli {
    /// Question bank file
    #[arg(long, value_name = "PATH", default_value = "Question.json")]
    pub questions: PathBuf,

    /// Leaderboard file
    #[arg(long, value_name = "PATH", default_value = "Leaderboard.json")]
    pub leaderboard: PathBuf,
}

pub fn run(cli: Cli) {
    let mut game = Game::new(
        io::stdin().lock(),
        io::stdout().lock(),
        cli.questions,
        cli.leaderboard,
    );

    if let Err(e) = game.run() {
        eprintln!("Game aborted: {}", e);
        std::process::exit(1);
    }
}
