use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::console;
use crate::display;
use crate::models::{Difficulty, Leaderboard, Player};
use crate::session;
use crate::store;

pub struct Game<R, W> {
    input: R,
    output: W,
    questions_path: PathBuf,
    leaderboard_path: PathBuf,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W, questions_path: PathBuf, leaderboard_path: PathBuf) -> Self {
        Self {
            input,
            output,
            questions_path,
            leaderboard_path,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let player_name = self.prompt_name()?;
        let mut leaderboard = self.load_or_empty_leaderboard()?;

        loop {
            display::main_menu(&mut self.output)?;
            let line =
                console::prompt(&mut self.input, &mut self.output, "\nEnter your choice: ")?;

            let choice: i64 = match line.parse() {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.output, "\nInvalid input. Please enter a number.")?;
                    continue;
                }
            };

            match choice {
                1 => self.play_round(&player_name, &mut leaderboard)?,
                2 => display::leaderboard(&mut self.output, &leaderboard)?,
                3 => {
                    writeln!(self.output, "\nExiting the game. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "\nInvalid choice. Please enter a number.")?,
            }
        }
    }

    fn prompt_name(&mut self) -> io::Result<String> {
        loop {
            let name = console::prompt(&mut self.input, &mut self.output, "Enter your name: ")?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "Invalid name. Please try again.")?;
        }
    }

    fn load_or_empty_leaderboard(&mut self) -> io::Result<Leaderboard> {
        match store::load_leaderboard(&self.leaderboard_path) {
            Ok(board) => Ok(board),
            Err(e) => {
                log::warn!(
                    "could not load leaderboard from {}: {}",
                    self.leaderboard_path.display(),
                    e
                );
                writeln!(
                    self.output,
                    "\nCould not read the saved leaderboard; starting with an empty one."
                )?;
                Ok(Leaderboard::default())
            }
        }
    }

    /// Recoverable failures print a message and fall back to the main menu.
    fn play_round(&mut self, player_name: &str, leaderboard: &mut Leaderboard) -> io::Result<()> {
        display::difficulty_menu(&mut self.output)?;
        let line = console::prompt(
            &mut self.input,
            &mut self.output,
            "\nEnter your choice (1-3): ",
        )?;

        let difficulty = match line.parse::<i64>().ok().and_then(Difficulty::from_choice) {
            Some(d) => d,
            None => {
                writeln!(
                    self.output,
                    "\nInvalid difficulty level. Please enter a number between 1 and 3."
                )?;
                return Ok(());
            }
        };

        let questions = match store::load_questions(&self.questions_path) {
            Ok(q) => q,
            Err(e) => {
                log::warn!(
                    "could not load questions from {}: {}",
                    self.questions_path.display(),
                    e
                );
                writeln!(self.output, "\nFailed to load questions.")?;
                return Ok(());
            }
        };

        let score = session::play(
            &questions,
            difficulty,
            &mut rand::thread_rng(),
            &mut self.input,
            &mut self.output,
        )?;

        leaderboard.update(Player::new(player_name.to_string(), score));
        match store::save_leaderboard(leaderboard, &self.leaderboard_path) {
            Ok(()) => writeln!(self.output, "\nLeaderboard updated successfully.")?,
            Err(e) => {
                log::error!(
                    "could not save leaderboard to {}: {}",
                    self.leaderboard_path.display(),
                    e
                );
                writeln!(self.output, "\nError saving leaderboard: {}", e)?;
            }
        }

        writeln!(self.output, "\nYour final score: {}", score)?;
        Ok(())
    }
}
