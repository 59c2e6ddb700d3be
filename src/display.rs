use std::io::{self, Write};

use crate::models::{Difficulty, Leaderboard};

pub fn main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "  Quiz Game")?;
    writeln!(out, "{}", "=".repeat(30))?;
    writeln!(out, "  1. Play Game")?;
    writeln!(out, "  2. Review Scores")?;
    writeln!(out, "  3. Exit")?;
    writeln!(out, "{}", "=".repeat(30))
}

pub fn difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nChoose difficulty level:")?;
    for (i, level) in Difficulty::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, level.display_name())?;
    }
    Ok(())
}

pub fn leaderboard<W: Write>(out: &mut W, board: &Leaderboard) -> io::Result<()> {
    writeln!(out, "\nLeaderboard:")?;
    for (rank, player) in board.entries.iter().enumerate() {
        writeln!(out, "{}. {} - Score: {}", rank + 1, player.name, player.score)?;
    }
    Ok(())
}
