use std::io::{self, BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::console;
use crate::models::{Difficulty, Question};

/// An empty filtered set asks nothing and scores 0.
pub fn play<G, R, W>(
    questions: &[Question],
    difficulty: Difficulty,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> io::Result<u32>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    let mut round: Vec<&Question> = questions
        .iter()
        .filter(|q| q.difficulty_level == difficulty)
        .collect();
    round.shuffle(rng);

    log::debug!(
        "starting a {} round with {} of {} questions",
        difficulty.display_name(),
        round.len(),
        questions.len()
    );

    let mut score = 0;
    for question in round {
        if ask_one(question, input, output)? {
            score += 1;
        }
    }

    Ok(score)
}

/// Reads exactly one answer line; bad input counts as incorrect, no re-prompt.
pub fn ask_one<R, W>(question: &Question, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", question.question_text)?;
    for (i, answer) in question.possible_answers.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, answer)?;
    }

    let count = question.possible_answers.len();
    let line = console::prompt(
        input,
        output,
        &format!("\nEnter your answer (1-{}): ", count),
    )?;

    let choice: i64 = match line.parse() {
        Ok(n) => n,
        Err(_) => {
            writeln!(output, "\nInvalid input.")?;
            return Ok(false);
        }
    };

    if choice < 1 || choice > count as i64 {
        writeln!(
            output,
            "\nInvalid answer. Please enter a number between 1 and {}.",
            count
        )?;
        return Ok(false);
    }

    if (choice - 1) as usize == question.correct_answer_index {
        writeln!(output, "\nCorrect!\n")?;
        Ok(true)
    } else {
        writeln!(output, "\nIncorrect!\n")?;
        Ok(false)
    }
}
