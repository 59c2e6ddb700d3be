use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::{Leaderboard, Question, QuestionBank};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_leaderboard(path: &Path) -> Result<Leaderboard, StoreError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save_leaderboard(board: &Leaderboard, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(board)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn load_questions(path: &Path) -> Result<Vec<Question>, StoreError> {
    let contents = fs::read_to_string(path)?;
    let bank: QuestionBank = serde_json::from_str(&contents)?;
    Ok(bank.questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Player};
    use tempfile::TempDir;

    #[test]
    fn test_leaderboard_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Leaderboard.json");

        let mut board = Leaderboard::default();
        board.update(Player::new("ada".to_string(), 4));
        board.update(Player::new("bob".to_string(), 9));

        save_leaderboard(&board, &path).unwrap();
        let loaded = load_leaderboard(&path).unwrap();
        assert_eq!(loaded, board);
    }

    #[test]
    fn test_load_leaderboard_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_leaderboard(&dir.path().join("Leaderboard.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_leaderboard_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Leaderboard.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_leaderboard(&path);
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_saved_file_uses_leaderboard_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Leaderboard.json");

        let mut board = Leaderboard::default();
        board.update(Player::new("ada".to_string(), 2));
        save_leaderboard(&board, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["leaderboard"][0]["name"], "ada");
        assert_eq!(value["leaderboard"][0]["score"], 2);
    }

    #[test]
    fn test_load_questions_parses_bank_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Question.json");
        fs::write(
            &path,
            r#"{
                "questions": [
                    {
                        "questionText": "In which year did the Berlin Wall fall?",
                        "possibleAnswers": ["1987", "1989", "1991"],
                        "correctAnswerIndex": 1,
                        "difficultyLevel": "medium",
                        "category": "history"
                    }
                ]
            }"#,
        )
        .unwrap();

        let questions = load_questions(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text, "In which year did the Berlin Wall fall?");
        assert_eq!(questions[0].possible_answers, vec!["1987", "1989", "1991"]);
        assert_eq!(questions[0].correct_answer_index, 1);
        assert_eq!(questions[0].difficulty_level, Difficulty::Medium);
        assert_eq!(questions[0].category, "history");
    }

    #[test]
    fn test_load_questions_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_questions(&dir.path().join("Question.json"));
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
