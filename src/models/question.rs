use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    pub possible_answers: Vec<String>,
    pub correct_answer_index: usize,
    pub difficulty_level: Difficulty,
    pub category: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}
