pub mod difficulty;
pub mod leaderboard;
pub mod player;
pub mod question;

pub use difficulty::Difficulty;
pub use leaderboard::Leaderboard;
pub use player::Player;
pub use question::{Question, QuestionBank};
