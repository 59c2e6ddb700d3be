use serde::{Deserialize, Serialize};

use super::player::Player;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "leaderboard")]
    pub entries: Vec<Player>,
}

impl Leaderboard {
    /// The sort is stable, so equal scores keep their insertion order.
    pub fn update(&mut self, player: Player) {
        self.entries.push(player);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}
