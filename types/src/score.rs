use std::fmt::Display;

use crate::game::GameId;

/// One per-hole stroke count. `game_id` is not checked against stored games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub game_id: GameId,
    pub hole: u32,
    pub strokes: u32,
}

impl Score {
    pub fn new(game_id: impl Into<GameId>, hole: u32, strokes: u32) -> Self {
        Self {
            game_id: game_id.into(),
            hole,
            strokes,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hole {}: {}", self.game_id, self.hole, self.strokes)
    }
}
