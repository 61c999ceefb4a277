use std::fmt::Debug;

use types::{Game, GameStatus};

/// Display fields a game does not carry itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDetails {
    pub par: u32,
    pub status: GameStatus,
    pub holes: u32,
    pub duration: String,
    pub weather: String,
}

pub trait Enrichment: Debug {
    fn enrich(&self, game: &Game, total_score: u64) -> GameDetails;
}

/// Fixed stand-ins until par, status, duration and weather are derived from
/// real round data.
#[derive(Debug, Default)]
pub struct PlaceholderEnrichment;

impl Enrichment for PlaceholderEnrichment {
    fn enrich(&self, _game: &Game, _total_score: u64) -> GameDetails {
        GameDetails {
            par: 72,
            status: GameStatus::Completed,
            holes: 18,
            duration: "4h".to_string(),
            weather: "Sunny".to_string(),
        }
    }
}
