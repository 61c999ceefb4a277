use std::str::FromStr;

use itertools::Itertools;
use types::{Game, GameId, GameStatus, Score, ScoreToPar};

use crate::aggregator::total_for;
use crate::enrichment::{Enrichment, PlaceholderEnrichment};

pub const NEW_GAME_PAR: u32 = 72;
pub const NEW_GAME_HOLES: u32 = 18;
pub const SAVED_ROUND_DURATION: &str = "4h 15m";

/// A stored game plus its computed total and display details. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub game: Game,
    pub total_score: u64,
    pub par: u32,
    pub status: GameStatus,
    pub holes: u32,
    pub duration: String,
    pub weather: String,
}

impl GameView {
    /// View for a game that was just created and has no scores yet.
    pub fn started(game: Game) -> Self {
        Self {
            game,
            total_score: 0,
            par: NEW_GAME_PAR,
            status: GameStatus::InProgress,
            holes: NEW_GAME_HOLES,
            duration: String::new(),
            weather: String::new(),
        }
    }

    pub fn id(&self) -> &GameId {
        &self.game.id
    }

    pub fn to_par(&self) -> ScoreToPar {
        ScoreToPar::new(self.total_score, self.par.into())
    }

    /// Applies a saved scorecard total. Only this view changes; nothing is stored.
    pub fn record_total(&mut self, total_score: u64) {
        log::debug!("game {} completed with {total_score}", self.game.id);
        self.total_score = total_score;
        self.status = GameStatus::Completed;
        self.duration = SAVED_ROUND_DURATION.to_string();
    }
}

pub fn build_views(games: &[Game], scores: &[Score]) -> Vec<GameView> {
    build_views_with(games, scores, &PlaceholderEnrichment)
}

/// One view per game, in the order given. Totals are recomputed on every call.
pub fn build_views_with(
    games: &[Game],
    scores: &[Score],
    enrichment: &dyn Enrichment,
) -> Vec<GameView> {
    games
        .iter()
        .map(|game| {
            let total_score = total_for(&game.id, scores);
            let details = enrichment.enrich(game, total_score);
            GameView {
                game: game.clone(),
                total_score,
                par: details.par,
                status: details.status,
                holes: details.holes,
                duration: details.duration,
                weather: details.weather,
            }
        })
        .collect()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(GameStatus),
}

impl StatusFilter {
    pub fn matches(&self, view: &GameView) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => view.status == *status,
        }
    }

    pub fn apply<'a>(&self, views: &'a [GameView]) -> Vec<&'a GameView> {
        views.iter().filter(|view| self.matches(view)).collect()
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GameSort {
    /// Store write order.
    #[default]
    Stored,
    /// Newest first.
    Date,
    /// Lowest total first.
    Score,
}

impl GameSort {
    /// Stable; ties keep their incoming order.
    pub fn apply<'a>(&self, views: Vec<&'a GameView>) -> Vec<&'a GameView> {
        match self {
            GameSort::Stored => views,
            GameSort::Date => views
                .into_iter()
                .sorted_by(|a, b| b.game.date.cmp(&a.game.date))
                .collect(),
            GameSort::Score => views
                .into_iter()
                .sorted_by_key(|view| view.total_score)
                .collect(),
        }
    }
}

impl FromStr for GameSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stored" => Ok(GameSort::Stored),
            "date" => Ok(GameSort::Date),
            "score" => Ok(GameSort::Score),
            other => Err(format!("unknown sort: {other}")),
        }
    }
}
