use chrono::{DateTime, Utc};
use database::{KeyValueStore, RecordStore};
use scoring::{
    build_views_with, Enrichment, GameSort, GameView, PerformanceSummary, PlaceholderEnrichment,
    ScorecardSession, StatusFilter,
};
use types::{Game, GameId, NewGame, Score, DEFAULT_MAX_PLAYERS};

use crate::collaborators::Confirmation;
use crate::TrackerError;

const RESET_OPTIONS: [&str; 2] = ["Cancel", "Reset"];
const SAVE_OPTIONS: [&str; 2] = ["Cancel", "Save"];

pub enum SaveOutcome {
    Saved(u64),
    /// The user backed out; the session is still open.
    Cancelled(ScorecardSession),
}

/// Games, scores and scorecards over one record store.
pub struct Tracker<S> {
    records: RecordStore<S>,
    enrichment: Box<dyn Enrichment>,
    max_players: usize,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn new(records: RecordStore<S>) -> Self {
        Self {
            records,
            enrichment: Box::new(PlaceholderEnrichment),
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }

    pub fn with_enrichment(mut self, enrichment: Box<dyn Enrichment>) -> Self {
        self.enrichment = enrichment;
        self
    }

    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub async fn create_game(&self, new_game: NewGame) -> Result<GameView, TrackerError> {
        self.create_game_at(new_game, Utc::now()).await
    }

    /// Validates, stores, and returns the in-progress view for the new game.
    pub async fn create_game_at(
        &self,
        new_game: NewGame,
        now: DateTime<Utc>,
    ) -> Result<GameView, TrackerError> {
        let game = new_game.into_game(now, self.max_players)?;
        self.records.append_game(&game).await?;
        log::info!("New round started at {}", game.course);
        Ok(GameView::started(game))
    }

    pub async fn load_views(
        &self,
        filter: StatusFilter,
        sort: GameSort,
    ) -> Result<Vec<GameView>, TrackerError> {
        let games = self.records.list_games().await?;
        let scores = self.records.list_scores().await?;
        let views = build_views_with(&games, &scores, self.enrichment.as_ref());
        Ok(sort
            .apply(filter.apply(&views))
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn summary(&self) -> Result<PerformanceSummary, TrackerError> {
        let views = self.load_views(StatusFilter::All, GameSort::Stored).await?;
        Ok(PerformanceSummary::from_views(&views))
    }

    async fn require_game(&self, id: &GameId) -> Result<Game, TrackerError> {
        self.records
            .find_game(id)
            .await?
            .ok_or_else(|| TrackerError::GameNotFound(id.clone()))
    }

    /// Appends one per-hole score. The game must already exist.
    pub async fn record_score(&self, score: Score) -> Result<(), TrackerError> {
        if score.hole == 0 {
            return Err(TrackerError::InvalidHole(score.hole));
        }
        self.require_game(&score.game_id).await?;
        self.records.append_score(&score).await?;
        Ok(())
    }

    pub async fn open_scorecard(
        &self,
        id: &GameId,
        hole_count: usize,
    ) -> Result<ScorecardSession, TrackerError> {
        let game = self.require_game(id).await?;
        Ok(ScorecardSession::open(game.id, hole_count))
    }
}

/// Swaps an unreachable-store error for an empty value, passing the error to
/// `notify`. Every other error is returned as is.
pub fn or_empty_if_unavailable<T: Default>(
    result: Result<T, TrackerError>,
    notify: impl FnOnce(&TrackerError),
) -> Result<T, TrackerError> {
    match result {
        Err(e) if e.is_storage_unavailable() => {
            log::warn!("store unavailable, showing empty result: {e}");
            notify(&e);
            Ok(T::default())
        }
        other => other,
    }
}

/// Zeroes the card if the user confirms. Returns whether it was reset.
pub fn confirm_reset(session: &mut ScorecardSession, confirmation: &dyn Confirmation) -> bool {
    let choice = confirmation.present(
        "Reset Scorecard",
        "Are you sure you want to reset all scores?",
        &RESET_OPTIONS,
    );
    if choice == Some(1) {
        session.reset();
        true
    } else {
        false
    }
}

/// Shows the totals and, if confirmed, saves the card into `view`.
pub fn confirm_save(
    session: ScorecardSession,
    view: &mut GameView,
    confirmation: &dyn Confirmation,
) -> SaveOutcome {
    let choice = confirmation.present("Save Scorecard", &session.summary(), &SAVE_OPTIONS);
    if choice != Some(1) {
        return SaveOutcome::Cancelled(session);
    }
    let total = session.save(|total| view.record_total(total));
    SaveOutcome::Saved(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::AutoAnswer;
    use chrono::TimeZone;
    use database::MemoryStore;
    use types::GameStatus;

    fn tracker() -> Tracker<MemoryStore> {
        Tracker::new(RecordStore::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_game_stores_and_returns_started_view() {
        let tracker = tracker();
        let now = Utc.with_ymd_and_hms(2024, 7, 4, 7, 0, 0).unwrap();

        let view = tracker
            .create_game_at(NewGame::new("Pine Valley").with_player("A").with_player(""), now)
            .await
            .expect("Failed to create game");

        assert_eq!(view.status, GameStatus::InProgress);
        assert_eq!(view.id().as_str(), now.timestamp_millis().to_string());
        let stored = tracker.records().list_games().await.unwrap();
        assert_eq!(stored, vec![view.game.clone()]);
    }

    #[tokio::test]
    async fn test_invalid_game_is_never_stored() {
        let tracker = tracker().with_max_players(1);

        let err = tracker.create_game(NewGame::new(" ")).await.unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        let err = tracker
            .create_game(NewGame::new("Augusta").with_player("A").with_player("B"))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        assert!(tracker.records().list_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scores_must_reference_a_game() {
        let tracker = tracker();
        let err = tracker
            .record_score(Score::new("ghost", 1, 4))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::GameNotFound(_)));

        let view = tracker.create_game(NewGame::new("Oakmont")).await.unwrap();
        let err = tracker
            .record_score(Score::new(view.id().clone(), 0, 4))
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidHole(0)));

        tracker
            .record_score(Score::new(view.id().clone(), 1, 4))
            .await
            .unwrap();
        tracker
            .record_score(Score::new(view.id().clone(), 2, 5))
            .await
            .unwrap();

        let views = tracker
            .load_views(StatusFilter::All, GameSort::Stored)
            .await
            .unwrap();
        assert_eq!(views[0].total_score, 9);
    }

    #[tokio::test]
    async fn test_scorecard_reset_and_save_go_through_confirmation() {
        let tracker = tracker();
        let mut view = tracker.create_game(NewGame::new("Merion")).await.unwrap();
        let mut card = tracker.open_scorecard(view.id(), 9).await.unwrap();
        card.adjust_score(0, 5).unwrap();

        assert!(!confirm_reset(&mut card, &AutoAnswer::decline()));
        assert_eq!(card.total_score(), 5);

        let card = match confirm_save(card, &mut view, &AutoAnswer::decline()) {
            SaveOutcome::Cancelled(card) => card,
            SaveOutcome::Saved(_) => panic!("declined save must not save"),
        };
        assert_eq!(view.status, GameStatus::InProgress);

        let mut card = card;
        assert!(confirm_reset(&mut card, &AutoAnswer::accept()));
        card.adjust_score(1, 3).unwrap();

        match confirm_save(card, &mut view, &AutoAnswer::accept()) {
            SaveOutcome::Saved(total) => assert_eq!(total, 3),
            SaveOutcome::Cancelled(_) => panic!("accepted save must save"),
        }
        assert_eq!(view.total_score, 3);
        assert_eq!(view.status, GameStatus::Completed);

        // the saved total stays in the view; no per-hole scores were stored
        assert!(tracker.records().list_scores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_scorecard_for_unknown_game() {
        let err = tracker()
            .open_scorecard(&GameId::new("ghost"), 18)
            .await
            .unwrap_err();
        assert!(matches!(err, TrackerError::GameNotFound(_)));
    }
}
