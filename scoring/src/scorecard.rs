//! Per-hole score editing for one round in play.
//!
//! A session starts out editable. [`ScorecardSession::save`] and
//! [`ScorecardSession::close`] both consume it, so a finished session cannot
//! be edited or saved again. Only the saved total leaves the session; no
//! per-hole scores are written anywhere.

use thiserror::Error;
use types::{standard_holes, GameId, Hole, ScoreToPar};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScorecardError {
    #[error("Hole index {index} out of range for a {holes}-hole scorecard")]
    IndexOutOfRange { index: usize, holes: usize },
}

#[derive(Clone, Debug)]
pub struct ScorecardSession {
    game_id: GameId,
    holes: Vec<Hole>,
}

impl ScorecardSession {
    pub fn open(game_id: GameId, hole_count: usize) -> Self {
        let holes = standard_holes(hole_count);
        log::debug!("opened {}-hole scorecard for game {game_id}", holes.len());
        Self { game_id, holes }
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Moves a hole's score by `delta`, never below zero. Returns the new score.
    pub fn adjust_score(&mut self, hole_index: usize, delta: i32) -> Result<u32, ScorecardError> {
        let hole = self.hole_mut(hole_index)?;
        let adjusted = (hole.score as i64 + delta as i64).max(0);
        hole.score = u32::try_from(adjusted).unwrap_or(u32::MAX);
        Ok(hole.score)
    }

    pub fn set_score(&mut self, hole_index: usize, score: u32) -> Result<(), ScorecardError> {
        self.hole_mut(hole_index)?.score = score;
        Ok(())
    }

    /// Zeroes every hole. Callers confirm with the user first.
    pub fn reset(&mut self) {
        for hole in &mut self.holes {
            hole.score = 0;
        }
    }

    pub fn total_score(&self) -> u64 {
        self.holes.iter().map(|hole| u64::from(hole.score)).sum()
    }

    pub fn total_par(&self) -> u64 {
        self.holes.iter().map(|hole| u64::from(hole.par)).sum()
    }

    pub fn to_par(&self) -> ScoreToPar {
        ScoreToPar::new(self.total_score(), self.total_par())
    }

    /// Text shown when asking the user to confirm a save.
    pub fn summary(&self) -> String {
        format!(
            "Total Score: {}\nPar: {}\nDifference: {}",
            self.total_score(),
            self.total_par(),
            self.to_par()
        )
    }

    /// Hands the total to `on_save` and ends the session.
    pub fn save<F: FnOnce(u64)>(self, on_save: F) -> u64 {
        let total = self.total_score();
        log::info!("saving scorecard for game {}: {total}", self.game_id);
        on_save(total);
        total
    }

    /// Ends the session without saving.
    pub fn close(self) {
        log::debug!("closed scorecard for game {} without saving", self.game_id);
    }

    fn hole_mut(&mut self, hole_index: usize) -> Result<&mut Hole, ScorecardError> {
        let holes = self.holes.len();
        self.holes
            .get_mut(hole_index)
            .ok_or(ScorecardError::IndexOutOfRange {
                index: hole_index,
                holes,
            })
    }
}
