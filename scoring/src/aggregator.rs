use types::{GameId, Score};

/// Sum of stroke counts recorded against `game_id`. Zero when nothing matches.
/// Summed as `u64`, so any number of `u32` stroke counts fits.
pub fn total_for(game_id: &GameId, scores: &[Score]) -> u64 {
    scores
        .iter()
        .filter(|score| &score.game_id == game_id)
        .map(|score| u64::from(score.strokes))
        .sum()
}
