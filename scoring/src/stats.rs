use types::GameStatus;

use crate::views::GameView;

/// Headline numbers over completed rounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PerformanceSummary {
    pub rounds: usize,
    pub average_score: u64,
    pub best_score: u64,
    /// Share of rounds finished under par + 10, as a rounded percentage.
    pub within_ten_of_par_pct: u32,
}

impl PerformanceSummary {
    pub fn from_views(views: &[GameView]) -> Self {
        let completed: Vec<&GameView> = views
            .iter()
            .filter(|view| view.status == GameStatus::Completed)
            .collect();
        if completed.is_empty() {
            return Self::default();
        }

        let rounds = completed.len();
        let sum = completed
            .iter()
            .fold(0u64, |sum, view| sum.saturating_add(view.total_score));
        let best_score = completed
            .iter()
            .map(|view| view.total_score)
            .min()
            .unwrap_or_default();
        let within = completed
            .iter()
            .filter(|view| view.total_score < u64::from(view.par) + 10)
            .count();

        Self {
            rounds,
            average_score: (sum as f64 / rounds as f64).round() as u64,
            best_score,
            within_ten_of_par_pct: (within as f64 / rounds as f64 * 100.0).round() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::build_views;
    use chrono::Utc;
    use types::{Game, GameId, Score};

    fn game(id: &str) -> Game {
        Game {
            id: GameId::new(id),
            course: "Torrey Pines".to_string(),
            date: Utc::now(),
            players: vec![],
        }
    }

    #[test]
    fn test_no_completed_rounds() {
        assert_eq!(PerformanceSummary::from_views(&[]), PerformanceSummary::default());

        let mut views = build_views(&[game("g1")], &[]);
        views[0].status = GameStatus::InProgress;
        assert_eq!(PerformanceSummary::from_views(&views).rounds, 0);
    }

    #[test]
    fn test_summary_over_completed_rounds() {
        let games = vec![game("g1"), game("g2"), game("g3"), game("g4")];
        let scores = vec![
            Score::new("g1", 1, 80),
            Score::new("g2", 1, 85),
            Score::new("g3", 1, 90),
            Score::new("g4", 1, 100),
        ];
        let mut views = build_views(&games, &scores);
        views[3].status = GameStatus::Upcoming;

        let summary = PerformanceSummary::from_views(&views);
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.average_score, 85);
        assert_eq!(summary.best_score, 80);
        // only 80 is under 72 + 10
        assert_eq!(summary.within_ten_of_par_pct, 33);
    }
}
