use serde::{Deserialize, Serialize};
use types::{Game, GameId, Score};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub course: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub game_id: String,
    pub hole: u32,
    pub score: u32,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.as_str().to_string(),
            course: game.course.clone(),
            date: game.date,
            players: game.players.clone(),
        }
    }
}

impl From<GameRecord> for Game {
    fn from(record: GameRecord) -> Self {
        Self {
            id: GameId::new(record.id),
            course: record.course,
            date: record.date,
            players: record.players,
        }
    }
}

impl From<&Score> for ScoreRecord {
    fn from(score: &Score) -> Self {
        Self {
            game_id: score.game_id.as_str().to_string(),
            hole: score.hole,
            score: score.strokes,
        }
    }
}

impl From<ScoreRecord> for Score {
    fn from(record: ScoreRecord) -> Self {
        Self {
            game_id: GameId::new(record.game_id),
            hole: record.hole,
            strokes: record.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_record_uses_camel_case_game_id() {
        let record = ScoreRecord::from(&Score::new("g1", 3, 5));
        let json = serde_json::to_string(&record).expect("Failed to serialize");
        assert_eq!(json, r#"{"gameId":"g1","hole":3,"score":5}"#);
    }

    #[test]
    fn test_game_record_date_is_a_string() {
        let json = r#"{"id":"1714555800000","course":"Pine Valley","date":"2024-05-01T09:30:00Z","players":["A","B"]}"#;
        let record: GameRecord = serde_json::from_str(json).expect("Failed to deserialize");
        let game = Game::from(record.clone());
        assert_eq!(game.id.as_str(), "1714555800000");
        assert_eq!(game.players.len(), 2);
        assert_eq!(GameRecord::from(&game), record);
    }
}
