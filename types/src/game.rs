use std::fmt::Display;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use thiserror::Error;

pub const DEFAULT_MAX_PLAYERS: usize = 4;

/// Opaque game identifier.
///
/// Generated by the caller from the creation time, so it is only unique per
/// device and only as long as two games are not created in the same millisecond.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One round of golf as it is persisted. Never updated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub course: String,
    pub date: DateTime<Utc>,
    pub players: Vec<String>,
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} on {} [{}]",
            self.id,
            self.course,
            self.date.format("%Y-%m-%d"),
            self.players.iter().join(", ")
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameValidationError {
    #[error("Please enter a course name")]
    EmptyCourse,

    #[error("Too many players: {count} (max {max})")]
    TooManyPlayers { count: usize, max: usize },
}

/// Construction record for a new game, checked before anything reaches storage.
#[derive(Clone, Debug, Default)]
pub struct NewGame {
    pub course: String,
    pub players: Vec<String>,
    pub date: Option<DateTime<Utc>>,
}

impl NewGame {
    pub fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            ..Default::default()
        }
    }

    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.players.push(player.into());
        self
    }

    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Trims the course, drops blank player entries and stamps the id from `now`.
    pub fn into_game(self, now: DateTime<Utc>, max_players: usize) -> Result<Game, GameValidationError> {
        let course = self.course.trim();
        if course.is_empty() {
            return Err(GameValidationError::EmptyCourse);
        }
        let players: Vec<String> = self
            .players
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if players.len() > max_players {
            return Err(GameValidationError::TooManyPlayers {
                count: players.len(),
                max: max_players,
            });
        }
        log::debug!("validated new game at {course} with {} players", players.len());
        Ok(Game {
            id: GameId::from_timestamp(now),
            course: course.to_string(),
            date: self.date.unwrap_or(now),
            players,
        })
    }
}
