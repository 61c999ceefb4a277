use std::{fmt::Display, str::FromStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Completed,
    InProgress,
    Upcoming,
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Completed => write!(f, "completed"),
            GameStatus::InProgress => write!(f, "in-progress"),
            GameStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(GameStatus::Completed),
            "in-progress" => Ok(GameStatus::InProgress),
            "upcoming" => Ok(GameStatus::Upcoming),
            other => Err(format!("unknown game status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_its_own_display() {
        for status in [
            GameStatus::Completed,
            GameStatus::InProgress,
            GameStatus::Upcoming,
        ] {
            assert_eq!(status.to_string().parse::<GameStatus>(), Ok(status));
        }
        assert!("finished".parse::<GameStatus>().is_err());
    }
}
