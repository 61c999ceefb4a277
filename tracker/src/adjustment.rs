use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::TrackerError;

/// A `HOLE:DELTA` pair from the command line, e.g. `3:+2` or `7:-1`.
/// Holes are numbered from 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreAdjustment {
    hole: usize,
    delta: i32,
}

impl ScoreAdjustment {
    pub fn hole(&self) -> usize {
        self.hole
    }

    pub fn delta(&self) -> i32 {
        self.delta
    }

    pub fn hole_index(&self) -> usize {
        self.hole.saturating_sub(1)
    }
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{1,3}):([+-]?\d{1,4})$").expect("valid regex"))
}

impl FromStr for ScoreAdjustment {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidAdjustment(s.to_string());
        let captures = pattern().captures(s.trim()).ok_or_else(invalid)?;
        let hole: usize = captures[1].parse().map_err(|_| invalid())?;
        let delta: i32 = captures[2].parse().map_err(|_| invalid())?;
        if hole == 0 {
            return Err(invalid());
        }
        Ok(Self { hole, delta })
    }
}
