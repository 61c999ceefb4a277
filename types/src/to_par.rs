use std::fmt::Display;

/// Strokes relative to par, shown golf-style: `E`, `+3`, `-2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreToPar(pub i64);

impl ScoreToPar {
    /// Saturates at the `i64` range.
    pub fn new(score: u64, par: u64) -> Self {
        let score = i64::try_from(score).unwrap_or(i64::MAX);
        let par = i64::try_from(par).unwrap_or(i64::MAX);
        Self(score.saturating_sub(par))
    }

    pub fn is_even(&self) -> bool {
        self.0 == 0
    }
}

impl Display for ScoreToPar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "E"),
            n if n > 0 => write!(f, "+{n}"),
            n => write!(f, "{n}"),
        }
    }
}
