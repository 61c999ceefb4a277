pub mod aggregator;
pub mod enrichment;
pub mod scorecard;
pub mod stats;
pub mod views;

pub use crate::aggregator::total_for;
pub use crate::enrichment::{Enrichment, GameDetails, PlaceholderEnrichment};
pub use crate::scorecard::{ScorecardError, ScorecardSession};
pub use crate::stats::PerformanceSummary;
pub use crate::views::{build_views, build_views_with, GameSort, GameView, StatusFilter};
