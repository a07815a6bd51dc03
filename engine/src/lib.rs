//! Matching engine for the internship matcher.
//!
//! - [`scoring`]: the seven sub-score heuristics and their weighted total
//! - [`reasoning`]: explanation strings attached to each match
//! - [`MatchingEngine`]: ranks a catalogue for one student
//! - [`Placement`]: register, match, and report over a [`pmis_store::DataStore`]

mod matcher;
mod placement;
pub mod reasoning;
pub mod scoring;

pub use matcher::MatchingEngine;
pub use placement::{
    AdminStats, Dashboard, EngineError, MatchAllSummary, Placement, StudentMatches,
};
pub use reasoning::generate_reasoning;
pub use scoring::ScoreBreakdown;
