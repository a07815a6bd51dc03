//! Persisted match results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::ids::StudentId;
use crate::internship::Internship;

/// One ranked internship in a student's result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Snapshot of the listing at match time.
    pub internship: Internship,
    /// Compatibility in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// 1-based position in the sorted result list.
    pub rank: u32,
    pub reasoning: Vec<String>,
}

/// The latest matching run for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub student_id: StudentId,
    pub matches: Vec<RankedMatch>,
    pub timestamp: NaiveDateTime,
}

impl MatchRecord {
    #[must_use]
    pub fn best(&self) -> Option<&RankedMatch> {
        self.matches.first()
    }
}
