use pmis_types::{Internship, MatchingSettings, RankedMatch, Student};

use crate::reasoning::generate_reasoning;
use crate::scoring::{ScoreBreakdown, round2};

/// Scores and ranks internships for a student.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine {
    settings: MatchingSettings,
}

impl MatchingEngine {
    #[must_use]
    pub fn new(settings: MatchingSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &MatchingSettings {
        &self.settings
    }

    #[must_use]
    pub fn breakdown(&self, student: &Student, internship: &Internship) -> ScoreBreakdown {
        ScoreBreakdown::compute(student, internship, self.settings.weights())
    }

    /// Compatibility in `[0, 100]`, unrounded.
    #[must_use]
    pub fn score(&self, student: &Student, internship: &Internship) -> f64 {
        self.breakdown(student, internship).total
    }

    /// Rank every internship for `student` and keep the best `top_n`.
    ///
    /// Scores are rounded to two decimals before sorting. The sort is stable,
    /// so equal scores keep catalogue order. Ranks run 1, 2, 3, ... in sorted
    /// order; ties do not share a rank.
    #[must_use]
    pub fn find_matches(&self, student: &Student, internships: &[Internship]) -> Vec<RankedMatch> {
        let mut matches: Vec<RankedMatch> = internships
            .iter()
            .map(|internship| RankedMatch {
                internship: internship.clone(),
                score: round2(self.score(student, internship)),
                rank: 0,
                reasoning: generate_reasoning(student, internship, self.settings.max_reasons()),
            })
            .collect();

        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(self.settings.top_n());
        for (position, m) in matches.iter_mut().enumerate() {
            m.rank = position as u32 + 1;
        }

        tracing::debug!(
            student = %student.id,
            candidates = internships.len(),
            kept = matches.len(),
            "Ranked internships"
        );
        matches
    }
}
