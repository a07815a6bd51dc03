//! Resolved matching settings shared across crates.
//!
//! Raw TOML structs (all `Option` fields) stay in `pmis-config`. The config
//! loader resolves them into these types at the parse boundary, so holding a
//! `Weights` or `MatchingSettings` is proof that it was validated.

use thiserror::Error;

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight `{name}` must be a finite, non-negative number (got {value})")]
    InvalidComponent { name: &'static str, value: f64 },
    #[error("weights must sum to 1.0 (got {0:.4})")]
    BadSum(f64),
}

/// Relative importance of each sub-score. Always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    skills: f64,
    education: f64,
    location: f64,
    interests: f64,
    cgpa: f64,
    affirmative_action: f64,
    past_participation: f64,
}

impl Weights {
    pub const DEFAULT: Weights = Weights {
        skills: 0.30,
        education: 0.20,
        location: 0.15,
        interests: 0.15,
        cgpa: 0.10,
        affirmative_action: 0.05,
        past_participation: 0.05,
    };

    pub fn new(
        skills: f64,
        education: f64,
        location: f64,
        interests: f64,
        cgpa: f64,
        affirmative_action: f64,
        past_participation: f64,
    ) -> Result<Self, WeightsError> {
        let weights = Self {
            skills,
            education,
            location,
            interests,
            cgpa,
            affirmative_action,
            past_participation,
        };
        for (name, value) in weights.components() {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidComponent { name, value });
            }
        }
        let sum = weights.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }
        Ok(weights)
    }

    /// Named components in scoring order.
    #[must_use]
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("skills", self.skills),
            ("education", self.education),
            ("location", self.location),
            ("interests", self.interests),
            ("cgpa", self.cgpa),
            ("affirmative_action", self.affirmative_action),
            ("past_participation", self.past_participation),
        ]
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.components().iter().map(|(_, w)| w).sum()
    }

    #[must_use]
    pub const fn skills(&self) -> f64 {
        self.skills
    }

    #[must_use]
    pub const fn education(&self) -> f64 {
        self.education
    }

    #[must_use]
    pub const fn location(&self) -> f64 {
        self.location
    }

    #[must_use]
    pub const fn interests(&self) -> f64 {
        self.interests
    }

    #[must_use]
    pub const fn cgpa(&self) -> f64 {
        self.cgpa
    }

    #[must_use]
    pub const fn affirmative_action(&self) -> f64 {
        self.affirmative_action
    }

    #[must_use]
    pub const fn past_participation(&self) -> f64 {
        self.past_participation
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("top_n must be at least 1")]
pub struct ZeroTopN;

/// Validated ranking limits and weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingSettings {
    weights: Weights,
    top_n: usize,
    max_reasons: usize,
}

impl MatchingSettings {
    pub const DEFAULT_TOP_N: usize = 10;
    pub const DEFAULT_MAX_REASONS: usize = 5;

    pub fn new(weights: Weights, top_n: usize, max_reasons: usize) -> Result<Self, ZeroTopN> {
        if top_n == 0 {
            return Err(ZeroTopN);
        }
        Ok(Self {
            weights,
            top_n,
            max_reasons,
        })
    }

    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    #[must_use]
    pub const fn max_reasons(&self) -> usize {
        self.max_reasons
    }
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            weights: Weights::DEFAULT,
            top_n: Self::DEFAULT_TOP_N,
            max_reasons: Self::DEFAULT_MAX_REASONS,
        }
    }
}
