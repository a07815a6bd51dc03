//! Sub-score heuristics.
//!
//! Each function maps one aspect of a (student, internship) pair to `[0, 1]`.
//! [`ScoreBreakdown::compute`] combines them with [`Weights`] into the final
//! 0–100 compatibility score.

use std::collections::HashSet;

use pmis_types::{CGPA_SCALE, Internship, SocialCategory, Student, Weights, label_rank};
use serde::Serialize;

/// Skills score when a listing names no required skills.
pub const NO_REQUIREMENTS_SKILLS_SCORE: f64 = 0.5;
/// Location score for students with no preference or "any".
pub const FLEXIBLE_LOCATION_SCORE: f64 = 0.7;
pub const LOCATION_MISMATCH_SCORE: f64 = 0.3;
/// Interest score for students who listed no interests.
pub const NO_INTERESTS_SCORE: f64 = 0.5;
pub const INTEREST_MISMATCH_SCORE: f64 = 0.3;
/// Participation score for repeat participants.
pub const REPEAT_PARTICIPATION_SCORE: f64 = 0.3;

const RURAL_BONUS: f64 = 0.3;
const SC_ST_BONUS: f64 = 0.4;
const OBC_BONUS: f64 = 0.2;
const LISTING_RESERVATION_BONUS: f64 = 0.3;

/// Fraction of the listing's distinct required skills the student has.
///
/// Comparison is exact (case-sensitive).
#[must_use]
pub fn skills_score(student_skills: &[String], required_skills: &[String]) -> f64 {
    let required: HashSet<&str> = required_skills.iter().map(String::as_str).collect();
    if required.is_empty() {
        return NO_REQUIREMENTS_SKILLS_SCORE;
    }
    let have: HashSet<&str> = student_skills.iter().map(String::as_str).collect();
    required.intersection(&have).count() as f64 / required.len() as f64
}

/// Full marks when the student meets the required level, otherwise the ratio
/// of the two ranks. An unrecognized requirement is always met.
#[must_use]
pub fn education_score(student_education: &str, required_education: &str) -> f64 {
    let student = label_rank(student_education);
    let required = label_rank(required_education);
    if student >= required {
        1.0
    } else {
        f64::from(student) / f64::from(required)
    }
}

#[must_use]
pub fn location_score(preference: &str, internship_location: &str) -> f64 {
    let preference = preference.trim().to_lowercase();
    if preference.is_empty() || preference == "any" {
        return FLEXIBLE_LOCATION_SCORE;
    }
    if internship_location.to_lowercase().contains(&preference) {
        1.0
    } else {
        LOCATION_MISMATCH_SCORE
    }
}

/// Full marks when any interest appears (case-insensitively) in the sector name.
#[must_use]
pub fn interest_score(interests: &[String], sector: &str) -> f64 {
    if interests.is_empty() {
        return NO_INTERESTS_SCORE;
    }
    let sector = sector.to_lowercase();
    if interests
        .iter()
        .any(|interest| sector.contains(&interest.to_lowercase()))
    {
        1.0
    } else {
        INTEREST_MISMATCH_SCORE
    }
}

#[must_use]
pub fn cgpa_score(cgpa: f64) -> f64 {
    if !cgpa.is_finite() {
        return 0.0;
    }
    (cgpa / CGPA_SCALE).clamp(0.0, 1.0)
}

/// Rural background, reserved social category, and listings that carry a
/// reservation mandate each add to the bonus; the total is capped at 1.0.
#[must_use]
pub fn affirmative_action_score(student: &Student, internship: &Internship) -> f64 {
    let mut bonus = 0.0;
    if student.is_rural() {
        bonus += RURAL_BONUS;
    }
    if student.is_sc_st() {
        bonus += SC_ST_BONUS;
    } else if matches!(student.category, Some(SocialCategory::Obc)) {
        bonus += OBC_BONUS;
    }
    if internship.affirmative_action_required {
        bonus += LISTING_RESERVATION_BONUS;
    }
    f64::min(bonus, 1.0)
}

/// New participants get full marks; repeat participants are penalized.
#[must_use]
pub fn participation_score(past_participation: bool) -> f64 {
    if past_participation {
        REPEAT_PARTICIPATION_SCORE
    } else {
        1.0
    }
}

/// Every sub-score for one pair plus the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub education: f64,
    pub location: f64,
    pub interests: f64,
    pub cgpa: f64,
    pub affirmative_action: f64,
    pub past_participation: f64,
    /// Weighted sum scaled to `[0, 100]`, unrounded.
    pub total: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn compute(student: &Student, internship: &Internship, weights: &Weights) -> Self {
        let skills = skills_score(&student.skills, &internship.required_skills);
        let education = education_score(&student.education, &internship.education_requirement);
        let location = location_score(&student.location_preference, &internship.location);
        let interests = interest_score(&student.interests, &internship.sector);
        let cgpa = cgpa_score(student.cgpa);
        let affirmative_action = affirmative_action_score(student, internship);
        let past_participation = participation_score(student.past_participation);

        let weighted = skills * weights.skills()
            + education * weights.education()
            + location * weights.location()
            + interests * weights.interests()
            + cgpa * weights.cgpa()
            + affirmative_action * weights.affirmative_action()
            + past_participation * weights.past_participation();

        Self {
            skills,
            education,
            location,
            interests,
            cgpa,
            affirmative_action,
            past_participation,
            total: (weighted * 100.0).clamp(0.0, 100.0),
        }
    }
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
