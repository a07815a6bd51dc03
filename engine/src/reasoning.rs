//! Human-readable explanations attached to each ranked match.

use pmis_types::{EducationLevel, Internship, Student};

const EXCELLENT_CGPA: f64 = 8.0;
const GOOD_CGPA: f64 = 7.0;

/// Build up to `max_reasons` explanation strings for a pair.
///
/// Order is fixed: skills matched, skills missing, education, location,
/// academics, rural background, social category. Skill lists follow the
/// listing's order.
///
/// The education line marks degree-level students (bachelor or above, short
/// of a doctorate) whatever the listing asks for. The location line fires
/// when the preference appears in the listing's location, so an empty
/// preference always matches.
#[must_use]
pub fn generate_reasoning(
    student: &Student,
    internship: &Internship,
    max_reasons: usize,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let (matched, missing) = partition_skills(&student.skills, &internship.required_skills);
    if !matched.is_empty() {
        reasons.push(format!("Skills match: {}", matched.join(", ")));
    }
    if !missing.is_empty() {
        reasons.push(format!("Missing skills: {}", missing.join(", ")));
    }

    if matches!(
        student.education_level(),
        Some(EducationLevel::Undergraduate | EducationLevel::Postgraduate)
    ) {
        reasons.push("Education requirement satisfied".to_string());
    }

    if internship
        .location
        .to_lowercase()
        .contains(&student.location_preference.to_lowercase())
    {
        reasons.push("Location preference matches".to_string());
    }

    if student.cgpa >= EXCELLENT_CGPA {
        reasons.push("Excellent academic performance".to_string());
    } else if student.cgpa >= GOOD_CGPA {
        reasons.push("Good academic performance".to_string());
    }

    if student.is_rural() {
        reasons.push("Rural background advantage".to_string());
    }

    if student.category.as_ref().is_some_and(|c| c.is_reserved()) {
        reasons.push("Social category consideration".to_string());
    }

    reasons.truncate(max_reasons);
    reasons
}

/// Split the listing's distinct required skills into (held, missing).
fn partition_skills<'a>(
    student_skills: &[String],
    required_skills: &'a [String],
) -> (Vec<&'a str>, Vec<&'a str>) {
    let mut matched: Vec<&str> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();
    for skill in required_skills {
        let skill = skill.as_str();
        if matched.contains(&skill) || missing.contains(&skill) {
            continue;
        }
        if student_skills.iter().any(|s| s == skill) {
            matched.push(skill);
        } else {
            missing.push(skill);
        }
    }
    (matched, missing)
}
