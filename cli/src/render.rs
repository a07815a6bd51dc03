//! Plain-text views for the terminal.
//!
//! Each function builds the whole view as a `String` so the layout can be
//! tested without capturing stdout.

use std::fmt::Write;

use pmis_engine::{Dashboard, MatchingEngine};
use pmis_types::{Internship, MatchRecord, Student};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

pub fn student(student: &Student) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", student.name, student.id);
    let _ = writeln!(out, "  Email:       {}", or_dash(&student.email));
    let _ = writeln!(out, "  Phone:       {}", or_dash(&student.phone));
    let _ = writeln!(out, "  Age:         {}", student.age);
    let _ = writeln!(
        out,
        "  Education:   {} at {}",
        or_dash(&student.education),
        or_dash(&student.college)
    );
    let _ = writeln!(out, "  CGPA:        {:.2}", student.cgpa);
    let _ = writeln!(out, "  Skills:      {}", list_or_dash(&student.skills));
    let _ = writeln!(out, "  Interests:   {}", list_or_dash(&student.interests));
    let _ = writeln!(
        out,
        "  Location:    {} (background: {})",
        or_dash(&student.location_preference),
        student
            .location_type
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string)
    );
    let _ = writeln!(
        out,
        "  Category:    {}",
        student
            .category
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string)
    );
    let _ = writeln!(out, "  Experience:  {}", or_dash(&student.experience));
    let _ = writeln!(
        out,
        "  Past PMIS:   {}",
        if student.past_participation { "yes" } else { "no" }
    );
    if let Some(created) = student.created_at {
        let _ = writeln!(out, "  Registered:  {}", created.format(TIMESTAMP_FORMAT));
    }
    out
}

pub fn students(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students registered.\n".to_string();
    }
    let mut out = String::new();
    for s in students {
        let _ = writeln!(
            out,
            "{}  {}  {}  CGPA {:.2}",
            s.id,
            s.name,
            or_dash(&s.education),
            s.cgpa
        );
    }
    out
}

pub fn internships(internships: &[Internship]) -> String {
    if internships.is_empty() {
        return "No internships available.\n".to_string();
    }
    let mut out = String::new();
    for i in internships {
        let _ = writeln!(out, "{}  {} ({})", i.id, i.title, i.organization);
        let _ = writeln!(
            out,
            "    {} | {} | {} | Rs {}/month | {} seats",
            or_dash(&i.sector),
            or_dash(&i.location),
            or_dash(&i.duration),
            i.stipend,
            i.capacity
        );
        let _ = writeln!(out, "    Skills: {}", list_or_dash(&i.required_skills));
        if i.affirmative_action_required {
            let _ = writeln!(out, "    Reserved seats available");
        }
    }
    out
}

/// Ranked matches for one student. With an engine, each match also lists the
/// sub-scores behind it.
pub fn match_results(
    student: &Student,
    record: &MatchRecord,
    explain: Option<&MatchingEngine>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Matches for {} ({}), generated {}",
        student.name,
        student.id,
        record.timestamp.format(TIMESTAMP_FORMAT)
    );
    if record.matches.is_empty() {
        let _ = writeln!(out, "No internships to match against.");
        return out;
    }

    for m in &record.matches {
        let i = &m.internship;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "#{} {:.2}  {} ({}), {}",
            m.rank, m.score, i.title, i.organization, i.location
        );
        for reason in &m.reasoning {
            let _ = writeln!(out, "    - {reason}");
        }
        if let Some(engine) = explain {
            let b = engine.breakdown(student, i);
            let _ = writeln!(
                out,
                "    skills {:.2}  education {:.2}  location {:.2}  interests {:.2}",
                b.skills, b.education, b.location, b.interests
            );
            let _ = writeln!(
                out,
                "    cgpa {:.2}  affirmative {:.2}  participation {:.2}",
                b.cgpa, b.affirmative_action, b.past_participation
            );
        }
    }
    out
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let stats = &dashboard.stats;
    let mut out = String::new();
    let _ = writeln!(out, "Students:       {}", stats.total_students);
    let _ = writeln!(out, "Internships:    {}", stats.total_internships);
    let _ = writeln!(out, "Match records:  {}", stats.total_matches);
    let _ = writeln!(out, "Rural students: {}", stats.rural_students);
    let _ = writeln!(out, "SC/ST students: {}", stats.sc_st_students);
    let _ = writeln!(out, "Match rate:     {:.1}%", stats.match_rate);

    if !dashboard.matches.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Latest results:");
        for record in &dashboard.matches {
            match record.best() {
                Some(best) => {
                    let _ = writeln!(
                        out,
                        "  {}  best {} ({:.2})",
                        record.student_id, best.internship.id, best.score
                    );
                }
                None => {
                    let _ = writeln!(out, "  {}  no matches", record.student_id);
                }
            }
        }
    }
    out
}
