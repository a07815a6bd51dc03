//! Data directories written by earlier deployments load as-is.

use std::fs;

use pmis_engine::EngineError;
use pmis_store::StoreError;
use pmis_types::{LocationType, MatchingSettings, SocialCategory, StudentId};

use crate::common::{data_analyst, placement_at};

const LEGACY_STUDENTS: &str = r#"[
  {
    "id": "2f9c1a7e-5b1d-4c43-9d0e-8a7f3f2b6c11",
    "name": "Meena Devi",
    "email": "meena@example.in",
    "phone": "9876543210",
    "age": 22,
    "education": "Postgraduate",
    "college": "Banaras Hindu University",
    "cgpa": 7.6,
    "skills": ["Research", "Economics"],
    "interests": ["finance"],
    "location_preference": "chennai",
    "location_type": "Rural",
    "category": "st",
    "experience": null,
    "past_participation": true,
    "created_at": "2024-01-15T10:30:00.123456"
  },
  {
    "id": "legacy-2",
    "name": "Arjun",
    "cgpa": null,
    "skills": null,
    "category": ""
  }
]"#;

const LEGACY_INTERNSHIPS: &str = r#"[
  {
    "id": "INT101",
    "title": "Economic Research Intern",
    "organization": "Ministry of Finance",
    "sector": "Finance & Policy",
    "location": "Chennai",
    "duration": "3 months",
    "stipend": 10000,
    "required_skills": ["Research", "Economics", "Excel"],
    "education_requirement": "undergraduate",
    "description": "Support budget analysis.",
    "capacity": 10,
    "affirmative_action_required": true
  }
]"#;

#[test]
fn legacy_records_deserialize_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("students.json"), LEGACY_STUDENTS).unwrap();
    fs::write(dir.path().join("internships.json"), LEGACY_INTERNSHIPS).unwrap();

    let placement = placement_at(dir.path(), MatchingSettings::default());
    let students = placement.store().all_students();
    assert_eq!(students.len(), 2);

    let meena = &students[0];
    assert_eq!(meena.location_type, Some(LocationType::Rural));
    assert_eq!(meena.category, Some(SocialCategory::St));
    assert!(meena.experience.is_empty());
    assert!(meena.created_at.is_some());

    let arjun = &students[1];
    assert!(arjun.cgpa.abs() < f64::EPSILON);
    assert!(arjun.skills.is_empty());
    assert_eq!(arjun.category, None);

    // The existing catalogue is kept rather than reseeded.
    assert_eq!(placement.store().all_internships().len(), 1);
}

#[test]
fn legacy_student_matches_against_legacy_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("students.json"), LEGACY_STUDENTS).unwrap();
    fs::write(dir.path().join("internships.json"), LEGACY_INTERNSHIPS).unwrap();
    let placement = placement_at(dir.path(), MatchingSettings::default());

    let id = StudentId::new("2f9c1a7e-5b1d-4c43-9d0e-8a7f3f2b6c11");
    let record = placement.run_matching(&id).unwrap().record;
    let only = record.best().unwrap();
    // skills 2/3, education met, location match, interest match, cgpa 0.76,
    // rural + ST + reserved listing capped at 1.0, repeat participant 0.3.
    assert!((only.score - 84.1).abs() < 1e-9);
    assert_eq!(
        only.reasoning,
        vec![
            "Skills match: Research, Economics",
            "Missing skills: Excel",
            "Education requirement satisfied",
            "Location preference matches",
            "Good academic performance",
        ]
    );
}

#[test]
fn malformed_match_history_blocks_new_results() {
    let dir = tempfile::tempdir().unwrap();
    let matches_path = dir.path().join("matches.json");
    fs::write(dir.path().join("students.json"), LEGACY_STUDENTS).unwrap();
    fs::write(&matches_path, "{ not json").unwrap();
    let placement = placement_at(dir.path(), MatchingSettings::default());

    assert!(placement.store().all_matches().is_empty());

    let err = placement
        .run_matching(&StudentId::new("legacy-2"))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Store(StoreError::Malformed { .. })
    ));
    assert_eq!(fs::read_to_string(&matches_path).unwrap(), "{ not json");
}

#[test]
fn registering_keeps_records_with_loose_field_types() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("students.json"),
        r#"[
            {"id": "a", "name": "Asha", "age": 21},
            {"id": "b", "name": "Bilal", "age": "22"},
            {"id": "z", "name": "Zoya", "interests": {"sector": "Health"}}
        ]"#,
    )
    .unwrap();
    let placement = placement_at(dir.path(), MatchingSettings::default());
    assert_eq!(placement.store().all_students().len(), 2);

    placement.register_student(data_analyst()).unwrap();

    let names: Vec<String> = placement
        .store()
        .all_students()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Asha", "Bilal", "Priya Sharma"]);
    let raw = fs::read_to_string(dir.path().join("students.json")).unwrap();
    assert!(raw.contains("Zoya"));
}
