//! Register, match, and report through the placement service.

use pmis_engine::EngineError;
use pmis_types::{MatchingSettings, NewStudent, StudentId};

use crate::common::{data_analyst, placement_at, rural_diploma_holder, seeded_placement};

#[test]
fn profiles_and_matches_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let placement = placement_at(dir.path(), MatchingSettings::default());
        let student = placement.register_student(data_analyst()).unwrap();
        placement.run_matching(&student.id).unwrap();
        student.id
    };

    let reopened = placement_at(dir.path(), MatchingSettings::default());
    let student = reopened.student(&id).unwrap();
    assert_eq!(student.name, "Priya Sharma");
    assert_eq!(student.skills, vec!["Python", "Data Analysis", "Statistics"]);

    let record = reopened.store().matches_for(&id).unwrap();
    assert_eq!(record.best().unwrap().internship.id.as_str(), "INT002");
    assert_eq!(reopened.store().all_internships().len(), 8);
}

#[test]
fn rematching_replaces_previous_record() {
    let (_dir, placement) = seeded_placement();
    let student = placement.register_student(data_analyst()).unwrap();

    placement.run_matching(&student.id).unwrap();
    placement.run_matching(&student.id).unwrap();

    let records = placement.store().all_matches();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].student_id, student.id);
}

#[test]
fn unknown_student_is_an_error() {
    let (_dir, placement) = seeded_placement();
    let err = placement
        .run_matching(&StudentId::new("no-such-student"))
        .unwrap_err();
    assert!(matches!(err, EngineError::StudentNotFound(_)));
    assert!(placement.store().all_matches().is_empty());
}

#[test]
fn invalid_profiles_are_not_stored() {
    let (_dir, placement) = seeded_placement();
    let profile = NewStudent {
        cgpa: 11.0,
        ..data_analyst()
    };
    let err = placement.register_student(profile).unwrap_err();
    assert!(matches!(err, EngineError::Profile(_)));
    assert!(placement.store().all_students().is_empty());
}

#[test]
fn match_all_then_dashboard() {
    let (_dir, placement) = seeded_placement();
    placement.register_student(data_analyst()).unwrap();
    placement.register_student(rural_diploma_holder()).unwrap();

    let summary = placement.match_all().unwrap();
    assert!(summary.success);
    assert_eq!(summary.total_matches, 2);

    let dashboard = placement.dashboard();
    assert_eq!(dashboard.students.len(), 2);
    assert_eq!(dashboard.stats.total_internships, 8);
    assert_eq!(dashboard.stats.total_matches, 2);
    assert_eq!(dashboard.stats.rural_students, 1);
    assert_eq!(dashboard.stats.sc_st_students, 1);
    assert!((dashboard.stats.match_rate - 100.0).abs() < f64::EPSILON);
}

#[test]
fn match_all_on_empty_roster() {
    let (_dir, placement) = seeded_placement();
    let summary = placement.match_all().unwrap();
    assert_eq!(summary.total_matches, 0);
    assert!(placement.dashboard().stats.match_rate.abs() < f64::EPSILON);
}
