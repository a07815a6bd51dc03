//! Ranking against the built-in catalogue.

use crate::common::{approx, data_analyst, rural_diploma_holder, seeded_placement};

#[test]
fn data_analyst_ranks_survey_office_first() {
    let (_dir, placement) = seeded_placement();
    let student = placement.register_student(data_analyst()).unwrap();

    let record = placement.run_matching(&student.id).unwrap().record;
    assert_eq!(record.matches.len(), 8);

    let first = &record.matches[0];
    assert_eq!(first.internship.id.as_str(), "INT002");
    assert_eq!(first.rank, 1);
    assert!(approx(first.score, 86.0));
    assert_eq!(
        first.reasoning,
        vec![
            "Skills match: Python, Data Analysis, Statistics",
            "Missing skills: Excel",
            "Education requirement satisfied",
            "Location preference matches",
            "Excellent academic performance",
        ]
    );

    let second = &record.matches[1];
    assert_eq!(second.internship.id.as_str(), "INT005");
    assert!(approx(second.score, 59.0));
}

#[test]
fn scores_descend_and_ranks_are_sequential() {
    let (_dir, placement) = seeded_placement();
    let student = placement.register_student(rural_diploma_holder()).unwrap();

    let record = placement.run_matching(&student.id).unwrap().record;
    for (position, m) in record.matches.iter().enumerate() {
        assert_eq!(m.rank as usize, position + 1);
        assert!((0.0..=100.0).contains(&m.score));
        assert!(m.reasoning.len() <= 5);
    }
    assert!(
        record
            .matches
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score)
    );
}

#[test]
fn rural_diploma_holder_prefers_rural_development() {
    let (_dir, placement) = seeded_placement();
    let student = placement.register_student(rural_diploma_holder()).unwrap();

    let record = placement.run_matching(&student.id).unwrap().record;
    let best = record.best().unwrap();
    assert_eq!(best.internship.id.as_str(), "INT003");
    assert!(
        best.reasoning
            .iter()
            .all(|reason| reason != "Education requirement satisfied")
    );
}
