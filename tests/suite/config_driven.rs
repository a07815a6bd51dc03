//! Settings loaded from a config file drive storage and ranking.

use std::fs;

use pmis_config::{ConfigError, Settings};
use pmis_engine::{MatchingEngine, Placement};
use pmis_store::{DataStore, Seed};

use crate::common::data_analyst;

#[test]
fn config_file_controls_top_n_reasons_and_seeding() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("pmis-data");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[storage]\ndata_dir = {:?}\n\n[matching]\ntop_n = 3\nmax_reasons = 2\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();

    let settings = Settings::load(Some(&config_path)).unwrap();
    assert_eq!(settings.data_dir, data_dir);
    assert_eq!(settings.matching.top_n(), 3);

    let store = DataStore::open(
        settings.data_dir.clone(),
        Seed::from_flag(settings.seed_sample_internships),
    )
    .unwrap();
    let placement = Placement::new(store, MatchingEngine::new(settings.matching));
    let student = placement.register_student(data_analyst()).unwrap();

    let record = placement.run_matching(&student.id).unwrap().record;
    assert_eq!(record.matches.len(), 3);
    assert!(record.matches.iter().all(|m| m.reasoning.len() <= 2));
    assert!(data_dir.join("students.json").exists());
}

#[test]
fn custom_weights_change_the_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    // Location only: every Mumbai listing outranks the rest.
    fs::write(
        &config_path,
        "[matching.weights]\n\
         skills = 0.0\n\
         education = 0.0\n\
         location = 1.0\n\
         interests = 0.0\n\
         cgpa = 0.0\n\
         affirmative_action = 0.0\n\
         past_participation = 0.0\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&config_path)).unwrap();
    let store = DataStore::open(dir.path().join("data"), Seed::SampleInternships).unwrap();
    let placement = Placement::new(store, MatchingEngine::new(settings.matching));
    let student = placement.register_student(data_analyst()).unwrap();

    let record = placement.run_matching(&student.id).unwrap().record;
    let best = record.best().unwrap();
    assert_eq!(best.internship.location, "Mumbai");
    assert!((best.score - 100.0).abs() < 1e-9);
    assert!((record.matches[1].score - 30.0).abs() < 1e-9);
}

#[test]
fn unbalanced_weights_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[matching.weights]\nskills = 0.9\n").unwrap();

    let err = Settings::load(Some(&config_path)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));
}

#[test]
fn unseeded_store_starts_without_listings() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[storage]\nseed_sample_internships = false\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&config_path)).unwrap();
    let store = DataStore::open(
        dir.path().join("data"),
        Seed::from_flag(settings.seed_sample_internships),
    )
    .unwrap();
    assert!(store.all_internships().is_empty());

    let placement = Placement::new(store, MatchingEngine::new(settings.matching));
    let student = placement.register_student(data_analyst()).unwrap();
    assert!(placement.run_matching(&student.id).unwrap().record.matches.is_empty());
}
