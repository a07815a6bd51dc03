//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use pmis_engine::{MatchingEngine, Placement};
use pmis_store::{DataStore, Seed};
use pmis_types::{LocationType, MatchingSettings, NewStudent, SocialCategory};
use tempfile::TempDir;

/// A placement service over a fresh data directory seeded with the sample
/// catalogue. Keep the `TempDir` alive for the duration of the test.
pub fn seeded_placement() -> (TempDir, Placement) {
    let dir = tempfile::tempdir().expect("tempdir");
    let placement = placement_at(dir.path(), MatchingSettings::default());
    (dir, placement)
}

pub fn placement_at(dir: &Path, settings: MatchingSettings) -> Placement {
    let store = DataStore::open(dir, Seed::SampleInternships).expect("open store");
    Placement::new(store, MatchingEngine::new(settings))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Undergraduate in Mumbai with a statistics background.
pub fn data_analyst() -> NewStudent {
    NewStudent {
        name: "Priya Sharma".to_string(),
        email: "priya@example.in".to_string(),
        age: 21,
        education: "undergraduate".to_string(),
        college: "University of Mumbai".to_string(),
        cgpa: 8.5,
        skills: strings(&["Python", "Data Analysis", "Statistics"]),
        interests: strings(&["Research"]),
        location_preference: "Mumbai".to_string(),
        location_type: Some(LocationType::Urban),
        category: Some(SocialCategory::General),
        ..NewStudent::default()
    }
}

/// Rural SC student from a diploma program with no location preference.
pub fn rural_diploma_holder() -> NewStudent {
    NewStudent {
        name: "Ravi Kumar".to_string(),
        age: 20,
        education: "diploma".to_string(),
        cgpa: 7.2,
        skills: strings(&["Project Management", "Research"]),
        interests: strings(&["Rural Development"]),
        location_preference: "any".to_string(),
        location_type: Some(LocationType::Rural),
        category: Some(SocialCategory::Sc),
        ..NewStudent::default()
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
