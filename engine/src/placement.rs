//! Placement operations: the controller layer over storage and matching.
//!
//! Every front end (the CLI today) goes through [`Placement`] rather than
//! touching the store or the engine directly.

use chrono::{Local, NaiveDateTime};
use pmis_store::{DataStore, StoreError};
use pmis_types::{Internship, MatchRecord, NewStudent, ProfileError, Student, StudentId};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::matcher::MatchingEngine;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("student not found: {0}")]
    StudentNotFound(StudentId),
    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of matching every registered student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchAllSummary {
    pub success: bool,
    pub total_matches: usize,
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_students: usize,
    pub total_internships: usize,
    pub total_matches: usize,
    pub rural_students: usize,
    pub sc_st_students: usize,
    /// Match records per registered student, as a percentage. 0 with no students.
    pub match_rate: f64,
}

impl AdminStats {
    #[must_use]
    pub fn compute(
        students: &[Student],
        internships: &[Internship],
        matches: &[MatchRecord],
    ) -> Self {
        let total_students = students.len();
        let total_matches = matches.len();
        let match_rate = if total_students > 0 {
            total_matches as f64 / total_students as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_students,
            total_internships: internships.len(),
            total_matches,
            rural_students: students.iter().filter(|s| s.is_rural()).count(),
            sc_st_students: students.iter().filter(|s| s.is_sc_st()).count(),
            match_rate,
        }
    }
}

/// A student together with the match record just saved for them.
#[derive(Debug, Clone, Serialize)]
pub struct StudentMatches {
    pub student: Student,
    pub record: MatchRecord,
}

/// Everything the admin view shows.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub students: Vec<Student>,
    pub internships: Vec<Internship>,
    pub matches: Vec<MatchRecord>,
    pub stats: AdminStats,
}

#[derive(Debug, Clone)]
pub struct Placement {
    store: DataStore,
    engine: MatchingEngine,
}

impl Placement {
    #[must_use]
    pub fn new(store: DataStore, engine: MatchingEngine) -> Self {
        Self { store, engine }
    }

    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    #[must_use]
    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Validate a profile, assign it a fresh id, and persist it.
    pub fn register_student(&self, profile: NewStudent) -> Result<Student, EngineError> {
        let student = profile.into_student(StudentId::generate(), now())?;
        self.store.add_student(student.clone())?;
        info!(student = %student.id, "Registered student");
        Ok(student)
    }

    #[must_use]
    pub fn student(&self, id: &StudentId) -> Option<Student> {
        self.store.student(id)
    }

    /// Match one student against the whole catalogue and persist the result,
    /// replacing any earlier result for that student.
    pub fn run_matching(&self, id: &StudentId) -> Result<StudentMatches, EngineError> {
        let student = self
            .store
            .student(id)
            .ok_or_else(|| EngineError::StudentNotFound(id.clone()))?;
        let internships = self.store.all_internships();

        let record = MatchRecord {
            student_id: student.id.clone(),
            matches: self.engine.find_matches(&student, &internships),
            timestamp: now(),
        };
        self.store.add_match(record.clone())?;

        info!(
            student = %student.id,
            matches = record.matches.len(),
            best = record.best().map_or(0.0, |m| m.score),
            "Matching complete"
        );
        Ok(StudentMatches { student, record })
    }

    /// Match every registered student. All records are written in one pass.
    pub fn match_all(&self) -> Result<MatchAllSummary, EngineError> {
        let students = self.store.all_students();
        let internships = self.store.all_internships();
        let timestamp = now();

        let records: Vec<MatchRecord> = students
            .iter()
            .map(|student| MatchRecord {
                student_id: student.id.clone(),
                matches: self.engine.find_matches(student, &internships),
                timestamp,
            })
            .collect();
        let total_matches = records.len();
        self.store.add_matches(records)?;

        info!(
            students = students.len(),
            internships = internships.len(),
            "Matched all students"
        );
        Ok(MatchAllSummary {
            success: true,
            total_matches,
        })
    }

    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        let students = self.store.all_students();
        let internships = self.store.all_internships();
        let matches = self.store.all_matches();
        let stats = AdminStats::compute(&students, &internships, &matches);
        Dashboard {
            students,
            internships,
            matches,
            stats,
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
