//! JSON-file storage for the internship matcher.
//!
//! Three collections live side by side in one directory:
//!
//! | File               | Contents            |
//! |--------------------|---------------------|
//! | `students.json`    | `Vec<Student>`      |
//! | `internships.json` | `Vec<Internship>`   |
//! | `matches.json`     | `Vec<MatchRecord>`  |
//!
//! Every operation reads or rewrites a whole collection. There is no caching,
//! indexing, or locking; a single process owns the directory.
//!
//! Reads never fail. A missing or malformed collection is treated as empty,
//! and a record that does not fit its type is skipped, both with a warning.
//!
//! Writes work on the raw JSON records, so skipped records survive a rewrite.
//! A collection that exists but cannot be read or parsed is never rewritten:
//! the write fails with a [`StoreError`] and the file is left as it was.
//! Each write is atomic per file.

mod atomic;
mod samples;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pmis_types::{Internship, MatchRecord, Student, StudentId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub use samples::sample_internships;

pub const STUDENTS_FILE: &str = "students.json";
pub const INTERNSHIPS_FILE: &str = "internships.json";
pub const MATCHES_FILE: &str = "matches.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    /// The file is not a JSON array. It is left untouched.
    #[error("malformed collection {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// What to put in `internships.json` when it does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// The built-in sample catalogue.
    #[default]
    SampleInternships,
    Empty,
}

impl Seed {
    #[must_use]
    pub fn from_flag(seed_sample_internships: bool) -> Self {
        if seed_sample_internships {
            Seed::SampleInternships
        } else {
            Seed::Empty
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
    students_path: PathBuf,
    internships_path: PathBuf,
    matches_path: PathBuf,
}

impl DataStore {
    /// Open (and initialize if needed) the data directory.
    ///
    /// Creates the directory and any missing collection file. Existing files
    /// are never overwritten here.
    pub fn open(dir: impl Into<PathBuf>, seed: Seed) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let store = Self {
            students_path: dir.join(STUDENTS_FILE),
            internships_path: dir.join(INTERNSHIPS_FILE),
            matches_path: dir.join(MATCHES_FILE),
            dir,
        };

        for path in [
            &store.students_path,
            &store.internships_path,
            &store.matches_path,
        ] {
            atomic::recover_bak_file(path);
        }

        if !store.students_path.exists() {
            save_collection::<Student>(&store.students_path, &[])?;
        }
        if !store.internships_path.exists() {
            let initial = match seed {
                Seed::SampleInternships => sample_internships(),
                Seed::Empty => Vec::new(),
            };
            debug!(count = initial.len(), "Seeding internship catalogue");
            save_collection(&store.internships_path, &initial)?;
        }
        if !store.matches_path.exists() {
            save_collection::<MatchRecord>(&store.matches_path, &[])?;
        }

        debug!(dir = %store.dir.display(), "Data store ready");
        Ok(store)
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn all_students(&self) -> Vec<Student> {
        load_collection(&self.students_path)
    }

    /// First student with a matching id.
    #[must_use]
    pub fn student(&self, id: &StudentId) -> Option<Student> {
        self.all_students().into_iter().find(|s| &s.id == id)
    }

    pub fn add_student(&self, student: Student) -> Result<(), StoreError> {
        let path = &self.students_path;
        let mut records = read_records(path)?;
        records.push(to_record(path, &student)?);
        save_collection(path, &records)
    }

    #[must_use]
    pub fn all_internships(&self) -> Vec<Internship> {
        load_collection(&self.internships_path)
    }

    #[must_use]
    pub fn all_matches(&self) -> Vec<MatchRecord> {
        load_collection(&self.matches_path)
    }

    /// Latest match record for one student.
    #[must_use]
    pub fn matches_for(&self, id: &StudentId) -> Option<MatchRecord> {
        self.all_matches().into_iter().find(|m| &m.student_id == id)
    }

    /// Store a match record, replacing any previous record for the same student.
    pub fn add_match(&self, record: MatchRecord) -> Result<(), StoreError> {
        self.add_matches(vec![record])
    }

    /// Store several records in one rewrite. Each replaces any earlier record
    /// for its student, including one earlier in `records`.
    pub fn add_matches(&self, records: Vec<MatchRecord>) -> Result<(), StoreError> {
        let path = &self.matches_path;
        let mut stored = read_records(path)?;
        for record in records {
            let id = record.student_id.as_str();
            stored.retain(|m| m.get("student_id").and_then(Value::as_str) != Some(id));
            stored.push(to_record(path, &record)?);
        }
        save_collection(path, &stored)
    }
}

/// Raw records of one collection. A missing file has none; a file that
/// cannot be read or is not a JSON array is an error.
fn read_records(path: &Path) -> Result<Vec<Value>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Collection missing, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let records = match read_records(path) {
        Ok(records) => records,
        Err(e) => {
            warn!("Treating collection as empty: {e}");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(path = %path.display(), index, "Skipping unreadable record: {e}");
                None
            }
        })
        .collect()
}

fn to_record<T: Serialize>(path: &Path, item: &T) -> Result<Value, StoreError> {
    serde_json::to_value(item).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })
}

fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    atomic::write_atomic(path, &bytes).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = items.len(), "Collection saved");
    Ok(())
}
