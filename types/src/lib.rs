//! Core domain types for the internship matcher.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Storage, scoring, and the CLI all build on these records.

mod demographics;
mod education;
mod ids;
mod internship;
mod matching;
mod nullable;
mod settings;
mod student;

pub use demographics::{LocationType, SocialCategory};
pub use education::{EducationLevel, label_rank};
pub use ids::{InternshipId, StudentId};
pub use internship::Internship;
pub use matching::{MatchRecord, RankedMatch};
pub use settings::{MatchingSettings, Weights, WeightsError, ZeroTopN};
pub use student::{CGPA_SCALE, NewStudent, ProfileError, Student};
