//! Education hierarchy.
//!
//! Labels are free text on the wire (profile input, listing requirements).
//! Scoring only cares about their position in the hierarchy, so parsing is
//! lenient: unknown labels have no level rather than producing an error.

/// Education level, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EducationLevel {
    HighSchool,
    /// Class 12 / higher secondary.
    Twelfth,
    Diploma,
    /// Also covers "bachelor".
    Undergraduate,
    /// Also covers "master".
    Postgraduate,
    Doctorate,
}

impl EducationLevel {
    /// Parse a label case-insensitively. Returns `None` for unknown or empty labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "high school" => Some(Self::HighSchool),
            "12th" => Some(Self::Twelfth),
            "diploma" => Some(Self::Diploma),
            "undergraduate" | "bachelor" => Some(Self::Undergraduate),
            "postgraduate" | "master" => Some(Self::Postgraduate),
            "phd" => Some(Self::Doctorate),
            _ => None,
        }
    }

    /// Position in the hierarchy, starting at 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::HighSchool => 1,
            Self::Twelfth => 2,
            Self::Diploma => 3,
            Self::Undergraduate => 4,
            Self::Postgraduate => 5,
            Self::Doctorate => 6,
        }
    }
}

/// Hierarchy rank of a raw label; 0 when the label is not recognized.
#[must_use]
pub fn label_rank(label: &str) -> u8 {
    EducationLevel::from_label(label).map_or(0, EducationLevel::rank)
}
