//! Social category and home-location classification.
//!
//! Both are stored as plain label strings. Labels outside the known set are
//! kept verbatim so that round-tripping a record never loses data.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialCategory {
    General,
    /// Other Backward Classes.
    Obc,
    /// Scheduled Castes.
    Sc,
    /// Scheduled Tribes.
    St,
    Other(String),
}

impl SocialCategory {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "GENERAL" => Self::General,
            "OBC" => Self::Obc,
            "SC" => Self::Sc,
            "ST" => Self::St,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Other(label) => label,
        }
    }

    /// Scheduled Castes or Scheduled Tribes.
    #[must_use]
    pub fn is_sc_st(&self) -> bool {
        matches!(self, Self::Sc | Self::St)
    }

    /// Any category that receives affirmative-action consideration.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Sc | Self::St | Self::Obc)
    }
}

impl From<String> for SocialCategory {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<SocialCategory> for String {
    fn from(value: SocialCategory) -> Self {
        match value {
            SocialCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SocialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationType {
    Urban,
    Rural,
    Other(String),
}

impl LocationType {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "urban" => Self::Urban,
            "rural" => Self::Rural,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Urban => "urban",
            Self::Rural => "rural",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_rural(&self) -> bool {
        matches!(self, Self::Rural)
    }
}

impl From<String> for LocationType {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<LocationType> for String {
    fn from(value: LocationType) -> Self {
        match value {
            LocationType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
