use serde::{Deserialize, Serialize};

use crate::ids::InternshipId;
use crate::nullable;

/// A government internship listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: InternshipId,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub organization: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub sector: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub location: String,
    /// Free text, e.g. "6 months".
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub duration: String,
    /// Monthly stipend in rupees.
    #[serde(default, deserialize_with = "nullable::whole_number")]
    pub stipend: u32,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub education_requirement: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable::whole_number")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub affirmative_action_required: bool,
}
