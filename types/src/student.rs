//! Student profiles.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::demographics::{LocationType, SocialCategory};
use crate::education::EducationLevel;
use crate::ids::StudentId;
use crate::nullable;

/// Maximum CGPA on the 10-point scale.
pub const CGPA_SCALE: f64 = 10.0;

/// A stored student profile.
///
/// Every field except `id` tolerates being absent or `null` in the JSON
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable::whole_number")]
    pub age: u32,
    /// Raw education label, e.g. "undergraduate".
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub education: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub college: String,
    #[serde(default, deserialize_with = "nullable::decimal")]
    pub cgpa: f64,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub interests: Vec<String>,
    /// Preferred city, or "any".
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub location_preference: String,
    #[serde(default, deserialize_with = "nullable::label")]
    pub location_type: Option<LocationType>,
    #[serde(default, deserialize_with = "nullable::label")]
    pub category: Option<SocialCategory>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub experience: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub past_participation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl Student {
    #[must_use]
    pub fn education_level(&self) -> Option<EducationLevel> {
        EducationLevel::from_label(&self.education)
    }

    #[must_use]
    pub fn is_rural(&self) -> bool {
        self.location_type.as_ref().is_some_and(LocationType::is_rural)
    }

    #[must_use]
    pub fn is_sc_st(&self) -> bool {
        self.category.as_ref().is_some_and(SocialCategory::is_sc_st)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("student name must not be empty")]
    EmptyName,
    #[error("CGPA must be between 0 and 10, got {0}")]
    CgpaOutOfRange(f64),
}

/// Profile input for a student that has not been registered yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub education: String,
    pub college: String,
    pub cgpa: f64,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location_preference: String,
    pub location_type: Option<LocationType>,
    pub category: Option<SocialCategory>,
    pub experience: String,
    pub past_participation: bool,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if !self.cgpa.is_finite() || !(0.0..=CGPA_SCALE).contains(&self.cgpa) {
            return Err(ProfileError::CgpaOutOfRange(self.cgpa));
        }
        Ok(())
    }

    /// Validate and materialize into a stored record.
    ///
    /// Skill and interest lists are trimmed, blank entries dropped, and
    /// duplicates removed (first occurrence wins).
    pub fn into_student(
        self,
        id: StudentId,
        created_at: NaiveDateTime,
    ) -> Result<Student, ProfileError> {
        self.validate()?;
        Ok(Student {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            age: self.age,
            education: self.education.trim().to_string(),
            college: self.college.trim().to_string(),
            cgpa: self.cgpa,
            skills: normalize_list(self.skills),
            interests: normalize_list(self.interests),
            location_preference: self.location_preference.trim().to_string(),
            location_type: self.location_type,
            category: self.category,
            experience: self.experience,
            past_participation: self.past_participation,
            created_at: Some(created_at),
        })
    }
}

fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{NewStudent, ProfileError, Student};
    use crate::demographics::{LocationType, SocialCategory};
    use crate::ids::StudentId;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn minimal_record_loads_with_defaults() {
        let student: Student = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();
        assert_eq!(student.id.as_str(), "s1");
        assert!(student.skills.is_empty());
        assert!(student.category.is_none());
        assert!(!student.past_participation);
        assert!(student.created_at.is_none());
    }

    #[test]
    fn null_fields_load_as_defaults() {
        let json = r#"{
            "id": "s2",
            "name": null,
            "skills": null,
            "cgpa": null,
            "category": null,
            "location_type": ""
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "");
        assert!(student.skills.is_empty());
        assert!(student.cgpa.abs() < f64::EPSILON);
        assert!(student.category.is_none());
        assert!(student.location_type.is_none());
    }

    #[test]
    fn naive_iso_timestamp_loads() {
        let json = r#"{"id": "s3", "created_at": "2025-09-10T12:34:56.123456"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.created_at.is_some());
    }

    #[test]
    fn rural_and_sc_st_helpers() {
        let json = r#"{"id": "s4", "location_type": "rural", "category": "ST"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.is_rural());
        assert!(student.is_sc_st());
    }

    #[test]
    fn into_student_normalizes_lists() {
        let profile = NewStudent {
            name: "  Asha  ".to_string(),
            cgpa: 8.2,
            skills: vec![
                "Python".to_string(),
                " Python ".to_string(),
                String::new(),
                "Excel".to_string(),
            ],
            location_type: Some(LocationType::Rural),
            category: Some(SocialCategory::Obc),
            ..NewStudent::default()
        };
        let student = profile
            .into_student(StudentId::new("s5"), timestamp())
            .unwrap();
        assert_eq!(student.name, "Asha");
        assert_eq!(student.skills, vec!["Python", "Excel"]);
        assert_eq!(student.created_at, Some(timestamp()));
    }

    #[test]
    fn validation_rejects_blank_name_and_bad_cgpa() {
        let blank = NewStudent {
            name: "   ".to_string(),
            ..NewStudent::default()
        };
        assert_eq!(blank.validate(), Err(ProfileError::EmptyName));

        let high = NewStudent {
            name: "Ravi".to_string(),
            cgpa: 10.5,
            ..NewStudent::default()
        };
        assert!(matches!(
            high.validate(),
            Err(ProfileError::CgpaOutOfRange(_))
        ));

        let nan = NewStudent {
            name: "Ravi".to_string(),
            cgpa: f64::NAN,
            ..NewStudent::default()
        };
        assert!(nan.validate().is_err());
    }
}
