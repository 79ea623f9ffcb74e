//! Farm profile domain models.
//!
//! Represents the farmer and farm records created during a session.

use crate::error::{Result, SakhiError};
use serde::{Deserialize, Serialize};

/// A farmer/farm record held in the session-scoped directory.
///
/// `id` and `created_at` are assigned once by the directory and never
/// change afterwards; every other field is caller-supplied and mutable
/// through an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Farmer's display name
    pub name: String,
    /// Farmer's age in years
    pub age: u32,
    /// Contact number or address
    pub contact: String,
    /// Farm location
    pub location: String,
    /// Cultivated land size (free-form, e.g. "2 acres")
    pub land_size: String,
    /// Primary crop grown on the farm
    pub crop_type: String,
    /// Soil type of the farm
    pub soil_type: String,
    /// Irrigation method in use
    pub irrigation_method: String,
    /// Timestamp when the profile was created (ISO 8601 format)
    pub created_at: String,
}

/// The caller-supplied fields of a profile, used for create and update.
///
/// Carries everything except `id` and `created_at`, which the directory
/// owns. Validation lives here so create and update share one rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub location: String,
    pub land_size: String,
    pub crop_type: String,
    pub soil_type: String,
    pub irrigation_method: String,
}

impl ProfileDraft {
    /// Checks that every text field is non-blank and the age is positive.
    ///
    /// Returns the first failing field; nothing is mutated on failure.
    pub fn validate(&self) -> Result<()> {
        let text_fields: [(&'static str, &str); 7] = [
            ("name", &self.name),
            ("contact", &self.contact),
            ("location", &self.location),
            ("land_size", &self.land_size),
            ("crop_type", &self.crop_type),
            ("soil_type", &self.soil_type),
            ("irrigation_method", &self.irrigation_method),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(SakhiError::validation(field, "must not be empty"));
            }
        }
        if self.age == 0 {
            return Err(SakhiError::validation("age", "must be a positive integer"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ravi".to_string(),
            age: 40,
            contact: "999".to_string(),
            location: "Kochi".to_string(),
            land_size: "2 acres".to_string(),
            crop_type: "Rice".to_string(),
            soil_type: "Clay".to_string(),
            irrigation_method: "Flood".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut d = draft();
        d.location = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_zero_age_is_rejected() {
        let mut d = draft();
        d.age = 0;
        assert!(d.validate().unwrap_err().is_validation());
    }
}
