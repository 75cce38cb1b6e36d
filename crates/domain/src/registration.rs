//! Professional registrations: the persisted record, the raw intake payload,
//! and the validation that turns one into the other.
//!
//! Validation is deliberately shallow. Intake requires every field to be
//! present and non-empty and the date of birth to parse as a calendar date;
//! beyond that, values are stored as the caller sent them. Email, phone and
//! the free-text `license_expiry` are not checked against any format.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldIssue, ValidationError};
use crate::identifiers::RegistrationId;

/// A persisted paramedical-professional profile.
///
/// Immutable after creation: no update or delete operation exists anywhere in
/// the system. `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalRecord {
    /// Store-assigned identifier
    pub id: RegistrationId,
    /// Full name of the professional
    pub full_name: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Self-reported gender
    pub gender: String,
    /// Contact phone number (free text)
    pub phone: String,
    /// Contact email address (free text)
    pub email: String,
    /// Street address
    pub address: String,
    /// City, matched case-insensitively by search
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Country
    pub country: String,
    /// Specialization, matched case-insensitively by search
    pub specialization: String,
    /// Professional title
    pub title: String,
    /// License number
    pub license_number: String,
    /// License expiry, kept as free text rather than a parsed date
    pub license_expiry: String,
    /// Highest degree held
    pub degree: String,
    /// Skills summary
    pub skills: String,
    /// Availability description
    pub availability: String,
    /// Working hours description
    pub working_hours: String,
    /// Languages spoken
    pub languages: String,
    /// Store-assigned creation timestamp, carries the implicit insert order
    pub created_at: DateTime<Utc>,
}

/// A validated registration ready for insertion.
///
/// Same shape as [`ProfessionalRecord`] minus the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    /// Full name of the professional
    pub full_name: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Self-reported gender
    pub gender: String,
    /// Contact phone number
    pub phone: String,
    /// Contact email address
    pub email: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal code
    pub zip: String,
    /// Country
    pub country: String,
    /// Specialization
    pub specialization: String,
    /// Professional title
    pub title: String,
    /// License number
    pub license_number: String,
    /// License expiry (free text)
    pub license_expiry: String,
    /// Highest degree held
    pub degree: String,
    /// Skills summary
    pub skills: String,
    /// Availability description
    pub availability: String,
    /// Working hours description
    pub working_hours: String,
    /// Languages spoken
    pub languages: String,
}

impl NewRegistration {
    /// Attach store-assigned fields, producing the persisted record.
    pub fn into_record(self, id: RegistrationId, created_at: DateTime<Utc>) -> ProfessionalRecord {
        ProfessionalRecord {
            id,
            full_name: self.full_name,
            dob: self.dob,
            gender: self.gender,
            phone: self.phone,
            email: self.email,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
            specialization: self.specialization,
            title: self.title,
            license_number: self.license_number,
            license_expiry: self.license_expiry,
            degree: self.degree,
            skills: self.skills,
            availability: self.availability,
            working_hours: self.working_hours,
            languages: self.languages,
            created_at,
        }
    }
}

/// The raw intake payload, before validation.
///
/// Every field is optional at the wire level so that a missing field surfaces
/// as a [`ValidationError`] naming it, rather than as an opaque
/// deserialization failure. `dob` arrives as text and is parsed during
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// Full name of the professional
    pub full_name: Option<String>,
    /// Date of birth, ISO `YYYY-MM-DD`
    pub dob: Option<String>,
    /// Self-reported gender
    pub gender: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact email address
    pub email: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or province
    pub state: Option<String>,
    /// Postal code
    pub zip: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Specialization
    pub specialization: Option<String>,
    /// Professional title
    pub title: Option<String>,
    /// License number
    pub license_number: Option<String>,
    /// License expiry (free text)
    pub license_expiry: Option<String>,
    /// Highest degree held
    pub degree: Option<String>,
    /// Skills summary
    pub skills: Option<String>,
    /// Availability description
    pub availability: Option<String>,
    /// Working hours description
    pub working_hours: Option<String>,
    /// Languages spoken
    pub languages: Option<String>,
}

impl RegistrationForm {
    /// Validate the payload into a [`NewRegistration`].
    ///
    /// Collects every field issue before failing, so one round trip reports
    /// the complete problem list.
    pub fn validate(self) -> Result<NewRegistration, ValidationError> {
        let mut issues = Vec::new();

        macro_rules! text_field {
            ($field:ident) => {
                match self.$field {
                    Some(value) if !value.is_empty() => value,
                    Some(_) => {
                        issues.push(FieldIssue::new(stringify!($field), "must not be empty"));
                        String::new()
                    }
                    None => {
                        issues.push(FieldIssue::new(stringify!($field), "is required"));
                        String::new()
                    }
                }
            };
        }

        let dob = match self.dob.as_deref() {
            None => {
                issues.push(FieldIssue::new("dob", "is required"));
                None
            }
            Some("") => {
                issues.push(FieldIssue::new("dob", "must not be empty"));
                None
            }
            Some(raw) => match raw.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    issues.push(FieldIssue::new(
                        "dob",
                        format!("`{raw}` is not a valid date (expected YYYY-MM-DD)"),
                    ));
                    None
                }
            },
        };

        let full_name = text_field!(full_name);
        let gender = text_field!(gender);
        let phone = text_field!(phone);
        let email = text_field!(email);
        let address = text_field!(address);
        let city = text_field!(city);
        let state = text_field!(state);
        let zip = text_field!(zip);
        let country = text_field!(country);
        let specialization = text_field!(specialization);
        let title = text_field!(title);
        let license_number = text_field!(license_number);
        let license_expiry = text_field!(license_expiry);
        let degree = text_field!(degree);
        let skills = text_field!(skills);
        let availability = text_field!(availability);
        let working_hours = text_field!(working_hours);
        let languages = text_field!(languages);

        match (issues.is_empty(), dob) {
            (true, Some(dob)) => Ok(NewRegistration {
                full_name,
                dob,
                gender,
                phone,
                email,
                address,
                city,
                state,
                zip,
                country,
                specialization,
                title,
                license_number,
                license_expiry,
                degree,
                skills,
                availability,
                working_hours,
                languages,
            }),
            _ => Err(ValidationError::new(issues)),
        }
    }
}

/// Search criteria: both terms must match their field as case-insensitive
/// literal substrings (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerms {
    /// Substring to look for in the `city` field
    pub city: String,
    /// Substring to look for in the `specialization` field
    pub specialization: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> RegistrationForm {
        RegistrationForm {
            full_name: Some("Jordan Reyes".into()),
            dob: Some("1988-04-12".into()),
            gender: Some("female".into()),
            phone: Some("+1-555-0142".into()),
            email: Some("jordan.reyes@example.com".into()),
            address: Some("12 Elm Street".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip: Some("62701".into()),
            country: Some("USA".into()),
            specialization: Some("Cardiology".into()),
            title: Some("Paramedic".into()),
            license_number: Some("LIC-4471".into()),
            license_expiry: Some("June 2027".into()),
            degree: Some("BSc Paramedicine".into()),
            skills: Some("ACLS, PALS".into()),
            availability: Some("Weekdays".into()),
            working_hours: Some("08:00-16:00".into()),
            languages: Some("English, Spanish".into()),
        }
    }

    #[test]
    fn valid_form_produces_registration_with_all_fields() {
        let reg = full_form().validate().unwrap();
        assert_eq!(reg.full_name, "Jordan Reyes");
        assert_eq!(reg.dob, NaiveDate::from_ymd_opt(1988, 4, 12).unwrap());
        assert_eq!(reg.city, "Springfield");
        assert_eq!(reg.specialization, "Cardiology");
        assert_eq!(reg.license_expiry, "June 2027");
        assert_eq!(reg.languages, "English, Spanish");
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let form = RegistrationForm {
            city: None,
            ..full_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["city"]);
        assert!(err.to_string().contains("city: is required"));
    }

    #[test]
    fn empty_field_is_rejected() {
        let form = RegistrationForm {
            phone: Some(String::new()),
            ..full_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["phone"]);
    }

    #[test]
    fn every_field_is_individually_required() {
        let complete = full_form();
        let variants: Vec<(&str, RegistrationForm)> = vec![
            ("full_name", RegistrationForm { full_name: None, ..complete.clone() }),
            ("dob", RegistrationForm { dob: None, ..complete.clone() }),
            ("gender", RegistrationForm { gender: None, ..complete.clone() }),
            ("phone", RegistrationForm { phone: None, ..complete.clone() }),
            ("email", RegistrationForm { email: None, ..complete.clone() }),
            ("address", RegistrationForm { address: None, ..complete.clone() }),
            ("city", RegistrationForm { city: None, ..complete.clone() }),
            ("state", RegistrationForm { state: None, ..complete.clone() }),
            ("zip", RegistrationForm { zip: None, ..complete.clone() }),
            ("country", RegistrationForm { country: None, ..complete.clone() }),
            ("specialization", RegistrationForm { specialization: None, ..complete.clone() }),
            ("title", RegistrationForm { title: None, ..complete.clone() }),
            ("license_number", RegistrationForm { license_number: None, ..complete.clone() }),
            ("license_expiry", RegistrationForm { license_expiry: None, ..complete.clone() }),
            ("degree", RegistrationForm { degree: None, ..complete.clone() }),
            ("skills", RegistrationForm { skills: None, ..complete.clone() }),
            ("availability", RegistrationForm { availability: None, ..complete.clone() }),
            ("working_hours", RegistrationForm { working_hours: None, ..complete.clone() }),
            ("languages", RegistrationForm { languages: None, ..complete.clone() }),
        ];
        for (field, form) in variants {
            let err = form.validate().unwrap_err();
            assert_eq!(err.fields(), vec![field], "expected only {field} to fail");
        }
    }

    #[test]
    fn unparseable_dob_is_rejected_with_detail() {
        let form = RegistrationForm {
            dob: Some("12/04/1988".into()),
            ..full_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["dob"]);
        assert!(err.to_string().contains("12/04/1988"));
    }

    #[test]
    fn all_issues_are_collected_in_one_pass() {
        let form = RegistrationForm {
            dob: Some("not-a-date".into()),
            email: None,
            zip: Some(String::new()),
            ..full_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["dob", "email", "zip"]);
    }

    #[test]
    fn record_serializes_dob_as_iso_date() {
        let record = full_form()
            .validate()
            .unwrap()
            .into_record(RegistrationId::new(), Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dob"], "1988-04-12");
        assert_eq!(json["city"], "Springfield");
    }
}
