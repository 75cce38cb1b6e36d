//! Error types for the directory domain.
//!
//! The only failure the domain itself produces is a validation failure on
//! intake. Storage and HTTP failures live in their own layers and wrap or map
//! these types as needed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Name of the offending field
    pub field: String,
    /// Description of what is wrong with it
    pub message: String,
}

impl FieldIssue {
    /// Create a new field issue.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation failure for a registration intake payload.
///
/// Carries every field issue found, not just the first, so the caller gets a
/// complete picture in one round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// All field-level issues found in the payload
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create a validation error from a non-empty list of issues.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// Names of the offending fields, in payload order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid registration: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_all_issues() {
        let err = ValidationError::new(vec![
            FieldIssue::new("city", "is required"),
            FieldIssue::new("dob", "is not a valid date"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid registration: city: is required; dob: is not a valid date"
        );
    }

    #[test]
    fn fields_lists_offenders_in_order() {
        let err = ValidationError::new(vec![
            FieldIssue::new("phone", "is required"),
            FieldIssue::new("email", "is required"),
        ]);
        assert_eq!(err.fields(), vec!["phone", "email"]);
    }
}
