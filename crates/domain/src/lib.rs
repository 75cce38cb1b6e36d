//! Paramed Directory Domain Types
//!
//! Core domain model for the paramedical-professional directory. Defines the
//! persisted entity, the raw intake payload and its validation, and the error
//! taxonomy shared by the storage and HTTP layers.
//!
//! The domain layer performs no I/O: validation is a pure function from an
//! intake payload to either a record ready for insertion or a list of field
//! issues, so it can be exercised without a live database.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod registration;

pub use errors::{FieldIssue, ValidationError};
pub use identifiers::RegistrationId;
pub use registration::{NewRegistration, ProfessionalRecord, RegistrationForm, SearchTerms};
