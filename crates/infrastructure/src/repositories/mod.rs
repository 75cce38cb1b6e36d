//! Repository implementations for registration persistence.
//!
//! The [`RegistrationRepository`] trait is the storage seam of the system:
//! the API layer holds it as a trait object and never sees a concrete
//! backend. `PgRegistrationRepository` is the production implementation;
//! `InMemoryRegistrationRepository` backs tests.

mod memory;
mod registration_repository;

pub use memory::InMemoryRegistrationRepository;
pub use registration_repository::PgRegistrationRepository;

use async_trait::async_trait;

use paramed_domain::{NewRegistration, ProfessionalRecord, RegistrationId, SearchTerms};

use crate::Result;

/// Repository trait for professional registrations.
///
/// Deliberately narrow: records are immutable after creation, so there is no
/// update or delete operation to implement.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert a validated registration atomically, returning the assigned ID.
    async fn create(&self, registration: &NewRegistration) -> Result<RegistrationId>;

    /// Find records whose `city` and `specialization` both contain the
    /// corresponding term as a case-insensitive literal substring.
    ///
    /// Terms are matched literally: pattern metacharacters in caller input
    /// have no special meaning. Empty terms match every record.
    async fn search(&self, terms: &SearchTerms) -> Result<Vec<ProfessionalRecord>>;

    /// Total number of persisted registrations.
    async fn count(&self) -> Result<u64>;
}
