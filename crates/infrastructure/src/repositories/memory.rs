//! In-memory registration repository.
//!
//! Backs tests and local development without a live database. Matching
//! semantics are kept in lockstep with the PostgreSQL implementation:
//! case-insensitive literal substring on both terms, logical AND.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use paramed_domain::{NewRegistration, ProfessionalRecord, RegistrationId, SearchTerms};

use crate::Result;

/// In-memory implementation of [`super::RegistrationRepository`].
#[derive(Default)]
pub struct InMemoryRegistrationRepository {
    records: RwLock<Vec<ProfessionalRecord>>,
}

impl InMemoryRegistrationRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(record: &ProfessionalRecord, terms: &SearchTerms) -> bool {
    record
        .city
        .to_lowercase()
        .contains(&terms.city.to_lowercase())
        && record
            .specialization
            .to_lowercase()
            .contains(&terms.specialization.to_lowercase())
}

#[async_trait]
impl super::RegistrationRepository for InMemoryRegistrationRepository {
    async fn create(&self, registration: &NewRegistration) -> Result<RegistrationId> {
        let id = RegistrationId::new();
        let record = registration.clone().into_record(id, Utc::now());
        self.records.write().push(record);
        Ok(id)
    }

    async fn search(&self, terms: &SearchTerms) -> Result<Vec<ProfessionalRecord>> {
        Ok(self
            .records
            .read()
            .iter()
            .filter(|r| matches(r, terms))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::super::RegistrationRepository;
    use super::*;
    use chrono::NaiveDate;

    fn registration(city: &str, specialization: &str) -> NewRegistration {
        NewRegistration {
            full_name: "Jordan Reyes".into(),
            dob: NaiveDate::from_ymd_opt(1988, 4, 12).unwrap(),
            gender: "female".into(),
            phone: "+1-555-0142".into(),
            email: "jordan.reyes@example.com".into(),
            address: "12 Elm Street".into(),
            city: city.into(),
            state: "IL".into(),
            zip: "62701".into(),
            country: "USA".into(),
            specialization: specialization.into(),
            title: "Paramedic".into(),
            license_number: "LIC-4471".into(),
            license_expiry: "June 2027".into(),
            degree: "BSc Paramedicine".into(),
            skills: "ACLS, PALS".into(),
            availability: "Weekdays".into(),
            working_hours: "08:00-16:00".into(),
            languages: "English, Spanish".into(),
        }
    }

    fn terms(city: &str, specialization: &str) -> SearchTerms {
        SearchTerms {
            city: city.into(),
            specialization: specialization.into(),
        }
    }

    #[tokio::test]
    async fn create_then_search_round_trips_all_fields() {
        let repo = InMemoryRegistrationRepository::new();
        let reg = registration("Springfield", "Cardiology");
        let id = repo.create(&reg).await.unwrap();

        let results = repo.search(&terms("Springfield", "Cardiology")).await.unwrap();
        assert_eq!(results.len(), 1);
        let record = &results[0];
        assert_eq!(record.id, id);
        assert_eq!(record.full_name, reg.full_name);
        assert_eq!(record.dob, reg.dob);
        assert_eq!(record.license_expiry, reg.license_expiry);
        assert_eq!(record.languages, reg.languages);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let repo = InMemoryRegistrationRepository::new();
        repo.create(&registration("Springfield", "Cardiology"))
            .await
            .unwrap();

        for (city, specialization) in [
            ("spring", "CARDIO"),
            ("SPRINGFIELD", "cardiology"),
            ("field", "ology"),
            ("", ""),
        ] {
            let results = repo.search(&terms(city, specialization)).await.unwrap();
            assert_eq!(results.len(), 1, "expected match for {city:?}/{specialization:?}");
        }
    }

    #[tokio::test]
    async fn both_terms_must_match() {
        let repo = InMemoryRegistrationRepository::new();
        repo.create(&registration("Springfield", "Cardiology"))
            .await
            .unwrap();

        assert!(repo.search(&terms("Springfield", "Radiology")).await.unwrap().is_empty());
        assert!(repo.search(&terms("Shelbyville", "Cardiology")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_match_yields_empty_result_not_error() {
        let repo = InMemoryRegistrationRepository::new();
        let results = repo.search(&terms("Nowhere", "Nothing")).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn metacharacters_match_literally() {
        let repo = InMemoryRegistrationRepository::new();
        repo.create(&registration("Springfield", "Cardiology"))
            .await
            .unwrap();
        repo.create(&registration("100% Brooklyn", "Card_iology"))
            .await
            .unwrap();

        // Wildcards do not act as wildcards.
        assert!(repo.search(&terms("Spring%", "")).await.unwrap().is_empty());
        assert!(repo.search(&terms("", "Card_")).await.unwrap().len() == 1);
        // But records containing them literally are still reachable.
        assert_eq!(repo.search(&terms("100%", "")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repeated_searches_are_stable() {
        let repo = InMemoryRegistrationRepository::new();
        repo.create(&registration("Springfield", "Cardiology"))
            .await
            .unwrap();

        let first = repo.search(&terms("spring", "cardio")).await.unwrap();
        let second = repo.search(&terms("spring", "cardio")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
