//! Registration repository implementation.
//!
//! PostgreSQL-backed persistence for professional registrations.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::{debug, instrument};
use uuid::Uuid;

use paramed_domain::{NewRegistration, ProfessionalRecord, RegistrationId, SearchTerms};

use crate::{Error, Result};

/// PostgreSQL implementation of [`super::RegistrationRepository`].
pub struct PgRegistrationRepository {
    pool: PgPool,
}

impl PgRegistrationRepository {
    /// Create a new PostgreSQL registration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` metacharacters so caller input matches as a literal
/// substring. Without this, a term like `%` would match every record.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wrap an escaped term for substring matching.
fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

fn row_to_record(row: &PgRow) -> ProfessionalRecord {
    let id: Uuid = row.get("id");
    ProfessionalRecord {
        id: RegistrationId::from_uuid(id),
        full_name: row.get("full_name"),
        dob: row.get("dob"),
        gender: row.get("gender"),
        phone: row.get("phone"),
        email: row.get("email"),
        address: row.get("address"),
        city: row.get("city"),
        state: row.get("state"),
        zip: row.get("zip"),
        country: row.get("country"),
        specialization: row.get("specialization"),
        title: row.get("title"),
        license_number: row.get("license_number"),
        license_expiry: row.get("license_expiry"),
        degree: row.get("degree"),
        skills: row.get("skills"),
        availability: row.get("availability"),
        working_hours: row.get("working_hours"),
        languages: row.get("languages"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl super::RegistrationRepository for PgRegistrationRepository {
    #[instrument(skip(self, registration), fields(city = %registration.city))]
    async fn create(&self, registration: &NewRegistration) -> Result<RegistrationId> {
        let id = RegistrationId::new();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, full_name, dob, gender, phone, email, address,
                city, state, zip, country, specialization, title,
                license_number, license_expiry, degree, skills,
                availability, working_hours, languages, created_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21
            )
            "#,
        )
        .bind(id.as_uuid())
        .bind(&registration.full_name)
        .bind(registration.dob)
        .bind(&registration.gender)
        .bind(&registration.phone)
        .bind(&registration.email)
        .bind(&registration.address)
        .bind(&registration.city)
        .bind(&registration.state)
        .bind(&registration.zip)
        .bind(&registration.country)
        .bind(&registration.specialization)
        .bind(&registration.title)
        .bind(&registration.license_number)
        .bind(&registration.license_expiry)
        .bind(&registration.degree)
        .bind(&registration.skills)
        .bind(&registration.availability)
        .bind(&registration.working_hours)
        .bind(&registration.languages)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(%id, "Registration persisted");
        Ok(id)
    }

    #[instrument(skip(self), fields(city = %terms.city, specialization = %terms.specialization))]
    async fn search(&self, terms: &SearchTerms) -> Result<Vec<ProfessionalRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, full_name, dob, gender, phone, email, address,
                   city, state, zip, country, specialization, title,
                   license_number, license_expiry, degree, skills,
                   availability, working_hours, languages, created_at
            FROM registrations
            WHERE city ILIKE $1 ESCAPE '\'
              AND specialization ILIKE $2 ESCAPE '\'
            "#,
        )
        .bind(contains_pattern(&terms.city))
        .bind(contains_pattern(&terms.specialization))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(matches = rows.len(), "Search executed");
        Ok(rows.iter().map(row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("Springfield"), "Springfield");
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c\\d"), "c\\\\d");
    }

    #[test]
    fn contains_pattern_wraps_escaped_term() {
        assert_eq!(contains_pattern("card"), "%card%");
        assert_eq!(contains_pattern("%"), "%\\%%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
