//! Infrastructure layer for the Paramed Directory
//!
//! This crate provides the storage side of the system:
//! - PostgreSQL connection pool management (sqlx)
//! - The [`repositories::RegistrationRepository`] trait and its PostgreSQL
//!   and in-memory implementations
//!
//! ## Architecture
//!
//! The layer follows the repository pattern: the API crate depends only on
//! the repository trait and receives a concrete implementation at startup, so
//! tests can run against the in-memory store without a live database.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paramed_infrastructure::{
//!     database::{DatabaseConfig, DatabasePool},
//!     repositories::{PgRegistrationRepository, RegistrationRepository},
//! };
//!
//! let config = DatabaseConfig::from_env()?;
//! let pool = DatabasePool::new(&config).await?;
//! pool.run_migrations().await?;
//! let registrations = PgRegistrationRepository::new(pool.pool().clone());
//! ```

#![warn(clippy::all)]

pub mod database;
pub mod repositories;

/// Infrastructure error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Infrastructure result type.
pub type Result<T> = std::result::Result<T, Error>;
