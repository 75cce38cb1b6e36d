//! REST API for the Paramed Directory
//!
//! Exposes the two operations of the system over HTTP:
//!
//! - `POST /api/submit-registration` — validate and persist a professional's
//!   profile (JSON or URL-encoded form)
//! - `POST /api/search-paramedical` — case-insensitive substring search by
//!   city and specialization
//!
//! Plus health endpoints and static file serving for the front-end pages.
//! All state is carried in [`state::AppState`]; the storage backend is a
//! trait object injected at startup so tests can run against the in-memory
//! repository.

#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
