//! HTTP route handlers.

pub mod health;
pub mod registrations;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// All API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(registrations::routes())
        .merge(search::routes())
}
