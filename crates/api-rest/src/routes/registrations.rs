//! Registration intake endpoint.

use axum::{extract::State, response::Html, routing::post, Router};
use std::path::Path;
use tracing::{debug, info, warn};

use paramed_domain::RegistrationForm;

use crate::{error::ApiResult, extractors::JsonOrForm, state::AppState};

/// Shown when the configured success page is missing. Page loading must never
/// fail the request once the write has succeeded.
const SUCCESS_FALLBACK: &str =
    "<!DOCTYPE html><html><body><h1>Registration successful</h1></body></html>";

/// Registration routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/submit-registration", post(submit_registration))
}

/// Validate and persist a professional registration.
///
/// Accepts the 19 profile fields as JSON or URL-encoded form data. On
/// success the insert is atomic and the caller receives the success page; on
/// validation failure the response is 400 with a message naming every
/// offending field.
async fn submit_registration(
    State(state): State<AppState>,
    JsonOrForm(form): JsonOrForm<RegistrationForm>,
) -> ApiResult<Html<String>> {
    debug!(payload = ?form, "Received registration data");

    let registration = form.validate()?;
    let id = state.registrations.create(&registration).await?;
    info!(%id, city = %registration.city, "Registration saved");

    Ok(Html(success_page(&state.config.public_dir).await))
}

async fn success_page(public_dir: &Path) -> String {
    let path = public_dir.join("success.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => page,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Success page unavailable, using fallback");
            SUCCESS_FALLBACK.to_string()
        }
    }
}
