//! Content-type dispatching payload extractor.
//!
//! The registration form is posted either as JSON (programmatic clients) or
//! as `application/x-www-form-urlencoded` (plain HTML forms). This extractor
//! accepts both and rejects anything else as a bad request.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Extractor that decodes the body as JSON or URL-encoded form data,
/// depending on the request `Content-Type`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(format!("Invalid form payload: {e}")))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(format!("Invalid JSON payload: {e}")))?;
            Ok(Self(value))
        }
    }
}

impl<T> std::ops::Deref for JsonOrForm<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
