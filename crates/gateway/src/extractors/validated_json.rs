//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use tracing::debug;

use common::AppError;
use domain::{FromInput, Input};

/// JSON extractor that decodes an object body and validates it into `T`.
///
/// Malformed JSON, a wrong content type or a non-object body is a
/// `BadRequest`; field problems become a `Validation` error listing every
/// offending field.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromInput + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON object
        let Json(input) = Json::<Input>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Validate
        let value = T::from_input(&input).map_err(|errors| {
            debug!(%errors, "Rejected request body");
            AppError::Validation(errors)
        })?;

        Ok(ValidatedJson(value))
    }
}
