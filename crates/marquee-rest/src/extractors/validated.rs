//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes the body and validates it with the
//! `validator` crate. Both malformed bodies and invalid fields are answered
//! with a 400 problem detail whose `errors` list the offending fields.

use crate::responses::ProblemDetail;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, OriginalUri, Request},
    response::{IntoResponse, Response},
    Json,
};
use marquee_core::field_error_messages;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use marquee_rest::extractors::ValidatedJson;
///
/// async fn create(ValidatedJson(record): ValidatedJson<MovieRecord>) {
///     // record is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub struct ValidatedJsonRejection {
    uri: String,
    kind: RejectionKind,
}

#[derive(Debug)]
enum RejectionKind {
    Json(JsonRejection),
    Invalid(ValidationErrors),
}

impl ValidatedJsonRejection {
    /// The `"field: message"` lines reported to the client, sorted.
    pub fn errors(&self) -> Vec<String> {
        match &self.kind {
            RejectionKind::Json(rejection) => vec![rejection.body_text()],
            RejectionKind::Invalid(errors) => field_error_messages(errors),
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let errors = self.errors();
        debug!(uri = %self.uri, ?errors, "Rejected request payload");
        ProblemDetail::bad_payload(&self.uri, errors).into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers see a stripped URI; report the one the client sent.
        let uri = req
            .extensions()
            .get::<OriginalUri>()
            .map_or_else(|| req.uri().path(), |original| original.0.path())
            .to_string();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidatedJsonRejection {
                uri: uri.clone(),
                kind: RejectionKind::Json(rejection),
            })?;

        value.validate().map_err(|errors| ValidatedJsonRejection {
            uri,
            kind: RejectionKind::Invalid(errors),
        })?;

        Ok(ValidatedJson(value))
    }
}
