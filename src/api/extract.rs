//! JSON body extractor
//!
//! Parses the request body as JSON whatever the Content-Type header says, and turns
//! every failure (unreadable body, invalid JSON, wrong shape) into a 400 response.
//! Only JSON objects are accepted; serde would otherwise read an array as a
//! positional struct.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "failed to read request body");
            AppError::invalid_body()
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "rejected malformed request body");
            AppError::invalid_body()
        })?;

        if !value.is_object() {
            warn!("rejected request body that is not a JSON object");
            return Err(AppError::invalid_body());
        }

        serde_json::from_value(value).map(JsonBody).map_err(|e| {
            warn!(error = %e, "rejected request body with unexpected shape");
            AppError::invalid_body()
        })
    }
}
