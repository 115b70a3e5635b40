//! Response envelope and request extraction helpers.
//!
//! Every response carries the same envelope: `{"status":"ok","result":...}`
//! on success, `{"status":"nok","error":"..."}` on failure.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

/// Wrapper for successful responses that adds the `status: ok` envelope.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    result: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self { result }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let result = match serde_json::to_value(&self.result) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("failed to serialize response: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "status": "nok", "error": "Failed to serialize response" })),
                )
                    .into_response();
            }
        };

        Json(json!({ "status": "ok", "result": result })).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Result payload for mutations that only report an outcome.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON body extractor whose rejection carries the response envelope, so a
/// malformed body fails the same way every other client error does.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}
