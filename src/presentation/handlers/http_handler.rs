use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::{
    domain::{
        error::EndpointError,
        models::message::{HashRequest, ValidateRequest},
    },
    endpoint::Endpoints,
};

/// Failures reported through the HTTP status instead of the payload.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Endpoint(EndpointError::Limited) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Endpoint(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::debug!(%status, error = %self, "request failed");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/* Router Function and Handler Function */

/// function return Router object serving `/hash` and `/validate`
pub fn create_vault_router(endpoints: Endpoints) -> Router {
    Router::new()
        .route("/hash", post(hash))
        .route("/validate", post(validate))
        .layer(TraceLayer::new_for_http())
        .with_state(endpoints)
}

/// Decode the raw body as JSON whatever the `Content-Type` says.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Shared encoder: every processed request is a `200` with the response as
/// JSON, whether or not it carries an `err`.
fn encode<T: Serialize>(response: T) -> Response {
    (StatusCode::OK, Json(response)).into_response()
}

/// handler function for hash
async fn hash(State(endpoints): State<Endpoints>, body: Bytes) -> Result<Response, ApiError> {
    let request: HashRequest = decode(&body)?;
    let response = (endpoints.hash)(request).await?;
    Ok(encode(response))
}

/// handler function for validate
async fn validate(State(endpoints): State<Endpoints>, body: Bytes) -> Result<Response, ApiError> {
    let request: ValidateRequest = decode(&body)?;
    let response = (endpoints.validate)(request).await?;
    Ok(encode(response))
}
