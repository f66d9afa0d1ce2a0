use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courier::orders;
use serde_json::json;
use thiserror::Error;
use tracing::error;

fn status_of(err: &orders::Error) -> StatusCode {
    match err {
        orders::Error::NotFound(_) => StatusCode::NOT_FOUND,
        orders::Error::MalformedId(_) | orders::Error::Invalid(_) | orders::Error::EmptyQuery => {
            StatusCode::BAD_REQUEST
        }
        orders::Error::Io(_) | orders::Error::Csv(_) | orders::Error::Pattern(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Failure of an `/api/orders` handler, rendered as `{ "message": ... }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Orders(#[from] orders::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Orders(err) = self;
        let status = status_of(&err);
        if status.is_server_error() {
            error!("Order request failed: {err}");
        }
        (status, Json(json!({ "message": err.to_string() }))).into_response()
    }
}

/// Failure of an `/api/routes` handler. Carries the `success` flag the
/// route endpoints answer with.
#[derive(Error, Debug)]
#[error("{context}: {source}")]
pub struct RouteError {
    pub context: &'static str,
    pub source: orders::Error,
}

impl RouteError {
    pub fn new(context: &'static str, source: orders::Error) -> Self {
        Self { context, source }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = status_of(&self.source);
        error!("{self}");
        let body = json!({
            "success": false,
            "message": self.context,
            "error": self.source.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
