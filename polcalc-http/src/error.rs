//! Error handling for polcalc-http
//!
//! Maps core calculator errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use polcalc_core::CalcError;
use serde_json::json;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The expression could not be evaluated
    Calc(CalcError),

    /// The request body named neither a prefix nor an infix expression
    MissingExpression,

    /// Internal error
    Internal(String),
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        Self::Calc(err)
    }
}

impl AppError {
    /// Get the status code and error message for this error
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Calc(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::MissingExpression => (
                StatusCode::BAD_REQUEST,
                "provide a JSON object with a \"prefix\" or \"infix\" key".to_string(),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
