//! Request and response models for the calculator API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the calculator endpoint.
///
/// Exactly one of the two keys is expected; when both are present the infix
/// expression takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct CalculateRequest {
    /// Prefix-notation expression, e.g. `"+ 1 2"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Fully parenthesized infix expression, e.g. `"( 1 + 2 )"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infix: Option<String>,
}

/// Response body carrying the numeric result of an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// Result of evaluating the expression
    pub result: f64,
}
