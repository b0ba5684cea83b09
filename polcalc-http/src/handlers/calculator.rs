use axum::response::Json;
use polcalc_core::{Notation, evaluate};
use tracing::info;

use crate::{
    error::AppError,
    models::{CalculateRequest, CalculateResponse},
};

/// Evaluate an arithmetic expression
///
/// Accepts a JSON object with either a `prefix` or an `infix` key holding a
/// whitespace-delimited expression string and returns its numeric result.
#[utoipa::path(
    post,
    path = "/",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Expression evaluated successfully", body = CalculateResponse),
        (status = 400, description = "Invalid expression or request body")
    )
)]
pub async fn calculate(
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    // When both keys are present the infix expression wins, preserving the
    // original service contract.
    let (expression, notation) = if let Some(infix) = payload.infix.as_deref() {
        (infix, Notation::Infix)
    } else if let Some(prefix) = payload.prefix.as_deref() {
        (prefix, Notation::Prefix)
    } else {
        return Err(AppError::MissingExpression);
    };

    let result = evaluate(expression, notation)?;
    info!("Evaluated {:?} expression {:?} = {}", notation, expression, result);

    Ok(Json(CalculateResponse { result }))
}
