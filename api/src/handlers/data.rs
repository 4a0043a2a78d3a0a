//! Data handlers
//!
//! Endpoints over `DataProcessor`.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessedResponse {
    pub value: i32,
}

#[derive(Debug, Deserialize)]
pub struct SumRequest {
    pub a: f64,
    pub b: f64,
}

/// GET /api/data/processed
pub async fn processed(
    State(state): State<AppState>,
) -> Result<Json<ProcessedResponse>, AppError> {
    let value = state.data_processor.process()?;
    Ok(Json(ProcessedResponse { value }))
}

/// POST /api/data/sum
///
/// Hands the operands to the data service's sum reporter.
pub async fn report_sum(
    State(state): State<AppState>,
    Json(request): Json<SumRequest>,
) -> StatusCode {
    state.data_processor.report_sum(request.a, request.b);
    StatusCode::NO_CONTENT
}
