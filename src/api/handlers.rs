//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::extract::{Form, Json, State};

use super::AppState;
use super::types::{CalculateResponse, ReferenceResponse};
use crate::calc::engine::calculate;
use crate::calc::types::CalcInput;
use crate::input::RawInputs;

/// Returns every reference table.
///
/// `GET /reference` → 200 + `ReferenceResponse` JSON
pub async fn get_reference(State(state): State<Arc<AppState>>) -> Json<ReferenceResponse> {
    Json(state.reference.clone())
}

/// Runs the calculator on a form submission.
///
/// Malformed numeric text is coerced to 0 rather than rejected.
///
/// `POST /calculate` (form-urlencoded) → 200 + `CalculateResponse` JSON
pub async fn post_calculate_form(Form(raw): Form<RawInputs>) -> Json<CalculateResponse> {
    respond(raw.to_input())
}

/// Runs the calculator on a typed JSON input.
///
/// `POST /calculate/json` → 200 + `CalculateResponse` JSON
pub async fn post_calculate_json(Json(input): Json<CalcInput>) -> Json<CalculateResponse> {
    respond(input.normalized())
}

fn respond(input: CalcInput) -> Json<CalculateResponse> {
    let result = calculate(&input);
    tracing::debug!(
        city = %result.breakdown.city,
        cost_per_hour = result.cost_per_hour,
        "calculation served"
    );
    Json(CalculateResponse::new(input, result))
}
