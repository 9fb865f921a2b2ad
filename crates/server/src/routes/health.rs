//! Health check endpoint

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use hospital_core::HospitalRecord;
use serde::Serialize;

use crate::ai::SharedGenerator;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    departments: usize,
    generation: bool,
}

/// GET /health - Report knowledge base size and whether generation is configured
///
/// Always healthy: an empty knowledge base or missing API key degrades
/// answers but does not take the service down.
pub async fn check(
    State(knowledge): State<Arc<HospitalRecord>>,
    Extension(generator): Extension<Option<SharedGenerator>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        departments: knowledge.departments.len(),
        generation: generator.is_some(),
    })
}
