use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_models::time::parse_hhmm;

use crate::models::{ConflictCheckResponse, TakenSlotsResponse};
use crate::services::conflict::ConflictService;

#[derive(Debug, Deserialize)]
pub struct TakenSlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ConflictQuery {
    pub date: NaiveDate,
    pub time: String,
}

#[axum::debug_handler]
pub async fn get_taken_slots(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<TakenSlotsQuery>,
) -> Result<Json<TakenSlotsResponse>, AppError> {
    let service = ConflictService::new(&state);

    let taken_slots = service
        .taken_slots(doctor_id, query.date, None)
        .await
        .map_err(AppError::from)?;

    Ok(Json(TakenSlotsResponse { taken_slots }))
}

#[axum::debug_handler]
pub async fn check_conflict(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<ConflictQuery>,
) -> Result<Json<ConflictCheckResponse>, AppError> {
    // Unparseable candidate times are the caller's defect, rejected at the
    // edge; the checker itself never raises.
    let candidate = parse_hhmm(&query.time)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let service = ConflictService::new(&state);
    let has_conflict = service
        .has_conflict(doctor_id, query.date, candidate, None)
        .await;

    Ok(Json(ConflictCheckResponse { has_conflict }))
}
