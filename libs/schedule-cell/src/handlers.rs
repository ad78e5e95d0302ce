use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{WeeklySchedule, WeeklyScheduleView};
use crate::services::schedule::{SaveGuard, ScheduleService};

#[derive(Clone)]
pub struct ScheduleState {
    pub config: Arc<AppConfig>,
    pub save_guard: Arc<SaveGuard>,
}

/// Persisted ranges for a doctor, as stored.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<ScheduleState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state.config);

    let schedules = service.get_schedule(doctor_id, None).await.map_err(AppError::from)?;

    Ok(Json(json!({
        "schedules": schedules,
        "total": schedules.len()
    })))
}

/// Decompressed weekly editor view for a doctor.
#[axum::debug_handler]
pub async fn get_week(
    State(state): State<ScheduleState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<WeeklyScheduleView>, AppError> {
    let service = ScheduleService::new(&state.config);

    let week = service.load_week(doctor_id, None).await.map_err(AppError::from)?;

    Ok(Json(WeeklyScheduleView::from(&week)))
}

/// Busy-guarded full-replace save of a doctor's weekly selection. A save
/// already in flight for the same doctor is rejected with 409.
#[axum::debug_handler]
pub async fn put_schedule(
    State(state): State<ScheduleState>,
    Path(doctor_id): Path<Uuid>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Json(body): Json<WeeklyScheduleView>,
) -> Result<Json<Value>, AppError> {
    let week = WeeklySchedule::try_from(body).map_err(AppError::from)?;

    let _ticket = state.save_guard.begin(doctor_id).map_err(AppError::from)?;

    let service = ScheduleService::new(&state.config);
    let created = service
        .replace_schedule(doctor_id, &week, Some(auth.token()))
        .await
        .map_err(AppError::from)?;

    Ok(Json(json!({ "created": created })))
}
