use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use shared_config::AppConfig;

use crate::handlers::{self, ScheduleState};
use crate::services::schedule::SaveGuard;

pub fn schedule_routes(config: Arc<AppConfig>) -> Router {
    let state = ScheduleState {
        config,
        save_guard: Arc::new(SaveGuard::default()),
    };

    Router::new()
        .route("/{doctor_id}", get(handlers::get_schedule).put(handlers::put_schedule))
        .route("/{doctor_id}/week", get(handlers::get_week))
        .with_state(state)
}
