use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn booking_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/{doctor_id}/taken-slots", get(handlers::get_taken_slots))
        .route("/{doctor_id}/conflict", get(handlers::check_conflict))
        .with_state(state)
}
