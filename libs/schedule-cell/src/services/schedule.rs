use std::collections::HashSet;
use std::sync::Mutex;

use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::error::ScheduleError;
use crate::models::{ScheduleRange, WeeklySchedule};
use crate::services::slots;

/// Tracks doctors with a schedule save in flight so a second save is
/// rejected outright rather than queued or merged. Tickets release their
/// doctor on drop.
#[derive(Debug, Default)]
pub struct SaveGuard {
    in_flight: Mutex<HashSet<Uuid>>,
}

impl SaveGuard {
    pub fn begin(&self, doctor_id: Uuid) -> Result<SaveTicket<'_>, ScheduleError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !in_flight.insert(doctor_id) {
            return Err(ScheduleError::SaveInProgress(doctor_id));
        }

        Ok(SaveTicket { guard: self, doctor_id })
    }
}

#[derive(Debug)]
pub struct SaveTicket<'a> {
    guard: &'a SaveGuard,
    doctor_id: Uuid,
}

impl Drop for SaveTicket<'_> {
    fn drop(&mut self) {
        let mut in_flight = self
            .guard
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.remove(&self.doctor_id);
    }
}

pub struct ScheduleService {
    supabase: SupabaseClient,
}

impl ScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Fetch a doctor's persisted schedule rows, ordered for display.
    pub async fn get_schedule(
        &self,
        doctor_id: Uuid,
        auth_token: Option<&str>,
    ) -> Result<Vec<ScheduleRange>, ScheduleError> {
        debug!("Fetching schedule for doctor: {}", doctor_id);

        let path = format!(
            "/rest/v1/doctor_schedules?doctor_id=eq.{}&order=day_of_week.asc,start_time.asc",
            doctor_id
        );
        let rows: Vec<Value> = self
            .supabase
            .request(Method::GET, &path, auth_token, None)
            .await
            .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        rows.iter().map(ScheduleRange::from_row).collect()
    }

    /// Fetch and decompress into the weekly editing buffer.
    pub async fn load_week(
        &self,
        doctor_id: Uuid,
        auth_token: Option<&str>,
    ) -> Result<WeeklySchedule, ScheduleError> {
        let rows = self.get_schedule(doctor_id, auth_token).await?;
        Ok(slots::decompress(&rows))
    }

    /// Full-replace save: delete every existing row for the doctor, then
    /// create the compressed rows. Non-transactional, best-effort — a
    /// failure between the two steps leaves a partial schedule and the
    /// caller retries. Returns the number of rows created.
    ///
    /// Callers serialize saves per doctor through a [`SaveGuard`] ticket;
    /// this method performs no guarding of its own.
    pub async fn replace_schedule(
        &self,
        doctor_id: Uuid,
        week: &WeeklySchedule,
        auth_token: Option<&str>,
    ) -> Result<usize, ScheduleError> {
        let rows = slots::compress(doctor_id, week);
        debug!("Replacing schedule for doctor {} with {} rows", doctor_id, rows.len());

        let delete_path = format!("/rest/v1/doctor_schedules?doctor_id=eq.{}", doctor_id);
        let _: Vec<Value> = self
            .supabase
            .request(Method::DELETE, &delete_path, auth_token, None)
            .await
            .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        if rows.is_empty() {
            return Ok(0);
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Prefer", reqwest::header::HeaderValue::from_static("return=representation"));

        let created: Vec<Value> = self
            .supabase
            .request_with_headers(
                Method::POST,
                "/rest/v1/doctor_schedules",
                auth_token,
                Some(json!(rows)),
                Some(headers),
            )
            .await
            .map_err(|e| ScheduleError::DatabaseError(e.to_string()))?;

        if created.is_empty() {
            return Err(ScheduleError::DatabaseError("Failed to create schedule rows".to_string()));
        }

        debug!("Schedule saved for doctor {}: {} rows", doctor_id, created.len());
        Ok(created.len())
    }
}
