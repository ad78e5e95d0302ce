use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::time::parse_hhmm;

use crate::error::BookingError;

pub struct ConflictService {
    supabase: SupabaseClient,
}

impl ConflictService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Booked time strings for a doctor on a date, from every booking whose
    /// status is not cancelled. Always read fresh; nothing is cached across
    /// checks.
    pub async fn taken_slots(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        auth_token: Option<&str>,
    ) -> Result<Vec<String>, BookingError> {
        debug!("Fetching taken slots for doctor {} on {}", doctor_id, date);

        let path = format!(
            "/rest/v1/bookings?doctor_id=eq.{}&appointment_date=eq.{}&status=neq.cancelled&select=appointment_time",
            doctor_id, date
        );
        let rows: Vec<Value> = self
            .supabase
            .request(Method::GET, &path, auth_token, None)
            .await
            .map_err(|e| BookingError::DatabaseError(e.to_string()))?;

        Ok(rows
            .iter()
            .filter_map(|row| row["appointment_time"].as_str().map(str::to_string))
            .collect())
    }

    /// Whether the candidate slot is already booked.
    ///
    /// The candidate arrives as minutes since midnight; stored times may
    /// carry seconds, so each is reduced to its HH:MM value before the
    /// equality check. Stored times that do not parse are skipped.
    ///
    /// Fail-open: a retrieval failure is logged and reported as no conflict,
    /// trading strict double-booking prevention for availability of the
    /// booking flow. Known, deliberate policy.
    pub async fn has_conflict(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        candidate_minutes: u32,
        auth_token: Option<&str>,
    ) -> bool {
        let taken = match self.taken_slots(doctor_id, date, auth_token).await {
            Ok(taken) => taken,
            Err(e) => {
                warn!(
                    "Conflict check for doctor {} on {} failed, reporting no conflict: {}",
                    doctor_id, date, e
                );
                return false;
            }
        };

        taken
            .iter()
            .any(|slot| matches!(parse_hhmm(slot), Ok(minutes) if minutes == candidate_minutes))
    }
}
