use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakenSlotsResponse {
    /// Booked time strings for one doctor and date, as stored (usually with
    /// seconds precision).
    pub taken_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
}
