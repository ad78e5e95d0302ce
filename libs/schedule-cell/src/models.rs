use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use shared_models::time::{format_hhmm, parse_hhmm, SLOT_MINUTES};

use crate::error::ScheduleError;

pub const DAYS_PER_WEEK: usize = 7;

/// Default editing window shown before a doctor has saved any schedule.
pub const DEFAULT_OPEN_MINUTES: u32 = 8 * 60;
pub const DEFAULT_CLOSE_MINUTES: u32 = 17 * 60;

/// Editable availability for one weekday. Times are minutes since midnight;
/// `selected` holds the start of every chosen half-hour slot, kept sorted so
/// compression can walk it in one pass.
///
/// Callers keep the invariant that selected slots lie in `[open, close)` on
/// the 30-minute grid; the core does not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub open: u32,
    pub close: u32,
    pub selected: BTreeSet<u32>,
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_MINUTES,
            close: DEFAULT_CLOSE_MINUTES,
            selected: BTreeSet::new(),
        }
    }
}

impl DaySchedule {
    /// Every slot start in `[open, close)` on the 30-minute grid.
    pub fn grid(&self) -> Vec<u32> {
        let mut slots = Vec::new();
        let mut minute = self.open;
        while minute < self.close {
            slots.push(minute);
            minute += SLOT_MINUTES;
        }
        slots
    }

    pub fn select_all(&mut self) {
        self.selected = self.grid().into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn toggle(&mut self, slot: u32) {
        if !self.selected.remove(&slot) {
            self.selected.insert(slot);
        }
    }
}

/// The seven editable day schedules, indexed by day of week (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DaySchedule; DAYS_PER_WEEK],
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            days: std::array::from_fn(|_| DaySchedule::default()),
        }
    }
}

impl WeeklySchedule {
    pub fn day(&self, day_of_week: i32) -> Option<&DaySchedule> {
        usize::try_from(day_of_week)
            .ok()
            .and_then(|d| self.days.get(d))
    }

    pub fn day_mut(&mut self, day_of_week: i32) -> Option<&mut DaySchedule> {
        usize::try_from(day_of_week)
            .ok()
            .and_then(|d| self.days.get_mut(d))
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &DaySchedule)> {
        self.days.iter().enumerate().map(|(d, day)| (d as i32, day))
    }
}

/// One persisted contiguous block of availability. `end_time` is exclusive:
/// the block covers `[start_time, end_time)`. Times are canonical `HH:MM`
/// strings; `24:00` is a valid end bound for a block closing at midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRange {
    pub doctor_id: Uuid,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

impl ScheduleRange {
    /// Parse a store row, canonicalizing `HH:MM:SS` times down to `HH:MM`.
    pub fn from_row(row: &Value) -> Result<Self, ScheduleError> {
        let malformed = || ScheduleError::DatabaseError(format!("Malformed schedule row: {}", row));

        let doctor_id = row["doctor_id"]
            .as_str()
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(malformed)?;
        let day_of_week = row["day_of_week"].as_i64().ok_or_else(malformed)? as i32;
        let start_time = row["start_time"].as_str().ok_or_else(malformed)?;
        let end_time = row["end_time"].as_str().ok_or_else(malformed)?;

        Ok(Self {
            doctor_id,
            day_of_week,
            start_time: format_hhmm(parse_hhmm(start_time)?),
            end_time: format_hhmm(parse_hhmm(end_time)?),
            is_available: row["is_available"].as_bool().unwrap_or(true),
        })
    }

    pub fn start_minutes(&self) -> Result<u32, ScheduleError> {
        Ok(parse_hhmm(&self.start_time)?)
    }

    pub fn end_minutes(&self) -> Result<u32, ScheduleError> {
        Ok(parse_hhmm(&self.end_time)?)
    }
}

// ==============================================================================
// WEEKLY EDITOR VIEW (wire form of the editing buffer)
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleView {
    pub day_of_week: i32,
    pub open: String,
    pub close: String,
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScheduleView {
    pub days: Vec<DayScheduleView>,
}

impl From<&WeeklySchedule> for WeeklyScheduleView {
    fn from(week: &WeeklySchedule) -> Self {
        Self {
            days: week
                .iter()
                .map(|(day_of_week, day)| DayScheduleView {
                    day_of_week,
                    open: format_hhmm(day.open),
                    close: format_hhmm(day.close),
                    selected: day.selected.iter().map(|&m| format_hhmm(m)).collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<WeeklyScheduleView> for WeeklySchedule {
    type Error = ScheduleError;

    fn try_from(view: WeeklyScheduleView) -> Result<Self, Self::Error> {
        let mut week = WeeklySchedule::default();

        for day_view in view.days {
            let open = parse_hhmm(&day_view.open)?;
            let close = parse_hhmm(&day_view.close)?;
            if close <= open {
                return Err(ScheduleError::EmptyWindow);
            }

            let mut selected = BTreeSet::new();
            for slot in &day_view.selected {
                selected.insert(parse_hhmm(slot)?);
            }

            let day = week
                .day_mut(day_view.day_of_week)
                .ok_or(ScheduleError::InvalidDay(day_view.day_of_week))?;
            *day = DaySchedule { open, close, selected };
        }

        Ok(week)
    }
}
