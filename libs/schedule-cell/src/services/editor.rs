use uuid::Uuid;

use crate::error::ScheduleError;
use crate::models::{DaySchedule, ScheduleRange, WeeklySchedule};
use crate::services::slots;

/// In-memory editing buffer for one doctor's weekly schedule.
///
/// This is disposable session state: it is loaded (or created empty) when an
/// editing session opens, mutated by toggles and bulk operations, and only
/// turned into persisted rows at explicit save time. The persisted rows
/// remain the durable source of truth throughout.
#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    doctor_id: Uuid,
    week: WeeklySchedule,
}

impl ScheduleEditor {
    pub fn new(doctor_id: Uuid) -> Self {
        Self {
            doctor_id,
            week: WeeklySchedule::default(),
        }
    }

    pub fn from_week(doctor_id: Uuid, week: WeeklySchedule) -> Self {
        Self { doctor_id, week }
    }

    pub fn doctor_id(&self) -> Uuid {
        self.doctor_id
    }

    pub fn week(&self) -> &WeeklySchedule {
        &self.week
    }

    pub fn into_week(self) -> WeeklySchedule {
        self.week
    }

    /// Flip one slot on the given day.
    pub fn toggle(&mut self, day_of_week: i32, slot: u32) -> Result<(), ScheduleError> {
        self.day_mut(day_of_week)?.toggle(slot);
        Ok(())
    }

    /// Select every slot in the day's `[open, close)` window.
    pub fn select_all(&mut self, day_of_week: i32) -> Result<(), ScheduleError> {
        self.day_mut(day_of_week)?.select_all();
        Ok(())
    }

    /// Drop every selection on the given day.
    pub fn clear(&mut self, day_of_week: i32) -> Result<(), ScheduleError> {
        self.day_mut(day_of_week)?.clear();
        Ok(())
    }

    /// Adjust the day's visible window. Selections are left untouched.
    pub fn set_window(&mut self, day_of_week: i32, open: u32, close: u32) -> Result<(), ScheduleError> {
        if close <= open {
            return Err(ScheduleError::EmptyWindow);
        }
        let day = self.day_mut(day_of_week)?;
        day.open = open;
        day.close = close;
        Ok(())
    }

    /// Overwrite every other day's window and selection with copies of the
    /// given day's. The source day itself is left unchanged.
    pub fn copy_to_all_days(&mut self, day_of_week: i32) -> Result<(), ScheduleError> {
        let source: DaySchedule = self.day_mut(day_of_week)?.clone();

        for target in 0..crate::models::DAYS_PER_WEEK as i32 {
            if target == day_of_week {
                continue;
            }
            if let Some(day) = self.week.day_mut(target) {
                *day = source.clone();
            }
        }
        Ok(())
    }

    /// Compress the current buffer into the full persistence payload.
    pub fn ranges(&self) -> Vec<ScheduleRange> {
        slots::compress(self.doctor_id, &self.week)
    }

    fn day_mut(&mut self, day_of_week: i32) -> Result<&mut DaySchedule, ScheduleError> {
        self.week
            .day_mut(day_of_week)
            .ok_or(ScheduleError::InvalidDay(day_of_week))
    }
}
