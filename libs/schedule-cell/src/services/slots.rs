use tracing::debug;
use uuid::Uuid;

use shared_models::time::{format_hhmm, SLOT_MINUTES};

use crate::models::{DaySchedule, ScheduleRange, WeeklySchedule};

/// Compress a weekly selection into the minimal list of contiguous ranges.
///
/// Per day: the sorted selection is walked once, extending the current run
/// while each slot sits exactly 30 minutes after the previous one and
/// flushing a range at every gap. The final run always flushes, so an
/// isolated slot becomes a 30-minute range. Output rows are sorted by day
/// then start time, pairwise non-overlapping, and never adjacent within a
/// day.
pub fn compress(doctor_id: Uuid, week: &WeeklySchedule) -> Vec<ScheduleRange> {
    let mut rows = Vec::new();
    for (day_of_week, day) in week.iter() {
        compress_day(doctor_id, day_of_week, day, &mut rows);
    }
    rows
}

fn compress_day(doctor_id: Uuid, day_of_week: i32, day: &DaySchedule, rows: &mut Vec<ScheduleRange>) {
    let mut slots = day.selected.iter().copied();
    let Some(first) = slots.next() else {
        return;
    };

    let mut current_start = first;
    let mut prev = first;

    for slot in slots {
        if slot == prev + SLOT_MINUTES {
            // Contiguous with the previous slot, extend the run.
            prev = slot;
        } else {
            rows.push(range(doctor_id, day_of_week, current_start, prev + SLOT_MINUTES));
            current_start = slot;
            prev = slot;
        }
    }

    rows.push(range(doctor_id, day_of_week, current_start, prev + SLOT_MINUTES));
}

fn range(doctor_id: Uuid, day_of_week: i32, start: u32, end: u32) -> ScheduleRange {
    ScheduleRange {
        doctor_id,
        day_of_week,
        start_time: format_hhmm(start),
        end_time: format_hhmm(end),
        is_available: true,
    }
}

/// Rebuild the weekly selection from persisted ranges.
///
/// Every day starts at the default window with nothing selected. Each
/// available row widens its day's window to encompass the row, then marks
/// every 30-minute step in `[start, end)`. Unavailable rows and rows with an
/// out-of-range day are skipped.
pub fn decompress(rows: &[ScheduleRange]) -> WeeklySchedule {
    let mut week = WeeklySchedule::default();

    for row in rows {
        if !row.is_available {
            continue;
        }

        let Some(day) = week.day_mut(row.day_of_week) else {
            debug!("Skipping schedule row with day_of_week {}", row.day_of_week);
            continue;
        };

        let (Ok(start), Ok(end)) = (row.start_minutes(), row.end_minutes()) else {
            debug!("Skipping schedule row with unparseable times {} - {}", row.start_time, row.end_time);
            continue;
        };

        if start < day.open {
            day.open = start;
        }
        if end > day.close {
            day.close = end;
        }

        let mut minute = start;
        while minute < end {
            day.selected.insert(minute);
            minute += SLOT_MINUTES;
        }
    }

    week
}
