use uuid::Uuid;

use schedule_cell::models::{ScheduleRange, WeeklySchedule};
use schedule_cell::services::slots::{compress, decompress};
use shared_models::time::parse_hhmm;

fn minutes(time: &str) -> u32 {
    parse_hhmm(time).unwrap()
}

fn select(week: &mut WeeklySchedule, day: i32, times: &[&str]) {
    let day = week.day_mut(day).unwrap();
    for time in times {
        day.selected.insert(minutes(time));
    }
}

fn range(doctor_id: Uuid, day: i32, start: &str, end: &str) -> ScheduleRange {
    ScheduleRange {
        doctor_id,
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_available: true,
    }
}

#[test]
fn compress_merges_contiguous_slots_and_splits_on_gaps() {
    let doctor_id = Uuid::new_v4();
    let mut week = WeeklySchedule::default();
    select(&mut week, 1, &["08:00", "08:30", "09:00", "10:00"]);

    let rows = compress(doctor_id, &week);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].start_time, "08:00");
    assert_eq!(rows[0].end_time, "09:30");
    assert_eq!(rows[1].start_time, "10:00");
    assert_eq!(rows[1].end_time, "10:30");
    assert!(rows.iter().all(|r| r.day_of_week == 1 && r.is_available));
}

#[test]
fn decompress_reproduces_the_original_selection() {
    let doctor_id = Uuid::new_v4();
    let rows = vec![
        range(doctor_id, 1, "08:00", "09:30"),
        range(doctor_id, 1, "10:00", "10:30"),
    ];

    let week = decompress(&rows);

    let expected: Vec<u32> = ["08:00", "08:30", "09:00", "10:00"]
        .iter()
        .map(|t| minutes(t))
        .collect();
    let selected: Vec<u32> = week.day(1).unwrap().selected.iter().copied().collect();
    assert_eq!(selected, expected);
}

#[test]
fn empty_selection_emits_no_rows() {
    let week = WeeklySchedule::default();
    assert!(compress(Uuid::new_v4(), &week).is_empty());
}

#[test]
fn isolated_slot_becomes_a_thirty_minute_range() {
    let doctor_id = Uuid::new_v4();
    let mut week = WeeklySchedule::default();
    select(&mut week, 3, &["14:00"]);

    let rows = compress(doctor_id, &week);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start_time, "14:00");
    assert_eq!(rows[0].end_time, "14:30");
}

#[test]
fn round_trip_is_lossless() {
    let doctor_id = Uuid::new_v4();
    let mut week = WeeklySchedule::default();
    select(&mut week, 0, &["08:00"]);
    select(&mut week, 2, &["09:00", "09:30", "11:00", "11:30", "12:00", "16:30"]);
    select(&mut week, 6, &["08:30", "10:00", "13:00", "13:30"]);

    let restored = decompress(&compress(doctor_id, &week));

    for (day_of_week, day) in week.iter() {
        assert_eq!(
            restored.day(day_of_week).unwrap().selected,
            day.selected,
            "selection differs on day {}",
            day_of_week
        );
    }
}

#[test]
fn compressed_rows_are_sorted_minimal_and_non_overlapping() {
    let doctor_id = Uuid::new_v4();
    let mut week = WeeklySchedule::default();
    select(&mut week, 4, &["08:00", "09:30", "09:00", "12:00", "12:30", "15:00"]);

    let rows = compress(doctor_id, &week);

    for pair in rows.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(minutes(&prev.start_time) < minutes(&prev.end_time));
        // Sorted, non-overlapping, and never adjacent: adjacent runs would
        // already have been merged into one range.
        assert!(minutes(&next.start_time) > minutes(&prev.end_time));
    }
}

#[test]
fn decompress_widens_the_day_window_to_cover_persisted_rows() {
    let doctor_id = Uuid::new_v4();
    let rows = vec![
        range(doctor_id, 2, "06:00", "07:00"),
        range(doctor_id, 2, "18:00", "19:30"),
    ];

    let week = decompress(&rows);

    let day = week.day(2).unwrap();
    assert_eq!(day.open, minutes("06:00"));
    assert_eq!(day.close, minutes("19:30"));
    // Days without rows keep the default window.
    let untouched = week.day(3).unwrap();
    assert_eq!(untouched.open, minutes("08:00"));
    assert_eq!(untouched.close, minutes("17:00"));
}

#[test]
fn decompress_ignores_unavailable_rows() {
    let doctor_id = Uuid::new_v4();
    let mut unavailable = range(doctor_id, 5, "08:00", "12:00");
    unavailable.is_available = false;

    let week = decompress(&[unavailable]);

    assert!(week.day(5).unwrap().selected.is_empty());
}

#[test]
fn decompress_skips_rows_with_out_of_range_days() {
    let doctor_id = Uuid::new_v4();
    let rows = vec![range(doctor_id, 7, "08:00", "09:00"), range(doctor_id, -1, "08:00", "09:00")];

    let week = decompress(&rows);

    assert!(week.iter().all(|(_, day)| day.selected.is_empty()));
}

#[test]
fn adjacent_input_rows_collapse_into_one_canonical_range() {
    let doctor_id = Uuid::new_v4();
    let rows = vec![
        range(doctor_id, 1, "08:00", "09:00"),
        range(doctor_id, 1, "09:00", "10:00"),
    ];

    let merged = compress(doctor_id, &decompress(&rows));

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start_time, "08:00");
    assert_eq!(merged[0].end_time, "10:00");
}

#[test]
fn late_evening_run_ends_at_midnight_bound() {
    let doctor_id = Uuid::new_v4();
    let mut week = WeeklySchedule::default();
    week.day_mut(6).unwrap().close = minutes("24:00");
    select(&mut week, 6, &["23:00", "23:30"]);

    let rows = compress(doctor_id, &week);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].end_time, "24:00");

    let restored = decompress(&rows);
    assert_eq!(restored.day(6).unwrap().selected, week.day(6).unwrap().selected);
}
