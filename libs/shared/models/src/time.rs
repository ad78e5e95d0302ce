use thiserror::Error;

/// Width of one bookable slot, in minutes. The whole platform works on a
/// 30-minute grid; both the schedule editor and the conflict checker assume it.
pub const SLOT_MINUTES: u32 = 30;

#[derive(Error, Debug)]
pub enum TimeParseError {
    #[error("Invalid time value: {0}")]
    Invalid(String),
}

/// Parse a wall-clock time into minutes since midnight, tolerating seconds
/// precision.
///
/// The store returns `HH:MM:SS` for booking times while the editor works in
/// `HH:MM`; all comparisons are defined on the `HH:MM` truncation, so any
/// seconds component is dropped. `24:00` is accepted as an exclusive end
/// bound (a slot starting at 23:30 ends there).
pub fn parse_hhmm(value: &str) -> Result<u32, TimeParseError> {
    let invalid = || TimeParseError::Invalid(value.to_string());

    let mut parts = value.trim().splitn(3, ':');
    let hours: u32 = parts
        .next()
        .and_then(|h| h.parse().ok())
        .ok_or_else(invalid)?;
    let minutes: u32 = parts
        .next()
        .and_then(|m| m.parse().ok())
        .ok_or_else(invalid)?;

    if minutes >= 60 || hours > 24 || (hours == 24 && minutes != 0) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as the `HH:MM` string the editor persists.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
