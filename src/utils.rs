use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// A trailing `Z` is read as `+00:00`. Timestamps without an offset are taken
/// as local time. Returns `None` for empty or unparsable input.
pub fn parse_utc_time(iso_string: &str) -> Option<DateTime<Utc>> {
    if iso_string.is_empty() {
        return None;
    }

    let normalized = match iso_string.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => iso_string.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso_string, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(iso_string, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    // Ambiguous or skipped local times (DST transitions) are rejected.
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole minutes from `now` until `arrival`, rounded half-to-even and never negative.
pub fn minutes_until(arrival: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = arrival - now;
    let seconds = match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    };
    ((seconds / 60.0).round_ties_even() as i64).max(0)
}
