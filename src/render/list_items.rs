use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::config::constant::PLACEHOLDER_ITEM;
use crate::domain::ArrivalRecord;
use crate::utils::{minutes_until, parse_utc_time};

/// Render one arrival as an `<li>`. Field values are interpolated as-is,
/// without HTML escaping.
pub fn generate_list_item(record: &ArrivalRecord, now: DateTime<Utc>) -> String {
    let minutes = match parse_utc_time(&record.expected_arrival) {
        Some(arrival) => minutes_until(arrival, now).to_string(),
        None => "N/A".to_string(),
    };
    format!(
        "<li><strong>{} - ({})</strong> arriving in: {} min</li>",
        record.line_name, record.vehicle_id, minutes
    )
}

/// Newline-joined items, or the placeholder when there is nothing to show.
pub fn generate_list_items(records: &[ArrivalRecord], now: DateTime<Utc>) -> String {
    if records.is_empty() {
        return PLACEHOLDER_ITEM.to_string();
    }
    records
        .iter()
        .map(|record| generate_list_item(record, now))
        .join("\n")
}
