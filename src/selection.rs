use tracing::debug;

use crate::domain::ArrivalRecord;

/// Keep the arrivals for `target_line` and order them by the raw
/// `expectedArrival` string.
///
/// The ordering is lexicographic on purpose. It only matches chronological
/// order while the upstream keeps its fixed-width, zero-padded UTC format.
/// Records with equal strings keep their upstream order.
pub fn select_line(records: &[ArrivalRecord], target_line: &str) -> Vec<ArrivalRecord> {
    let mut selected: Vec<ArrivalRecord> = records
        .iter()
        .filter(|r| r.line_name.trim() == target_line)
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.expected_arrival.cmp(&b.expected_arrival));

    debug!(
        "Selected {} of {} arrivals for line {}",
        selected.len(),
        records.len(),
        target_line
    );
    selected
}
