use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::ArrivalRecord;

const LINE_NAMES: [&str; 6] = ["SL7", " SL7", "SL7 ", "407", "410", "sl7"];
const BAD_TIMESTAMPS: [&str; 3] = ["", "soon", "19/10/2026 08:00"];

/// Seeded mix of arrivals across several lines, with some padded line names
/// and some unusable timestamps.
pub fn generate_records(seed: u64, count: usize) -> Vec<ArrivalRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base = Utc::now();

    (0..count)
        .map(|i| {
            let line = LINE_NAMES.choose(&mut rng).copied().unwrap_or("SL7");
            let vehicle = format!("V{i:03}");
            let arrival = if rng.gen_bool(0.1) {
                BAD_TIMESTAMPS.choose(&mut rng).copied().unwrap_or("").to_string()
            } else {
                iso_z(base + Duration::seconds(rng.gen_range(-600..3600)))
            };
            ArrivalRecord::new(line, &vehicle, &arrival)
        })
        .collect()
}

/// TfL-style `YYYY-MM-DDTHH:MM:SSZ`.
pub fn iso_z(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
