use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::constant::{DEFAULT_LINE_NAME, DEFAULT_VEHICLE_ID};

/// One predicted arrival at the monitored stop, as returned by the TfL
/// arrivals endpoint. Only the fields the page needs are kept; missing or
/// `null` ones fall back to their defaults here rather than at each use site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArrivalRecord {
    #[serde(
        rename = "lineName",
        default = "default_line_name",
        deserialize_with = "line_name_or_default"
    )]
    pub line_name: String,
    #[serde(
        rename = "vehicleId",
        default = "default_vehicle_id",
        deserialize_with = "vehicle_id_or_default"
    )]
    pub vehicle_id: String,
    /// Raw ISO-8601 string, empty when absent.
    #[serde(
        rename = "expectedArrival",
        default,
        deserialize_with = "expected_arrival_or_default"
    )]
    pub expected_arrival: String,
}

fn default_line_name() -> String {
    DEFAULT_LINE_NAME.to_string()
}

fn default_vehicle_id() -> String {
    DEFAULT_VEHICLE_ID.to_string()
}

/// Strings pass through, `null` takes the default, and any other JSON value
/// keeps its textual form so one odd record cannot sink the whole payload.
fn lenient_string<'de, D>(deserializer: D, default: fn() -> String) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => default(),
        other => other.to_string(),
    })
}

fn line_name_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient_string(d, default_line_name)
}

fn vehicle_id_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient_string(d, default_vehicle_id)
}

fn expected_arrival_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    lenient_string(d, String::new)
}

impl ArrivalRecord {
    pub fn new(line_name: &str, vehicle_id: &str, expected_arrival: &str) -> Self {
        ArrivalRecord {
            line_name: line_name.to_string(),
            vehicle_id: vehicle_id.to_string(),
            expected_arrival: expected_arrival.to_string(),
        }
    }
}
