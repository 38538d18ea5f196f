use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, error, info, trace};

use crate::config::constant::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::domain::ArrivalRecord;

/// Blocking client with the fixed request timeout. No retries are layered on top.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET the arrivals array for the stop. Transport errors, non-2xx statuses and
/// bodies that are not an array of arrival objects all come back as `Err`.
pub fn fetch_arrivals(client: &Client, url: &str) -> Result<Vec<ArrivalRecord>, Box<dyn Error>> {
    trace!("Sending GET request to {}", url);
    let response = client.get(url).send()?.error_for_status()?;
    debug!(
        "Received response: HTTP {} ({} bytes)",
        response.status(),
        response.content_length().unwrap_or(0)
    );

    let records: Vec<ArrivalRecord> = response.json()?;
    info!("Fetched {} arrival predictions", records.len());
    Ok(records)
}

/// Fetch arrivals, treating any failure as "no arrivals".
pub fn get_bus_data(client: &Client, url: &str) -> Vec<ArrivalRecord> {
    match fetch_arrivals(client, url) {
        Ok(records) => records,
        Err(e) => {
            error!(reason = %e, "Error fetching data...");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_yields_no_records() {
        let client = build_client().unwrap();
        // Port 1 on loopback is closed, so the connection is refused straight away.
        let records = get_bus_data(&client, "http://127.0.0.1:1/StopPoint/490014137W/Arrivals");
        assert!(records.is_empty());
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        let client = build_client().unwrap();
        assert!(fetch_arrivals(&client, "http://127.0.0.1:1/").is_err());
    }
}
