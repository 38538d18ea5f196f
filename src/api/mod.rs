pub mod tfl;

pub use tfl::{build_client, fetch_arrivals, get_bus_data};
