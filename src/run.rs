use std::error::Error;

use dotenv::dotenv;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::{build_client, get_bus_data};
use crate::config::constant::{API_URL, OUTPUT_PATH};
use crate::output::write_html;
use crate::render::build_html;

/// Load `.env` and install the tracing subscriber. `RUST_LOG` picks the
/// filter, defaulting to `info`.
fn init_tracing_and_env() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when run() is called more than
    // once in the same process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

/// Fetch, render and write the arrivals page once.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();

    let run_span = span!(Level::INFO, "regenerate", url = API_URL);
    let _guard = run_span.enter();

    let client = build_client()?;
    let records = get_bus_data(&client, API_URL);
    let html = build_html(&records);
    write_html(OUTPUT_PATH, &html)?;

    info!("Arrivals page regenerated");
    Ok(())
}
