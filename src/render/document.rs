use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::constant::{STOP_NAME, STOP_TOWARDS, TARGET_LINE};
use crate::domain::ArrivalRecord;
use crate::render::list_items::generate_list_items;
use crate::selection::select_line;

/// Build the page for the configured line as of now.
pub fn build_html(records: &[ArrivalRecord]) -> String {
    build_html_at(records, Utc::now())
}

/// Build the page as of `now`. The same instant drives both the "Updated"
/// line and every countdown.
pub fn build_html_at(records: &[ArrivalRecord], now: DateTime<Utc>) -> String {
    let selected = select_line(records, TARGET_LINE);
    let list_items = generate_list_items(&selected, now);
    debug!("Rendering page with {} entries", selected.len());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Bus Arrivals</title>
    <style>
    body {{ font-family: sans-serif; background: #ffffff; color: #000000; }}
    h2 {{ margin-bottom: 5px; }}
    p {{ font-size: 12px; margin-top: 0; }}
    table {{ border-collapse: collapse; width: 100%; font-size: 14px; }}
    th, td {{ border: 1px solid #000000; padding: 4px; text-align: left; }}
    th {{ background: #dddddd; }}
    </style>
</head>
<body>
    <p>Arrivals at stop: <code>{stop}</code> towards {towards} for <strong>{line}</strong>…</p>
    <p>Updated: {now}</p>
    <ul>{list_items}</ul>
    <p><small>Refresh the page to see updates.</small></p>
</body>
</html>"#,
        stop = STOP_NAME,
        towards = STOP_TOWARDS,
        line = TARGET_LINE,
        now = now,
        list_items = list_items,
    )
}
