pub mod constant {
    pub const API_URL: &str = "https://api.tfl.gov.uk/StopPoint/490014137W/Arrivals";
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    pub const USER_AGENT: &str = "bus-arrivals/0.1";

    pub const TARGET_LINE: &str = "SL7";
    pub const STOP_NAME: &str = "Wallington Green / Croydon Road";
    pub const STOP_TOWARDS: &str = "Sutton";

    pub const OUTPUT_PATH: &str = "./../index.html";

    pub const PLACEHOLDER_ITEM: &str = "<li>No buses scheduled</li>";
    pub const DEFAULT_LINE_NAME: &str = "N/A";
    pub const DEFAULT_VEHICLE_ID: &str = "Unknown";
}
