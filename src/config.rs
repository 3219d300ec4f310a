use std::time::Duration;

pub const INDEX_URL: &str = "https://support.google.com/docs/table/25273?hl=en";
pub const ORIGIN: &str = "https://support.google.com";
pub const DEFAULT_OUTPUT: &str = "function-data.json";

/// Max detail pages fetched at once.
pub const DETAIL_CONCURRENCY: usize = 5;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const USER_AGENT: &str = concat!("sheets_functions/", env!("CARGO_PKG_VERSION"));
