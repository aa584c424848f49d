/// Path of the admin analytics snapshot endpoint, relative to the API base.
pub const ANALYTICS_SNAPSHOT_PATH: &str = "/api/admin/analytics/snapshot";

/// How often the dashboard re-fetches the snapshot when no override is set.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs by default: Trunk proxies /api/ in development and the
        // reverse proxy does the same in production. API_BASE_URL at build time
        // points the bundle at a different host.
        option_env!("API_BASE_URL").unwrap_or("").to_string()
    }

    pub fn analytics_poll_interval_ms() -> u32 {
        parse_poll_interval(option_env!("ANALYTICS_POLL_INTERVAL_MS"))
    }
}

fn parse_poll_interval(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
}
