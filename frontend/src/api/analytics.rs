use crate::analytics::ProviderError;
use crate::api::api_url;
use crate::api::utils::authenticated_get;
use crate::config::ANALYTICS_SNAPSHOT_PATH;
use shared::{AnalyticsSnapshot, AnalyticsSnapshotDto};

pub fn analytics_snapshot_url() -> String {
    api_url(ANALYTICS_SNAPSHOT_PATH)
}

/// Fetches and validates the current analytics snapshot from the backend
pub async fn fetch_analytics_snapshot(url: &str) -> Result<AnalyticsSnapshot, ProviderError> {
    let response = authenticated_get(url)
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Http { status, body });
    }

    let payload = response
        .text()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    Ok(AnalyticsSnapshotDto::parse_snapshot(&payload)?)
}
