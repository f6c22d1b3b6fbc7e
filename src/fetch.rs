use std::time::Instant;

use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::error::{CitabilityError, Result};

/// Fetch a page's raw markup. One attempt, no retries.
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CitabilityError::Fetch(format!(
            "unsupported URL, expected http:// or https://: {}",
            url
        )));
    }

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
        .map_err(|e| CitabilityError::Fetch(e.to_string()))?;

    info!("Fetching page: {}", url);
    let start = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| describe(e, config))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Non-success status {} for {}", status, url);
        return Err(CitabilityError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let html = response.text().await.map_err(|e| describe(e, config))?;
    info!(
        status = status.as_u16(),
        bytes = html.len(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Fetched {}",
        url
    );
    Ok(html)
}

fn describe(e: reqwest::Error, config: &FetchConfig) -> CitabilityError {
    if e.is_timeout() {
        CitabilityError::Fetch(format!("Timeout after {} seconds", config.timeout_secs))
    } else if e.is_connect() {
        CitabilityError::Fetch(format!("Connection error: {}", e))
    } else {
        CitabilityError::Fetch(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_non_http_urls_without_io() {
        let err = fetch_html("ftp://example.com/page", &FetchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CitabilityError::Fetch(_)));
        assert!(err.to_string().starts_with("Failed to fetch page"));
    }

    #[test]
    fn status_error_message() {
        let err = CitabilityError::Status {
            url: "https://example.com".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch page: HTTP 404 for https://example.com"
        );
    }
}
