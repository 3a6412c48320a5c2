use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, Method};

use super::location::{parse_locations, Location};
use crate::error::Result;

const USER_AGENT: &str = "Mozilla/5.0";

/// Loads the locations list from a file path or an http(s) URL.
pub async fn load_locations(source: &str) -> Result<Vec<Location>> {
    let body = if is_remote(source) {
        fetch(source).await?
    } else {
        tracing::debug!("Reading locations from {}", source);
        tokio::fs::read_to_string(source).await?
    };
    let locations = parse_locations(&body)?;
    tracing::info!("Loaded {} locations from {}", locations.len(), source);
    Ok(locations)
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch(url: &str) -> Result<String> {
    let url = cache_busted(url, unix_millis());
    tracing::debug!("Fetching locations from {}", url);
    let response = Client::new()
        .request(Method::GET, &url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.text().await?)
}

/// Appends `v=<millis>` so intermediate caches never serve a stale list.
fn cache_busted(url: &str, millis: u128) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, separator, millis)
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
