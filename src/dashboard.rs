//! Client for the internal dashboard's aggregate counters.
//!
//! `GET {API_URL}/api/v1/dashboard/get` returns `{ "data": [ { ... } ] }`
//! with one record of aggregate counters. Any failure — transport, bad
//! status, malformed body, empty `data` — is absorbed locally: the caller
//! gets a fixed fallback record and the reason is logged, so a dead API
//! never blocks rendering.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Aggregate counters shown on the internal dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_subscriptions: u64,
    pub total_transactions: u64,
    pub total_income: f64,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    #[serde(default)]
    data: Vec<DashboardStats>,
}

/// The fixed record substituted when the dashboard API is unreachable.
pub fn fallback_stats() -> DashboardStats {
    DashboardStats {
        total_users: 12,
        total_subscriptions: 0,
        total_transactions: 0,
        total_income: 0.0,
    }
}

/// Fetch the dashboard counters, substituting the fallback record on any
/// failure. Never returns an error.
pub async fn fetch_dashboard_stats(client: &reqwest::Client, config: &Config) -> DashboardStats {
    match try_fetch(client, config).await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Dashboard fetch failed, using fallback stats: {:#}", e);
            fallback_stats()
        }
    }
}

async fn try_fetch(client: &reqwest::Client, config: &Config) -> Result<DashboardStats> {
    let url = format!("{}/api/v1/dashboard/get", config.api_url);

    with_retry_if(
        &RetryConfig::dashboard(),
        "Dashboard stats fetch",
        || async {
            let response = client
                .get(&url)
                .send()
                .await
                .context("Failed to send dashboard request")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                anyhow::bail!("Dashboard API error ({}): {}", status, body);
            }

            let parsed: DashboardResponse = response
                .json()
                .await
                .context("Failed to parse dashboard response")?;

            parsed
                .data
                .into_iter()
                .next()
                .context("Dashboard response contained no records")
        },
        is_retryable_error,
    )
    .await
}

/// Determine if an error is retryable (5xx errors, 429 rate limit, network errors)
/// Other 4xx client errors should not be retried
fn is_retryable_error(error: &anyhow::Error) -> bool {
    let error_str = error.to_string();

    // Error format: "Dashboard API error (500 Internal Server Error): ..."
    if error_str.contains("Dashboard API error") {
        if let Some(start) = error_str.find('(') {
            if let Some(end) = error_str[start..].find(')') {
                let status_str = &error_str[start + 1..start + end];
                let status_num = status_str.split_whitespace().next().unwrap_or("");
                if let Ok(status) = status_num.parse::<u16>() {
                    return status == 429 || status >= 500;
                }
            }
        }
    }

    // Retry network errors, timeouts, and other transient failures
    true
}
