// src/core/checker/headers_checker.rs

use std::time::Duration;

use reqwest::header::HeaderMap;
use tracing::{debug, error, info};

use crate::core::models::Finding;
use crate::core::policy::SECURITY_HEADERS;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const USER_AGENT: &str = concat!("sitecheck/", env!("CARGO_PKG_VERSION"));

/// Runs the security-header check against the target's HTTPS root.
///
/// This sends a single GET request to `https://<target>/`, then evaluates
/// the response headers against the static policy table.
///
/// # Arguments
/// * `target` - The domain or IP address to check.
///
/// # Returns
/// One finding per policy entry in declared order, or a single failure
/// finding describing the request error when no response was received.
pub async fn run_headers_check(target: &str) -> Vec<Finding> {
    let url = format!("https://{}/", target);
    check_headers_at(&url).await
}

/// Fetches `url` and evaluates the response headers against the policy.
///
/// Any received response is evaluated regardless of its status code; a
/// 404 or 500 still carries the headers the server is configured to send.
pub(crate) async fn check_headers_at(url: &str) -> Vec<Finding> {
    info!(url, "Starting security headers check.");

    // Certificate validity is the TLS check's concern; header presence is
    // reported independently of it, so invalid certificates are tolerated
    // here.
    let client = match reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .danger_accept_invalid_certs(true)
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client for headers check.");
            return vec![Finding::failure(format!("Request error: {}", e))];
        }
    };

    match client.get(url).send().await {
        Ok(response) => {
            info!(status = %response.status(), "Received HTTP response for headers check.");
            evaluate_header_map(response.headers())
        }
        Err(e) => {
            // Without a response there is nothing to evaluate per header,
            // so the whole check collapses to one diagnostic finding.
            error!(url, error = %e, "HTTP request failed for headers check.");
            vec![Finding::failure(format!("Request error: {}", e))]
        }
    }
}

/// Evaluates a response header map against the static policy.
///
/// Header names are matched case-insensitively; `HeaderMap` stores names
/// lowercased and normalizes lookups.
fn evaluate_header_map(headers: &HeaderMap) -> Vec<Finding> {
    SECURITY_HEADERS
        .iter()
        .map(|policy| {
            if headers.contains_key(policy.name) {
                debug!(header = policy.name, "Header present.");
                Finding::success(format!(
                    "{}: Present ({})",
                    policy.name, policy.rationale
                ))
            } else {
                debug!(header = policy.name, "Header missing.");
                Finding::failure(format!(
                    "{}: Missing ({})",
                    policy.name, policy.rationale
                ))
            }
        })
        .collect()
}
