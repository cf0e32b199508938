// src/core/checker/mod.rs

// This file acts as the public interface for the `checker` module.
// It declares the two specialized checkers and hosts the orchestrator.
pub mod headers_checker;
pub mod tls_checker;

use tracing::info;

use self::headers_checker::run_headers_check;
use self::tls_checker::run_tls_check;
use crate::core::models::Report;

/// Runs both checks against a domain and assembles the report.
///
/// The two checks are independent and share no state, so they execute
/// concurrently via `tokio::join!`. The report order is fixed regardless
/// of completion order: the TLS finding first, then one header finding
/// per policy entry (or the single request-failure finding in its place).
///
/// This function cannot fail: both checkers convert every error into a
/// failure finding at their own boundary.
///
/// # Arguments
///
/// * `domain` - The domain or host to be checked (e.g., "example.com").
///
/// # Returns
///
/// A `Report` holding the ordered findings for this domain.
pub async fn run_check(domain: &str) -> Report {
    info!(target = domain, "Starting domain check.");

    let (tls_finding, header_findings) =
        tokio::join!(run_tls_check(domain), run_headers_check(domain));

    let mut findings = Vec::with_capacity(1 + header_findings.len());
    findings.push(tls_finding);
    findings.extend(header_findings);

    info!(findings = findings.len(), "Domain check finished.");
    Report {
        domain: domain.to_string(),
        findings,
    }
}
