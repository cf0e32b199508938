//! Integration tests for the public check API.
//!
//! These run against targets that are guaranteed to fail fast (the
//! reserved `.invalid` TLD, the empty string), so they exercise the
//! total-function and report-shape contracts without touching the real
//! network.

use sitecheck::{SECURITY_HEADERS, Status, run_check};

#[tokio::test]
async fn unresolvable_domain_collapses_to_two_findings() {
    let report = run_check("nonexistent.invalid").await;

    assert_eq!(report.domain, "nonexistent.invalid");
    // One TLS finding plus the single request-failure finding that stands
    // in for the per-header findings.
    assert_eq!(report.findings.len(), 2);
    assert!(report.findings.iter().all(|f| f.status == Status::Failure));
    assert!(report.findings[0].message.starts_with("SSL error:"));
    assert!(report.findings[1].message.starts_with("Request error:"));
}

#[tokio::test]
async fn empty_input_still_yields_a_report() {
    let report = run_check("").await;

    assert!(!report.findings.is_empty());
    assert!(report.findings[0].message.starts_with("SSL error:"));
}

#[tokio::test]
async fn tls_finding_always_comes_first() {
    let report = run_check("definitely-not-registered.invalid").await;

    assert!(report.findings[0].message.starts_with("SSL error:"));
    assert!(report.findings.len() <= 1 + SECURITY_HEADERS.len());
}

#[tokio::test]
async fn findings_carry_their_status_in_serialized_form() {
    let report = run_check("nonexistent.invalid").await;

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["domain"], "nonexistent.invalid");
    assert_eq!(json["findings"][0]["status"], "Failure");
}
