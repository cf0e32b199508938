//! sitecheck library: domain security hygiene checks
//!
//! Two independent checkers feed one report: a TLS certificate probe
//! against port 443 and a security-header presence check against the
//! domain's HTTPS root. Both are total functions over arbitrary string
//! input; malformed or unreachable targets surface as failure findings,
//! never as errors.
//!
//! # Example
//!
//! ```no_run
//! use sitecheck::run_check;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let report = run_check("example.com").await;
//! for finding in &report.findings {
//!     println!("[{}] {}", finding.status, finding.message);
//! }
//! # }
//! ```
//!
//! This library requires a Tokio runtime; call it from an async context.

pub mod core;
pub mod logging;

// Re-export public API
pub use crate::core::checker::headers_checker::run_headers_check;
pub use crate::core::checker::run_check;
pub use crate::core::checker::tls_checker::run_tls_check;
pub use crate::core::models::{CertificateInfo, Finding, Report, Status};
pub use crate::core::policy::{HeaderPolicy, SECURITY_HEADERS, rationale_for};
