// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Core Data Models ---

// The outcome classification for a single finding. `Display` renders the
// variant name, which is what both the text and JSON renderings use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Status {
    Success,
    Failure,
}

/// One reported line of a check: an outcome plus a human-readable message.
/// Findings are immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub status: Status,
    pub message: String,
}

impl Finding {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

// --- TLS Check Models ---

/// Certificate metadata extracted after a successful handshake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateInfo {
    pub subject_name: String,
    pub issuer_name: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub days_until_expiry: i64,
}

// --- Main Report ---

/// The ordered findings for one checked domain: the TLS finding first,
/// then one finding per security-header policy entry. Constructed fresh
/// per invocation and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub domain: String,
    pub findings: Vec<Finding>,
}
