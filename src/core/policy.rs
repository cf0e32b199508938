// src/core/policy.rs

//! The static security-header policy.
//!
//! This module holds the read-only table of recommended HTTP security
//! response headers, each paired with a human-readable rationale. Keeping
//! the table data-driven means the checker logic never has to change when
//! the recommendation set does.

/// A single security-header recommendation: the canonical header name and
/// the reason a site should send it.
pub struct HeaderPolicy {
    /// Canonical header name, matched case-insensitively against responses.
    pub name: &'static str,
    /// Short explanation of what the header protects against.
    pub rationale: &'static str,
}

/// The fixed, ordered security-header policy.
///
/// Declaration order is significant: it is the order header findings
/// appear in every report. The table is defined once for the lifetime of
/// the process and is never mutated.
pub static SECURITY_HEADERS: &[HeaderPolicy] = &[
    HeaderPolicy {
        name: "Strict-Transport-Security",
        rationale: "Helps enforce HTTPS connections.",
    },
    HeaderPolicy {
        name: "Content-Security-Policy",
        rationale: "Mitigates XSS attacks.",
    },
    HeaderPolicy {
        name: "X-Content-Type-Options",
        rationale: "Prevents MIME-type sniffing.",
    },
    HeaderPolicy {
        name: "X-Frame-Options",
        rationale: "Protects against clickjacking.",
    },
    HeaderPolicy {
        name: "X-XSS-Protection",
        rationale: "Provides basic XSS protection.",
    },
];

/// Retrieves the rationale for a header name, case-insensitively.
///
/// # Arguments
///
/// * `name` - The header name to look up.
///
/// # Returns
///
/// An `Option` containing the rationale if the header is part of the
/// policy, or `None` if it is not.
pub fn rationale_for(name: &str) -> Option<&'static str> {
    SECURITY_HEADERS
        .iter()
        .find(|policy| policy.name.eq_ignore_ascii_case(name))
        .map(|policy| policy.rationale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_order_is_fixed() {
        let names: Vec<&str> = SECURITY_HEADERS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Strict-Transport-Security",
                "Content-Security-Policy",
                "X-Content-Type-Options",
                "X-Frame-Options",
                "X-XSS-Protection",
            ]
        );
    }

    #[test]
    fn rationale_lookup_ignores_case() {
        assert_eq!(
            rationale_for("strict-transport-security"),
            Some("Helps enforce HTTPS connections.")
        );
        assert_eq!(rationale_for("X-Powered-By"), None);
    }
}
