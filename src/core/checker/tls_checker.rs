// src/core/checker/tls_checker.rs

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use chrono::{DateTime, Utc};
use native_tls::TlsConnector;
use tokio::task::spawn_blocking;
use tracing::{debug, error, info, warn};
use x509_parser::prelude::*;

use crate::core::models::{CertificateInfo, Finding};

const HTTPS_PORT: u16 = 443;
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Remaining certificate lifetime below which a warning is logged.
const EXPIRY_WARNING_DAYS: i64 = 30;

/// Checks the target's TLS certificate and reports a single finding.
///
/// The handshake uses the platform's default trust policy. Any
/// certificate that policy rejects surfaces as a failure finding carrying
/// the underlying diagnostic text verbatim; the check does not classify
/// which validation rule failed, and it never returns an error to its
/// caller.
pub async fn run_tls_check(domain: &str) -> Finding {
    info!(target = domain, "Starting TLS certificate check.");
    let target = domain.to_string();

    debug!("Spawning blocking task for TLS connection.");
    let probe = spawn_blocking(move || probe_certificate(&target, HTTPS_PORT))
        .await
        .unwrap_or_else(|e| {
            error!(panic = %e, "Blocking TLS probe task panicked!");
            Err(format!("probe task failed: {}", e))
        });

    match probe {
        Ok(cert) => {
            info!(
                subject = %cert.subject_name,
                issuer = %cert.issuer_name,
                days_until_expiry = cert.days_until_expiry,
                "Certificate accepted by the default trust policy."
            );
            if (0..=EXPIRY_WARNING_DAYS).contains(&cert.days_until_expiry) {
                warn!(
                    days_left = cert.days_until_expiry,
                    "Certificate expires soon."
                );
            }
            Finding::success(format!(
                "SSL Certificate is valid for {}",
                cert.subject_name
            ))
        }
        Err(reason) => {
            error!(reason = %reason, "TLS certificate check failed.");
            Finding::failure(format!("SSL error: {}", reason))
        }
    }
}

/// Connects, handshakes and extracts certificate metadata.
///
/// The socket lives only within this function and is closed on every exit
/// path. Resolution, connect and each I/O phase of the handshake are all
/// bounded by `PROBE_TIMEOUT` so the probe cannot block indefinitely.
fn probe_certificate(domain: &str, port: u16) -> Result<CertificateInfo, String> {
    debug!(target = domain, "Resolving target address.");
    let addr = (domain, port)
        .to_socket_addrs()
        .map_err(|e| format!("resolution failed: {}", e))?
        .next()
        .ok_or_else(|| format!("no addresses resolved for {}", domain))?;

    debug!(address = %addr, "Connecting TCP stream.");
    let stream = TcpStream::connect_timeout(&addr, PROBE_TIMEOUT)
        .map_err(|e| format!("connection failed: {}", e))?;
    stream
        .set_read_timeout(Some(PROBE_TIMEOUT))
        .map_err(|e| format!("could not set read timeout: {}", e))?;
    stream
        .set_write_timeout(Some(PROBE_TIMEOUT))
        .map_err(|e| format!("could not set write timeout: {}", e))?;

    debug!(target = domain, "Performing TLS handshake.");
    let connector = TlsConnector::new().map_err(|e| format!("TLS connector error: {}", e))?;
    let stream = connector
        .connect(domain, stream)
        .map_err(|e| format!("TLS handshake failed: {}", e))?;

    let cert = stream
        .peer_certificate()
        .map_err(|e| format!("could not get peer certificate: {}", e))?
        .ok_or_else(|| "server did not present a certificate".to_string())?;

    let der = cert
        .to_der()
        .map_err(|e| format!("could not convert certificate to DER: {}", e))?;
    let (_, x509) =
        parse_x509_certificate(&der).map_err(|e| format!("X.509 parse error: {}", e))?;

    // The subject is expected to carry a common name; a certificate
    // without one is reported as a failure rather than guessed at.
    let subject_name = x509
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(str::to_string)
        .ok_or_else(|| "certificate subject has no common name".to_string())?;

    let validity = x509.validity();
    let not_before = asn1_time_to_chrono_utc(&validity.not_before);
    let not_after = asn1_time_to_chrono_utc(&validity.not_after);
    let days_until_expiry = not_after.signed_duration_since(Utc::now()).num_days();

    Ok(CertificateInfo {
        subject_name,
        issuer_name: x509.issuer().to_string(),
        not_before,
        not_after,
        days_until_expiry,
    })
}

fn asn1_time_to_chrono_utc(time: &ASN1Time) -> DateTime<Utc> {
    DateTime::from_timestamp(time.timestamp(), 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Status;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn probe_reports_resolution_failure() {
        // The .invalid TLD is reserved and never resolves.
        let err = probe_certificate("nonexistent.invalid", HTTPS_PORT).unwrap_err();
        assert!(err.contains("resolution failed"), "diagnostic was: {}", err);
    }

    #[test]
    fn probe_reports_handshake_failure_against_plain_tcp() {
        let listener = TcpListener::bind(("localhost", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            // Accept one connection and close it without speaking TLS.
            let _ = listener.accept();
        });

        let err = probe_certificate("localhost", port).unwrap_err();
        assert!(err.contains("TLS handshake failed"), "diagnostic was: {}", err);
        server.join().unwrap();
    }

    #[tokio::test]
    async fn tls_check_is_total_for_garbage_input() {
        let finding = run_tls_check("").await;
        assert_eq!(finding.status, Status::Failure);
        assert!(finding.message.starts_with("SSL error:"));
    }
}
