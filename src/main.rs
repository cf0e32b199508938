// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use colored::Colorize;
use url::Url;

use sitecheck::{Report, Status, logging, run_check};

#[derive(Parser, Debug)]
#[command(
    name = "sitecheck",
    version,
    about = "Checks a domain's TLS certificate and HTTP security headers"
)]
struct Cli {
    /// Domain to check, with or without a scheme (e.g. example.com)
    target: String,

    /// Output the report as machine-readable JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let cli = Cli::parse();
    let domain = host_from_input(&cli.target);

    let report = run_check(&domain).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_text(&report);
    }

    Ok(())
}

/// Extracts a host from whatever the user typed.
///
/// Bare domains get a scheme prepended before parsing; input that still
/// does not parse is passed through as-is so the checkers can report the
/// failure themselves.
fn host_from_input(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{}", trimmed)
    } else {
        trimmed.to_string()
    };
    Url::parse(&with_scheme)
        .ok()
        .and_then(|url| url.host_str().map(String::from))
        .unwrap_or_else(|| trimmed.to_string())
}

fn render_text(report: &Report) {
    println!("Results for {}", report.domain);
    for finding in &report.findings {
        let marker = match finding.status {
            Status::Success => "[Success]".green().bold(),
            Status::Failure => "[Failure]".red().bold(),
        };
        println!("  {} {}", marker, finding.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_from_input_strips_scheme_and_path() {
        assert_eq!(host_from_input("https://example.com/login"), "example.com");
    }

    #[test]
    fn host_from_input_accepts_bare_domains() {
        assert_eq!(host_from_input(" example.com "), "example.com");
    }

    #[test]
    fn host_from_input_passes_unparseable_input_through() {
        assert_eq!(host_from_input("not a url"), "not a url");
    }
}
