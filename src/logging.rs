// src/logging.rs

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes stderr logging using the tracing subscriber.
///
/// The filter honors `RUST_LOG` and defaults to `info` for this crate, so
/// the report on stdout stays clean unless more detail is requested.
pub fn initialize_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stderr_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
