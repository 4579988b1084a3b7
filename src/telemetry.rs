//! Tracing initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Filtering follows `RUST_LOG` (default `info`). Set `INKSTREAM_LOG`
/// to a file path to write there instead of stderr when the embedding
/// UI owns the terminal.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var("INKSTREAM_LOG") {
        let Ok(file) = std::fs::File::create(&log_path) else {
            eprintln!("Warning: Failed to create log file: {}", log_path);
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry().with(filter).with(file_layer).init();
        return;
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}
