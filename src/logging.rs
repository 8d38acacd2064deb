use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging: human-readable console output plus a JSON file log.
///
/// Console output goes to stderr so listings printed by the CLI stay clean
/// on stdout. The file log rotates daily under `logs/`.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "mma_library.log");
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("mma_library=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    // The writer guard must outlive main so buffered logs are flushed
    std::mem::forget(_guard);
}
