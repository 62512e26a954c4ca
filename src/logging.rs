//! Opt-in file logging.

use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with optional file output.
///
/// Logging stays off unless `SHEETBRIDGE_LOG` names a file path: this
/// crate runs inside the host's UI process and must not write to its
/// stdio. The process id is appended to the path so two worlds on one
/// machine do not fight over a log file. Filtering follows `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("SHEETBRIDGE_LOG") else {
        return;
    };

    let unique_path = format!("{}.{}", log_path, std::process::id());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
}
