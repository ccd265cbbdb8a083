use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`;
/// without it only warnings are shown, or debug events when verbose.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::default().add_directive(level.into()),
    };

    // A subscriber may already be installed (e.g. by tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
