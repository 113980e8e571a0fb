use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so stdout only carries rendered output.
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("if_file_exists={}", level.as_str().to_lowercase())));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
