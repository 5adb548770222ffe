use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "LC_CLASSIFIER_LOG";

/// Install the stderr subscriber; stdout carries the command report.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
