use std::path::PathBuf;

use tracing::warn;

const PARLANCE_APPS_CONFIG_ENV_NAME: &str = "PARLANCE_APPS_CONVERSATION_CONFIG_PATH";

/// Get conversation config from input or env PARLANCE_APPS_CONVERSATION_CONFIG_PATH
pub fn get_apps_conversation_config(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(PARLANCE_APPS_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Initializes the tracing subscriber used by the binaries.
///
/// Logs are written to stderr. Spoken lines go to stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
