pub mod form;
pub mod init;
pub mod predict;
pub mod schema;

use std::path::PathBuf;

use anyhow::Result;

use scorecast_core::session::Session;
use scorecast_model::config::{load_config_from, ScorecastConfig};
use scorecast_model::load_model;

/// Load config, then the model once, and build the session around it.
pub fn open_session(
    model_override: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(ScorecastConfig, Session)> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(path) = model_override {
        config.model_path = path;
    }
    tracing::debug!(model = %config.model_path.display(), "opening session");

    let session = Session::new(load_model(&config.model_path));
    Ok((config, session))
}

/// Print the session status lines to stderr.
pub fn print_status(session: &Session) {
    for line in session.status() {
        eprintln!("[{}] {}", line.level, line.message);
    }
}
