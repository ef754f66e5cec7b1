//! The `scorecast schema` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecast_core::field::explain;

use super::open_session;

pub fn execute(model: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let (_, session) = open_session(model, config)?;

    for line in session.status() {
        println!("[{}] {}", line.level, line.message);
    }
    println!();

    match session.model_kind() {
        Some(kind) => println!("Model type: {kind}"),
        None => println!("No model loaded"),
    }

    match session.detected_features() {
        Some(_) => println!("Detected feature names:"),
        None => println!("Feature names not detectable. Using defaults:"),
    }
    for name in session.schema().iter() {
        println!("- {name}: {}", explain(name));
    }

    Ok(())
}
