//! scorecast configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Model artifact looked up when nothing else is configured.
pub const DEFAULT_MODEL_PATH: &str = "student_exam_score_prediction.json";

/// Top-level scorecast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecastConfig {
    /// Path of the model artifact.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Output format for `predict`: text, json or html.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Directory for saved prediction reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_PATH)
}
fn default_format() -> String {
    "text".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./scorecast-results")
}

impl Default for ScorecastConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            default_format: default_format(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied as-is and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `scorecast.toml` in the current directory
/// 2. `~/.config/scorecast/config.toml`
///
/// Environment variable override: `SCORECAST_MODEL_PATH`.
pub fn load_config() -> Result<ScorecastConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ScorecastConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scorecast.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ScorecastConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ScorecastConfig::default(),
    };

    if let Ok(model_path) = std::env::var("SCORECAST_MODEL_PATH") {
        config.model_path = PathBuf::from(model_path);
    }

    config.model_path = resolve_path(&config.model_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("scorecast"))
}
