//! The `scorecast init` command.

use std::path::Path;

use anyhow::Result;

use scorecast_model::{sample_model, save_artifact, DEFAULT_MODEL_PATH};

pub fn execute() -> Result<()> {
    if Path::new("scorecast.toml").exists() {
        println!("scorecast.toml already exists, skipping.");
    } else {
        std::fs::write("scorecast.toml", SAMPLE_CONFIG)?;
        println!("Created scorecast.toml");
    }

    let model_path = Path::new(DEFAULT_MODEL_PATH);
    if model_path.exists() {
        println!("{DEFAULT_MODEL_PATH} already exists, skipping.");
    } else {
        save_artifact(&sample_model(), model_path)?;
        println!("Created {DEFAULT_MODEL_PATH}");
    }

    println!("\nNext steps:");
    println!("  1. Replace {DEFAULT_MODEL_PATH} with your exported model");
    println!("  2. Run: scorecast schema");
    println!("  3. Run: scorecast predict --set study_hours_per_week=12 --set attendance_pct=90");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorecast configuration

model_path = "student_exam_score_prediction.json"
default_format = "text"
output_dir = "./scorecast-results"
"#;
