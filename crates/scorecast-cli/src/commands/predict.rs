//! The `scorecast predict` command.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use scorecast_core::form::parse_assignment;
use scorecast_report::html::{generate_html, write_html};
use scorecast_report::text::render_text;
use scorecast_report::Outcome;

use super::{open_session, print_status};

/// Read a JSON object of feature values.
fn read_inputs(path: &Path) -> Result<HashMap<String, f64>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inputs from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse inputs: {}", path.display()))
}

pub fn execute(
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    sets: Vec<String>,
    input: Option<PathBuf>,
    format: Option<String>,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let (config, session) = open_session(model, config)?;
    let format = format.unwrap_or_else(|| config.default_format.clone());
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json" | "html"),
        "unknown format '{format}', expected text, json or html"
    );

    // --set values override the input file
    let mut inputs = match &input {
        Some(path) => read_inputs(path)?,
        None => HashMap::new(),
    };
    for raw in &sets {
        let (name, value) = parse_assignment(raw)?;
        inputs.insert(name, value);
    }

    let result = session.submit(&inputs);

    if format == "html" {
        match &output {
            Some(path) => {
                write_html(&session, Outcome::from(&result), path)?;
                eprintln!("HTML result: {}", path.display());
            }
            None => println!("{}", generate_html(&session, Outcome::from(&result))),
        }
    }

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if format != "html" {
                print_status(&session);
            }
            return Err(e.into());
        }
    };

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if let Some(path) = &output {
                report.save_json(path)?;
                eprintln!("Results saved to: {}", path.display());
            }
        }
        "text" => {
            print!("{}", render_text(&session, Outcome::Prediction(&report)));
            if let Some(path) = &output {
                report.save_json(path)?;
                eprintln!("Results saved to: {}", path.display());
            }
        }
        _ => print_status(&session),
    }

    if save {
        let path = config
            .output_dir
            .join(format!("prediction-{}.json", report.id));
        report.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());
    }

    Ok(())
}
