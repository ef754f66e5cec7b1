//! The `scorecast form` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use scorecast_report::html::write_html;
use scorecast_report::Outcome;

use super::{open_session, print_status};

pub fn execute(
    model: Option<PathBuf>,
    config: Option<PathBuf>,
    html: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (_, session) = open_session(model, config)?;
    print_status(&session);

    let form = session.form();
    if json {
        println!("{}", serde_json::to_string_pretty(form)?);
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Feature", "Kind", "Default", "Bounds", "Step"]);
        for field in &form.fields {
            table.add_row(vec![
                Cell::new(&field.name),
                Cell::new(field.spec.kind),
                Cell::new(field.spec.format_value(field.spec.default)),
                Cell::new(field.spec.describe_bounds()),
                Cell::new(field.spec.step),
            ]);
        }
        println!("{table}");
    }

    if let Some(path) = html {
        write_html(&session, Outcome::Pending, &path)?;
        eprintln!("HTML form: {}", path.display());
    }

    Ok(())
}
