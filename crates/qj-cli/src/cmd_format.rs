use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use qj_config::project::load_json;
use serde_json::Value;

pub fn run(template: &str, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| PathBuf::from("-"));
    let document = load_json(&path)?;
    let stdout = std::io::stdout();
    render(template, &document, &mut stdout.lock())
}

/// Fill `{key}` placeholders in `template` from the top-level keys of
/// `document`.
pub fn render(template: &str, document: &Value, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", qj_core::format_string(template, document))?;
    Ok(())
}
