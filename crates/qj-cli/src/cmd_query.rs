use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use qj_config::OutputConfig;
use qj_config::project::{load_json, parse_ndjson, read_source};
use qj_core::{execute, format_compact, format_output, qj_debug, qj_info};
use qj_lang::CompiledQuery;
use serde_json::Value;

/// Run `query` against `file` (stdin when absent) and print the result.
pub fn run(query: &str, file: Option<PathBuf>, output: &OutputConfig) -> Result<()> {
    let compiled = qj_lang::compile(query)?;
    let path = file.unwrap_or_else(|| PathBuf::from("-"));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if output.ndjson {
        let documents = parse_ndjson(&read_source(&path)?)?;
        qj_info!(io, documents = documents.len(), source = %path.display(), "ndjson input loaded");
        query_many(&compiled, &documents, &mut out)
    } else {
        let document = load_json(&path)?;
        let result = execute(&document, &compiled)?;
        write_result(&mut out, result.as_ref(), output.pretty)
    }
}

/// Apply one compiled query to every document, one compact line per result.
pub fn query_many(
    compiled: &CompiledQuery,
    documents: &[Value],
    out: &mut impl Write,
) -> Result<()> {
    for (i, document) in documents.iter().enumerate() {
        let result = execute(document, compiled).with_context(|| format!("document {}", i + 1))?;
        write_result(out, result.as_ref(), false)?;
    }
    Ok(())
}

/// Absent results print nothing.
pub fn write_result(out: &mut impl Write, result: Option<&Value>, pretty: bool) -> Result<()> {
    match result {
        Some(value) => {
            let text = if pretty {
                format_output(value)
            } else {
                format_compact(value)
            };
            writeln!(out, "{text}")?;
        }
        None => qj_debug!(pipe, "query produced no value"),
    }
    Ok(())
}
