use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use qj_config::OutputConfig;
use qj_config::project::{LoadedBlock, load_block};
use qj_core::{execute, qj_info};

use crate::cmd_query::write_result;

pub fn run(file: PathBuf, query: Option<&str>, output: &OutputConfig) -> Result<()> {
    let loaded = load_block(&file)?;
    qj_info!(
        io,
        block = loaded.block.id,
        source = %file.display(),
        "block loaded"
    );
    let stdout = std::io::stdout();
    render(&loaded, query, output.pretty, &mut stdout.lock())
}

/// Print the block header (unless suppressed) followed by the document, or
/// the result of `query` against it.
pub fn render(
    loaded: &LoadedBlock,
    query: Option<&str>,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    if loaded.block.show_header {
        writeln!(out, "{}", loaded.block.header_description())?;
        writeln!(out, "ID: {}", loaded.block.id)?;
    }
    match query {
        Some(q) => {
            let compiled = qj_lang::compile(q)?;
            let result = execute(&loaded.document, &compiled)?;
            write_result(out, result.as_ref(), pretty)
        }
        None => write_result(out, Some(&loaded.document), pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(source: &str, document: serde_json::Value) -> LoadedBlock {
        LoadedBlock {
            block: qj_lang::parse_block(source).unwrap(),
            document,
        }
    }

    fn render_to_string(block: &LoadedBlock, query: Option<&str>) -> String {
        let mut buf = Vec::new();
        render(block, query, false, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_header_then_document() {
        let b = loaded("#qj-id: 4\n{}", json!({"a": 1}));
        assert_eq!(render_to_string(&b, None), "»»» Query JSON «««\nID: 4\n{\"a\":1}\n");
    }

    #[test]
    fn custom_description_and_query() {
        let b = loaded(
            "#qj-id: 7\n#qj-id-desc: Team roster\n",
            json!({"team": [{"name": "Ada", "age": 36}, {"name": "Bo", "age": 12}]}),
        );
        assert_eq!(
            render_to_string(&b, Some("team[age>=18].name")),
            "Team roster\nID: 7\n[\"Ada\"]\n"
        );
    }

    #[test]
    fn suppressed_header() {
        let b = loaded("#qj-id: 1\n#qj-id-ds\n", json!([1, 2]));
        assert_eq!(render_to_string(&b, Some("1")), "2\n");
    }
}
