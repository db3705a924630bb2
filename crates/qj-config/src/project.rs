use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use qj_lang::Block;
use serde_json::Value;

/// Read a whole input source; `-` means stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Load and parse a single JSON document.
pub fn load_json(path: &Path) -> Result<Value> {
    let source = read_source(path)?;
    serde_json::from_str(&source).with_context(|| format!("parsing JSON from {}", path.display()))
}

/// Parse newline-delimited JSON; blank lines are skipped. Errors carry the
/// 1-based line number.
pub fn parse_ndjson(source: &str) -> Result<Vec<Value>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("ndjson line {}", i + 1))
        })
        .collect()
}

/// A block together with the document it carries or references.
#[derive(Debug)]
pub struct LoadedBlock {
    pub block: Block,
    pub document: Value,
}

/// Load a `qjson` block file. `#qj-file` paths are resolved against the block
/// file's directory; otherwise the block body is parsed as JSON.
pub fn load_block(path: &Path) -> Result<LoadedBlock> {
    let source = read_source(path)?;
    let block = qj_lang::parse_block(&source)
        .map_err(|e| anyhow::anyhow!("block {}: {e}", path.display()))?;

    let document = match &block.file {
        Some(file) => {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            load_json(&base.join(file))?
        }
        None => serde_json::from_str(&block.body)
            .with_context(|| format!("parsing block body of {}", path.display()))?,
    };

    Ok(LoadedBlock { block, document })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(load_json(&path).unwrap(), json!({"a": [1, 2]}));
    }

    #[test]
    fn json_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{nope").unwrap();
        let err = load_json(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn ndjson_skips_blank_lines() {
        let docs = parse_ndjson("{\"a\":1}\n\n  \n{\"a\":2}\n").unwrap();
        assert_eq!(docs, vec![json!({"a": 1}), json!({"a": 2})]);
    }

    #[test]
    fn ndjson_error_has_line_number() {
        let err = parse_ndjson("{\"a\":1}\n{oops}\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn block_with_inline_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.qjson");
        std::fs::write(&path, "#qj-id: 3\n{\"members\": [\"Ada\"]}\n").unwrap();
        let loaded = load_block(&path).unwrap();
        assert_eq!(loaded.block.id, 3);
        assert_eq!(loaded.document, json!({"members": ["Ada"]}));
    }

    #[test]
    fn block_with_relative_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/people.json"), "[1, 2, 3]").unwrap();
        let path = dir.path().join("people.qjson");
        std::fs::write(&path, "#qj-id: 9\n#qj-file: data/people.json\n").unwrap();
        let loaded = load_block(&path).unwrap();
        assert_eq!(loaded.block.file.as_deref(), Some("data/people.json"));
        assert_eq!(loaded.document, json!([1, 2, 3]));
    }

    #[test]
    fn block_without_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.qjson");
        std::fs::write(&path, "{}").unwrap();
        let err = load_block(&path).unwrap_err();
        assert!(err.to_string().contains("#qj-id"), "{err}");
    }
}
