use serde::Deserialize;

/// How query results are written to stdout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print non-string results (two-space indent).
    pub pretty: bool,
    /// Treat input as newline-delimited JSON, one document per line.
    pub ndjson: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            ndjson: false,
        }
    }
}
