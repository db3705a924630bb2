use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::logging::LoggingConfig;
use crate::output::OutputConfig;
use crate::validate;

/// Contents of `qj.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QjConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl QjConfig {
    /// Read and parse a `qj.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content.parse()
    }
}

impl FromStr for QjConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a validated [`QjConfig`].
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: QjConfig = toml::from_str(toml_str)?;
        validate::validate(&config)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
