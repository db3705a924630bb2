use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Logging configuration. All fields have defaults so the entire `[logging]`
/// section may be omitted from `qj.toml`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level filter (e.g. `"warn"`, `"debug"`).
    pub level: String,
    /// Per-module level overrides, e.g. `{ "qj_core" = "trace" }`.
    pub modules: HashMap<String, String>,
    /// Optional file path for log output. Relative paths are resolved against
    /// the config file's parent directory.
    pub file: Option<PathBuf>,
    /// Output format: `plain` (human-readable) or `json` (structured).
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            modules: HashMap::new(),
            file: None,
            format: LogFormat::Plain,
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive string: global level then `module=level` pairs,
    /// modules sorted for a stable result.
    pub fn directives(&self) -> String {
        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        let mut directives = self.level.clone();
        for (module, level) in modules {
            directives.push(',');
            directives.push_str(module);
            directives.push('=');
            directives.push_str(level);
        }
        directives
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_join_modules_in_order() {
        let mut cfg = LoggingConfig::default();
        cfg.modules.insert("qj_lang".into(), "debug".into());
        cfg.modules.insert("qj_core".into(), "trace".into());
        assert_eq!(cfg.directives(), "warn,qj_core=trace,qj_lang=debug");
    }
}
