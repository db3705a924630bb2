use crate::qj::QjConfig;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Internal validation, called automatically during `QjConfig::from_str` / `load`.
pub(crate) fn validate(config: &QjConfig) -> anyhow::Result<()> {
    if !is_level(&config.logging.level) {
        anyhow::bail!(
            "logging.level must be one of {}, got {:?}",
            LEVELS.join("|"),
            config.logging.level,
        );
    }

    for (module, level) in &config.logging.modules {
        if module.trim().is_empty() {
            anyhow::bail!("logging.modules: empty module name");
        }
        if !is_level(level) {
            anyhow::bail!(
                "logging.modules.{module}: level must be one of {}, got {:?}",
                LEVELS.join("|"),
                level,
            );
        }
    }

    Ok(())
}

fn is_level(level: &str) -> bool {
    LEVELS.contains(&level.to_ascii_lowercase().as_str())
}
