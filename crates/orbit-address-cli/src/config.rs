use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Settings read from the optional `--config` TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
    /// Whether to colorize text output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = CliConfig::default();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(c.color);
    }

    #[test]
    fn load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\ncolor = false").unwrap();
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.format, OutputFormat::Json);
        assert!(!c.color);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        let c = CliConfig::load(file.path()).unwrap();
        assert_eq!(c.format, OutputFormat::Text);
        assert!(!c.color);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"yaml\"").unwrap();
        assert!(CliConfig::load(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
