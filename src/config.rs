//! Optional TOML file configuration, merged under CLI arguments (CLI wins).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database = \"/var/lib/bandstand/directory.db\"").unwrap();
        writeln!(file, "port = 5050").unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(
            config.database.as_deref(),
            Some("/var/lib/bandstand/directory.db")
        );
        assert_eq!(config.port, Some(5050));
        assert!(config.logging_level.is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(FileConfig::load(Path::new("/no/such/bandstand.toml")).is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number").unwrap();
        assert!(FileConfig::load(file.path()).is_err());
    }
}
