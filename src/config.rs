//! Configuration management for career tools

use crate::error::{CareerToolsError, Result};
use crate::processing::taxonomy::Taxonomy;
use crate::roles::Location;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub salary: SalaryConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Custom resume taxonomy (TOML). The built-in one is used when unset.
    pub taxonomy_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    pub default_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                taxonomy_path: None,
            },
            salary: SalaryConfig {
                default_location: Location::Sydney.name().to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CareerToolsError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CareerToolsError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-tools")
            .join("config.toml")
    }

    /// The taxonomy the resume analyser should use.
    pub fn resume_taxonomy(&self) -> Result<Taxonomy> {
        match &self.analysis.taxonomy_path {
            Some(path) => Taxonomy::load(path).map_err(|e| {
                CareerToolsError::Configuration(format!(
                    "Failed to load taxonomy '{}': {}",
                    path.display(),
                    e
                ))
            }),
            None => Ok(Taxonomy::resume()),
        }
    }

    pub fn default_location(&self) -> Result<Location> {
        self.salary.default_location.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.salary.default_location = "Perth".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.default_location().unwrap(), Location::Perth);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"pdf\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(CareerToolsError::Configuration(_))
        ));
    }

    #[test]
    fn test_default_uses_builtin_taxonomy() {
        let config = Config::default();
        assert_eq!(config.resume_taxonomy().unwrap(), Taxonomy::resume());
        assert_eq!(config.default_location().unwrap(), Location::Sydney);
    }

    #[test]
    fn test_custom_taxonomy_path() {
        let dir = tempdir().unwrap();
        let taxonomy_path = dir.path().join("taxonomy.toml");
        std::fs::write(
            &taxonomy_path,
            "[[categories]]\nname = \"Langs\"\nweight = 2.0\nkeywords = [\"Rust\", \"Go\"]\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.analysis.taxonomy_path = Some(taxonomy_path);
        let taxonomy = config.resume_taxonomy().unwrap();
        assert_eq!(taxonomy.keyword_count(), 2);

        config.analysis.taxonomy_path = Some(dir.path().join("missing.toml"));
        assert!(config.resume_taxonomy().is_err());
    }

    #[test]
    fn test_unknown_default_location() {
        let mut config = Config::default();
        config.salary.default_location = "Atlantis".to_string();
        assert!(config.default_location().is_err());
    }
}
