//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `shadow-gen.toml` files
//! and merging with command-line arguments.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shadow_gen::NullabilityOverrides;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "shadow-gen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema document location.
    pub schema: SchemaConfig,

    /// Output configuration.
    pub output: OutputConfig,

    /// Generation scope.
    pub generation: GenerationConfig,

    /// Nullability override table.
    pub overrides: OverridesConfig,
}

/// Schema document location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Directory scanned for `.json` schema documents.
    pub dir: PathBuf,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory generated modules are written under. Namespace
    /// segments become subdirectories.
    pub dir: PathBuf,
}

/// Generation scope.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Namespaces to generate for. Empty means every namespace found in the
    /// loaded schema documents.
    pub namespaces: Vec<String>,
}

/// Nullability override table configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverridesConfig {
    /// Start from the built-in table instead of an empty one.
    pub builtin: bool,

    /// Table name when building a custom table.
    pub name: String,

    /// Table version when building a custom table.
    pub version: u32,

    /// Additional forced-non-null entries.
    pub force_non_null: Vec<OverrideEntry>,
}

/// One forced-non-null entry.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideEntry {
    pub class: String,
    pub field: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./schema"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./src"),
        }
    }
}

impl Default for OverridesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            name: "custom".to_string(),
            version: 1,
            force_non_null: Vec::new(),
        }
    }
}

impl OverridesConfig {
    /// Build the override table the generator will run with.
    pub fn to_overrides(&self) -> NullabilityOverrides {
        let mut table = if self.builtin {
            NullabilityOverrides::builtin()
        } else {
            NullabilityOverrides::empty(self.name.clone(), self.version)
        };
        for entry in &self.force_non_null {
            table.force_non_null(entry.class.clone(), entry.field.clone());
        }
        table
    }
}

/// Command-line argument overrides for configuration.
#[derive(Debug, Default, Clone)]
pub struct CliArgs {
    pub schema: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub namespaces: Vec<String>,
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref schema) = args.schema {
            config.schema.dir = schema.clone();
        }

        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if !args.namespaces.is_empty() {
            config.generation.namespaces = args.namespaces.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# shadow-gen configuration file

[schema]
# Directory scanned for .json schema documents
dir = "./schema"

[output]
# Root directory generated modules are written under.
# Namespace segments become subdirectories (flex::component -> flex/component).
dir = "./src"

[generation]
# Namespaces to generate for. Empty means every namespace in the schemas.
namespaces = []

[overrides]
# Start from the built-in forced-non-null table
builtin = true

# Additional forced-non-null entries:
# [[overrides.force_non_null]]
# class = "Video"
# field = "url"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_content_parses() {
        let config: Config = toml::from_str(ConfigManager::default_config_content()).unwrap();
        assert_eq!(config.schema.dir, PathBuf::from("./schema"));
        assert!(config.overrides.builtin);
        assert!(config.generation.namespaces.is_empty());
    }

    #[test]
    fn cli_args_take_precedence() {
        let config = Config::default();
        let merged = ConfigManager::merge_cli_args(
            config,
            &CliArgs {
                output: Some(PathBuf::from("./out")),
                namespaces: vec!["flex::component".to_string()],
                ..Default::default()
            },
        );
        assert_eq!(merged.output.dir, PathBuf::from("./out"));
        assert_eq!(merged.generation.namespaces, vec!["flex::component"]);
        assert_eq!(merged.schema.dir, PathBuf::from("./schema"));
    }

    #[test]
    fn custom_override_table_from_toml() {
        let toml = r#"
            [overrides]
            builtin = false
            name = "strict"
            version = 3

            [[overrides.force_non_null]]
            class = "Text"
            field = "text"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let table = config.overrides.to_overrides();
        assert_eq!(table.name, "strict");
        assert_eq!(table.version, 3);
        assert!(table.contains("Text", "text"));
        assert!(!table.contains("Video", "url"));
    }

    #[test]
    fn builtin_plus_extra_entries() {
        let toml = r#"
            [[overrides.force_non_null]]
            class = "Text"
            field = "text"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let table = config.overrides.to_overrides();
        assert!(table.contains("Video", "url"));
        assert!(table.contains("Text", "text"));
    }
}
