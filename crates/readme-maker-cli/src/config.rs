//! Configuration file support for readme-maker CLI
//!
//! Loads settings from a `_readme-maker.toml` configuration file.

use anyhow::{Context, Result};
use readme_maker_core::{BulletMode, TranspileOptions, WriterOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_readme-maker.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// BulletPoints array configuration
    #[serde(skip_serializing_if = "BulletsConfig::is_empty")]
    pub bullets: BulletsConfig,
    /// Code block configuration
    #[serde(skip_serializing_if = "CodeConfig::is_empty")]
    pub code: CodeConfig,
    /// Markdown output configuration
    #[serde(skip_serializing_if = "OutputConfig::is_empty")]
    pub output: OutputConfig,
}

/// BulletPoints array configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct BulletsConfig {
    /// How arrays are read: "legacy" (comma split) or "structural" (bracket aware)
    /// (default: "legacy")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl BulletsConfig {
    fn is_empty(&self) -> bool {
        self.mode.is_none()
    }
}

/// Code block configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct CodeConfig {
    /// Close a code block still open at the end of the input (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_unterminated: Option<bool>,
}

impl CodeConfig {
    fn is_empty(&self) -> bool {
        self.close_unterminated.is_none()
    }
}

/// Markdown output configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Character written before each bullet (default: "*")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_marker: Option<String>,
    /// Spaces of indentation per bullet nesting level (default: 2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<usize>,
}

impl OutputConfig {
    fn is_empty(&self) -> bool {
        self.bullet_marker.is_none() && self.indent_width.is_none()
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `_readme-maker.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        let schema = Self::json_schema();
        serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")
    }

    /// Conversion options described by this configuration
    pub fn transpile_options(&self) -> Result<TranspileOptions> {
        let bullets = match &self.bullets.mode {
            Some(mode) => mode
                .parse::<BulletMode>()
                .context("Invalid [bullets] mode in config")?,
            None => BulletMode::default(),
        };

        Ok(TranspileOptions {
            bullets,
            close_unterminated_code_block: self.code.close_unterminated.unwrap_or(false),
        })
    }

    /// Writer options described by this configuration
    pub fn writer_options(&self) -> Result<WriterOptions> {
        let mut options = WriterOptions::default();

        if let Some(marker) = &self.output.bullet_marker {
            let mut chars = marker.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => options.bullet_marker = c,
                _ => anyhow::bail!(
                    "Invalid [output] bullet_marker {:?} in config: expected a single character",
                    marker
                ),
            }
        }
        if let Some(width) = self.output.indent_width {
            options.indent_width = width;
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.bullets.mode.is_none());
        assert!(config.code.close_unterminated.is_none());
        assert!(config.output.bullet_marker.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [bullets]
            mode = "structural"

            [code]
            close_unterminated = true

            [output]
            bullet_marker = "-"
            indent_width = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.bullets.mode, Some("structural".to_string()));
        assert_eq!(config.code.close_unterminated, Some(true));
        assert_eq!(config.output.bullet_marker, Some("-".to_string()));
        assert_eq!(config.output.indent_width, Some(4));
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [code]
            close_unterminated = true
            "#,
        )
        .unwrap();

        assert_eq!(config.code.close_unterminated, Some(true));
        // Other sections should be default
        assert!(config.bullets.mode.is_none());
        assert!(config.output.indent_width.is_none());
    }

    #[test]
    fn test_default_options() {
        let config = Config::default();
        let transpile = config.transpile_options().unwrap();
        assert_eq!(transpile.bullets, BulletMode::Legacy);
        assert!(!transpile.close_unterminated_code_block);

        let writer = config.writer_options().unwrap();
        assert_eq!(writer.bullet_marker, '*');
        assert_eq!(writer.indent_width, 2);
    }

    #[test]
    fn test_options_from_config() {
        let config: Config = toml::from_str(
            r#"
            [bullets]
            mode = "structural"
            [code]
            close_unterminated = true
            [output]
            bullet_marker = "+"
            indent_width = 3
            "#,
        )
        .unwrap();

        let transpile = config.transpile_options().unwrap();
        assert_eq!(transpile.bullets, BulletMode::Structural);
        assert!(transpile.close_unterminated_code_block);

        let writer = config.writer_options().unwrap();
        assert_eq!(writer.bullet_marker, '+');
        assert_eq!(writer.indent_width, 3);
    }

    #[test]
    fn test_invalid_bullet_mode() {
        let config: Config = toml::from_str("[bullets]\nmode = \"tree\"").unwrap();
        let err = config.transpile_options().unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown bullet mode 'tree'"));
    }

    #[test]
    fn test_invalid_bullet_marker() {
        for marker in ["", "**", " "] {
            let config = Config {
                output: OutputConfig {
                    bullet_marker: Some(marker.to_string()),
                    indent_width: None,
                },
                ..Default::default()
            };
            assert!(config.writer_options().is_err(), "{marker:?}");
        }
    }

    #[test]
    fn test_unknown_key_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[output]\nindent_width = \"wide\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[bullets]\nmode = \"legacy\"\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.bullets.mode, Some("legacy".to_string()));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[bullets\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_json_schema_generation() {
        let schema = Config::json_schema_string().unwrap();
        assert!(schema.contains("\"title\""));
        assert!(schema.contains("BulletsConfig"));
        assert!(schema.contains("close_unterminated"));
    }
}
