//! Configuration file support for bommap.
//!
//! Configuration is loaded from `~/.config/bommap/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/bommap/config.toml
//! exports_dir = "~/bom-exports"
//! header_position = "bottom"
//!
//! # Extra part fields offered for export besides the imported columns
//! additional_fields = ["parent_assembly", "sets", "to_order"]
//!
//! # Also offer the processor diagnostics fields
//! diagnostics_fields = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::import::HeaderPosition;

/// Part fields appended to the imported columns to form the
/// export-available list.
pub const DEFAULT_ADDITIONAL_FIELDS: &[&str] =
    &["parent_assembly", "file_type", "type", "sets", "to_order"];

/// Processor diagnostics fields, offered only when `diagnostics_fields`
/// is enabled.
pub const DIAGNOSTICS_FIELDS: &[&str] = &[
    "parent",
    "child",
    "is_production",
    "is_fastener",
    "is_purchased",
    "is_junk",
    "is_junk_by_flag_keys",
    "is_junk_by_empty_fields",
    "is_junk_by_purchased_part_nesting",
];

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory submissions are written to
    pub exports_dir: Option<PathBuf>,

    /// Extra part fields offered for export besides the imported columns
    pub additional_fields: Option<Vec<String>>,

    /// Also offer the processor diagnostics fields for export
    pub diagnostics_fields: bool,

    /// Default header position when --header-position is not given
    pub header_position: Option<HeaderPosition>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bommap")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        exports_dir: Option<PathBuf>,
        header_position: Option<HeaderPosition>,
    ) -> Self {
        if exports_dir.is_some() {
            self.exports_dir = exports_dir;
        }
        if header_position.is_some() {
            self.header_position = header_position;
        }
        self
    }

    /// Get the exports directory, falling back to environment variable or default.
    pub fn exports_dir(&self) -> PathBuf {
        self.exports_dir
            .clone()
            .or_else(|| std::env::var("BOMMAP_EXPORTS_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".bommap/exports")
            })
    }

    /// Get the header position for the imported file.
    pub fn header_position(&self) -> HeaderPosition {
        self.header_position.unwrap_or_default()
    }

    /// Export-available part fields appended after the imported columns.
    pub fn additional_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self
            .additional_fields
            .clone()
            .unwrap_or_else(|| DEFAULT_ADDITIONAL_FIELDS.iter().map(|s| s.to_string()).collect());

        if self.diagnostics_fields {
            fields.extend(DIAGNOSTICS_FIELDS.iter().map(|s| s.to_string()));
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.exports_dir.is_none());
        assert!(config.additional_fields.is_none());
        assert!(!config.diagnostics_fields);
        assert_eq!(config.header_position(), HeaderPosition::Top);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            exports_dir = "/tmp/exports"
            header_position = "bottom"
            additional_fields = ["sets"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.exports_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(config.header_position(), HeaderPosition::Bottom);
        assert_eq!(config.additional_fields(), vec!["sets".to_string()]);
    }

    #[test]
    fn test_default_additional_fields() {
        let config = Config::default();
        assert_eq!(config.additional_fields().len(), DEFAULT_ADDITIONAL_FIELDS.len());
        assert_eq!(config.additional_fields()[0], "parent_assembly");
    }

    #[test]
    fn test_diagnostics_fields_appended() {
        let config = Config {
            diagnostics_fields: true,
            ..Config::default()
        };
        let fields = config.additional_fields();
        assert_eq!(
            fields.len(),
            DEFAULT_ADDITIONAL_FIELDS.len() + DIAGNOSTICS_FIELDS.len()
        );
        assert!(fields.contains(&"is_junk_by_empty_fields".to_string()));
    }

    #[test]
    fn test_cli_override_wins() {
        let config: Config = toml::from_str(r#"header_position = "bottom""#).unwrap();
        let config = config.with_overrides(None, Some(HeaderPosition::Top));
        assert_eq!(config.header_position(), HeaderPosition::Top);
    }
}
