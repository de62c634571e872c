//! Configuration for the family table.

use std::env;
use std::path::PathBuf;

use crate::error::{FamilyTableError, Result};
use crate::models::date_utils::DateFormatConfig;

/// Environment variable overriding [`FamilyTableConfig::data_dir`]
pub const DATA_DIR_ENV: &str = "FAMILY_TABLE_DATA_DIR";
/// Environment variable overriding [`FamilyTableConfig::partner_separator`]
pub const PARTNER_SEPARATOR_ENV: &str = "FAMILY_TABLE_PARTNER_SEPARATOR";
/// Environment variable overriding [`FamilyTableConfig::log_swaps`]
pub const LOG_SWAPS_ENV: &str = "FAMILY_TABLE_LOG_SWAPS";

/// Configuration for loading and displaying a family table
#[derive(Debug, Clone)]
pub struct FamilyTableConfig {
    /// Date format configuration for wire date strings
    pub date_format_config: DateFormatConfig,
    /// Separator placed between partner names in a table row
    pub partner_separator: String,
    /// Log every parent swap made during canonicalization
    pub log_swaps: bool,
    /// Directory holding `<tree_id>.json` member files
    pub data_dir: Option<PathBuf>,
}

impl Default for FamilyTableConfig {
    fn default() -> Self {
        Self {
            date_format_config: DateFormatConfig::default(),
            partner_separator: ", ".to_string(),
            log_swaps: true,
            data_dir: None,
        }
    }
}

impl FamilyTableConfig {
    /// Build a configuration from the defaults overlaid with environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Overlay values from a key lookup onto this configuration
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            if dir.trim().is_empty() {
                return Err(FamilyTableError::Config(format!("{DATA_DIR_ENV} is empty")));
            }
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(separator) = lookup(PARTNER_SEPARATOR_ENV) {
            self.partner_separator = separator;
        }

        if let Some(flag) = lookup(LOG_SWAPS_ENV) {
            self.log_swaps = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(FamilyTableError::Config(format!(
                        "{LOG_SWAPS_ENV} must be a boolean, got '{other}'"
                    )));
                }
            };
        }

        Ok(self)
    }
}
