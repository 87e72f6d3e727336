//! Factory configuration via `proxyforge.toml`
//!
//! The file names the registry operator and, optionally, input limits.
//! A default file can be written on first use; edit it and restart to change
//! settings.

use proxyforge_core::{Address, Error, Limits, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "proxyforge.toml";

/// Factory configuration loaded from `proxyforge.toml`.
///
/// # Example
///
/// ```toml
/// operator = "0x1111111111111111111111111111111111111111"
///
/// [limits]
/// max_type_name_bytes = 256
/// max_version_id_bytes = 64
/// max_payload_bytes = 65536
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Identity allowed to mutate the registry
    pub operator: Address,
    /// Input limits
    #[serde(default)]
    pub limits: Limits,
}

impl FactoryConfig {
    /// Config with `operator` and default limits
    pub fn new(operator: Address) -> Self {
        FactoryConfig {
            operator,
            limits: Limits::default(),
        }
    }

    /// Returns the default config file content with comments.
    ///
    /// The operator is left as the zero address, which `validate` rejects,
    /// so a freshly written file must be edited before use.
    pub fn default_toml() -> &'static str {
        r#"# proxyforge configuration
#
# Registry operator: the only identity allowed to register contract types
# and append versions. Must be changed from the zero address.
operator = "0x0000000000000000000000000000000000000000"

# Input limits (all optional).
[limits]
# max_type_name_bytes = 256
# max_version_id_bytes = 64
# max_payload_bytes = 65536
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FactoryConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { message } => {
                Error::config(format!("{} ({})", message, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Check semantic constraints
    pub fn validate(&self) -> Result<()> {
        if self.operator.is_zero() {
            return Err(Error::config("operator must not be the zero address"));
        }
        Ok(())
    }
}
