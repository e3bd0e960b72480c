//! Generator configuration.
//!
//! Every knob defaults to the Flex conventions, so most hosts never touch
//! this and `GeneratorConfig::default()` is the common case. A host that
//! ships a custom SDK layout can override individual fields from a TOML
//! file:
//!
//! ```toml
//! reserved-group-prefix = "com.example.sdk"
//! main-source-folder = "src/main/as3"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::GeneratorError;

/// Settings controlling dependency classification, entry-point detection and
/// generated path layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Artifact type surfaced to the generated descriptor; everything else
    /// is filtered out.
    pub library_artifact_type: String,
    /// Group-id substring marking platform-owned dependencies, which are
    /// never surfaced (the SDK provides them to Flash Builder itself).
    pub reserved_group_prefix: String,
    /// Folder scanned for the default application entry file, relative to
    /// the module base directory.
    pub main_source_folder: String,
    /// Subdirectory of an in-session module's base directory where its
    /// library lands once built.
    pub output_subdir: String,
    /// File extension of built libraries.
    pub library_extension: String,
    /// Suffix appended to the final artifact name to locate the compiler
    /// configuration dump.
    pub config_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            library_artifact_type: "swc".to_string(),
            reserved_group_prefix: "org.apache.flex".to_string(),
            main_source_folder: "src/main/flex".to_string(),
            output_subdir: "bin".to_string(),
            library_extension: "swc".to_string(),
            config_suffix: "-configs.xml".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults, so partial files are
    /// fine.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Config`] if the file cannot be read and
    /// [`GeneratorError::Toml`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|err| GeneratorError::Config {
            message: format!("cannot read {}: {err}", path.display()),
        })?;

        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded generator configuration");
        Ok(config)
    }
}
