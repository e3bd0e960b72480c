//! Host-facing build model.
//!
//! The host build tool owns all of these values; this crate only reads them.
//! Serialization uses the camelCase names that the built-in templates bind
//! to (`project.artifactId`, `project.build.finalName`, ...), so a host can
//! also hand the module description over as JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Declared packaging of a module.
///
/// Only `swc` (library) and `swf` (application) modules get descriptors
/// generated; every other packaging is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packaging {
    /// Flex library, packaged as a `.swc`.
    Swc,
    /// Flex application, packaged as a `.swf`.
    Swf,
    /// Any other packaging (`pom`, `jar`, ...); not handled here.
    Other(String),
}

impl Packaging {
    /// The packaging string as declared by the host.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Swc => "swc",
            Self::Swf => "swf",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for Packaging {
    fn from(kind: &str) -> Self {
        match kind {
            "swc" => Self::Swc,
            "swf" => Self::Swf,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Packaging {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Packaging {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = String::deserialize(deserializer)?;
        Ok(Self::from(kind.as_str()))
    }
}

/// A module participating in the build.
///
/// For the module being generated this carries the full metadata; for the
/// other session modules only the identity triple and `basedir` are
/// consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: Packaging,
    /// Absolute path to the module base directory.
    pub basedir: PathBuf,
    /// Declared resource directories, in declaration order.
    #[serde(default)]
    pub resources: Vec<ResourceDir>,
    /// Compile source roots, in declaration order.
    #[serde(default)]
    pub compile_source_roots: Vec<String>,
    pub build: BuildInfo,
}

impl Project {
    /// The (group, artifact, version) identity of this module.
    #[must_use]
    pub fn id(&self) -> ModuleId {
        ModuleId::from(self)
    }
}

/// A declared resource entry; only the directory is relevant here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDir {
    pub directory: String,
}

/// Build section of a module: output directory and final artifact name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub directory: PathBuf,
    pub final_name: String,
}

/// A compile dependency as resolved by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArtifact {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// Backing file, present when the artifact was resolved from a
    /// repository rather than from a module in the current session.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Exact module identity: group id, artifact id and version.
///
/// Equality is case-sensitive string equality on all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ModuleId {
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl From<&Project> for ModuleId {
    fn from(project: &Project) -> Self {
        Self::new(&project.group_id, &project.artifact_id, &project.version)
    }
}

impl From<&ResolvedArtifact> for ModuleId {
    fn from(artifact: &ResolvedArtifact) -> Self {
        Self::new(&artifact.group_id, &artifact.artifact_id, &artifact.version)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            group_id: "com.example".to_string(),
            artifact_id: "ui-components".to_string(),
            version: "1.2.0".to_string(),
            packaging: Packaging::Swc,
            basedir: PathBuf::from("/work/ui-components"),
            resources: vec![ResourceDir {
                directory: "/work/ui-components/src/main/resources".to_string(),
            }],
            compile_source_roots: vec!["/work/ui-components/src/main/flex".to_string()],
            build: BuildInfo {
                directory: PathBuf::from("/work/ui-components/target"),
                final_name: "ui-components-1.2.0".to_string(),
            },
        }
    }

    #[test]
    fn packaging_round_trips_through_strings() {
        assert_eq!(Packaging::from("swc"), Packaging::Swc);
        assert_eq!(Packaging::from("swf"), Packaging::Swf);
        assert_eq!(Packaging::from("pom"), Packaging::Other("pom".to_string()));
        assert_eq!(Packaging::from("pom").as_str(), "pom");
    }

    #[test]
    fn packaging_serializes_as_plain_string() {
        let value = serde_json::to_value(Packaging::Swf).unwrap();
        assert_eq!(value, serde_json::json!("swf"));

        let parsed: Packaging = serde_json::from_value(serde_json::json!("swc")).unwrap();
        assert_eq!(parsed, Packaging::Swc);
    }

    #[test]
    fn project_serializes_with_template_field_names() {
        let value = serde_json::to_value(project()).unwrap();

        assert_eq!(value["groupId"], "com.example");
        assert_eq!(value["artifactId"], "ui-components");
        assert_eq!(value["build"]["finalName"], "ui-components-1.2.0");
        assert_eq!(value["compileSourceRoots"][0], "/work/ui-components/src/main/flex");
    }

    #[test]
    fn module_id_matches_on_exact_triple() {
        let p = project();
        let artifact = ResolvedArtifact {
            group_id: "com.example".to_string(),
            artifact_id: "ui-components".to_string(),
            version: "1.2.0".to_string(),
            artifact_type: "swc".to_string(),
            file: None,
        };
        assert_eq!(ModuleId::from(&p), ModuleId::from(&artifact));

        let other = ResolvedArtifact {
            version: "1.2.0-SNAPSHOT".to_string(),
            ..artifact
        };
        assert_ne!(ModuleId::from(&p), ModuleId::from(&other));
    }
}
