//! Dependency classification and path resolution.
//!
//! The host hands over an already-resolved compile dependency list; this
//! module decides, per dependency, whether it refers to another module of
//! the current build session or to an externally resolved artifact, and
//! computes the on-disk path the generated descriptor should reference:
//!
//! - **In-session**: the artifact's resolved file does not exist yet (the
//!   module has not been built), so the path points at the module's future
//!   build output, `<basedir>/bin/<artifactId>.swc`.
//! - **External**: the backing file the host resolved, as-is.
//!
//! All produced paths are canonicalized and forward-slash normalized.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::core::error::GeneratorError;
use crate::models::{ModuleId, Project, ResolvedArtifact};
use crate::utils::paths::slash_path;

/// Session modules indexed by identity triple.
///
/// Built once per generation run; lookups replace the per-dependency linear
/// scan over the session list. Identity matching is exact, case-sensitive
/// equality on group id, artifact id and version.
pub struct SessionIndex<'a> {
    modules: HashMap<ModuleId, &'a Project>,
}

impl<'a> SessionIndex<'a> {
    /// Indexes the session module list.
    ///
    /// Duplicate identity triples should not occur within one session; if
    /// one does, the first occurrence wins and the duplicate is logged.
    #[must_use]
    pub fn new(session: &'a [Project]) -> Self {
        let mut modules = HashMap::with_capacity(session.len());
        for project in session {
            match modules.entry(project.id()) {
                Entry::Vacant(slot) => {
                    slot.insert(project);
                }
                Entry::Occupied(slot) => {
                    tracing::warn!(id = %slot.key(), "duplicate module identity in session, keeping first");
                }
            }
        }
        Self { modules }
    }

    /// The session module a resolved artifact corresponds to, if any.
    #[must_use]
    pub fn get(&self, artifact: &ResolvedArtifact) -> Option<&'a Project> {
        self.modules.get(&ModuleId::from(artifact)).copied()
    }

    /// True when the artifact identifies a module of the current session.
    #[must_use]
    pub fn contains(&self, artifact: &ResolvedArtifact) -> bool {
        self.get(artifact).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// One compile dependency path, ready for template output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency(String);

impl Dependency {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Filters and resolves the module's compile dependencies.
///
/// Keeps only artifacts of the configured library type whose group id does
/// not contain the reserved prefix, then maps each survivor to its
/// descriptor path. Output order follows input order, one entry per
/// qualifying artifact.
///
/// # Errors
///
/// Returns [`GeneratorError::MissingArtifactFile`] when a qualifying
/// external artifact has no backing file, which indicates an inconsistent
/// dependency list from the host.
pub fn resolve_dependencies(
    artifacts: &[ResolvedArtifact],
    session: &SessionIndex<'_>,
    config: &GeneratorConfig,
) -> Result<Vec<Dependency>, GeneratorError> {
    let mut dependencies = Vec::new();

    for artifact in artifacts {
        if artifact.artifact_type != config.library_artifact_type {
            continue;
        }
        if artifact.group_id.contains(&config.reserved_group_prefix) {
            tracing::debug!(id = %ModuleId::from(artifact), "skipping platform-owned dependency");
            continue;
        }

        let path = match session.get(artifact) {
            Some(module) => {
                let output = module
                    .basedir
                    .join(&config.output_subdir)
                    .join(format!("{}.{}", artifact.artifact_id, config.library_extension));
                tracing::debug!(
                    id = %ModuleId::from(artifact),
                    path = %output.display(),
                    "dependency resolves to in-session module output"
                );
                slash_path(&output)
            }
            None => {
                let file = artifact.file.as_deref().ok_or_else(|| GeneratorError::MissingArtifactFile {
                    id: ModuleId::from(artifact).to_string(),
                })?;
                slash_path(file)
            }
        };

        dependencies.push(Dependency(path));
    }

    tracing::debug!(kept = dependencies.len(), total = artifacts.len(), "dependency resolution complete");
    Ok(dependencies)
}
