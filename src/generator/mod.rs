//! Descriptor generation driver.
//!
//! Dispatches on the module's packaging kind, builds the data model once,
//! then renders and writes the fixed descriptor set for that kind into the
//! module base directory. Packaging kinds without a descriptor set are a
//! successful no-op: a multi-module session routinely contains `pom`
//! aggregators that must pass through untouched.

use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::core::error::GeneratorError;
use crate::models::{Packaging, Project, ResolvedArtifact};
use crate::templating::builtins;
use crate::templating::context::DataModel;
use crate::templating::engine::{TemplateEngine, TeraEngine};
use crate::utils::fs::atomic_write;

/// Descriptor filenames rendered for a library (`swc`) module.
const SWC_DESCRIPTORS: [&str; 3] = [".actionScriptProperties", ".flexLibProperties", ".project"];

/// Descriptor filenames rendered for an application (`swf`) module.
const SWF_DESCRIPTORS: [&str; 3] = [".actionScriptProperties", ".flexProperties", ".project"];

/// Drives one generation run for one module.
///
/// The engine is a capability parameter so tests can substitute a stub; the
/// production path wires in [`TeraEngine`] via [`generate_project_files`].
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    engine: &'a dyn TemplateEngine,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, engine: &'a dyn TemplateEngine) -> Self {
        Self { config, engine }
    }

    /// Generates the descriptor files for `project`.
    ///
    /// Returns the paths written, in render order. Files are written
    /// directly into the module base directory, overwriting existing
    /// descriptors. There is no rollback: when a later descriptor fails,
    /// files already written in this run stay on disk.
    ///
    /// # Errors
    ///
    /// Fails on a missing template, a render error, a destination write
    /// error, or an inconsistent dependency list.
    pub fn generate(
        &self,
        project: &Project,
        session: &[Project],
        artifacts: &[ResolvedArtifact],
    ) -> Result<Vec<PathBuf>, GeneratorError> {
        let descriptors: &[&str] = match &project.packaging {
            Packaging::Swc => &SWC_DESCRIPTORS,
            Packaging::Swf => &SWF_DESCRIPTORS,
            Packaging::Other(kind) => {
                tracing::debug!(module = %project.id(), packaging = %kind, "packaging has no descriptor set, skipping");
                return Ok(Vec::new());
            }
        };
        let kind = project.packaging.as_str();

        tracing::info!(module = %project.id(), packaging = kind, "generating Flash Builder descriptors");

        let model = DataModel::build(project, session, artifacts, self.config)?;

        let mut written = Vec::with_capacity(descriptors.len());
        for name in descriptors {
            let content = builtins::builtin(kind, name).ok_or_else(|| GeneratorError::TemplateNotFound {
                kind: kind.to_string(),
                name: (*name).to_string(),
            })?;

            let mut rendered = Vec::new();
            self.engine.render(name, content, &model, &mut rendered).map_err(|source| {
                GeneratorError::RenderFailed { name: (*name).to_string(), source }
            })?;

            let destination = project.basedir.join(name);
            atomic_write(&destination, &rendered).map_err(|source| GeneratorError::DescriptorWrite {
                path: destination.clone(),
                source,
            })?;

            tracing::debug!(file = %destination.display(), bytes = rendered.len(), "descriptor written");
            written.push(destination);
        }

        Ok(written)
    }
}

/// One-call entry point for hosts: default configuration, Tera engine.
///
/// # Errors
///
/// Same failure modes as [`Generator::generate`].
pub fn generate_project_files(
    project: &Project,
    session: &[Project],
    artifacts: &[ResolvedArtifact],
) -> Result<Vec<PathBuf>, GeneratorError> {
    let config = GeneratorConfig::default();
    let engine = TeraEngine::new();
    Generator::new(&config, &engine).generate(project, session, artifacts)
}
