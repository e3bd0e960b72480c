//! Data model construction for descriptor templates.
//!
//! Templates bind to a fixed variable contract:
//!
//! | Variable          | Content                                            |
//! |-------------------|----------------------------------------------------|
//! | `project`         | module metadata (camelCase field names)            |
//! | `dependencies`    | ordered list of dependency path strings            |
//! | `sources`         | ordered set of source directory paths              |
//! | `mainApplication` | default entry file name, `null` when none exists   |
//! | `configXml`       | canonical path of the compiler configuration dump  |

use indexmap::IndexSet;
use serde::Serialize;
use tera::Context as TeraContext;

use crate::config::GeneratorConfig;
use crate::core::error::GeneratorError;
use crate::models::{Project, ResolvedArtifact};
use crate::resolver::{Dependency, SessionIndex, resolve_dependencies};
use crate::sources::{collect_source_paths, find_main_application};
use crate::utils::paths::canonical_or_absolute;

/// The aggregate handed to the template engine.
///
/// Built once per generation run and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct DataModel {
    pub project: Project,
    pub dependencies: Vec<Dependency>,
    /// Order-significant; duplicates collapse to their first occurrence.
    pub sources: IndexSet<String>,
    #[serde(rename = "mainApplication")]
    pub main_application: Option<String>,
    #[serde(rename = "configXml")]
    pub config_xml: String,
}

impl DataModel {
    /// Assembles the data model from the host-supplied inputs.
    ///
    /// Missing source directories and a missing entry point degrade to
    /// empty/absent values; the only failure mode is an inconsistent
    /// dependency list (see [`resolve_dependencies`]).
    pub fn build(
        project: &Project,
        session: &[Project],
        artifacts: &[ResolvedArtifact],
        config: &GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        let index = SessionIndex::new(session);
        let dependencies = resolve_dependencies(artifacts, &index, config)?;
        let sources: IndexSet<String> = collect_source_paths(project).into_iter().collect();
        let main_application = find_main_application(&project.basedir, config);

        let config_file = project
            .build
            .directory
            .join(format!("{}{}", project.build.final_name, config.config_suffix));
        let config_xml = canonical_or_absolute(&config_file).display().to_string();

        tracing::debug!(
            dependencies = dependencies.len(),
            sources = sources.len(),
            main_application = main_application.as_deref().unwrap_or("<none>"),
            "data model assembled"
        );

        Ok(Self {
            project: project.clone(),
            dependencies,
            sources,
            main_application,
            config_xml,
        })
    }

    /// The model as a render context.
    pub fn to_context(&self) -> Result<TeraContext, tera::Error> {
        TeraContext::from_serialize(self)
    }
}
