//! flashbuilder-gen - Flash Builder descriptor generation for Flex modules
//!
//! Generates the Adobe Flash Builder project descriptors (`.project`,
//! `.actionScriptProperties` and `.flexLibProperties` / `.flexProperties`)
//! for a Flex module inside a multi-module build. The host build tool hands
//! over the module metadata, the list of modules in the current session and
//! the already-resolved compile dependency list; this crate classifies and
//! resolves them into a data model and renders it through a fixed set of
//! Tera templates, written straight into the module base directory.
//!
//! This is a library invoked from a build lifecycle, not a standalone tool:
//! there is no CLI and no transitive dependency resolution here.
//!
//! # Key behaviors
//!
//! - **In-session dependencies**: a dependency whose (group, artifact,
//!   version) triple matches a module of the current session is referenced
//!   at its future build output (`<basedir>/bin/<artifactId>.swc`) instead
//!   of its resolved artifact file, which does not exist yet.
//! - **Platform filtering**: SDK-owned dependencies (`org.apache.flex`
//!   groups) never appear in generated descriptors; Flash Builder gets them
//!   from its own SDK installation.
//! - **Portable paths**: every dependency path is canonicalized and
//!   forward-slash normalized, so descriptors are identical across
//!   platforms.
//! - **Packaging dispatch**: `swc` modules get the library descriptor set,
//!   `swf` modules the application set, anything else is a successful
//!   no-op.
//!
//! # Core Modules
//!
//! - [`config`] - Generator settings with Flex-convention defaults
//! - [`core`] - Error types and user-facing error contexts
//! - [`models`] - Host-facing build model (module, artifacts, identity)
//! - [`resolver`] - Dependency classification and path resolution
//! - [`sources`] - Source directory collection and entry-point detection
//! - [`templating`] - Data model, template engine capability, built-in
//!   templates
//! - [`generator`] - The per-module generation driver
//! - [`utils`] - Path and file-system helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use flashbuilder_gen::generate_project_files;
//! use flashbuilder_gen::models::{BuildInfo, Packaging, Project, ResolvedArtifact};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), flashbuilder_gen::GeneratorError> {
//! let module = Project {
//!     group_id: "com.example".into(),
//!     artifact_id: "viewer".into(),
//!     version: "1.0.0".into(),
//!     packaging: Packaging::Swf,
//!     basedir: PathBuf::from("/work/viewer"),
//!     resources: vec![],
//!     compile_source_roots: vec!["/work/viewer/src/main/flex".into()],
//!     build: BuildInfo {
//!         directory: PathBuf::from("/work/viewer/target"),
//!         final_name: "viewer-1.0.0".into(),
//!     },
//! };
//!
//! let session: Vec<Project> = vec![/* every module of this build */];
//! let artifacts: Vec<ResolvedArtifact> = vec![/* resolved compile deps */];
//!
//! let written = generate_project_files(&module, &session, &artifacts)?;
//! for path in written {
//!     println!("generated {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod generator;
pub mod models;
pub mod resolver;
pub mod sources;
pub mod templating;
pub mod utils;

pub use config::GeneratorConfig;
pub use crate::core::error::{ErrorContext, GeneratorError, user_friendly_error};
pub use generator::{Generator, generate_project_files};
pub use models::{BuildInfo, ModuleId, Packaging, Project, ResolvedArtifact, ResourceDir};
pub use templating::{DataModel, TemplateEngine, TeraEngine};
