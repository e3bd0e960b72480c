//! Shared fixtures for integration tests.

use flashbuilder_gen::models::{BuildInfo, Packaging, Project, ResolvedArtifact, ResourceDir};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A module checkout rooted in a temp directory.
///
/// Keeps the [`TempDir`] alive for the duration of the test and offers
/// builders for the on-disk layout (source folders, entry files, sibling
/// modules, an external repository).
pub struct TestModule {
    root: TempDir,
    basedir: PathBuf,
}

impl TestModule {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp dir");
        // Canonicalize up front so expected paths match generated ones on
        // platforms where temp dirs sit behind symlinks (macOS /var -> /private/var)
        let canonical = root.path().canonicalize().expect("canonicalize temp dir");
        let basedir = canonical.join("module");
        fs::create_dir(&basedir).expect("create module dir");
        Self { root, basedir }
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    /// Creates a directory under the temp root and returns its path.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root_path().join(relative);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Creates a file with content under the temp root and returns its path.
    pub fn write_file(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root_path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    /// Creates an entry file in the conventional source folder.
    pub fn write_flex_source(&self, name: &str) -> PathBuf {
        let flex = self.basedir.join("src/main/flex");
        fs::create_dir_all(&flex).expect("create flex dir");
        let path = flex.join(name);
        fs::write(&path, b"<s:Application/>").expect("write source");
        path
    }

    /// The module under test.
    pub fn project(&self, packaging: Packaging) -> Project {
        Project {
            group_id: "com.example".to_string(),
            artifact_id: "viewer".to_string(),
            version: "1.0.0".to_string(),
            packaging,
            basedir: self.basedir.clone(),
            resources: Vec::new(),
            compile_source_roots: Vec::new(),
            build: BuildInfo {
                directory: self.basedir.join("target"),
                final_name: "viewer-1.0.0".to_string(),
            },
        }
    }

    /// A sibling module participating in the same session.
    pub fn session_module(&self, artifact_id: &str, version: &str) -> Project {
        let basedir = self.root_path().join(artifact_id);
        fs::create_dir_all(&basedir).expect("create sibling dir");
        Project {
            group_id: "com.example".to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            packaging: Packaging::Swc,
            basedir,
            resources: Vec::new(),
            compile_source_roots: Vec::new(),
            build: BuildInfo {
                directory: self.root_path().join(artifact_id).join("target"),
                final_name: format!("{artifact_id}-{version}"),
            },
        }
    }

    fn root_path(&self) -> PathBuf {
        self.root.path().canonicalize().expect("canonicalize temp dir")
    }
}

/// A resolved `swc` compile dependency.
pub fn swc_artifact(group: &str, artifact: &str, version: &str, file: Option<&Path>) -> ResolvedArtifact {
    ResolvedArtifact {
        group_id: group.to_string(),
        artifact_id: artifact.to_string(),
        version: version.to_string(),
        artifact_type: "swc".to_string(),
        file: file.map(Path::to_path_buf),
    }
}

/// A resource directory entry for a project.
pub fn resource(path: &Path) -> ResourceDir {
    ResourceDir { directory: path.display().to_string() }
}
