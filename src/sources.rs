//! Source directory collection and entry-point detection.

use std::path::Path;
use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::models::Project;

/// Collects candidate source directories: declared resource directories
/// first, then compile source roots, keeping only entries that exist on
/// disk.
///
/// Paths are surfaced exactly as the host declared them. A directory that
/// is absent in this checkout (common for empty resource sets) is dropped
/// silently rather than failing generation.
#[must_use]
pub fn collect_source_paths(project: &Project) -> Vec<String> {
    project
        .resources
        .iter()
        .map(|resource| resource.directory.clone())
        .chain(project.compile_source_roots.iter().cloned())
        .filter(|candidate| {
            let exists = Path::new(candidate).exists();
            if !exists {
                tracing::debug!(path = %candidate, "skipping missing source directory");
            }
            exists
        })
        .collect()
}

/// Picks the default application entry file.
///
/// Scans the direct children of the conventional source folder
/// (`src/main/flex` by default) and returns the name of the first plain
/// file in lexicographic order, or `None` when the folder is missing or
/// holds no files. Subdirectories are never considered.
#[must_use]
pub fn find_main_application(basedir: &Path, config: &GeneratorConfig) -> Option<String> {
    let folder = basedir.join(&config.main_source_folder);

    WalkDir::new(&folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuildInfo, Packaging, Project, ResourceDir};
    use std::fs;
    use std::path::PathBuf;

    fn project_with(resources: Vec<String>, roots: Vec<String>) -> Project {
        Project {
            group_id: "com.example".to_string(),
            artifact_id: "app".to_string(),
            version: "1.0".to_string(),
            packaging: Packaging::Swf,
            basedir: PathBuf::from("/work/app"),
            resources: resources.into_iter().map(|directory| ResourceDir { directory }).collect(),
            compile_source_roots: roots,
            build: BuildInfo {
                directory: PathBuf::from("/work/app/target"),
                final_name: "app-1.0".to_string(),
            },
        }
    }

    #[test]
    fn keeps_only_existing_directories_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("missing-resources");
        let b = dir.path().join("resources");
        let c = dir.path().join("flex");
        fs::create_dir(&b).unwrap();
        fs::create_dir(&c).unwrap();

        let project = project_with(
            vec![a.display().to_string(), b.display().to_string()],
            vec![c.display().to_string()],
        );

        let collected = collect_source_paths(&project);
        assert_eq!(collected, vec![b.display().to_string(), c.display().to_string()]);
    }

    #[test]
    fn empty_inputs_collect_to_nothing() {
        let project = project_with(Vec::new(), Vec::new());
        assert!(collect_source_paths(&project).is_empty());
    }

    #[test]
    fn main_application_absent_when_folder_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_main_application(dir.path(), &GeneratorConfig::default()), None);
    }

    #[test]
    fn main_application_absent_when_folder_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/main/flex")).unwrap();

        assert_eq!(find_main_application(dir.path(), &GeneratorConfig::default()), None);
    }

    #[test]
    fn main_application_picks_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let flex = dir.path().join("src/main/flex");
        fs::create_dir_all(&flex).unwrap();
        fs::write(flex.join("Main.mxml"), b"<s:Application/>").unwrap();

        assert_eq!(
            find_main_application(dir.path(), &GeneratorConfig::default()),
            Some("Main.mxml".to_string())
        );
    }

    #[test]
    fn main_application_ignores_directories_and_sorts_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let flex = dir.path().join("src/main/flex");
        fs::create_dir_all(flex.join("assets")).unwrap();
        fs::write(flex.join("Main.mxml"), b"<s:Application/>").unwrap();
        fs::write(flex.join("About.mxml"), b"<s:Application/>").unwrap();

        assert_eq!(
            find_main_application(dir.path(), &GeneratorConfig::default()),
            Some("About.mxml".to_string())
        );
    }

    #[test]
    fn main_application_honors_configured_folder() {
        let dir = tempfile::tempdir().unwrap();
        let as3 = dir.path().join("src/main/as3");
        fs::create_dir_all(&as3).unwrap();
        fs::write(as3.join("Entry.as"), b"package {}").unwrap();

        let config = GeneratorConfig {
            main_source_folder: "src/main/as3".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(find_main_application(dir.path(), &config), Some("Entry.as".to_string()));
    }
}
