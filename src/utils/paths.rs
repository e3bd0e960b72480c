//! Path canonicalization and separator handling.
//!
//! Generated descriptors embed absolute paths, and Flash Builder reads them
//! back on whatever platform the checkout lives on. Everything that ends up
//! inside a template therefore goes through [`slash_path`], which
//! canonicalizes and forces forward slashes regardless of the host OS.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path logically, without touching the filesystem.
///
/// Removes `.` components and resolves `..` against preceding components.
/// Unlike [`std::fs::canonicalize`], this works on paths that do not exist
/// and never follows symlinks.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {} // Skip .
            Component::ParentDir => {
                // Pop the previous component unless we are at a root
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => components.push(component),
                }
            }
            other => components.push(other),
        }
    }

    components.iter().collect()
}

/// Resolves a path to its canonical form, falling back to a normalized
/// absolute path when canonicalization fails.
///
/// Canonicalization requires the path to exist; descriptor generation
/// routinely references files that have not been built yet (an in-session
/// module's future `bin/` output, a `-configs.xml` that the compiler writes
/// later). Those fall back to a lexically normalized absolute path, which is
/// what the generated descriptor needs anyway.
#[must_use]
pub fn canonical_or_absolute(path: &Path) -> PathBuf {
    match path.canonicalize() {
        Ok(canonical) => canonical,
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                error = %err,
                "canonicalization failed, using normalized absolute path"
            );
            let absolute = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
            };
            normalize_path(&absolute)
        }
    }
}

/// Renders a path for template output: canonical (or normalized absolute)
/// form with all separators as forward slashes.
///
/// Flash Builder accepts `/` on every platform, so descriptors stay
/// byte-identical across operating systems.
#[must_use]
pub fn slash_path(path: &Path) -> String {
    canonical_or_absolute(path).to_string_lossy().replace('\\', "/")
}
