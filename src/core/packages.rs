//! Package listing and symlink resolution inside a namespace directory.

use std::path::{Path, PathBuf};

/// One row offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Package directory name.
    pub label: String,
    /// `<namespace>/<package>`, also matched when filtering.
    pub description: String,
}

/// List the package entries of `namespace_dir`.
///
/// Entries are kept when their own file type (not the link target) is a
/// directory or a symlink, and returned sorted.  An empty list is not an
/// error.
pub fn list_packages(namespace_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut packages = Vec::new();
    for entry in std::fs::read_dir(namespace_dir)? {
        let entry = entry?;
        let ft = entry.file_type()?;
        if ft.is_dir() || ft.is_symlink() {
            packages.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    packages.sort();
    Ok(packages)
}

/// Canonical location of `package` inside `namespace_dir`, symlinks followed.
pub fn resolve_package(namespace_dir: &Path, package: &str) -> std::io::Result<PathBuf> {
    std::fs::canonicalize(namespace_dir.join(package))
}

pub fn pick_items(namespace: &str, packages: &[String]) -> Vec<PickItem> {
    packages
        .iter()
        .map(|pkg| PickItem {
            label: pkg.clone(),
            description: format!("{namespace}/{pkg}"),
        })
        .collect()
}
