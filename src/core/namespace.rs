//! Namespace detection under `node_modules`.

use std::path::{Path, PathBuf};

use super::error::LocateError;

/// Scopes probed, in priority order, when no namespace is configured.
pub const DEFAULT_NAMESPACES: &[&str] = &["@kbn", "@repo", "@app"];

/// The namespace chosen for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNamespace {
    pub name: String,
    pub path: PathBuf,
}

/// Pick the namespace directory to list.
///
/// A non-empty `configured` value is authoritative: if it is missing the
/// defaults are not consulted.  Otherwise the first default that exists as a
/// directory wins.
pub fn resolve_namespace<S: AsRef<str>>(
    node_modules: &Path,
    configured: Option<&str>,
    defaults: &[S],
) -> Result<ActiveNamespace, LocateError> {
    if let Some(name) = configured.filter(|n| !n.is_empty()) {
        let path = node_modules.join(name);
        if path.is_dir() {
            return Ok(ActiveNamespace {
                name: name.to_string(),
                path,
            });
        }
        return Err(LocateError::MissingNamespace {
            namespace: name.to_string(),
        });
    }

    defaults
        .iter()
        .map(AsRef::as_ref)
        .find_map(|name| {
            let path = node_modules.join(name);
            path.is_dir().then(|| ActiveNamespace {
                name: name.to_string(),
                path,
            })
        })
        .ok_or(LocateError::NoNamespaceFound)
}
