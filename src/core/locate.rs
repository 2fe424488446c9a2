//! The "go to package" command, start to finish.
//!
//! workspace → `node_modules` → namespace → package list → user pick →
//! canonical path → reveal.  Every step is a blocking precondition check for
//! the next; nothing is retried and nothing outlives the call.

use std::path::PathBuf;

use anyhow::anyhow;

use super::error::LocateError;
use super::host::Host;
use super::namespace::{resolve_namespace, ActiveNamespace};
use super::packages::{list_packages, pick_items, resolve_package};
use super::reveal::request_reveal;

/// Inputs of a single invocation.
#[derive(Debug, Clone, Default)]
pub struct LocateRequest {
    /// Workspace root, `None` when no workspace is open.
    pub workspace_root: Option<PathBuf>,
    /// Explicit namespace override; empty or `None` means auto-detect.
    pub namespace: Option<String>,
    /// Candidates probed in order when auto-detecting.
    pub default_namespaces: Vec<String>,
}

/// How an invocation ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The package was revealed at this canonical path.
    Revealed(PathBuf),
    /// The user dismissed the prompt.
    Cancelled,
    /// Nothing to pick from; the message is informational.
    Info(String),
}

/// Resolve the namespace and list its packages without prompting.
pub fn locate_packages(
    request: &LocateRequest,
) -> Result<(ActiveNamespace, Vec<String>), LocateError> {
    let workspace = request
        .workspace_root
        .as_deref()
        .filter(|root| root.is_dir())
        .ok_or(LocateError::MissingWorkspace)?;
    tracing::debug!(workspace = %workspace.display(), "resolving node_modules");

    let node_modules = workspace.join("node_modules");
    if !node_modules.exists() {
        return Err(LocateError::MissingNodeModules);
    }

    let namespace = resolve_namespace(
        &node_modules,
        request.namespace.as_deref(),
        &request.default_namespaces,
    )?;
    tracing::info!(namespace = %namespace.name, "namespace selected");

    let packages = list_packages(&namespace.path)?;
    tracing::debug!(count = packages.len(), "packages listed");
    Ok((namespace, packages))
}

/// Run the pipeline, asking `host` for the selection and the reveal.
pub fn goto_package<H: Host + ?Sized>(
    host: &mut H,
    request: &LocateRequest,
) -> Result<Outcome, LocateError> {
    let (namespace, packages) = locate_packages(request)?;
    if packages.is_empty() {
        return Ok(Outcome::Info(format!(
            "No packages found in {}",
            namespace.name
        )));
    }

    let items = pick_items(&namespace.name, &packages);
    let placeholder = format!("Select a package from {}", namespace.name);
    let Some(index) = host.quick_pick(&items, &placeholder)? else {
        tracing::debug!("selection dismissed");
        return Ok(Outcome::Cancelled);
    };
    let item = items
        .get(index)
        .ok_or_else(|| anyhow!("selection {index} is not one of the listed packages"))?;

    let real_path = resolve_package(&namespace.path, &item.label)?;
    tracing::info!(package = %item.label, path = %real_path.display(), "package resolved");

    request_reveal(host, &real_path)?;
    Ok(Outcome::Revealed(real_path))
}

/// Top-level command: like [`goto_package`] but every failure and info
/// message is surfaced through `host`.  Returns `None` when an error was
/// shown.
pub fn run<H: Host + ?Sized>(host: &mut H, request: &LocateRequest) -> Option<Outcome> {
    match goto_package(host, request) {
        Ok(Outcome::Info(message)) => {
            host.show_info(&message);
            Some(Outcome::Info(message))
        }
        Ok(outcome) => Some(outcome),
        Err(err) => {
            tracing::debug!(error = ?err, "goto package failed");
            host.show_error(&err.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::namespace::DEFAULT_NAMESPACES;
    use crate::core::packages::PickItem;

    /// Host double that records every call and answers the prompt with a
    /// fixed label (or dismisses it).
    #[derive(Default)]
    struct RecordingHost {
        answer: Option<&'static str>,
        errors: Vec<String>,
        infos: Vec<String>,
        prompts: Vec<(Vec<PickItem>, String)>,
        reveals: Vec<PathBuf>,
    }

    impl Host for RecordingHost {
        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn show_info(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }

        fn quick_pick(
            &mut self,
            items: &[PickItem],
            placeholder: &str,
        ) -> anyhow::Result<Option<usize>> {
            self.prompts.push((items.to_vec(), placeholder.to_string()));
            Ok(self
                .answer
                .and_then(|label| items.iter().position(|i| i.label == label)))
        }

        fn reveal(&mut self, path: &Path) -> anyhow::Result<()> {
            self.reveals.push(path.to_path_buf());
            Ok(())
        }
    }

    fn request(root: &Path, namespace: Option<&str>) -> LocateRequest {
        LocateRequest {
            workspace_root: Some(root.to_path_buf()),
            namespace: namespace.map(str::to_string),
            default_namespaces: DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn workspace_with(namespace: &str, packages: &[&str]) -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        let ns = root.path().join("node_modules").join(namespace);
        std::fs::create_dir_all(&ns).unwrap();
        for pkg in packages {
            std::fs::create_dir(ns.join(pkg)).unwrap();
        }
        root
    }

    #[test]
    fn no_workspace_is_reported() {
        let mut host = RecordingHost::default();
        let outcome = run(&mut host, &LocateRequest::default());
        assert_eq!(outcome, None);
        assert_eq!(host.errors, vec!["No workspace folder open"]);
    }

    #[test]
    fn missing_node_modules_is_reported() {
        let root = tempfile::tempdir().unwrap();
        let mut host = RecordingHost::default();
        assert_eq!(run(&mut host, &request(root.path(), None)), None);
        assert_eq!(host.errors, vec!["node_modules folder not found"]);
    }

    #[test]
    fn missing_configured_namespace_skips_listing_and_prompt() {
        let root = workspace_with("@kbn", &["core"]);
        let mut host = RecordingHost::default();
        assert_eq!(run(&mut host, &request(root.path(), Some("@acme"))), None);
        assert_eq!(
            host.errors,
            vec!["Configured namespace \"@acme\" not found in node_modules"]
        );
        assert!(host.prompts.is_empty());
        assert!(host.reveals.is_empty());
    }

    #[test]
    fn no_default_namespace_is_reported() {
        let root = workspace_with("lodash", &[]);
        let mut host = RecordingHost::default();
        assert_eq!(run(&mut host, &request(root.path(), None)), None);
        assert_eq!(host.errors.len(), 1);
        assert!(host.errors[0].starts_with("No package namespace found."));
    }

    #[test]
    fn empty_namespace_is_informational() {
        let root = workspace_with("@repo", &[]);
        let mut host = RecordingHost::default();
        let outcome = run(&mut host, &request(root.path(), None));
        assert_eq!(
            outcome,
            Some(Outcome::Info("No packages found in @repo".into()))
        );
        assert_eq!(host.infos, vec!["No packages found in @repo"]);
        assert!(host.errors.is_empty());
        assert!(host.prompts.is_empty());
    }

    #[test]
    fn prompt_lists_sorted_packages_with_placeholder() {
        let root = workspace_with("@kbn", &["zeta", "alpha"]);
        let mut host = RecordingHost::default();
        run(&mut host, &request(root.path(), None));

        let (items, placeholder) = &host.prompts[0];
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["alpha", "zeta"]);
        assert_eq!(items[1].description, "@kbn/zeta");
        assert_eq!(placeholder, "Select a package from @kbn");
    }

    #[test]
    fn cancelled_prompt_reveals_nothing() {
        let root = workspace_with("@kbn", &["core"]);
        let mut host = RecordingHost::default();
        assert_eq!(
            run(&mut host, &request(root.path(), None)),
            Some(Outcome::Cancelled)
        );
        assert!(host.reveals.is_empty());
        assert!(host.errors.is_empty());
    }

    #[test]
    fn selection_reveals_marker_then_folder() {
        let root = workspace_with("@kbn", &["core"]);
        let pkg = root.path().join("node_modules/@kbn/core");
        std::fs::write(pkg.join("tsconfig.json"), b"{}").unwrap();
        let mut host = RecordingHost {
            answer: Some("core"),
            ..Default::default()
        };

        run(&mut host, &request(root.path(), None));
        let real = std::fs::canonicalize(&pkg).unwrap();
        assert_eq!(host.reveals, vec![real.join("tsconfig.json"), real]);
    }

    #[test]
    #[cfg(unix)]
    fn symlinked_package_reveals_canonical_path() {
        let root = workspace_with("@repo", &[]);
        let real = root.path().join("packages/ui");
        std::fs::create_dir_all(&real).unwrap();
        let link = root.path().join("node_modules/@repo/ui");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        let mut host = RecordingHost {
            answer: Some("ui"),
            ..Default::default()
        };

        let outcome = run(&mut host, &request(root.path(), None));
        let canonical = std::fs::canonicalize(&real).unwrap();
        assert_eq!(outcome, Some(Outcome::Revealed(canonical.clone())));
        assert_eq!(host.reveals, vec![canonical]);
        assert!(!host.reveals.contains(&link));
    }

    #[test]
    fn locate_packages_does_not_prompt() {
        let root = workspace_with("@app", &["web", "api"]);
        let (ns, packages) = locate_packages(&request(root.path(), None)).unwrap();
        assert_eq!(ns.name, "@app");
        assert_eq!(packages, vec!["api", "web"]);
    }
}
