//! Failure taxonomy for one "go to package" invocation.
//!
//! The `Display` text of every variant is the message shown to the user, so
//! the top-level command can surface any error without re-wording it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("No workspace folder open")]
    MissingWorkspace,

    #[error("node_modules folder not found")]
    MissingNodeModules,

    /// A namespace was configured explicitly but has no directory.
    #[error("Configured namespace \"{namespace}\" not found in node_modules")]
    MissingNamespace { namespace: String },

    /// Nothing configured and none of the default namespaces exist.
    #[error(
        "No package namespace found. Configure \"namespace\" in your config file \
         or pass --namespace with your namespace (e.g., @mycompany)."
    )]
    NoNamespaceFound,

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),

    /// The host failed while prompting or revealing.
    #[error("Error: {0}")]
    Host(#[from] anyhow::Error),
}
