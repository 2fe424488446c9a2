//! Reveal plan for a resolved package folder.
//!
//! Navigation views often leave a bare folder collapsed, so when the folder
//! holds a well-known file that file is revealed first and the folder second.

use std::path::{Path, PathBuf};

use super::host::Host;

/// Files that force expansion, checked in this order.
pub const MARKER_FILES: &[&str] = &["package.json", "tsconfig.json", "index.ts", "index.js"];

/// Ordered list of paths to reveal for `folder`.
pub fn reveal_targets(folder: &Path) -> Vec<PathBuf> {
    match MARKER_FILES
        .iter()
        .map(|name| folder.join(name))
        .find(|candidate| candidate.exists())
    {
        Some(marker) => vec![marker, folder.to_path_buf()],
        None => vec![folder.to_path_buf()],
    }
}

/// Issue the reveal requests for `folder` through `host`.
pub fn request_reveal<H: Host + ?Sized>(host: &mut H, folder: &Path) -> anyhow::Result<()> {
    for target in reveal_targets(folder) {
        tracing::debug!(path = %target.display(), "reveal");
        host.reveal(&target)?;
    }
    Ok(())
}
