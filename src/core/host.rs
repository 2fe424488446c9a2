//! The capability the core calls into for everything user-facing.
//!
//! The terminal implementation lives in [`crate::app::host`]; tests use a
//! recording double.

use std::path::Path;

use super::packages::PickItem;

pub trait Host {
    /// Show a terminal error for the current invocation.
    fn show_error(&mut self, message: &str);

    /// Show an informational notice.
    fn show_info(&mut self, message: &str);

    /// Ask the user to pick one of `items`.  `Ok(None)` means the prompt was
    /// dismissed.
    fn quick_pick(&mut self, items: &[PickItem], placeholder: &str)
        -> anyhow::Result<Option<usize>>;

    /// Focus `path` in whatever navigation view the host has.
    fn reveal(&mut self, path: &Path) -> anyhow::Result<()>;
}
