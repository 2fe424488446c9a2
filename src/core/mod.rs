//! Core logic – namespace detection, package listing, symlink resolution and
//! the reveal plan.
//!
//! Nothing in this module depends on any TUI or rendering crate.  Everything
//! user-facing goes through the [`host::Host`] trait.

pub mod error;
pub mod host;
pub mod locate;
pub mod namespace;
pub mod packages;
pub mod reveal;
