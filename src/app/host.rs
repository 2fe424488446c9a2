//! [`Host`] implementation for a terminal session.

use std::io::IsTerminal;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::config::AppConfig;
use crate::core::host::Host;
use crate::core::packages::PickItem;
use crate::shell::integration;

use super::picker;

pub struct TerminalHost<'a> {
    config: &'a AppConfig,
    /// Package chosen up front (`--select`); skips the interactive prompt.
    preselected: Option<String>,
}

impl<'a> TerminalHost<'a> {
    pub fn new(config: &'a AppConfig, preselected: Option<String>) -> Self {
        Self {
            config,
            preselected,
        }
    }
}

impl Host for TerminalHost<'_> {
    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn show_info(&mut self, message: &str) {
        eprintln!("info: {message}");
    }

    fn quick_pick(&mut self, items: &[PickItem], placeholder: &str) -> Result<Option<usize>> {
        if let Some(name) = self.preselected.as_deref() {
            return match items.iter().position(|item| item.label == name) {
                Some(index) => Ok(Some(index)),
                None => bail!("package \"{name}\" is not one of the listed packages"),
            };
        }
        if !std::io::stderr().is_terminal() {
            bail!("the package prompt needs a terminal; pass --select <PACKAGE> instead");
        }
        picker::pick(self.config, items, placeholder)
    }

    fn reveal(&mut self, path: &Path) -> Result<()> {
        let Some((program, args)) = self.config.reveal_command.split_first() else {
            integration::print_reveal(path);
            return Ok(());
        };

        let status = Command::new(program)
            .args(args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to run reveal command `{program}`"))?;
        if !status.success() {
            bail!("reveal command `{program}` exited with {status}");
        }
        Ok(())
    }
}
