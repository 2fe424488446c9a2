//! Jump to a package inside a namespaced `node_modules` directory.
//!
//! Run the binary from a monorepo root to pick a package and reveal where it
//! really lives (symlinks resolved).
//! Run with `--init-bash` to print the shell function for your `.bashrc`.

mod app;
mod config;
mod core;
mod shell;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::app::host::TerminalHost;
use crate::config::AppConfig;
use crate::core::locate::{self, LocateRequest};
use crate::shell::integration;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Go to a package in a namespaced node_modules")]
struct Cli {
    /// Workspace root (defaults to the current directory).
    workspace: Option<PathBuf>,

    /// Namespace under node_modules, e.g. `@mycompany` (overrides the config file).
    #[arg(long, short)]
    namespace: Option<String>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pick this package without prompting.
    #[arg(long, value_name = "PACKAGE")]
    select: Option<String>,

    /// Print the packages of the detected namespace and exit.
    #[arg(long, conflicts_with = "select")]
    list: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,

    /// Print the bash shell function and exit.
    #[arg(long = "init-bash")]
    init_bash: bool,

    /// Print the zsh shell function and exit.
    #[arg(long = "init-zsh")]
    init_zsh: bool,
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<ExitCode> {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── shell-integration mode ────────────────────────────────
    if cli.init_bash {
        print!("{}", integration::bash_function());
        return Ok(ExitCode::SUCCESS);
    }
    if cli.init_zsh {
        print!("{}", integration::zsh_function());
        return Ok(ExitCode::SUCCESS);
    }

    // ── configuration ─────────────────────────────────────────
    let mut config = AppConfig::load(cli.config.as_deref());
    if let Some(ns) = cli.namespace {
        config.namespace = ns;
    }
    if cli.write_config {
        let path = config.save(cli.config.as_deref())?;
        eprintln!("wrote {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let request = LocateRequest {
        workspace_root: cli.workspace.or_else(|| std::env::current_dir().ok()),
        namespace: Some(config.namespace.clone()).filter(|ns| !ns.is_empty()),
        default_namespaces: config.default_namespaces.clone(),
    };
    tracing::debug!(?request, "go to package");

    // ── list mode ─────────────────────────────────────────────
    if cli.list {
        return Ok(match locate::locate_packages(&request) {
            Ok((namespace, packages)) => {
                if packages.is_empty() {
                    eprintln!("info: No packages found in {}", namespace.name);
                }
                for pkg in packages {
                    println!("{pkg}\t{}/{pkg}", namespace.name);
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        });
    }

    // ── go to package ─────────────────────────────────────────
    let mut host = TerminalHost::new(&config, cli.select);
    Ok(match locate::run(&mut host, &request) {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    })
}
