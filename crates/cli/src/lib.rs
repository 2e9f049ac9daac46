// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! civicrs - Library behind the `civic` CLI.
//!
//! The CLI is a thin presentation adapter over [`cvc_core`]: every command
//! hydrates an [`cvc_core::IssueStore`] from the workspace's persistence
//! mirror, calls one core operation, and writes the mirror back
//! best-effort.
//!
//! # Main Components
//!
//! - [`Config`] - Workspace configuration (`.civic/config.toml`)
//! - [`commands`] - One module per CLI command
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.civic/` directory, then open the
//! store:
//!
//! ```rust,ignore
//! use civicrs::{find_work_dir, state_path, Config};
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let slot = state_path(&work_dir, &config);
//! ```

mod cli;
mod completions;
mod display;

pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, init_work_dir, state_path, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Report {
            title,
            description,
            category,
            location,
            locate,
            priority,
            reporter,
            output,
        } => commands::report::run(
            title,
            description,
            category,
            location,
            locate,
            &priority,
            reporter,
            output,
        ),
        Command::List {
            search,
            category,
            status,
            output,
        } => commands::list::run(search, category, status, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Vote { id, direction } => commands::vote::run(&id, &direction),
        Command::SetStatus {
            id,
            status,
            department_id,
            password,
        } => commands::set_status::run(&id, &status, &department_id, &password),
        Command::Stats { output } => commands::stats::run(output),
        Command::Categories => commands::categories::run(),
        Command::Departments => commands::departments::run(),
        Command::Export { filepath } => commands::export::run(filepath),
        Command::Init { path } => commands::init::run(path),
        Command::Completion { shell } => completions::run(shell),
    }
}
