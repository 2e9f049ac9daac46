// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ids,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Citizen:
  report       Report a civic issue
  list         Browse and filter issues
  show         Show issue details and timeline
  vote         Vote an issue up or down

Administration:
  set-status   Update an issue's status (admin credentials required)
  stats        Dashboard totals and the triage queue

Reference & Data:
  categories   List complaint categories
  departments  List municipal departments
  export       Export all data to a JSON document

Setup:
  init         Initialize a civic workspace
  completion   Generate shell completions";

const QUICKSTART_HELP: &str = "\
Get started:
  civic init                          Initialize the workspace
  civic report \"Pothole on MG Road\"   Report an issue
  civic list -q pothole               Search issues
  civic vote CVC2025001 up            Support an issue";

#[derive(Parser)]
#[command(name = "civic")]
#[command(about = "Report, browse, and triage civic issues from the terminal")]
#[command(
    long_about = "Report, browse, and triage civic issues from the terminal.\n\n\
    Issues live in an in-memory store seeded with sample data and mirrored\n\
    best-effort to a JSON slot in the workspace."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report a civic issue
    #[command(after_help = "Examples:\n  \
        civic report \"Pothole on MG Road\"                     Minimal report\n  \
        civic report \"No water\" -c \"Water Supply\" -p high     Category and priority\n  \
        civic report \"Dark street\" -l \"Sector 21, Noida\"      With a location\n  \
        civic report \"Fallen tree\" -r \"Asha\"                  Explicit reporter name")]
    Report {
        /// Short summary of the problem
        title: String,

        /// Longer description of the problem
        #[arg(long, short, default_value = "")]
        description: String,

        /// Category name (see `civic categories`)
        #[arg(long, short, default_value = "")]
        category: String,

        /// Where the problem is
        #[arg(long, short, default_value = "")]
        location: String,

        /// Detect the location from the device instead of --location
        #[arg(long)]
        locate: bool,

        /// Severity: low, medium, high, emergency
        #[arg(long, short, default_value = "medium")]
        priority: String,

        /// Reporter name (defaults to your git or login name)
        #[arg(long, short)]
        reporter: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List issues, optionally filtered
    #[command(after_help = "Examples:\n  \
        civic list                         All issues, newest first\n  \
        civic list -q pothole              Text search across title/description/location\n  \
        civic list -c Roads                Filter by category\n  \
        civic list -s in-progress          Filter by status\n  \
        civic list -q water -s assigned    Filters combine")]
    List {
        /// Case-insensitive text matched in title, description, or location
        #[arg(long, short = 'q')]
        search: Option<String>,

        /// Exact category name
        #[arg(long, short)]
        category: Option<String>,

        /// Status: reported, assigned, in-progress, under-review, resolved
        #[arg(long, short)]
        status: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show issue details and the progress timeline
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Vote an issue up or down
    #[command(arg_required_else_help = true)]
    Vote {
        /// Issue ID
        id: String,

        /// Direction: up or down
        direction: String,
    },

    /// Update an issue's status (admin)
    #[command(
        name = "set-status",
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        civic set-status CVC2025004 assigned --department-id mumbai_admin --password admin123\n  \
        civic set-status CVC2025004 resolved --department-id mumbai_admin --password admin123"
    )]
    SetStatus {
        /// Issue ID
        id: String,

        /// New status: reported, assigned, in-progress, under-review, resolved
        status: String,

        /// Admin department identifier
        #[arg(long)]
        department_id: String,

        /// Admin password
        #[arg(long)]
        password: String,
    },

    /// Show dashboard totals and the admin triage queue
    Stats {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List complaint categories
    Categories,

    /// List municipal departments
    Departments,

    /// Export all data to a JSON document
    Export {
        /// Output path (defaults to civic_issues_export_<date>.json)
        filepath: Option<String>,
    },

    /// Initialize a civic workspace in the current directory
    Init {
        /// Directory to initialize instead of the current one
        #[arg(long)]
        path: Option<std::path::PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
