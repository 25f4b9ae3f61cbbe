//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod account;
pub mod args;
pub mod context;
pub mod open;
pub mod profile;
pub mod status;
pub mod task;

pub use args::{OutputFormat, TaskFieldArgs, TaskFilterArgs};
pub use context::CommandContext;

/// fctask CLI - client for the fctask scheduling service
#[derive(Parser, Debug)]
#[command(name = "fctask")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "FCTASK_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "FCTASK_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override service address
    #[arg(long, global = true, env = "FCTASK_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FCTASK_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Register {
        /// Account name (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign in and store the session token
    Login {
        /// Account name (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Discard the stored session token
    Logout,

    /// Show configuration and authentication status
    Status,

    /// Run the navigation guard for a route
    Open {
        /// Route name (home, login, register, dashboard)
        route: String,
    },

    /// View and update your profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Manage scheduled tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Display version information
    Version,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show your profile
    Get,

    /// Update profile fields; unset fields keep their current value
    Update {
        #[arg(long)]
        nickname: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: TaskFilterArgs,
    },

    /// Create a task
    Create {
        /// Task name
        #[arg(long)]
        name: String,

        /// What the task does
        #[arg(long, default_value = "")]
        description: String,

        /// Task category
        #[arg(long, default_value = "")]
        category: String,

        /// Target URL the task calls
        #[arg(long)]
        site_url: String,

        /// Schedule expression
        #[arg(long)]
        schedule: String,
    },

    /// Show one task
    Info {
        /// Task ID
        task_id: String,
    },

    /// Change fields of a task
    Modify {
        /// Task ID
        task_id: String,

        #[command(flatten)]
        fields: TaskFieldArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_task_list_filters() {
        let cli = Cli::try_parse_from([
            "fctask",
            "task",
            "list",
            "--status",
            "done",
            "--start-date",
            "2024-03-01",
            "--page",
            "2",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Task(TaskCommands::List { filters }) => {
                assert_eq!(filters.status.as_deref(), Some("done"));
                assert_eq!(filters.page, Some(2));
                assert!(filters.start_date.is_some());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from(["fctask", "task", "list", "--end-date", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_modify_fields() {
        let cli = Cli::try_parse_from(["fctask", "task", "modify", "7", "--name", "nightly"])
            .unwrap();

        match cli.command {
            Commands::Task(TaskCommands::Modify { task_id, fields }) => {
                assert_eq!(task_id, "7");
                assert_eq!(fields.name.as_deref(), Some("nightly"));
                assert!(fields.url.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
