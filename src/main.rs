//! fctask CLI - client for the fctask scheduling service

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod router;
mod session;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ProfileCommands, TaskCommands};
use client::models::TaskForm;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register { username, password } => {
            cli::account::register(&opts, username, password).await
        }
        Commands::Login { username, password } => {
            cli::account::login(&opts, username, password).await
        }
        Commands::Logout => cli::account::logout(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Open { route } => cli::open::run(&opts, &route).await,
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::Get => cli::profile::get(&opts).await,
            ProfileCommands::Update {
                nickname,
                name,
                department,
            } => cli::profile::update(&opts, nickname, name, department).await,
        },
        Commands::Task(cmd) => match cmd {
            TaskCommands::List { filters } => cli::task::list(&opts, &filters).await,
            TaskCommands::Create {
                name,
                description,
                category,
                site_url,
                schedule,
            } => {
                let form = TaskForm {
                    name,
                    description,
                    category,
                    site_url,
                    schedule,
                };
                cli::task::create(&opts, form).await
            }
            TaskCommands::Info { task_id } => cli::task::info(&opts, &task_id).await,
            TaskCommands::Modify { task_id, fields } => {
                cli::task::modify(&opts, &task_id, &fields).await
            }
        },
        Commands::Version => {
            println!("fctask version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--debug`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
