//! Status command implementation

use colored::Colorize;

use crate::auth::{AuthStatus, UnauthenticatedReason, check_auth_status};
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "fctask Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }

    let ctx = CommandContext::new(opts)?;
    println!("Service: {}", ctx.client.base_url().as_str().cyan());
    println!();

    let status = check_auth_status(&ctx.session, ctx.client.as_ref()).await;
    if status.should_clear_token() {
        ctx.session.clear().await?;
    }

    match status {
        AuthStatus::Authenticated => {
            println!("{} Logged in (token accepted by server)", "✓".green());
        }
        AuthStatus::Unauthenticated {
            reason: UnauthenticatedReason::NoToken,
            ..
        } => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run '{}' to sign in", "fctask login".cyan());
        }
        AuthStatus::Unauthenticated {
            reason: UnauthenticatedReason::ProbeFailed(message),
            ..
        } => {
            println!("{} Stored token rejected: {}", "✗".red(), message);
            println!("  → Token cleared. Run '{}' to sign in again", "fctask login".cyan());
        }
    }

    if let Some(size) = ctx.config.preferences.page_size {
        println!("{} Default page size: {}", "○".dimmed(), size);
    }

    println!();
    Ok(())
}
