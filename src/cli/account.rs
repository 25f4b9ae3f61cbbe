//! Account commands: register, login, logout

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, OutputFormat};
use crate::cli::args::GlobalOptions;
use crate::client::UserApi;
use crate::client::models::Credentials;
use crate::error::{ApiError, Result};
use crate::output;
use crate::session::Session;

/// Fallback when a login response carries no token
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(username, password, true)?;

    let response = ctx.client.register(&credentials).await?;

    output::print_ack(
        response.message.as_deref(),
        "Registration successful",
        response.data.as_ref(),
        ctx.format,
    )?;
    if ctx.format == OutputFormat::Table {
        println!("  → Run {} to sign in", "fctask login".cyan());
    }
    Ok(())
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(username, password, false)?;

    let message = sign_in(&ctx.session, ctx.client.as_ref(), &credentials).await?;

    output::print_ack(message.as_deref(), "Logged in", None, ctx.format)
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let had_token = ctx.config.has_token();

    ctx.session.clear().await?;

    let message = if had_token {
        "Logged out"
    } else {
        "No session to log out of"
    };
    output::print_ack(None, message, None, ctx.format)
}

/// Log in with `credentials` and store the returned token in `session`.
///
/// Returns the service message on success. A response without a token is
/// treated as a failed login and leaves the session untouched.
pub async fn sign_in<A>(
    session: &Session,
    api: &A,
    credentials: &Credentials,
) -> Result<Option<String>>
where
    A: UserApi + ?Sized,
{
    let response = api.login(credentials).await?;

    let token = response
        .data
        .map(|d| d.token)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Rejected(LOGIN_FAILED_MESSAGE.to_string()))?;

    session.set_token(&token).await?;
    log::debug!("Stored session token for {}", credentials.username);
    Ok(response.message)
}

/// Fill in whichever of username/password was not given on the command line.
fn prompt_credentials(
    username: Option<String>,
    password: Option<String>,
    confirm_password: bool,
) -> Result<Credentials> {
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(u) => u,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => {
            let prompt = Password::with_theme(&theme).with_prompt("Password");
            if confirm_password {
                prompt
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?
            } else {
                prompt.interact()?
            }
        }
    };

    Ok(Credentials::new(username, password))
}
