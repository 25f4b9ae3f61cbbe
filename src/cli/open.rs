//! Open command: run the navigation guard for a route

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::json::format_json;
use crate::router::{self, Navigation, Route};

/// Outcome of `fctask open`, as emitted in JSON mode
#[derive(Debug, Serialize)]
struct OpenResult<'a> {
    route: &'a str,
    decision: String,
    destination: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<String>,
}

/// Route name for `target`, which may be given as a name or as a path.
fn resolve_target(target: &str) -> &str {
    if target.starts_with('/') {
        router::find_route_by_path(target).map_or(target, |r| r.name)
    } else {
        target
    }
}

/// Run the guard for `target` and report where navigation ends up.
pub async fn run(opts: &GlobalOptions, target: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let route = resolve_target(target);

    let decision = ctx.guard().before_each(route).await;
    let destination = match decision {
        Navigation::Allow => route,
        Navigation::Redirect(to) => to,
    };
    let resolved: Option<&Route> = router::find_route(destination);

    match ctx.format {
        OutputFormat::Table => {
            match decision {
                Navigation::Allow => println!("{} {}", "✓".green(), decision),
                Navigation::Redirect(_) => println!("{} {}", "→".yellow(), decision),
            }
            match resolved {
                Some(r) => {
                    let access = if r.requires_auth {
                        "sign-in required"
                    } else {
                        "public"
                    };
                    println!(
                        "Route: {} ({}, {:?} view, {})",
                        destination.bold(),
                        r.path.cyan(),
                        r.view,
                        access.dimmed()
                    );
                }
                None => println!("Route: {} {}", destination.bold(), "(unknown route)".dimmed()),
            }
        }
        OutputFormat::Json => {
            let result = OpenResult {
                route,
                decision: decision.to_string(),
                destination,
                path: resolved.map(|r| r.path),
                view: resolved.map(|r| format!("{:?}", r.view)),
            };
            println!("{}", format_json(&result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_by_path() {
        assert_eq!(resolve_target("/dashboard"), "dashboard");
        assert_eq!(resolve_target("/"), "home");
    }

    #[test]
    fn test_resolve_target_passthrough() {
        assert_eq!(resolve_target("login"), "login");
        assert_eq!(resolve_target("/settings"), "/settings");
    }
}
