//! Task command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, TaskFieldArgs, TaskFilterArgs};
use crate::client::TaskApi;
use crate::client::models::{Task, TaskFilter, TaskForm, TaskList};
use crate::error::{ApiError, Result};
use crate::models::{TaskDetailDisplay, TaskDisplay};
use crate::output::{self, Formattable, json};
use crate::router::DASHBOARD_ROUTE;

/// Run the `task list` command
pub async fn list(opts: &GlobalOptions, filters: &TaskFilterArgs) -> Result<()> {
    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;
    let filter = filters.to_filter(ctx.config.preferences.page_size);

    let (page, message) = fetch_tasks(ctx.client.as_ref(), &filter).await?;

    match ctx.format {
        OutputFormat::Table => {
            let count = page.tasks.len();
            let total = page.total;
            let rows: Vec<TaskDisplay> = page.tasks.into_iter().map(TaskDisplay::from).collect();
            rows.print(ctx.format)?;
            if let Some(total) = total.filter(|t| *t as usize > count) {
                let page_no = filter.page.unwrap_or(1);
                println!(
                    "{}",
                    format!("Showing {} of {} tasks (page {})", count, total, page_no).dimmed()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json_with_message(&page, message.as_deref())?);
        }
    }
    Ok(())
}

/// Run the `task create` command
pub async fn create(opts: &GlobalOptions, form: TaskForm) -> Result<()> {
    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;

    let response = ctx.client.create_task(&form).await?;

    output::print_ack(
        response.message.as_deref(),
        "Task created",
        response.data.as_ref(),
        ctx.format,
    )
}

/// Run the `task info` command
pub async fn info(opts: &GlobalOptions, task_id: &str) -> Result<()> {
    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;

    let (task, message) = fetch_task(ctx.client.as_ref(), task_id).await?;

    output::print_record(&TaskDetailDisplay::from(task), message.as_deref(), ctx.format)
}

/// Run the `task modify` command
pub async fn modify(opts: &GlobalOptions, task_id: &str, fields: &TaskFieldArgs) -> Result<()> {
    if fields.is_empty() {
        return Err(ApiError::Validation(
            "Nothing to modify: pass at least one of --url, --name, --description, --schedule"
                .to_string(),
        )
        .into());
    }

    let ctx = CommandContext::for_route(opts, DASHBOARD_ROUTE).await?;

    let response = ctx
        .client
        .modify_task(&fields.to_modification(task_id))
        .await?;

    output::print_ack(
        response.message.as_deref(),
        "Task modified",
        response.data.as_ref(),
        ctx.format,
    )
}

/// Fetch one page of tasks. A response without data is an empty page.
async fn fetch_tasks<A>(api: &A, filter: &TaskFilter) -> Result<(TaskList, Option<String>)>
where
    A: TaskApi + ?Sized,
{
    let response = api.get_tasks(filter).await?;
    log::debug!("Fetched task list: {:?}", response.code);
    Ok((response.data.unwrap_or_default(), response.message))
}

/// Fetch a single task, treating a response without data as a failure.
async fn fetch_task<A>(api: &A, task_id: &str) -> Result<(Task, Option<String>)>
where
    A: TaskApi + ?Sized,
{
    let response = api.get_task_info(task_id).await?;
    match response.data {
        Some(task) => Ok((task, response.message)),
        None => Err(ApiError::Rejected("Failed to fetch task details".to_string()).into()),
    }
}
