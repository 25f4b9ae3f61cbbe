//! Task argument types for CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::client::models::{TaskFilter, TaskModification};

/// Filter arguments for `task list`.
#[derive(Args, Debug, Default, Clone)]
pub struct TaskFilterArgs {
    /// Filter by status
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Page number
    #[arg(long, short = 'p')]
    pub page: Option<u32>,

    /// Tasks per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl TaskFilterArgs {
    /// Convert to API filters, using `default_page_size` when none was given.
    pub fn to_filter(&self, default_page_size: Option<u32>) -> TaskFilter {
        let mut filter = TaskFilter::new().date_range(self.start_date, self.end_date);
        if let Some(status) = &self.status {
            filter = filter.status(status);
        }
        if let Some(category) = &self.category {
            filter = filter.category(category);
        }
        if let Some(page) = self.page {
            filter = filter.page(page);
        }
        if let Some(size) = self.page_size.or(default_page_size) {
            filter = filter.page_size(size);
        }
        filter
    }
}

/// Optional task fields for `task modify`.
#[derive(Args, Debug, Default, Clone)]
pub struct TaskFieldArgs {
    /// New target URL
    #[arg(long)]
    pub url: Option<String>,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New schedule expression
    #[arg(long)]
    pub schedule: Option<String>,
}

impl TaskFieldArgs {
    pub fn to_modification(&self, task_id: &str) -> TaskModification {
        TaskModification {
            url: self.url.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            ..TaskModification::new(task_id)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.schedule.is_none()
    }
}
