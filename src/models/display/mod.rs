//! Display model implementations for table and JSON output
//!
//! Display models turn API response types into CLI-friendly rows with
//! stable column names.

mod common;
mod profile;
mod task;

pub use profile::ProfileDisplay;
pub use task::{TaskDetailDisplay, TaskDisplay};
