//! Shared CLI argument types
//!
//! Reusable argument structs that commands flatten in with
//! `#[command(flatten)]`.

mod common;
mod filters;
mod global;

pub use common::OutputFormat;
pub use filters::{TaskFieldArgs, TaskFilterArgs};
pub use global::GlobalOptions;
